//! UI 组件系统

mod component;
mod label;
mod view;

pub use component::{Component, ComponentId, ComponentTree, Style};
pub use label::{Label, TextAlign};
pub use view::View;
