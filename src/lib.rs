//! Mini Pager - 分页标签页控件
//! 标签栏 + 指示条 + 可滑动内容区，由数据源驱动，三者联动

mod canvas;
mod color;
mod geometry;
mod paint;
mod path;
pub mod text;

pub use canvas::Canvas;
pub use color::{parse_color, Color};
pub use geometry::{Point, Rect, Size};
pub use paint::{Paint, PaintStyle};
pub use path::Path;
pub use text::TextRenderer;

// UI 组件系统
pub mod ui;

// 事件系统
pub mod event;

// 分页控件
pub mod pager;

pub use pager::{
    ContentArea, ContentController, Indicator, PagedScrollController, PagerComponent,
    PagerController, PagerDataSource, PagerDelegate, PagerOption, PagerOptions, TabContent,
    TabLocation, TabsStrip,
};

// 单元测试
#[cfg(test)]
mod tests;
