//! 分页控件 - 标签栏、指示条、内容区与控制器

mod content;
mod controller;
mod indicator;
mod options;
mod scroll;
mod strip;

pub use content::{ContentArea, ContentController, TabContent};
pub use controller::{PagerComponent, PagerController, PagerDataSource, PagerDelegate};
pub use indicator::Indicator;
pub use options::{PagerOption, PagerOptions, TabLocation};
pub use scroll::PagedScrollController;
pub use strip::{TabDescriptor, TabsStrip};
