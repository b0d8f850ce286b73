//! 单元测试模块
//! 覆盖分页滚动、标签栏几何、控制器状态与渲染

pub mod render_tests;
pub mod scroll_tests;
