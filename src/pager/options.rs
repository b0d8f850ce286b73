//! 分页控件布局选项

use serde::Deserialize;

/// 标签栏位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabLocation {
    Top,
    Bottom,
}

impl Default for TabLocation {
    fn default() -> Self {
        Self::Top
    }
}

/// 可通过 delegate 协商的数值选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PagerOption {
    TabHeight,
    TabOffset,
    TabWidth,
    CenterCurrentTab,
    FixFormerTabs,
    FixLatterTabs,
}

/// 布局选项
/// 都是普通可写字段，只有显式调用 set_needs_reload_options 时才会
/// 重新计算几何，避免每帧重算
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagerOptions {
    /// 标签栏在内容区上方还是下方
    #[serde(default)]
    pub tab_location: TabLocation,
    /// 标签栏高度
    #[serde(default = "default_tab_height")]
    pub tab_height: f32,
    /// 第一个标签的前导偏移
    #[serde(default = "default_tab_offset")]
    pub tab_offset: f32,
    /// 数据源不给宽度时的默认标签宽度
    #[serde(default = "default_tab_width")]
    pub tab_width: f32,
    /// 首次 reload 后选中的标签
    #[serde(default)]
    pub initial_index: usize,
    /// 选中标签居中显示
    #[serde(default)]
    pub center_current_tab: bool,
    /// 居中时前端标签保持原位
    #[serde(default)]
    pub fix_former_tabs: bool,
    /// 居中时末端标签保持原位
    #[serde(default)]
    pub fix_latter_tabs: bool,
    /// 忽略顶部安全区内边距
    #[serde(default)]
    pub ignore_top_layout_guide: bool,
    /// 是否允许在内容区滑动换页
    #[serde(default = "default_swipe_enabled")]
    pub swipe_enabled: bool,
}

fn default_tab_height() -> f32 { 44.0 }
fn default_tab_offset() -> f32 { 56.0 }
fn default_tab_width() -> f32 { 128.0 }
fn default_swipe_enabled() -> bool { true }

impl Default for PagerOptions {
    fn default() -> Self {
        Self {
            tab_location: TabLocation::Top,
            tab_height: default_tab_height(),
            tab_offset: default_tab_offset(),
            tab_width: default_tab_width(),
            initial_index: 0,
            center_current_tab: false,
            fix_former_tabs: false,
            fix_latter_tabs: false,
            ignore_top_layout_guide: false,
            swipe_enabled: default_swipe_enabled(),
        }
    }
}
