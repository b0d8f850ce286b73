//! 分页控制器 - 协调标签栏、指示条与内容区
//!
//! 数据源提供标签数量、标签视图、标签宽度和页内容；委托接收选中变化
//! 通知并参与颜色/选项协商。两者都是弱引用，宿主随时可以不提供。

use super::content::{ContentArea, ContentController, TabContent};
use super::indicator::{Indicator, INDICATOR_HEIGHT};
use super::options::{PagerOption, PagerOptions, TabLocation};
use super::strip::TabsStrip;
use crate::event::Event;
use crate::ui::{Component, ComponentId, Style};
use crate::{Canvas, Color, Point, Rect};
use std::sync::{Arc, Weak};

/// 顶部安全区高度，ignore_top_layout_guide 关闭且标签栏在顶部时生效
pub const TOP_LAYOUT_GUIDE: f32 = 20.0;

// 各组件默认颜色
const DEFAULT_INDICATOR_COLOR: Color = Color::from_hex(0x007AFF);
const DEFAULT_TABS_COLOR: Color = Color::WHITE;
const DEFAULT_CONTENT_COLOR: Color = Color::WHITE;

/// 控件的三个可视组成部分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerComponent {
    /// 指示条
    Indicator,
    /// 标签栏
    TabsStrip,
    /// 内容区
    Content,
}

/// 数据源能力
pub trait PagerDataSource: Send + Sync {
    /// 标签总数
    fn tab_count(&self) -> usize;

    /// 第 index 个标签的头部视图
    fn tab_view(&self, index: usize) -> Box<dyn Component>;

    /// 第 index 个标签请求的宽度，非正数时控件用默认宽度
    fn tab_width(&self, index: usize) -> f32;

    /// 第 index 页的内容控制器，优先于 content_view
    fn content_controller(&self, index: usize) -> Option<Box<dyn ContentController>> {
        let _ = index;
        None
    }

    /// 第 index 页的内容视图
    fn content_view(&self, index: usize) -> Option<Box<dyn Component>> {
        let _ = index;
        None
    }
}

/// 委托能力，全部可选
pub trait PagerDelegate: Send + Sync {
    /// 选中标签发生变化
    fn did_change_tab(&self, index: usize) {
        let _ = index;
    }

    /// 组件颜色协商，返回 None 使用默认色
    fn color_for_component(&self, component: PagerComponent, default: Color) -> Option<Color> {
        let _ = (component, default);
        None
    }

    /// 数值选项协商，返回 None 保持当前值；布尔选项用 0/1 表示
    fn value_for_option(&self, option: PagerOption, default: f32) -> Option<f32> {
        let _ = (option, default);
        None
    }
}

/// 已解析的组件颜色缓存，只在 set_needs_reload_colors 时刷新
#[derive(Debug, Clone, Copy, Default)]
struct ResolvedColors {
    indicator: Option<Color>,
    tabs: Option<Color>,
    content: Option<Color>,
}

/// 分页控制器
pub struct PagerController {
    id: ComponentId,
    style: Style,
    options: PagerOptions,
    data_source: Option<Weak<dyn PagerDataSource>>,
    delegate: Option<Weak<dyn PagerDelegate>>,
    strip: TabsStrip,
    indicator: Indicator,
    content: ContentArea,
    colors: ResolvedColors,
    selected_index: usize,
    /// 首次 reload 之前收到的选择请求
    pending_selection: Option<usize>,
    has_loaded: bool,
}

impl PagerController {
    pub fn new() -> Self {
        let mut strip = TabsStrip::new();
        strip.style_mut().background_color = Some(DEFAULT_TABS_COLOR);
        let mut content = ContentArea::new();
        content.style_mut().background_color = Some(DEFAULT_CONTENT_COLOR);

        Self {
            id: ComponentId::new(),
            style: Style::default(),
            options: PagerOptions::default(),
            data_source: None,
            delegate: None,
            strip,
            indicator: Indicator::new(DEFAULT_INDICATOR_COLOR),
            content,
            colors: ResolvedColors::default(),
            selected_index: 0,
            pending_selection: None,
            has_loaded: false,
        }
    }

    pub fn with_options(mut self, options: PagerOptions) -> Self {
        self.options = options;
        self
    }

    /// 数据源，不持有所有权
    pub fn set_data_source(&mut self, data_source: &Arc<dyn PagerDataSource>) {
        self.data_source = Some(Arc::downgrade(data_source));
    }

    /// 委托，不持有所有权
    pub fn set_delegate(&mut self, delegate: &Arc<dyn PagerDelegate>) {
        self.delegate = Some(Arc::downgrade(delegate));
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut PagerOptions {
        &mut self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn tab_count(&self) -> usize {
        self.strip.tab_count()
    }

    pub fn strip(&self) -> &TabsStrip {
        &self.strip
    }

    pub fn indicator(&self) -> &Indicator {
        &self.indicator
    }

    pub fn content(&self) -> &ContentArea {
        &self.content
    }

    fn upgraded_data_source(&self) -> Option<Arc<dyn PagerDataSource>> {
        self.data_source.as_ref().and_then(Weak::upgrade)
    }

    fn upgraded_delegate(&self) -> Option<Arc<dyn PagerDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    /// 选中指定标签
    /// 越界或与当前选中相同则静默忽略；reload 之前的调用先记下，
    /// 首次 reload 时再应用
    pub fn select_tab(&mut self, index: usize) {
        if !self.has_loaded {
            self.pending_selection = Some(index);
            return;
        }
        if index >= self.strip.tab_count() || index == self.selected_index {
            return;
        }
        self.apply_selection(index, true);
    }

    /// 应用选中变化：状态、标签栏、内容滚动、生命周期与通知
    fn apply_selection(&mut self, index: usize, animate: bool) {
        let old = self.selected_index;
        self.selected_index = index;
        self.strip.set_active(index);
        self.strip.reload_layout(&self.options, index);
        if animate {
            self.content.scroll_mut().animate_to_page(index);
        } else {
            self.content.scroll_mut().snap_to_page(index);
        }
        self.content.notify_page_changed(old, index);
        self.sync_indicator();

        if let Some(delegate) = self.upgraded_delegate() {
            delegate.did_change_tab(index);
        }
    }

    /// 内容区停稳后由滚动结果敲定最终选中
    fn apply_settled(&mut self, page: usize) {
        if page != self.selected_index && page < self.strip.tab_count() {
            self.apply_selection(page, false);
        } else {
            self.sync_indicator();
        }
    }

    /// 重新查询数据源并整体重建标签与内容
    /// 选中序号仍在范围内则保留，否则回到 0
    pub fn reload_data(&mut self) {
        let Some(data_source) = self.upgraded_data_source() else {
            // 数据源不在了，清空
            self.strip.set_tabs(Vec::new());
            self.content.set_slots(Vec::new());
            self.selected_index = 0;
            self.sync_indicator();
            return;
        };

        let count = data_source.tab_count();

        let views: Vec<(Box<dyn Component>, f32)> = (0..count)
            .map(|i| (data_source.tab_view(i), data_source.tab_width(i)))
            .collect();
        self.strip.set_tabs(views);

        // 内容槽位：控制器优先，视图其次，否则为空
        let slots: Vec<TabContent> = (0..count)
            .map(|i| {
                if let Some(controller) = data_source.content_controller(i) {
                    TabContent::Controller(controller)
                } else if let Some(view) = data_source.content_view(i) {
                    TabContent::View(view)
                } else {
                    TabContent::Empty
                }
            })
            .collect();
        self.content.set_slots(slots);

        let desired = if self.has_loaded {
            self.selected_index
        } else {
            self.pending_selection
                .take()
                .unwrap_or(self.options.initial_index)
        };
        self.selected_index = if desired < count { desired } else { 0 };
        self.has_loaded = true;

        self.content.set_swipe_enabled(self.options.swipe_enabled);
        self.strip.set_active(self.selected_index);
        self.relayout();
    }

    /// 宿主指定控件 frame
    pub fn layout(&mut self, bounds: Rect) {
        self.style.set_frame(bounds);
        self.relayout();
    }

    /// 按当前选项切分标签栏/内容区并重算所有几何
    fn relayout(&mut self) {
        let bounds = self.style.bounds();
        let tab_height = self.options.tab_height.max(0.0);
        let top_inset = if self.options.tab_location == TabLocation::Top
            && !self.options.ignore_top_layout_guide
        {
            TOP_LAYOUT_GUIDE
        } else {
            0.0
        };

        let (strip_frame, content_frame) = match self.options.tab_location {
            TabLocation::Top => {
                let strip = Rect::new(bounds.x, bounds.y + top_inset, bounds.width, tab_height);
                let content_y = strip.bottom();
                let content = Rect::new(
                    bounds.x,
                    content_y,
                    bounds.width,
                    (bounds.bottom() - content_y).max(0.0),
                );
                (strip, content)
            }
            TabLocation::Bottom => {
                let strip = Rect::new(
                    bounds.x,
                    bounds.bottom() - tab_height,
                    bounds.width,
                    tab_height,
                );
                let content = Rect::new(
                    bounds.x,
                    bounds.y,
                    bounds.width,
                    (bounds.height - tab_height).max(0.0),
                );
                (strip, content)
            }
        };

        self.strip.style_mut().set_frame(strip_frame);
        self.strip.reload_layout(&self.options, self.selected_index);

        self.content.style_mut().set_frame(content_frame);
        self.content.scroll_mut().snap_to_page(self.selected_index);
        self.content.reload_layout();

        self.sync_indicator();
    }

    /// 重新协商布局选项并重算几何
    /// delegate 不提供某个选项值时该选项保持原值
    pub fn set_needs_reload_options(&mut self) {
        if let Some(delegate) = self.upgraded_delegate() {
            let o = &mut self.options;
            if let Some(v) = delegate.value_for_option(PagerOption::TabHeight, o.tab_height) {
                o.tab_height = v;
            }
            if let Some(v) = delegate.value_for_option(PagerOption::TabOffset, o.tab_offset) {
                o.tab_offset = v;
            }
            if let Some(v) = delegate.value_for_option(PagerOption::TabWidth, o.tab_width) {
                o.tab_width = v;
            }
            if let Some(v) = delegate.value_for_option(
                PagerOption::CenterCurrentTab,
                bool_value(o.center_current_tab),
            ) {
                o.center_current_tab = v > 0.5;
            }
            if let Some(v) = delegate
                .value_for_option(PagerOption::FixFormerTabs, bool_value(o.fix_former_tabs))
            {
                o.fix_former_tabs = v > 0.5;
            }
            if let Some(v) = delegate
                .value_for_option(PagerOption::FixLatterTabs, bool_value(o.fix_latter_tabs))
            {
                o.fix_latter_tabs = v > 0.5;
            }
        }

        self.content.set_swipe_enabled(self.options.swipe_enabled);
        self.relayout();
    }

    /// 重新协商三个组件的颜色
    /// 每个组件问一次 delegate，一共最多三次调用；delegate 不给就用默认色
    pub fn set_needs_reload_colors(&mut self) {
        let delegate = self.upgraded_delegate();
        let resolve = |component: PagerComponent, default: Color| -> Color {
            delegate
                .as_ref()
                .and_then(|d| d.color_for_component(component, default))
                .unwrap_or(default)
        };

        let indicator = resolve(PagerComponent::Indicator, DEFAULT_INDICATOR_COLOR);
        let tabs = resolve(PagerComponent::TabsStrip, DEFAULT_TABS_COLOR);
        let content = resolve(PagerComponent::Content, DEFAULT_CONTENT_COLOR);

        self.colors = ResolvedColors {
            indicator: Some(indicator),
            tabs: Some(tabs),
            content: Some(content),
        };

        self.indicator.set_color(indicator);
        self.strip.style_mut().background_color = Some(tabs);
        self.content.style_mut().background_color = Some(content);
    }

    /// 读取某个组件当前解析出的颜色，未解析过返回全透明
    pub fn color_for_component(&self, component: PagerComponent) -> Color {
        let resolved = match component {
            PagerComponent::Indicator => self.colors.indicator,
            PagerComponent::TabsStrip => self.colors.tabs,
            PagerComponent::Content => self.colors.content,
        };
        resolved.unwrap_or(Color::TRANSPARENT)
    }

    /// 指示条跟随内容滚动：拖拽期间在相邻两个标签之间插值
    fn sync_indicator(&mut self) {
        let count = self.strip.tab_count();
        self.indicator.set_selected(count > 0);
        if count == 0 {
            return;
        }

        let fraction = self.content.scroll().fraction();
        let lower = (fraction.floor() as usize).min(count - 1);
        let upper = (lower + 1).min(count - 1);
        let t = fraction - lower as f32;

        let (Some(from), Some(to)) = (self.strip.tab_rect(lower), self.strip.tab_rect(upper))
        else {
            return;
        };
        let tab_rect = from.lerp(&to, t);

        let strip_bottom = self.strip.style().bounds().bottom();
        self.indicator.set_frame(Rect::new(
            tab_rect.x,
            strip_bottom - INDICATOR_HEIGHT,
            tab_rect.width,
            INDICATOR_HEIGHT,
        ));
    }

    /// 推进动画，返回是否还需要下一帧
    pub fn update_animations(&mut self, dt: f32) -> bool {
        let (animating, settled) = self.content.update_scroll(dt);
        if let Some(page) = settled {
            self.apply_settled(page);
        } else if animating {
            self.sync_indicator();
        }
        animating
    }
}

fn bool_value(b: bool) -> f32 {
    if b {
        1.0
    } else {
        0.0
    }
}

impl Default for PagerController {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for PagerController {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn render(&self, canvas: &mut Canvas) {
        self.content.render(canvas);
        self.strip.render(canvas);
        self.indicator.render(canvas);
    }

    fn update(&mut self, dt: f32) -> bool {
        self.update_animations(dt)
    }

    fn on_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Tap(tap) => {
                let point = Point::new(tap.x, tap.y);
                if let Some(index) = self.strip.tab_at(&point) {
                    self.select_tab(index);
                    return true;
                }
                self.content.on_event(event)
            }
            _ => {
                let consumed = self.content.on_event(event);
                if consumed {
                    self.sync_indicator();
                }
                consumed
            }
        }
    }

    fn type_name(&self) -> &'static str {
        "PagerController"
    }
}
