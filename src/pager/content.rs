//! 内容区组件 - 横向分页的内容容器

use super::scroll::PagedScrollController;
use crate::event::Event;
use crate::ui::{Component, ComponentId, Style};
use crate::{Canvas, Paint, PaintStyle, Point, Rect};

/// 内容控制器 - 拥有内容视图并关心页面生命周期的宿主对象
/// （数据源提供视图控制器而不是裸视图时使用）
pub trait ContentController: Send + Sync {
    fn view(&self) -> &dyn Component;
    fn view_mut(&mut self) -> &mut dyn Component;

    /// 页面即将展示
    fn will_appear(&mut self) {}

    /// 页面已经离开
    fn did_disappear(&mut self) {}
}

/// 每页的内容槽位
/// reload 时按「控制器优先，视图其次，否则为空」解析
pub enum TabContent {
    Controller(Box<dyn ContentController>),
    View(Box<dyn Component>),
    Empty,
}

impl TabContent {
    pub fn view(&self) -> Option<&dyn Component> {
        match self {
            TabContent::Controller(c) => Some(c.view()),
            TabContent::View(v) => Some(v.as_ref()),
            TabContent::Empty => None,
        }
    }

    pub fn view_mut(&mut self) -> Option<&mut dyn Component> {
        match self {
            TabContent::Controller(c) => Some(c.view_mut()),
            TabContent::View(v) => Some(v.as_mut()),
            TabContent::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TabContent::Empty)
    }
}

/// 内容区
/// 每个标签一页，横向连续排列，页宽等于内容区宽度
pub struct ContentArea {
    id: ComponentId,
    style: Style,
    slots: Vec<TabContent>,
    scroll: PagedScrollController,
    swipe_enabled: bool,
}

impl ContentArea {
    pub fn new() -> Self {
        Self {
            id: ComponentId::new(),
            style: Style::default(),
            slots: Vec::new(),
            scroll: PagedScrollController::new(0.0, 0),
            swipe_enabled: true,
        }
    }

    pub fn page_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[TabContent] {
        &self.slots
    }

    pub fn scroll(&self) -> &PagedScrollController {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut PagedScrollController {
        &mut self.scroll
    }

    pub fn set_swipe_enabled(&mut self, enabled: bool) {
        self.swipe_enabled = enabled;
    }

    /// 整体替换内容槽位（reload 时调用）
    pub fn set_slots(&mut self, slots: Vec<TabContent>) {
        self.slots = slots;
        self.scroll
            .configure(self.style.width, self.slots.len());
        self.apply_page_frames();
    }

    /// 内容区 frame 变化后重新配置分页
    pub fn reload_layout(&mut self) {
        self.scroll
            .configure(self.style.width, self.slots.len());
        self.apply_page_frames();
    }

    /// 把每页视图的 frame 同步到当前滚动偏移
    fn apply_page_frames(&mut self) {
        let bounds = self.style.bounds();
        let offset = self.scroll.position();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if let Some(view) = slot.view_mut() {
                view.style_mut().set_frame(Rect::new(
                    bounds.x + i as f32 * bounds.width - offset,
                    bounds.y,
                    bounds.width,
                    bounds.height,
                ));
            }
        }
    }

    /// 推进回弹动画，返回 (是否还在动画中, 本帧停稳的页)
    pub fn update_scroll(&mut self, dt: f32) -> (bool, Option<usize>) {
        let result = self.scroll.update(dt);
        self.apply_page_frames();
        result
    }

    /// 选中页变化时触发内容生命周期回调
    pub fn notify_page_changed(&mut self, old: usize, new: usize) {
        if old == new {
            return;
        }
        if let Some(TabContent::Controller(c)) = self.slots.get_mut(old) {
            c.did_disappear();
        }
        if let Some(TabContent::Controller(c)) = self.slots.get_mut(new) {
            c.will_appear();
        }
    }
}

impl Default for ContentArea {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ContentArea {
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
        let bounds = self.style.bounds();

        if let Some(bg) = self.style.background_color {
            let paint = Paint::new().with_color(bg).with_style(PaintStyle::Fill);
            canvas.draw_rect(&bounds, &paint);
        }

        canvas.save();
        canvas.clip_rect(bounds);

        // 只画可见的页
        for slot in &self.slots {
            if let Some(view) = slot.view() {
                if view.style().bounds().intersects(&bounds) {
                    view.render(canvas);
                }
            }
        }

        canvas.restore();
    }

    fn on_event(&mut self, event: &Event) -> bool {
        match event {
            Event::TouchStart(touch) => {
                if !self.swipe_enabled {
                    return false;
                }
                if let Some(t) = touch.touches.first() {
                    if self.hit_test(&t.position()) {
                        self.scroll.begin_drag(t.x, touch.timestamp);
                        return true;
                    }
                }
                false
            }
            Event::TouchMove(touch) => {
                if self.scroll.is_dragging {
                    if let Some(t) = touch.touches.first() {
                        self.scroll.update_drag(t.x, touch.timestamp);
                        self.apply_page_frames();
                        return true;
                    }
                }
                false
            }
            Event::TouchEnd(_) | Event::TouchCancel(_) => {
                if self.scroll.is_dragging {
                    self.scroll.end_drag();
                    return true;
                }
                false
            }
            Event::Tap(tap) => {
                // 点击透传给当前页内容
                let point = Point::new(tap.x, tap.y);
                if !self.style.bounds().contains(&point) {
                    return false;
                }
                let current = self.scroll.target_page();
                if let Some(slot) = self.slots.get_mut(current) {
                    if let Some(view) = slot.view_mut() {
                        return view.on_event(event);
                    }
                }
                false
            }
        }
    }

    fn type_name(&self) -> &'static str {
        "ContentArea"
    }
}
