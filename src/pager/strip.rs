//! 标签栏组件 - 横向排列的标签头

use super::options::PagerOptions;
use crate::ui::{Component, ComponentId, Style};
use crate::{Canvas, Color, Paint, PaintStyle, Point, Rect};

/// 单个标签的描述符，reload 时整体重建
pub struct TabDescriptor {
    pub index: usize,
    /// 数据源请求的宽度，非正数时用默认宽度
    pub requested_width: f32,
    /// 实际宽度（夹取到标签栏可视宽度以内）
    pub width: f32,
    /// 标签栏内容坐标系里的 x 偏移
    pub x: f32,
    pub view: Box<dyn Component>,
}

/// 标签栏
/// 按计算好的偏移从左到右排列标签视图，超出可视宽度时可滚动
pub struct TabsStrip {
    id: ComponentId,
    style: Style,
    tabs: Vec<TabDescriptor>,
    active_index: usize,
    scroll_x: f32,
    highlight_color: Color,
}

impl TabsStrip {
    pub fn new() -> Self {
        Self {
            id: ComponentId::new(),
            style: Style::default(),
            tabs: Vec::new(),
            active_index: 0,
            scroll_x: 0.0,
            // 选中标签的淡色高亮
            highlight_color: Color::new(0, 0, 0, 18),
        }
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    pub fn set_highlight_color(&mut self, color: Color) {
        self.highlight_color = color;
    }

    /// 整体替换标签（reload 时调用）
    pub fn set_tabs(&mut self, views: Vec<(Box<dyn Component>, f32)>) {
        self.tabs = views
            .into_iter()
            .enumerate()
            .map(|(index, (view, requested_width))| TabDescriptor {
                index,
                requested_width,
                width: requested_width,
                x: 0.0,
                view,
            })
            .collect();
        self.scroll_x = 0.0;
    }

    pub fn set_active(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.active_index = index;
        }
    }

    /// 标签栏内容总宽度（含前导偏移）
    pub fn content_width(&self) -> f32 {
        self.tabs
            .last()
            .map(|t| t.x + t.width)
            .unwrap_or(0.0)
    }

    /// 按当前选项重新计算每个标签的宽度和偏移
    ///
    /// 居中模式下让选中标签的中点对齐可视区中点；fix_former/fix_latter
    /// 把被居中平移推离原位的前端/末端标签钉回原位，避免边缘跳动。
    pub fn reload_layout(&mut self, options: &PagerOptions, selected: usize) {
        let visible_width = self.style.width;
        if self.tabs.is_empty() {
            return;
        }

        // 宽度：数据源不给就用默认值，夹取到可视宽度以内
        for tab in &mut self.tabs {
            let requested = if tab.requested_width > 0.0 {
                tab.requested_width
            } else {
                options.tab_width
            };
            tab.width = if visible_width > 0.0 {
                requested.min(visible_width)
            } else {
                requested
            };
        }

        // 原始偏移：前导偏移 + 前面标签的累计宽度
        let mut running = options.tab_offset;
        let mut base: Vec<f32> = Vec::with_capacity(self.tabs.len());
        for tab in &self.tabs {
            base.push(running);
            running += tab.width;
        }

        let selected = selected.min(self.tabs.len() - 1);

        if options.center_current_tab {
            let selected_mid = base[selected] + self.tabs[selected].width / 2.0;
            let shift = visible_width / 2.0 - selected_mid;

            for (i, tab) in self.tabs.iter_mut().enumerate() {
                let pinned = (options.fix_former_tabs && shift > 0.0 && i < selected)
                    || (options.fix_latter_tabs && shift < 0.0 && i > selected);
                tab.x = if pinned { base[i] } else { base[i] + shift };
            }
            self.scroll_x = 0.0;
        } else {
            for (i, tab) in self.tabs.iter_mut().enumerate() {
                tab.x = base[i];
            }
            self.scroll_to_visible(selected);
        }

        self.apply_view_frames();
    }

    /// 非居中模式下滚动标签栏，保证某个标签完全可见
    fn scroll_to_visible(&mut self, index: usize) {
        let visible_width = self.style.width;
        if visible_width <= 0.0 {
            return;
        }
        let Some(tab) = self.tabs.get(index) else { return };

        if tab.x < self.scroll_x {
            self.scroll_x = tab.x;
        } else if tab.x + tab.width > self.scroll_x + visible_width {
            self.scroll_x = tab.x + tab.width - visible_width;
        }

        let max_scroll = (self.content_width() - visible_width).max(0.0);
        self.scroll_x = self.scroll_x.clamp(0.0, max_scroll);
    }

    /// 把标签视图的 frame 同步到计算结果
    fn apply_view_frames(&mut self) {
        let bounds = self.style.bounds();
        let scroll_x = self.scroll_x;
        for tab in &mut self.tabs {
            tab.view.style_mut().set_frame(Rect::new(
                bounds.x + tab.x - scroll_x,
                bounds.y,
                tab.width,
                bounds.height,
            ));
        }
    }

    /// 某个标签在画布坐标系里的矩形
    pub fn tab_rect(&self, index: usize) -> Option<Rect> {
        let bounds = self.style.bounds();
        self.tabs.get(index).map(|tab| {
            Rect::new(
                bounds.x + tab.x - self.scroll_x,
                bounds.y,
                tab.width,
                bounds.height,
            )
        })
    }

    /// 点击命中的标签
    pub fn tab_at(&self, point: &Point) -> Option<usize> {
        if !self.style.bounds().contains(point) {
            return None;
        }
        self.tabs
            .iter()
            .find(|tab| self.tab_rect(tab.index).is_some_and(|r| r.contains(point)))
            .map(|tab| tab.index)
    }
}

impl Default for TabsStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TabsStrip {
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

        // 选中标签的高亮
        if let Some(rect) = self.tab_rect(self.active_index) {
            let paint = Paint::new()
                .with_color(self.highlight_color)
                .with_style(PaintStyle::Fill);
            canvas.draw_rect(&rect, &paint);
        }

        for tab in &self.tabs {
            if tab.view.style().bounds().intersects(&bounds) {
                tab.view.render(canvas);
            }
        }

        // 底部分割线
        let line_paint = Paint::new()
            .with_color(Color::from_hex(0xE5E5E5))
            .with_style(PaintStyle::Fill);
        canvas.draw_rect(
            &Rect::new(bounds.x, bounds.bottom() - 1.0, bounds.width, 1.0),
            &line_paint,
        );

        canvas.restore();
    }

    fn type_name(&self) -> &'static str {
        "TabsStrip"
    }
}
