//! 指示条组件 - 标记当前选中标签的细条

use crate::ui::{Component, ComponentId, Style};
use crate::{Canvas, Color, Paint, PaintStyle, Rect};

/// 指示条默认高度
pub const INDICATOR_HEIGHT: f32 = 3.0;

/// 指示条
pub struct Indicator {
    id: ComponentId,
    style: Style,
    color: Color,
    selected: bool,
    needs_repaint: bool,
}

impl Indicator {
    pub fn new(color: Color) -> Self {
        Self {
            id: ComponentId::new(),
            style: Style::default(),
            color,
            selected: false,
            needs_repaint: true,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// 设置颜色
    /// 颜色没变时跳过，避免多余的重绘标记
    pub fn set_color(&mut self, color: Color) {
        if color == self.color {
            return;
        }
        self.color = color;
        self.needs_repaint = true;
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        if selected != self.selected {
            self.selected = selected;
            self.needs_repaint = true;
        }
    }

    /// 移动到目标矩形（选中标签的横向范围）
    pub fn set_frame(&mut self, frame: Rect) {
        if frame != self.style.bounds() {
            self.style.set_frame(frame);
            self.needs_repaint = true;
        }
    }

    /// 读取并清除重绘标记
    pub fn take_needs_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }
}

impl Component for Indicator {
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
        if !self.selected {
            return;
        }
        let paint = Paint::new()
            .with_color(self.color)
            .with_style(PaintStyle::Fill)
            .with_anti_alias(false);
        canvas.draw_rect(&self.style.bounds(), &paint);
    }

    fn type_name(&self) -> &'static str {
        "Indicator"
    }
}
