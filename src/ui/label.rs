//! Label 组件 - 文本显示

use super::component::{Component, ComponentId, Style};
use crate::text::TextRenderer;
use crate::{Canvas, Color, Paint, PaintStyle};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Label - 文本组件，标签标题等
pub struct Label {
    id: ComponentId,
    style: Style,
    content: String,
    font_size: f32,
    text_color: Color,
    text_align: TextAlign,
    renderer: Arc<TextRenderer>,
}

impl Label {
    pub fn new(content: &str, renderer: Arc<TextRenderer>) -> Self {
        Self {
            id: ComponentId::new(),
            style: Style::default(),
            content: content.to_string(),
            font_size: 16.0,
            text_color: Color::BLACK,
            text_align: TextAlign::Center,
            renderer,
        }
    }

    pub fn with_frame(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.style.x = x;
        self.style.y = y;
        self.style.width = width;
        self.style.height = height;
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Component for Label {
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

        let text_width = self.renderer.measure_text(&self.content, self.font_size);
        let x = match self.text_align {
            TextAlign::Left => bounds.x,
            TextAlign::Center => bounds.x + (bounds.width - text_width) / 2.0,
            TextAlign::Right => bounds.x + bounds.width - text_width,
        };
        // 基线大致落在垂直居中处
        let y = bounds.y + (bounds.height + self.font_size * 0.7) / 2.0;

        let paint = Paint::new()
            .with_color(self.text_color)
            .with_style(PaintStyle::Fill);
        self.renderer.draw_text(canvas, &self.content, x, y, self.font_size, &paint);
    }

    fn type_name(&self) -> &'static str {
        "Label"
    }
}
