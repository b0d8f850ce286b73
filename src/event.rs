//! 事件系统 - 处理用户交互

use crate::Point;

/// 事件类型
#[derive(Debug, Clone)]
pub enum Event {
    // 触摸/鼠标事件
    TouchStart(TouchEvent),
    TouchMove(TouchEvent),
    TouchEnd(TouchEvent),
    TouchCancel(TouchEvent),

    // 点击事件
    Tap(TapEvent),
}

/// 触摸事件
#[derive(Debug, Clone)]
pub struct TouchEvent {
    pub touches: Vec<Touch>,
    pub changed_touches: Vec<Touch>,
    pub timestamp: u64,
}

impl TouchEvent {
    /// 单指触摸事件
    pub fn single(x: f32, y: f32, timestamp: u64) -> Self {
        let touch = Touch::new(0, x, y);
        Self {
            touches: vec![touch.clone()],
            changed_touches: vec![touch],
            timestamp,
        }
    }
}

/// 单个触摸点
#[derive(Debug, Clone)]
pub struct Touch {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

impl Touch {
    pub fn new(id: u32, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// 点击事件
#[derive(Debug, Clone)]
pub struct TapEvent {
    pub x: f32,
    pub y: f32,
    pub timestamp: u64,
}
