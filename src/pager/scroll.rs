//! 分页滚动控制器 - 内容区横向拖拽与翻页回弹

/// 松手后换页的位置阈值（越过页宽的这个比例即翻页），手感参数
pub const PAGE_SNAP_THRESHOLD: f32 = 0.5;

/// 轻扫换页的释放速度阈值 (px/s)，手感参数
pub const FLICK_VELOCITY: f32 = 300.0;

/// 回弹动画时长 (s)
const SETTLE_DURATION: f32 = 0.3;

/// 分页滚动控制器
/// 拖拽期间直接跟手，松手后 ease-out 回弹到目标页边界
pub struct PagedScrollController {
    /// 内容区横向偏移
    position: f32,
    page_width: f32,
    page_count: usize,
    pub is_dragging: bool,
    drag_start_x: f32,
    drag_start_pos: f32,
    /// 本次手势开始时所在的页
    drag_origin_page: usize,
    // (x, timestamp_ms)
    velocity_samples: Vec<(f32, u64)>,
    is_settling: bool,
    settle_timer: f32,
    settle_start_pos: f32,
    settle_target_pos: f32,
    target_page: usize,
}

impl PagedScrollController {
    pub fn new(page_width: f32, page_count: usize) -> Self {
        Self {
            position: 0.0,
            page_width,
            page_count,
            is_dragging: false,
            drag_start_x: 0.0,
            drag_start_pos: 0.0,
            drag_origin_page: 0,
            velocity_samples: Vec::with_capacity(10),
            is_settling: false,
            settle_timer: 0.0,
            settle_start_pos: 0.0,
            settle_target_pos: 0.0,
            target_page: 0,
        }
    }

    /// 页宽或页数变化时调用（reload / 布局变化）
    pub fn configure(&mut self, page_width: f32, page_count: usize) {
        self.page_width = page_width;
        self.page_count = page_count;
        self.is_dragging = false;
        self.is_settling = false;
        self.target_page = self.target_page.min(page_count.saturating_sub(1));
        self.position = self.target_page as f32 * page_width;
    }

    fn max_offset(&self) -> f32 {
        (self.page_count.saturating_sub(1)) as f32 * self.page_width
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    /// 当前位置对应的页浮点数，0.0 ~ (页数-1)
    pub fn fraction(&self) -> f32 {
        if self.page_width <= 0.0 {
            return 0.0;
        }
        (self.position / self.page_width).clamp(0.0, self.page_count.saturating_sub(1) as f32)
    }

    pub fn target_page(&self) -> usize {
        self.target_page
    }

    pub fn is_animating(&self) -> bool {
        self.is_settling
    }

    /// 直接跳到某页，不播放动画
    pub fn snap_to_page(&mut self, page: usize) {
        let page = page.min(self.page_count.saturating_sub(1));
        self.is_dragging = false;
        self.is_settling = false;
        self.target_page = page;
        self.position = page as f32 * self.page_width;
    }

    /// 动画滚动到某页
    /// 外部选中标签时调用，会打断进行中的拖拽
    pub fn animate_to_page(&mut self, page: usize) {
        let page = page.min(self.page_count.saturating_sub(1));
        self.is_dragging = false;
        self.target_page = page;
        self.start_settle(page as f32 * self.page_width);
    }

    pub fn begin_drag(&mut self, x: f32, timestamp: u64) {
        if self.page_count == 0 || self.page_width <= 0.0 {
            return;
        }
        self.is_dragging = true;
        self.is_settling = false;
        self.drag_start_x = x;
        self.drag_start_pos = self.position;
        self.drag_origin_page = self.target_page;
        self.velocity_samples.clear();
        self.velocity_samples.push((x, timestamp));
    }

    pub fn update_drag(&mut self, x: f32, timestamp: u64) {
        if !self.is_dragging {
            return;
        }
        let delta = self.drag_start_x - x;
        let mut new_pos = self.drag_start_pos + delta;
        let max = self.max_offset();
        if new_pos < 0.0 {
            let overshoot = -new_pos;
            new_pos = -Self::rubber_band(overshoot, self.page_width);
        } else if new_pos > max {
            let overshoot = new_pos - max;
            new_pos = max + Self::rubber_band(overshoot, self.page_width);
        }
        self.position = new_pos;
        self.velocity_samples.push((x, timestamp));
        // Keep samples from last 100ms
        self.velocity_samples
            .retain(|(_, t)| timestamp >= *t && timestamp - *t < 100);
    }

    /// 松手，决定目标页并开始回弹，返回目标页
    pub fn end_drag(&mut self) -> usize {
        if !self.is_dragging {
            return self.target_page;
        }
        self.is_dragging = false;

        let velocity = self.calculate_release_velocity();
        let origin = self.drag_origin_page;

        // 越过中点换页，轻扫速度够大也换页；一次手势最多移动一页
        let rel = if self.page_width > 0.0 {
            (self.position - origin as f32 * self.page_width) / self.page_width
        } else {
            0.0
        };

        let mut target = origin as i32;
        if velocity > FLICK_VELOCITY || rel > PAGE_SNAP_THRESHOLD {
            target += 1;
        } else if velocity < -FLICK_VELOCITY || rel < -PAGE_SNAP_THRESHOLD {
            target -= 1;
        }

        let target = target.clamp(0, self.page_count.saturating_sub(1) as i32) as usize;
        self.target_page = target;
        self.start_settle(target as f32 * self.page_width);
        target
    }

    fn calculate_release_velocity(&self) -> f32 {
        if self.velocity_samples.len() < 2 {
            return 0.0;
        }
        let first = self.velocity_samples.first().unwrap();
        let last = self.velocity_samples.last().unwrap();
        // timestamp is in ms, convert to seconds
        let dt = (last.1.saturating_sub(first.1)) as f32 / 1000.0;
        if dt < 0.001 {
            return 0.0;
        }
        (first.0 - last.0) / dt * 0.8
    }

    fn rubber_band(offset: f32, dimension: f32) -> f32 {
        let c = 0.55;
        let x = offset.abs() / dimension.max(1.0);
        (1.0 - (1.0 / (x * c + 1.0))) * dimension
    }

    fn start_settle(&mut self, target_pos: f32) {
        if (self.position - target_pos).abs() < 0.5 {
            self.position = target_pos;
            self.is_settling = false;
            return;
        }
        self.is_settling = true;
        self.settle_timer = 0.0;
        self.settle_start_pos = self.position;
        self.settle_target_pos = target_pos;
    }

    /// 推进回弹动画，返回 (是否还在动画中, 本帧停稳的页)
    pub fn update(&mut self, dt: f32) -> (bool, Option<usize>) {
        if self.is_dragging || !self.is_settling {
            return (false, None);
        }

        self.settle_timer += dt;
        if self.settle_timer >= SETTLE_DURATION {
            self.position = self.settle_target_pos;
            self.is_settling = false;
            return (false, Some(self.target_page));
        }

        let t = self.settle_timer / SETTLE_DURATION;
        let ease = 1.0 - (1.0 - t).powi(3);
        self.position = self.settle_start_pos + (self.settle_target_pos - self.settle_start_pos) * ease;
        (true, None)
    }
}
