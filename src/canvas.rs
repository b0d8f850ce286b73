//! Canvas 画布模块 - 核心渲染接口

use crate::{Color, Paint, PaintStyle, Path, Point, Rect};

/// 画布状态
#[derive(Clone)]
struct CanvasState {
    clip_rect: Option<Rect>,
    translation: (f32, f32),
}

/// 画布 - 主要渲染接口
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    clip_rect: Option<Rect>,
    translation: (f32, f32),
    state_stack: Vec<CanvasState>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; (width * height) as usize],
            clip_rect: None,
            translation: (0.0, 0.0),
            state_stack: Vec::new(),
        }
    }

    /// 保存当前状态（裁剪区域和变换）
    pub fn save(&mut self) {
        self.state_stack.push(CanvasState {
            clip_rect: self.clip_rect,
            translation: self.translation,
        });
    }

    /// 恢复上一次保存的状态
    pub fn restore(&mut self) {
        if let Some(state) = self.state_stack.pop() {
            self.clip_rect = state.clip_rect;
            self.translation = state.translation;
        }
    }

    /// 平移坐标系
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.translation.0 += dx;
        self.translation.1 += dy;
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    /// 获取像素数据引用
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// 清空画布
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// 设置裁剪区域（与已有裁剪区域求交）
    pub fn clip_rect(&mut self, rect: Rect) {
        if let Some(current) = self.clip_rect {
            let x = current.x.max(rect.x);
            let y = current.y.max(rect.y);
            let right = current.right().min(rect.right());
            let bottom = current.bottom().min(rect.bottom());

            if right > x && bottom > y {
                self.clip_rect = Some(Rect::new(x, y, right - x, bottom - y));
            } else {
                // 无交集，空矩形
                self.clip_rect = Some(Rect::new(0.0, 0.0, 0.0, 0.0));
            }
        } else {
            self.clip_rect = Some(rect);
        }
    }

    /// 重置裁剪区域
    pub fn reset_clip(&mut self) {
        self.clip_rect = None;
    }

    /// 获取像素
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize]
        } else {
            Color::TRANSPARENT
        }
    }

    /// 设置像素（带 alpha 混合）
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }

        // 检查裁剪区域
        if let Some(clip) = &self.clip_rect {
            if x < clip.x as i32 || x >= clip.right() as i32 ||
               y < clip.y as i32 || y >= clip.bottom() as i32 {
                return;
            }
        }

        let idx = (y as u32 * self.width + x as u32) as usize;
        if color.a == 255 {
            self.pixels[idx] = color;
        } else if color.a > 0 {
            self.pixels[idx] = color.blend(&self.pixels[idx]);
        }
    }

    /// 设置像素（带抗锯齿 coverage）
    fn set_pixel_aa(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if coverage <= 0.0 { return; }
        let a = (color.a as f32 * coverage.min(1.0)) as u8;
        self.set_pixel(x, y, Color::new(color.r, color.g, color.b, a));
    }

    /// 绘制矩形
    pub fn draw_rect(&mut self, rect: &Rect, paint: &Paint) {
        match paint.style {
            PaintStyle::Fill => self.fill_rect(rect, &paint.color),
            PaintStyle::Stroke => self.stroke_rect(rect, paint),
            PaintStyle::FillAndStroke => {
                self.fill_rect(rect, &paint.color);
                self.stroke_rect(rect, paint);
            }
        }
    }

    fn fill_rect(&mut self, rect: &Rect, color: &Color) {
        let tx = self.translation.0;
        let ty = self.translation.1;

        let x0 = (rect.x + tx).max(0.0) as i32;
        let y0 = (rect.y + ty).max(0.0) as i32;
        let x1 = (rect.right() + tx).min(self.width as f32) as i32;
        let y1 = (rect.bottom() + ty).min(self.height as f32) as i32;

        for y in y0..y1 {
            for x in x0..x1 {
                self.set_pixel(x, y, *color);
            }
        }
    }

    fn stroke_rect(&mut self, rect: &Rect, paint: &Paint) {
        let w = paint.stroke_width;
        // 上边
        self.fill_rect(&Rect::new(rect.x, rect.y, rect.width, w), &paint.color);
        // 下边
        self.fill_rect(&Rect::new(rect.x, rect.bottom() - w, rect.width, w), &paint.color);
        // 左边
        self.fill_rect(&Rect::new(rect.x, rect.y, w, rect.height), &paint.color);
        // 右边
        self.fill_rect(&Rect::new(rect.right() - w, rect.y, w, rect.height), &paint.color);
    }

    /// 绘制圆形（指示点等）
    pub fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) {
        let cx = cx + self.translation.0;
        let cy = cy + self.translation.1;

        let r2 = radius * radius;
        let x0 = (cx - radius - 1.0).max(0.0) as i32;
        let y0 = (cy - radius - 1.0).max(0.0) as i32;
        let x1 = (cx + radius + 1.0).min(self.width as f32) as i32;
        let y1 = (cy + radius + 1.0).min(self.height as f32) as i32;

        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let d2 = dx * dx + dy * dy;

                if paint.anti_alias {
                    let d = d2.sqrt();
                    if d <= radius + 0.5 {
                        let coverage = (radius + 0.5 - d).min(1.0);
                        self.set_pixel_aa(x, y, paint.color, coverage);
                    }
                } else if d2 <= r2 {
                    self.set_pixel(x, y, paint.color);
                }
            }
        }
    }

    /// 绘制线段（分割线等）
    pub fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint) {
        let x0 = (x0 + self.translation.0) as i32;
        let y0 = (y0 + self.translation.1) as i32;
        let x1 = (x1 + self.translation.0) as i32;
        let y1 = (y1 + self.translation.1) as i32;
        self.draw_line_bresenham(x0, y0, x1, y1, paint);
    }

    /// Bresenham 直线算法
    fn draw_line_bresenham(&mut self, mut x0: i32, mut y0: i32, x1: i32, y1: i32, paint: &Paint) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x0, y0, paint.color);
            if x0 == x1 && y0 == y1 { break; }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// 绘制路径
    pub fn draw_path(&mut self, path: &Path, paint: &Paint) {
        let mut contours = path.flatten(1.0);

        // Apply translation
        let tx = self.translation.0;
        let ty = self.translation.1;
        if tx != 0.0 || ty != 0.0 {
            for contour in &mut contours {
                for p in contour {
                    p.x += tx;
                    p.y += ty;
                }
            }
        }

        match paint.style {
            PaintStyle::Fill => self.fill_path(&contours, paint),
            PaintStyle::Stroke => self.stroke_path(&contours, paint),
            PaintStyle::FillAndStroke => {
                self.fill_path(&contours, paint);
                self.stroke_path(&contours, paint);
            }
        }
    }

    /// 某条扫描线与所有轮廓的交点
    fn scanline_intersections(contours: &[Vec<Point>], scan_y: f32) -> Vec<f32> {
        let mut intersections = Vec::new();
        for contour in contours {
            for i in 0..contour.len() {
                let p0 = &contour[i];
                let p1 = &contour[(i + 1) % contour.len()];

                if (p0.y <= scan_y && p1.y > scan_y) || (p1.y <= scan_y && p0.y > scan_y) {
                    let t = (scan_y - p0.y) / (p1.y - p0.y);
                    intersections.push(p0.x + t * (p1.x - p0.x));
                }
            }
        }
        intersections.sort_by(|a, b| a.partial_cmp(b).unwrap());
        intersections
    }

    /// 填充路径（扫描线算法，支持抗锯齿）
    fn fill_path(&mut self, contours: &[Vec<Point>], paint: &Paint) {
        if contours.is_empty() { return; }

        // 找边界
        let mut min_y = f32::MAX;
        let mut max_y = f32::MIN;
        for contour in contours {
            for p in contour {
                min_y = min_y.min(p.y);
                max_y = max_y.max(p.y);
            }
        }

        let y0 = (min_y - 1.0).floor() as i32;
        let y1 = (max_y + 1.0).ceil() as i32;

        let sub_samples = if paint.anti_alias { 4 } else { 1 };

        for y in y0..=y1 {
            let mut rows: Vec<Vec<f32>> = Vec::with_capacity(sub_samples);
            let mut x_min = f32::MAX;
            let mut x_max = f32::MIN;

            for sub in 0..sub_samples {
                let scan_y = y as f32 + (sub as f32 + 0.5) / sub_samples as f32;
                let intersections = Self::scanline_intersections(contours, scan_y);
                for &x in &intersections {
                    x_min = x_min.min(x);
                    x_max = x_max.max(x);
                }
                rows.push(intersections);
            }

            if x_min > x_max { continue; }

            let px0 = (x_min - 1.0).floor() as i32;
            let px1 = (x_max + 1.0).ceil() as i32;

            for x in px0..=px1 {
                let pixel_left = x as f32;
                let pixel_right = pixel_left + 1.0;
                let mut coverage = 0.0;

                // 每条子扫描线上该像素被 [左交点, 右交点] 区间覆盖的比例
                for intersections in &rows {
                    for pair in intersections.chunks(2) {
                        if pair.len() == 2 {
                            let overlap = pixel_right.min(pair[1]) - pixel_left.max(pair[0]);
                            if overlap > 0.0 {
                                coverage += overlap.min(1.0);
                            }
                        }
                    }
                }

                coverage /= sub_samples as f32;
                if coverage > 0.0 {
                    self.set_pixel_aa(x, y, paint.color, coverage.min(1.0));
                }
            }
        }
    }

    /// 描边路径
    fn stroke_path(&mut self, contours: &[Vec<Point>], paint: &Paint) {
        for contour in contours {
            for i in 0..contour.len().saturating_sub(1) {
                self.draw_line_bresenham(
                    contour[i].x as i32, contour[i].y as i32,
                    contour[i + 1].x as i32, contour[i + 1].y as i32,
                    paint
                );
            }
        }
    }

    /// 导出为 RGBA 字节数组
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity((self.width * self.height * 4) as usize);
        for pixel in &self.pixels {
            data.push(pixel.r);
            data.push(pixel.g);
            data.push(pixel.b);
            data.push(pixel.a);
        }
        data
    }

    /// 保存为 PNG
    pub fn save_png(&self, path: &str) -> Result<(), String> {
        use image::{ImageBuffer, Rgba};

        let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(
            self.width,
            self.height,
            self.to_rgba()
        ).ok_or("Failed to create image buffer")?;

        img.save(path).map_err(|e| e.to_string())
    }
}
