//! 文本渲染模块 - 标签标题的测量与绘制

use crate::{Canvas, Color, Paint};
use fontdue::{Font, FontSettings, Metrics};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// 进程内共享的系统字体渲染器，首次访问时加载
static SHARED_RENDERER: Lazy<Mutex<Option<Arc<TextRenderer>>>> = Lazy::new(|| Mutex::new(None));

/// 文本渲染器
pub struct TextRenderer {
    /// 主字体
    main_font: Font,
    /// 回退字体（主字体缺字时使用）
    fallback_font: Option<Font>,
    /// 简单的字形缓存 (char, size_u32) -> (Metrics, Bitmap)
    /// 使用 Mutex 实现内部可变性，因为 draw 方法是 &self
    cache: Arc<Mutex<HashMap<(char, u32), (Metrics, Vec<u8>)>>>,
}

impl TextRenderer {
    /// 从字体数据创建
    pub fn from_bytes(font_data: &[u8]) -> Result<Self, String> {
        let settings = FontSettings {
            scale: 40.0,
            ..Default::default()
        };
        let font = Font::from_bytes(font_data, settings)
            .map_err(|e| e.to_string())?;
        Ok(Self {
            main_font: font,
            fallback_font: None,
            cache: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    /// 从文件路径加载字体
    pub fn from_file(path: &str) -> Result<Self, String> {
        let font_data = std::fs::read(path)
            .map_err(|e| format!("Failed to read font file: {}", e))?;
        Self::from_bytes(&font_data)
    }

    /// 加载系统字体（macOS / Linux）
    pub fn load_system_font() -> Result<Self, String> {
        let main_font_paths = [
            "/System/Library/Fonts/PingFang.ttc",
            "/System/Library/Fonts/Helvetica.ttc",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        ];

        let fallback_font_paths = [
            "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
            "/System/Library/Fonts/Hiragino Sans GB.ttc",
        ];

        let mut renderer: Option<TextRenderer> = None;
        for path in &main_font_paths {
            if Path::new(path).exists() {
                match Self::from_file(path) {
                    Ok(r) => {
                        println!("✅ Main font: {}", path);
                        renderer = Some(r);
                        break;
                    }
                    Err(_) => continue,
                }
            }
        }

        let mut renderer = renderer.ok_or("No main font found")?;

        for path in &fallback_font_paths {
            if Path::new(path).exists() {
                if let Ok(data) = std::fs::read(path) {
                    let settings = FontSettings {
                        scale: 40.0,
                        ..Default::default()
                    };
                    if let Ok(font) = Font::from_bytes(data.as_slice(), settings) {
                        println!("✅ Fallback font: {}", path);
                        renderer.fallback_font = Some(font);
                        break;
                    }
                }
            }
        }

        Ok(renderer)
    }

    /// 获取进程内共享的系统字体渲染器
    pub fn shared() -> Result<Arc<TextRenderer>, String> {
        let mut guard = SHARED_RENDERER.lock().unwrap();
        if let Some(renderer) = guard.as_ref() {
            return Ok(renderer.clone());
        }
        let renderer = Arc::new(Self::load_system_font()?);
        *guard = Some(renderer.clone());
        Ok(renderer)
    }

    /// 选择能渲染该字符的字体
    fn font_for(&self, ch: char) -> &Font {
        if self.main_font.lookup_glyph_index(ch) != 0 {
            return &self.main_font;
        }
        self.fallback_font.as_ref().unwrap_or(&self.main_font)
    }

    /// 渲染文本到画布
    pub fn draw_text(&self, canvas: &mut Canvas, text: &str, x: f32, y: f32, size: f32, paint: &Paint) {
        let mut cursor_x = x;
        let size_key = (size * 10.0) as u32; // 将 size 转换为整数 key，保留1位小数精度

        for ch in text.chars() {
            // 先尝试从缓存获取（快速路径）
            let cached_data = {
                let cache = self.cache.lock().unwrap();
                cache.get(&(ch, size_key)).cloned()
            };

            let (metrics, bitmap) = if let Some(data) = cached_data {
                data
            } else {
                // 缓存未命中，执行光栅化
                let (metrics, bitmap) = self.font_for(ch).rasterize(ch, size);
                let mut cache = self.cache.lock().unwrap();
                cache.insert((ch, size_key), (metrics, bitmap.clone()));
                (metrics, bitmap)
            };

            if metrics.width == 0 || metrics.height == 0 {
                cursor_x += metrics.advance_width;
                continue;
            }

            let glyph_x = cursor_x + metrics.xmin as f32;
            let glyph_y = y - metrics.height as f32 - metrics.ymin as f32;

            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let coverage = bitmap[gy * metrics.width + gx] as f32 / 255.0;

                    if coverage > 0.001 {
                        let px = (glyph_x + gx as f32).round() as i32;
                        let py = (glyph_y + gy as f32).round() as i32;

                        let alpha = (paint.color.a as f32 * coverage) as u8;
                        if alpha > 0 {
                            let color = Color::new(paint.color.r, paint.color.g, paint.color.b, alpha);
                            canvas.set_pixel(px, py, color);
                        }
                    }
                }
            }

            cursor_x += metrics.advance_width;
        }
    }

    /// 测量文本宽度
    pub fn measure_text(&self, text: &str, size: f32) -> f32 {
        let mut width = 0.0;
        for ch in text.chars() {
            width += self.font_for(ch).metrics(ch, size).advance_width;
        }
        width
    }

    /// 测量文本高度
    pub fn measure_height(&self, size: f32) -> f32 {
        let metrics = self.main_font.metrics('M', size);
        metrics.height as f32
    }
}
