//! 分页控件演示窗口

use mini_pager::event::{Event as UiEvent, TapEvent, TouchEvent};
use mini_pager::text::TextRenderer;
use mini_pager::ui::{Component, Label, View};
use mini_pager::{
    parse_color, Canvas, Color, PagerComponent, PagerController, PagerDataSource, PagerDelegate,
    PagerOptions, Rect,
};
use serde::Deserialize;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowAttributes, WindowId};

const LOGICAL_WIDTH: u32 = 375;
const LOGICAL_HEIGHT: u32 = 667;

/// pager.json 配置结构
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DemoConfig {
    #[serde(default)]
    options: PagerOptions,
    #[serde(default)]
    indicator_color: String,
    tabs: Vec<DemoTab>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DemoTab {
    title: String,
    #[serde(default)]
    color: String,
}

/// 配置驱动的数据源：标签标题 + 每页一块纯色内容
struct DemoDataSource {
    tabs: Vec<DemoTab>,
    text: Arc<TextRenderer>,
}

impl PagerDataSource for DemoDataSource {
    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn tab_view(&self, index: usize) -> Box<dyn Component> {
        let title = self.tabs.get(index).map(|t| t.title.as_str()).unwrap_or("");
        Box::new(
            Label::new(title, self.text.clone())
                .with_font_size(15.0)
                .with_color(Color::from_hex(0x333333)),
        )
    }

    fn tab_width(&self, index: usize) -> f32 {
        let title = self.tabs.get(index).map(|t| t.title.as_str()).unwrap_or("");
        // 标题宽度加左右留白
        self.text.measure_text(title, 15.0) + 32.0
    }

    fn content_view(&self, index: usize) -> Option<Box<dyn Component>> {
        let tab = self.tabs.get(index)?;
        let color = parse_color(&tab.color).unwrap_or(Color::WHITE);
        Some(Box::new(View::new().with_background(color)))
    }
}

/// 打印选中变化并提供指示条颜色
struct DemoDelegate {
    tabs: Vec<DemoTab>,
    indicator_color: Option<Color>,
}

impl PagerDelegate for DemoDelegate {
    fn did_change_tab(&self, index: usize) {
        let title = self.tabs.get(index).map(|t| t.title.as_str()).unwrap_or("?");
        println!("👆 Tab -> {} ({})", title, index);
    }

    fn color_for_component(&self, component: PagerComponent, _default: Color) -> Option<Color> {
        match component {
            PagerComponent::Indicator => self.indicator_color,
            _ => None,
        }
    }
}

struct PagerWindow {
    window: Option<Arc<Window>>,
    surface: Option<softbuffer::Surface<Arc<Window>, Arc<Window>>>,
    canvas: Canvas,
    pager: PagerController,
    // 数据源和委托都是弱引用，宿主负责持有
    _data_source: Arc<dyn PagerDataSource>,
    _delegate: Arc<dyn PagerDelegate>,
    mouse_pos: (f32, f32),
    mouse_down: bool,
    click_start_pos: (f32, f32),
    click_start_time: Instant,
    last_frame: Instant,
}

impl PagerWindow {
    fn new() -> Result<Self, String> {
        let config: DemoConfig = serde_json::from_str(include_str!("../../demo-app/pager.json"))
            .map_err(|e| format!("Failed to parse pager.json: {}", e))?;
        println!("📱 Pager config loaded: {} tabs", config.tabs.len());
        for tab in &config.tabs {
            println!("   - {}", tab.title);
        }

        let text = TextRenderer::shared()?;

        let data_source: Arc<dyn PagerDataSource> = Arc::new(DemoDataSource {
            tabs: config.tabs.clone(),
            text,
        });
        let delegate: Arc<dyn PagerDelegate> = Arc::new(DemoDelegate {
            tabs: config.tabs.clone(),
            indicator_color: parse_color(&config.indicator_color),
        });

        let mut pager = PagerController::new().with_options(config.options);
        pager.set_data_source(&data_source);
        pager.set_delegate(&delegate);
        pager.layout(Rect::new(0.0, 0.0, LOGICAL_WIDTH as f32, LOGICAL_HEIGHT as f32));
        pager.reload_data();
        pager.set_needs_reload_colors();

        Ok(Self {
            window: None,
            surface: None,
            canvas: Canvas::new(LOGICAL_WIDTH, LOGICAL_HEIGHT),
            pager,
            _data_source: data_source,
            _delegate: delegate,
            mouse_pos: (0.0, 0.0),
            mouse_down: false,
            click_start_pos: (0.0, 0.0),
            click_start_time: Instant::now(),
            last_frame: Instant::now(),
        })
    }

    fn timestamp_ms() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }

    /// 窗口物理坐标换算到逻辑坐标
    fn to_logical(&self, x: f64, y: f64) -> (f32, f32) {
        let Some(window) = &self.window else { return (x as f32, y as f32) };
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return (x as f32, y as f32);
        }
        (
            x as f32 * LOGICAL_WIDTH as f32 / size.width as f32,
            y as f32 * LOGICAL_HEIGHT as f32 / size.height as f32,
        )
    }

    fn render(&mut self) {
        self.canvas.clear(Color::WHITE);
        self.pager.render(&mut self.canvas);
    }

    /// 把逻辑分辨率画布就近采样放大到窗口缓冲
    fn present(&mut self) {
        let (Some(window), Some(surface)) = (&self.window, &mut self.surface) else { return };
        let size = window.inner_size();
        let (Some(win_width), Some(win_height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        surface.resize(win_width, win_height).ok();

        if let Ok(mut buffer) = surface.buffer_mut() {
            let pixels = self.canvas.pixels();
            for y in 0..size.height {
                let src_y = (y * LOGICAL_HEIGHT / size.height.max(1)).min(LOGICAL_HEIGHT - 1);
                for x in 0..size.width {
                    let src_x = (x * LOGICAL_WIDTH / size.width.max(1)).min(LOGICAL_WIDTH - 1);
                    let c = pixels[(src_y * LOGICAL_WIDTH + src_x) as usize];
                    buffer[(y * size.width + x) as usize] =
                        ((c.r as u32) << 16) | ((c.g as u32) << 8) | (c.b as u32);
                }
            }
            buffer.present().ok();
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for PagerWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attrs = WindowAttributes::default()
                .with_title("Mini Pager")
                .with_inner_size(winit::dpi::LogicalSize::new(LOGICAL_WIDTH, LOGICAL_HEIGHT));

            let window = Arc::new(event_loop.create_window(window_attrs).unwrap());
            let context = softbuffer::Context::new(window.clone()).unwrap();
            let surface = softbuffer::Surface::new(&context, window.clone()).unwrap();

            self.window = Some(window);
            self.surface = Some(surface);

            self.render();
            self.present();

            println!("\n🎮 Ready! 点标签或左右拖动换页，S 截图，R 重载\n");
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                match event.logical_key.as_ref() {
                    Key::Named(NamedKey::Escape) => event_loop.exit(),
                    Key::Character("s") => {
                        self.render();
                        match self.canvas.save_png("pager-demo.png") {
                            Ok(()) => println!("📸 Saved pager-demo.png"),
                            Err(e) => println!("⚠️ Screenshot failed: {}", e),
                        }
                    }
                    Key::Character("r") => {
                        self.pager.reload_data();
                        println!("🔄 Reloaded");
                        self.request_redraw();
                    }
                    Key::Character("c") => {
                        let center = !self.pager.options().center_current_tab;
                        self.pager.options_mut().center_current_tab = center;
                        self.pager.set_needs_reload_options();
                        println!("🎯 centerCurrentTab = {}", center);
                        self.request_redraw();
                    }
                    _ => {}
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_pos = self.to_logical(position.x, position.y);
                if self.mouse_down {
                    let (x, y) = self.mouse_pos;
                    self.pager.on_event(&UiEvent::TouchMove(TouchEvent::single(
                        x,
                        y,
                        Self::timestamp_ms(),
                    )));
                    self.request_redraw();
                }
            }

            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                let (x, y) = self.mouse_pos;
                match state {
                    ElementState::Pressed => {
                        self.mouse_down = true;
                        self.click_start_pos = (x, y);
                        self.click_start_time = Instant::now();
                        self.pager.on_event(&UiEvent::TouchStart(TouchEvent::single(
                            x,
                            y,
                            Self::timestamp_ms(),
                        )));
                    }
                    ElementState::Released => {
                        self.mouse_down = false;
                        self.pager.on_event(&UiEvent::TouchEnd(TouchEvent::single(
                            x,
                            y,
                            Self::timestamp_ms(),
                        )));

                        // 位移小且时间短算点击
                        let dx = (x - self.click_start_pos.0).abs();
                        let dy = (y - self.click_start_pos.1).abs();
                        if dx < 10.0 && dy < 10.0 && self.click_start_time.elapsed().as_millis() < 300 {
                            self.pager.on_event(&UiEvent::Tap(TapEvent {
                                x,
                                y,
                                timestamp: Self::timestamp_ms(),
                            }));
                        }
                        self.request_redraw();
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = now.duration_since(self.last_frame).as_secs_f32().min(0.05);
                self.last_frame = now;

                let animating = self.pager.update_animations(dt);
                self.render();
                self.present();

                if animating || self.mouse_down {
                    self.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 Mini Pager Demo\n");
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = PagerWindow::new()?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
