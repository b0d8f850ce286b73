//! 画布与组件渲染测试

use crate::pager::{PagerOptions, TabsStrip};
use crate::pager::Indicator;
use crate::ui::{Component, Style, View};
use crate::{parse_color, Canvas, Color, Paint, PaintStyle, Rect};

/// 测试矩形填充写入对应像素
#[test]
fn test_fill_rect_pixels() {
    let mut canvas = Canvas::new(20, 20);
    canvas.clear(Color::WHITE);

    let paint = Paint::new().with_color(Color::BLACK).with_style(PaintStyle::Fill);
    canvas.draw_rect(&Rect::new(5.0, 5.0, 10.0, 10.0), &paint);

    assert_eq!(canvas.get_pixel(10, 10), Color::BLACK);
    assert_eq!(canvas.get_pixel(2, 2), Color::WHITE);
    assert_eq!(canvas.get_pixel(16, 16), Color::WHITE);
}

/// 测试裁剪区域之外不落笔
#[test]
fn test_clip_rect_masks_drawing() {
    let mut canvas = Canvas::new(20, 20);
    canvas.clear(Color::WHITE);

    canvas.save();
    canvas.clip_rect(Rect::new(0.0, 0.0, 10.0, 20.0));
    let paint = Paint::new().with_color(Color::BLACK).with_style(PaintStyle::Fill);
    canvas.draw_rect(&Rect::new(0.0, 0.0, 20.0, 20.0), &paint);
    canvas.restore();

    assert_eq!(canvas.get_pixel(5, 5), Color::BLACK);
    assert_eq!(canvas.get_pixel(15, 5), Color::WHITE);

    // restore 之后不再受裁剪影响
    canvas.draw_rect(&Rect::new(14.0, 0.0, 4.0, 4.0), &paint);
    assert_eq!(canvas.get_pixel(15, 2), Color::BLACK);
}

/// 测试平移影响绘制位置
#[test]
fn test_translate() {
    let mut canvas = Canvas::new(20, 20);
    canvas.clear(Color::WHITE);

    canvas.save();
    canvas.translate(10.0, 0.0);
    let paint = Paint::new().with_color(Color::BLACK).with_style(PaintStyle::Fill);
    canvas.draw_rect(&Rect::new(0.0, 0.0, 5.0, 5.0), &paint);
    canvas.restore();

    assert_eq!(canvas.get_pixel(12, 2), Color::BLACK);
    assert_eq!(canvas.get_pixel(2, 2), Color::WHITE);
}

/// 测试指示条只在选中态绘制
#[test]
fn test_indicator_renders_only_when_selected() {
    let mut indicator = Indicator::new(Color::from_hex(0x007AFF));
    indicator.set_frame(Rect::new(0.0, 41.0, 100.0, 3.0));

    let mut canvas = Canvas::new(120, 50);
    canvas.clear(Color::WHITE);
    indicator.render(&mut canvas);
    assert_eq!(canvas.get_pixel(50, 42), Color::WHITE);

    indicator.set_selected(true);
    indicator.render(&mut canvas);
    assert_eq!(canvas.get_pixel(50, 42), Color::from_hex(0x007AFF));
}

/// 测试设置相同颜色不触发重绘标记
#[test]
fn test_indicator_color_equality_skips_repaint() {
    let mut indicator = Indicator::new(Color::from_hex(0x007AFF));
    indicator.take_needs_repaint();

    indicator.set_color(Color::from_hex(0x007AFF));
    assert!(!indicator.take_needs_repaint());

    indicator.set_color(Color::from_hex(0xFF3B30));
    assert!(indicator.take_needs_repaint());
    assert_eq!(indicator.color(), Color::from_hex(0xFF3B30));
}

/// 测试颜色字符串解析
#[test]
fn test_parse_color() {
    assert_eq!(parse_color("#FF8000"), Some(Color::new(255, 128, 0, 255)));
    assert_eq!(parse_color("ff8000"), Some(Color::new(255, 128, 0, 255)));
    assert_eq!(parse_color("#FF800080"), Some(Color::new(255, 128, 0, 128)));
    assert_eq!(parse_color("#FFF"), None);
    assert_eq!(parse_color("not-a-color"), None);
}

/// 测试 alpha 混合：不透明目标上的半透明源
#[test]
fn test_color_blend() {
    let src = Color::new(0, 0, 0, 18);
    let dst = Color::WHITE;
    let out = src.blend(&dst);

    // (0*18 + 255*237) / 255 = 237
    assert_eq!(out, Color::new(237, 237, 237, 255));

    // 完全透明的源不改变目标
    assert_eq!(Color::TRANSPARENT.blend(&dst), dst);
    // 完全不透明的源直接覆盖
    assert_eq!(Color::BLACK.blend(&dst), Color::BLACK);
}

/// 测试矩形插值（指示条跟手动画的基础）
#[test]
fn test_rect_lerp() {
    let a = Rect::new(0.0, 40.0, 100.0, 3.0);
    let b = Rect::new(100.0, 40.0, 160.0, 3.0);

    let mid = a.lerp(&b, 0.5);
    assert_eq!(mid.x, 50.0);
    assert_eq!(mid.width, 130.0);

    assert_eq!(a.lerp(&b, 0.0), a);
    assert_eq!(a.lerp(&b, 1.0), b);
}

/// 测试圆角矩形路径填充：圆角处不落笔
#[test]
fn test_round_rect_path_fill() {
    let mut canvas = Canvas::new(20, 20);
    canvas.clear(Color::WHITE);

    let mut path = crate::Path::new();
    path.add_round_rect(2.0, 2.0, 16.0, 16.0, 4.0);
    let paint = Paint::new()
        .with_color(Color::BLACK)
        .with_style(PaintStyle::Fill)
        .with_anti_alias(false);
    canvas.draw_path(&path, &paint);

    // 中心被填充
    assert_eq!(canvas.get_pixel(10, 10), Color::BLACK);
    // 被圆角削掉的角落保持背景色
    assert_eq!(canvas.get_pixel(2, 2), Color::WHITE);
}

/// 测试组件树递归渲染子组件
#[test]
fn test_component_tree_renders_children() {
    use crate::ui::ComponentTree;

    let mut root = View::new()
        .with_frame(0.0, 0.0, 20.0, 20.0)
        .with_background(Color::WHITE);
    root.add_child(Box::new(
        View::new()
            .with_frame(5.0, 5.0, 5.0, 5.0)
            .with_background(Color::BLACK),
    ));

    let mut tree = ComponentTree::new();
    tree.set_root(Box::new(root));

    let mut canvas = Canvas::new(20, 20);
    tree.render(&mut canvas);

    assert_eq!(canvas.get_pixel(7, 7), Color::BLACK);
    assert_eq!(canvas.get_pixel(15, 15), Color::WHITE);
}

/// 测试标签栏渲染背景并高亮选中标签
#[test]
fn test_strip_render_highlights_active_tab() {
    let mut strip = TabsStrip::new();
    strip.style_mut().set_frame(Rect::new(0.0, 0.0, 300.0, 44.0));
    strip.style_mut().background_color = Some(Color::WHITE);
    strip.set_tabs(vec![
        (Box::new(View::new()) as Box<dyn Component>, 100.0),
        (Box::new(View::new()) as Box<dyn Component>, 100.0),
    ]);
    let mut options = PagerOptions::default();
    options.tab_offset = 0.0;
    strip.reload_layout(&options, 0);
    strip.set_active(1);

    let mut canvas = Canvas::new(300, 50);
    canvas.clear(Color::BLACK);
    strip.render(&mut canvas);

    // 非选中标签是背景白
    assert_eq!(canvas.get_pixel(50, 20), Color::WHITE);
    // 选中标签盖了一层淡色高亮
    assert_eq!(canvas.get_pixel(150, 20), Color::new(237, 237, 237, 255));
}

/// 测试样式的默认可见性与 bounds
#[test]
fn test_style_defaults() {
    let style = Style::default();
    assert!(style.visible);
    assert_eq!(style.opacity, 1.0);
    assert_eq!(style.bounds(), Rect::new(0.0, 0.0, 0.0, 0.0));
}
