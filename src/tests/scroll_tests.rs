//! 分页滚动控制器测试

use crate::pager::PagedScrollController;

const PAGE_WIDTH: f32 = 375.0;

fn make_scroll(page_count: usize) -> PagedScrollController {
    PagedScrollController::new(PAGE_WIDTH, page_count)
}

/// 推进回弹动画直到停稳，返回停稳的页
fn run_settle(scroll: &mut PagedScrollController) -> Option<usize> {
    let mut settled = None;
    for _ in 0..1000 {
        let (animating, page) = scroll.update(1.0 / 60.0);
        if page.is_some() {
            settled = page;
        }
        if !animating && settled.is_some() {
            break;
        }
        if !animating && page.is_none() {
            break;
        }
    }
    settled
}

/// 缓慢拖动：时间拉长，释放速度低于轻扫阈值
fn slow_drag(scroll: &mut PagedScrollController, from_x: f32, to_x: f32) {
    scroll.begin_drag(from_x, 0);
    scroll.update_drag((from_x + to_x) / 2.0, 500);
    scroll.update_drag(to_x, 1000);
    scroll.end_drag();
}

/// 测试拖过中点后停稳到下一页
#[test]
fn test_drag_past_midpoint_advances_page() {
    let mut scroll = make_scroll(3);

    // 向左拖超过半页宽
    slow_drag(&mut scroll, 300.0, 300.0 - PAGE_WIDTH * 0.6);

    assert_eq!(scroll.target_page(), 1);
    assert_eq!(run_settle(&mut scroll), Some(1));
    assert!((scroll.position() - PAGE_WIDTH).abs() < 0.01);
}

/// 测试未过中点松手回弹到原页
#[test]
fn test_drag_before_midpoint_reverts() {
    let mut scroll = make_scroll(3);

    slow_drag(&mut scroll, 300.0, 300.0 - PAGE_WIDTH * 0.3);

    assert_eq!(scroll.target_page(), 0);
    assert_eq!(run_settle(&mut scroll), Some(0));
    assert!(scroll.position().abs() < 0.01);
}

/// 测试快速轻扫即使位移不大也换页
#[test]
fn test_flick_advances_page() {
    let mut scroll = make_scroll(3);

    // 32ms 内移动 60px，速度远超阈值
    scroll.begin_drag(300.0, 0);
    scroll.update_drag(270.0, 16);
    scroll.update_drag(240.0, 32);
    scroll.end_drag();

    assert_eq!(scroll.target_page(), 1);
}

/// 测试反向轻扫回到上一页
#[test]
fn test_flick_back_goes_previous_page() {
    let mut scroll = make_scroll(3);
    scroll.snap_to_page(2);

    scroll.begin_drag(100.0, 0);
    scroll.update_drag(130.0, 16);
    scroll.update_drag(160.0, 32);
    scroll.end_drag();

    assert_eq!(scroll.target_page(), 1);
}

/// 测试第一页向前拖会被橡皮筋拉住并回弹
#[test]
fn test_rubber_band_at_first_page() {
    let mut scroll = make_scroll(3);

    scroll.begin_drag(100.0, 0);
    scroll.update_drag(100.0 + PAGE_WIDTH, 500);

    // 位移被橡皮筋衰减，不会到达 -页宽
    assert!(scroll.position() < 0.0);
    assert!(scroll.position() > -PAGE_WIDTH);

    scroll.end_drag();
    assert_eq!(run_settle(&mut scroll), Some(0));
    assert!(scroll.position().abs() < 0.01);
}

/// 测试最后一页不能再往后翻
#[test]
fn test_last_page_clamped() {
    let mut scroll = make_scroll(2);
    scroll.snap_to_page(1);

    slow_drag(&mut scroll, 300.0, 300.0 - PAGE_WIDTH * 0.8);

    assert_eq!(scroll.target_page(), 1);
}

/// 测试外部动画翻页会打断进行中的拖拽
#[test]
fn test_animate_to_page_cancels_drag() {
    let mut scroll = make_scroll(3);

    scroll.begin_drag(300.0, 0);
    scroll.update_drag(250.0, 100);
    assert!(scroll.is_dragging);

    scroll.animate_to_page(2);
    assert!(!scroll.is_dragging);
    assert_eq!(run_settle(&mut scroll), Some(2));
    assert!((scroll.position() - 2.0 * PAGE_WIDTH).abs() < 0.01);
}

/// 测试 snap 不播放动画直接就位
#[test]
fn test_snap_to_page_is_immediate() {
    let mut scroll = make_scroll(3);
    scroll.snap_to_page(2);

    assert!(!scroll.is_animating());
    assert!((scroll.position() - 2.0 * PAGE_WIDTH).abs() < 0.01);
    assert_eq!(scroll.fraction(), 2.0);
}

/// 测试页数变化后位置被夹取回有效范围
#[test]
fn test_configure_clamps_page() {
    let mut scroll = make_scroll(5);
    scroll.snap_to_page(4);

    scroll.configure(PAGE_WIDTH, 2);
    assert_eq!(scroll.target_page(), 1);
    assert!((scroll.position() - PAGE_WIDTH).abs() < 0.01);
}

/// 测试空页集不崩溃
#[test]
fn test_empty_pages() {
    let mut scroll = make_scroll(0);
    scroll.begin_drag(100.0, 0);
    scroll.update_drag(50.0, 100);
    scroll.end_drag();
    assert_eq!(scroll.position(), 0.0);
    assert_eq!(scroll.fraction(), 0.0);
}
