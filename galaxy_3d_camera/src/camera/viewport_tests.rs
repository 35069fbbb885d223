use glam::Vec2;
use super::*;

// ============================================================================
// ViewportRect
// ============================================================================

#[test]
fn test_viewport_rect_default_is_full() {
    let rect = ViewportRect::default();

    assert_eq!(rect, ViewportRect::FULL);
    assert_eq!(rect.width(), 1.0);
    assert_eq!(rect.height(), 1.0);
    assert!(rect.is_valid());
}

#[test]
fn test_viewport_rect_validity() {
    assert!(ViewportRect::new(Vec2::new(0.5, 0.0), Vec2::new(1.0, 0.5)).is_valid());
    assert!(!ViewportRect::new(Vec2::new(0.5, 0.5), Vec2::new(0.5, 1.0)).is_valid());
    assert!(!ViewportRect::new(Vec2::new(-0.1, 0.0), Vec2::new(1.0, 1.0)).is_valid());
    assert!(!ViewportRect::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.2)).is_valid());
}

// ============================================================================
// DepthRange
// ============================================================================

#[test]
fn test_depth_range_validity() {
    assert!(DepthRange::default().is_valid());
    assert!(DepthRange::new(0.0, 0.0).is_valid());
    assert!(!DepthRange::new(0.8, 0.2).is_valid());
    assert!(!DepthRange::new(0.0, 1.5).is_valid());
}

// ============================================================================
// Viewport::from_normalized
// ============================================================================

#[test]
fn test_viewport_full_target() {
    let vp = Viewport::from_normalized(
        &ViewportRect::FULL,
        &DepthRange::FULL,
        Vec2::new(1920.0, 1080.0),
    );

    assert_eq!(vp.x, 0.0);
    assert_eq!(vp.y, 0.0);
    assert_eq!(vp.width, 1920.0);
    assert_eq!(vp.height, 1080.0);
    assert_eq!(vp.min_depth, 0.0);
    assert_eq!(vp.max_depth, 1.0);
}

#[test]
fn test_viewport_split_screen_right_half() {
    let rect = ViewportRect::new(Vec2::new(0.5, 0.0), Vec2::new(1.0, 1.0));
    let vp = Viewport::from_normalized(&rect, &DepthRange::new(0.0, 0.5), Vec2::new(800.0, 600.0));

    assert_eq!(vp.x, 400.0);
    assert_eq!(vp.width, 400.0);
    assert_eq!(vp.height, 600.0);
    assert_eq!(vp.max_depth, 0.5);
}
