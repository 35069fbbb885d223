use glam::{Mat4, Vec3, Vec4};
use super::*;

fn ndc(m: &Mat4, p: Vec3) -> Vec3 {
    let clip = *m * p.extend(1.0);
    clip.truncate() / clip.w
}

// ============================================================================
// perspective_off_center
// ============================================================================

#[test]
fn test_perspective_symmetric_matches_glam() {
    let fov_y = std::f32::consts::FRAC_PI_3;
    let aspect = 16.0 / 9.0;
    let (near, far) = (0.5, 200.0);
    let top = (fov_y * 0.5).tan() * near;
    let right = top * aspect;

    let ours = perspective_off_center(-right, right, -top, top, near, far);
    let reference = Mat4::perspective_rh_gl(fov_y, aspect, near, far);

    assert!(ours.abs_diff_eq(reference, 1e-5));
}

#[test]
fn test_perspective_maps_near_and_far_to_unit_range() {
    let m = perspective_off_center(-1.0, 1.0, -0.75, 0.75, 1.0, 100.0);

    assert!((ndc(&m, Vec3::new(0.0, 0.0, -1.0)).z + 1.0).abs() < 1e-5);
    assert!((ndc(&m, Vec3::new(0.0, 0.0, -100.0)).z - 1.0).abs() < 1e-4);
}

#[test]
fn test_perspective_off_center_maps_edges() {
    let m = perspective_off_center(-0.2, 0.6, -0.1, 0.3, 1.0, 50.0);

    let left_bottom = ndc(&m, Vec3::new(-0.2, -0.1, -1.0));
    let right_top = ndc(&m, Vec3::new(0.6, 0.3, -1.0));
    // Far-plane edge lies on the same ray as the near-plane edge
    let right_top_far = ndc(&m, Vec3::new(0.6 * 50.0, 0.3 * 50.0, -50.0));

    assert!((left_bottom.x + 1.0).abs() < 1e-5 && (left_bottom.y + 1.0).abs() < 1e-5);
    assert!((right_top.x - 1.0).abs() < 1e-5 && (right_top.y - 1.0).abs() < 1e-5);
    assert!((right_top_far.x - 1.0).abs() < 1e-4 && (right_top_far.y - 1.0).abs() < 1e-4);
}

// ============================================================================
// orthographic_off_center
// ============================================================================

#[test]
fn test_orthographic_maps_box_to_unit_cube() {
    let m = orthographic_off_center(-4.0, 2.0, -1.0, 3.0, 1.0, 11.0);

    let min = ndc(&m, Vec3::new(-4.0, -1.0, -1.0));
    let max = ndc(&m, Vec3::new(2.0, 3.0, -11.0));

    assert!(min.abs_diff_eq(Vec3::new(-1.0, -1.0, -1.0), 1e-5));
    assert!(max.abs_diff_eq(Vec3::new(1.0, 1.0, 1.0), 1e-5));
    // No perspective: w stays 1
    assert_eq!((m * Vec4::new(1.0, 1.0, -5.0, 1.0)).w, 1.0);
}

// ============================================================================
// to_native_depth_range
// ============================================================================

#[test]
fn test_native_perspective_depth_is_zero_to_one() {
    let (near, far) = (1.0, 100.0);
    let gl = perspective_off_center(-1.0, 1.0, -1.0, 1.0, near, far);
    let native = to_native_depth_range(&gl, ProjectionMode::Perspective, near, far);

    assert!(ndc(&native, Vec3::new(0.0, 0.0, -near)).z.abs() < 1e-5);
    assert!((ndc(&native, Vec3::new(0.0, 0.0, -far)).z - 1.0).abs() < 1e-5);
    // x/y rows untouched
    assert_eq!(native.x_axis, gl.x_axis);
    assert_eq!(native.row(3), gl.row(3));
}

#[test]
fn test_native_orthographic_depth_is_zero_to_one() {
    let (near, far) = (2.0, 12.0);
    let gl = orthographic_off_center(-1.0, 1.0, -1.0, 1.0, near, far);
    let native = to_native_depth_range(&gl, ProjectionMode::Orthographic, near, far);

    assert!(ndc(&native, Vec3::new(0.0, 0.0, -near)).z.abs() < 1e-6);
    assert!((ndc(&native, Vec3::new(0.0, 0.0, -far)).z - 1.0).abs() < 1e-6);
    assert!((ndc(&native, Vec3::new(0.0, 0.0, -7.0)).z - 0.5).abs() < 1e-6);
}

// ============================================================================
// ProjectionResult
// ============================================================================

#[test]
fn test_classify_ndc() {
    assert_eq!(ProjectionResult::classify_ndc(0.0, 0.0, 0.0), ProjectionResult::InsideFrustum);
    assert_eq!(ProjectionResult::classify_ndc(1.0, -1.0, 1.0), ProjectionResult::InsideFrustum);
    assert_eq!(ProjectionResult::classify_ndc(0.0, 0.0, 1.5), ProjectionResult::OutsideFarClip);
    assert_eq!(ProjectionResult::classify_ndc(1.2, 0.0, 0.0), ProjectionResult::OutsideFrustum);
    assert_eq!(ProjectionResult::classify_ndc(0.0, -1.01, 0.0), ProjectionResult::OutsideFrustum);
    // Far clip wins over side planes
    assert_eq!(ProjectionResult::classify_ndc(5.0, 0.0, 2.0), ProjectionResult::OutsideFarClip);
}

#[test]
fn test_projection_mode_default_is_perspective() {
    assert_eq!(ProjectionMode::default(), ProjectionMode::Perspective);
    assert!(ProjectionResult::InsideFrustum.is_inside());
    assert!(!ProjectionResult::OutsideNearClip.is_inside());
}
