/// Viewport: where on the render target a camera draws, and which slice
/// of the depth buffer it writes.

use glam::Vec2;

/// Sub-rectangle of the render target in normalized [0, 1]² screen space.
///
/// Origin is the top-left corner, Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ViewportRect {
    /// The whole render target.
    pub const FULL: ViewportRect = ViewportRect { min: Vec2::ZERO, max: Vec2::ONE };

    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Non-empty and inside [0, 1]².
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
            && self.min.cmpge(Vec2::ZERO).all()
            && self.max.cmple(Vec2::ONE).all()
    }
}

impl Default for ViewportRect {
    fn default() -> Self {
        Self::FULL
    }
}

/// Portion of the depth buffer a camera is allowed to write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthRange {
    pub min: f32,
    pub max: f32,
}

impl DepthRange {
    pub const FULL: DepthRange = DepthRange { min: 0.0, max: 1.0 };

    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Ordered and inside [0, 1].
    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.min)
            && (0.0..=1.0).contains(&self.max)
            && self.min <= self.max
    }
}

impl Default for DepthRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// Pixel-space viewport handed to the graphics device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Resolve a normalized rectangle and depth range against a render
    /// target of `target_size` pixels.
    pub fn from_normalized(rect: &ViewportRect, depth: &DepthRange, target_size: Vec2) -> Self {
        Self {
            x: rect.min.x * target_size.x,
            y: rect.min.y * target_size.y,
            width: rect.width() * target_size.x,
            height: rect.height() * target_size.y,
            min_depth: depth.min,
            max_depth: depth.max,
        }
    }
}

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod tests;
