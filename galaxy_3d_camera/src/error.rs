//! Error types for the Galaxy3D camera
//!
//! Camera queries never fail: their outcomes are reported through
//! classification enums (`ProjectionResult`, `FrustumTest`). These errors
//! only come out of the validated construction path (`Camera::from_desc`).

use std::fmt;

/// Result type for Galaxy3D camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D camera configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// View plane rectangle has zero or negative width/height
    InvalidViewPlane(String),

    /// Clip distances do not satisfy 0 < near < far
    InvalidClipPlanes(String),

    /// Aspect ratio is zero, negative or not finite
    InvalidAspectRatio(String),

    /// Normalized viewport is empty or outside [0, 1]
    InvalidViewport(String),

    /// Depth range is outside [0, 1] or inverted
    InvalidDepthRange(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidViewPlane(msg) => write!(f, "Invalid view plane: {}", msg),
            Error::InvalidClipPlanes(msg) => write!(f, "Invalid clip planes: {}", msg),
            Error::InvalidAspectRatio(msg) => write!(f, "Invalid aspect ratio: {}", msg),
            Error::InvalidViewport(msg) => write!(f, "Invalid viewport: {}", msg),
            Error::InvalidDepthRange(msg) => write!(f, "Invalid depth range: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
