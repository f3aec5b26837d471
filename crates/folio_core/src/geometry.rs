//! Rectangles in CSS pixel space
//!
//! Coordinates follow the DOM convention: `y` grows downward and a rect
//! reported for an anchor is relative to the top-left of the viewport.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A full-width band starting at `top` with the given height
    pub const fn band(top: f64, height: f64) -> Self {
        Self::new(0.0, top, 0.0, height)
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// The same rect shifted vertically by `dy`
    pub fn offset_y(&self, dy: f64) -> Self {
        Self {
            y: self.y + dy,
            ..*self
        }
    }

    /// Whether any part of the rect lies inside `0..viewport_height`
    pub fn intersects_viewport(&self, viewport_height: f64) -> bool {
        self.top() < viewport_height && self.bottom() > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::band(100.0, 50.0);
        assert_eq!(r.top(), 100.0);
        assert_eq!(r.bottom(), 150.0);
        assert_eq!(r.offset_y(-120.0).top(), -20.0);
    }

    #[test]
    fn test_intersects_viewport() {
        assert!(Rect::band(-20.0, 50.0).intersects_viewport(800.0));
        assert!(!Rect::band(-50.0, 50.0).intersects_viewport(800.0));
        assert!(!Rect::band(800.0, 50.0).intersects_viewport(800.0));
    }
}
