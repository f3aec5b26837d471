//! Viewport snapshots
//!
//! The host's scroll offset and page dimensions are ambient state. Folio
//! never reads them directly; backends capture a [`ViewportSnapshot`] and
//! pass it into whatever needs to recompute, which keeps that code testable
//! without a rendering environment.

use serde::{Deserialize, Serialize};

/// Read-only capture of the viewport at one instant
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    /// Distance scrolled from the top of the document
    pub scroll_top: f64,
    /// Height of the visible area
    pub viewport_height: f64,
    /// Full scroll height of the document
    pub document_height: f64,
}

impl ViewportSnapshot {
    pub fn new(scroll_top: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_top,
            viewport_height,
            document_height,
        }
    }

    /// Scrollable distance. Zero or negative when the document is shorter
    /// than the viewport.
    pub fn max_scroll(&self) -> f64 {
        self.document_height - self.viewport_height
    }

    /// The same snapshot scrolled to `scroll_top`
    pub fn scrolled_to(&self, scroll_top: f64) -> Self {
        Self {
            scroll_top,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_scroll() {
        assert_eq!(ViewportSnapshot::new(0.0, 800.0, 3000.0).max_scroll(), 2200.0);
        assert!(ViewportSnapshot::new(0.0, 800.0, 600.0).max_scroll() < 0.0);
    }
}
