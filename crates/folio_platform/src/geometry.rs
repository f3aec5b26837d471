//! Read-only access to page geometry

use folio_core::{Rect, ViewportSnapshot};

/// Captures the current viewport
pub trait ViewportSource {
    fn snapshot(&self) -> ViewportSnapshot;
}

/// Looks up anchor elements by id
pub trait AnchorGeometry {
    /// Bounding rect of the element with id `anchor`, in viewport
    /// coordinates, or `None` if no such element exists
    fn bounding_rect(&self, anchor: &str) -> Option<Rect>;
}

impl<T: AnchorGeometry + ?Sized> AnchorGeometry for &T {
    fn bounding_rect(&self, anchor: &str) -> Option<Rect> {
        (**self).bounding_rect(anchor)
    }
}
