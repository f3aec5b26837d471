//! Viewport events

use folio_core::Subscription;
use std::rc::Rc;

/// Notifications that invalidate anything derived from the viewport
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportEvent {
    /// The document was scrolled
    Scroll,
    /// The viewport changed size
    Resize,
}

/// Handler invoked for every viewport event
pub type ViewportHandler = Rc<dyn Fn(ViewportEvent)>;

/// Source of scroll/resize notifications
pub trait ViewportEvents {
    /// Listen for viewport events until the returned guard is dropped
    #[must_use = "dropping the subscription removes the listener"]
    fn subscribe_viewport(&self, handler: ViewportHandler) -> Subscription;
}

/// A scroll the page asks the host to perform
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollRequest {
    /// Smooth scroll back to the top of the document
    Top,
    /// Jump to the element with this id
    Anchor(String),
}
