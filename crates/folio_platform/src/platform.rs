//! Platform trait

use crate::event::{ScrollRequest, ViewportEvents};
use crate::geometry::{AnchorGeometry, ViewportSource};
use crate::timer::TimerHost;

/// Everything a Folio page needs from its host
///
/// Implemented by each backend. Handles are cheap clones sharing one host.
pub trait Platform:
    TimerHost + ViewportSource + AnchorGeometry + ViewportEvents + Clone + 'static
{
    /// Backend name, e.g. "headless" or "web"
    fn name(&self) -> &'static str;

    /// Whether the user's system asks for a dark color scheme
    fn prefers_dark(&self) -> bool;

    /// Ask the host to scroll the document
    fn request_scroll(&self, request: ScrollRequest);
}
