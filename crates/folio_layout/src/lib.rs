//! Folio Layout
//!
//! Page-level building blocks shared by every Folio page:
//!
//! - [`ScrollTracker`]: progress, active section and back-to-top state
//!   derived from the viewport, kept live by a [`ScrollBinding`]
//! - [`element`]: a retained element tree with a builder API
//! - [`html`]: serialisation of that tree to an HTML document
//! - [`NavBar`], [`SectionGuide`], [`typing_text`] and the fixed [`controls`]:
//!   the widgets built on top of the scroll, theme and reveal state

pub mod controls;
pub mod element;
pub mod guide;
pub mod html;
pub mod nav;
pub mod scroll_tracker;
pub mod typing;

pub use controls::{back_to_top, progress_bar, theme_toggle};
pub use element::{Element, Node};
pub use guide::SectionGuide;
pub use html::{render_document, DocumentHead};
pub use nav::NavBar;
pub use scroll_tracker::{
    resolve_active, scroll_progress, shows_top_affordance, ScrollBinding, ScrollState,
    ScrollTracker, ScrollTrackerConfig,
};
pub use typing::typing_text;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::element::{a, button, div, el, heading, p, section, span, text};
    pub use crate::{
        Element, NavBar, Node, ScrollBinding, ScrollState, ScrollTracker, ScrollTrackerConfig,
        SectionGuide,
    };
}
