//! Folio Platform Abstraction Layer
//!
//! Folio's widgets never touch the host environment directly. Everything
//! they need from it goes through the traits in this crate:
//!
//! - [`TimerHost`] - one-shot timers ("call me back in N ms") and cancellation
//! - [`ViewportSource`] - a [`ViewportSnapshot`](folio_core::ViewportSnapshot) of the current scroll state
//! - [`AnchorGeometry`] - bounding rects of section anchors in viewport space
//! - [`ViewportEvents`] - scroll/resize notifications with scoped subscriptions
//! - [`Platform`] - the bundle of the above plus scroll requests and theme hints
//!
//! # Platform Implementations
//!
//! - [`HeadlessPlatform`] - in-memory page with a manually advanced clock, used
//!   by tests and the CLI
//! - `folio_platform_web` - the browser, through `web-sys` (wasm32 only)
//!
//! # Example
//!
//! ```rust
//! use folio_platform::{HeadlessPlatform, TimerHost};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let platform = HeadlessPlatform::new(800.0);
//! let fired = Rc::new(Cell::new(false));
//!
//! let fired_clone = fired.clone();
//! platform.schedule(80, Box::new(move || fired_clone.set(true)));
//!
//! platform.advance(79);
//! assert!(!fired.get());
//! platform.advance(1);
//! assert!(fired.get());
//! ```

mod error;
mod event;
mod geometry;
mod headless;
mod platform;
mod timer;

pub use error::{PlatformError, Result};
pub use event::{ScrollRequest, ViewportEvent, ViewportEvents, ViewportHandler};
pub use geometry::{AnchorGeometry, ViewportSource};
pub use headless::HeadlessPlatform;
pub use platform::Platform;
pub use timer::{TimerCallback, TimerHost, TimerId};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AnchorGeometry, HeadlessPlatform, Platform, ScrollRequest, TimerHost, TimerId,
        ViewportEvent, ViewportEvents, ViewportSource,
    };
}
