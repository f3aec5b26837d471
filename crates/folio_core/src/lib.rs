//! Folio Core
//!
//! Foundational primitives shared by every Folio crate:
//!
//! - **Sections**: the fixed, ordered list of named page regions
//! - **Viewport**: read-only snapshots of scroll offset and page geometry
//! - **Geometry**: rectangles in viewport coordinates
//! - **Color**: RGBA colors used by theme tokens
//! - **Store**: single-threaded observable values with scoped subscriptions
//!
//! # Example
//!
//! ```rust
//! use folio_core::{SectionList, ViewportSnapshot};
//!
//! let sections = SectionList::from_names(["Hero", "About", "Contact"]).unwrap();
//! assert_eq!(sections.get("About").unwrap().anchor(), "about");
//!
//! let viewport = ViewportSnapshot::new(300.0, 800.0, 2000.0);
//! assert_eq!(viewport.max_scroll(), 1200.0);
//! ```

pub mod color;
pub mod error;
pub mod geometry;
pub mod section;
pub mod store;
pub mod viewport;

pub use color::Color;
pub use error::{CoreError, Result};
pub use geometry::Rect;
pub use section::{Section, SectionList};
pub use store::{Store, Subscription};
pub use viewport::ViewportSnapshot;
