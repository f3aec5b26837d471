//! Folio Application
//!
//! The portfolio page itself: content, `folio.toml` configuration and the
//! composition of the Folio widgets into one scrollable page.
//!
//! # Example
//!
//! ```rust
//! use folio_app::prelude::*;
//! use folio_platform::HeadlessPlatform;
//!
//! let platform = HeadlessPlatform::with_stacked_anchors(
//!     800.0,
//!     SECTIONS.iter().map(|name| (name.to_lowercase(), 800.0)),
//! );
//! let app = PortfolioApp::mount_default(platform.clone())?;
//!
//! platform.scroll_to(800.0);
//! assert_eq!(app.scroll_state().active_section.name(), "About");
//!
//! platform.advance(80);
//! assert_eq!(app.greeting().revealed(), "H");
//!
//! let html = app.to_html();
//! assert!(html.contains("id=\"about\""));
//! # Ok::<(), folio_app::FolioError>(())
//! ```

mod app;
mod config;
mod content;
mod error;
mod page;

pub use app::{PageSnapshot, PortfolioApp, RenderMode};
pub use config::{FolioConfig, SiteConfig, TypingConfig, CONFIG_FILE};
pub use content::{Contact, Experience, Profile, Project, SECTIONS};
pub use error::{FolioError, Result};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::app::{PageSnapshot, PortfolioApp, RenderMode};
    pub use crate::config::FolioConfig;
    pub use crate::content::SECTIONS;
    pub use crate::error::{FolioError, Result};

    pub use folio_layout::prelude::*;
    pub use folio_platform::{Platform, ScrollRequest};
    pub use folio_theme::{ColorScheme, ThemeMode};
}
