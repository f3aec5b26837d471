//! Folio Theme System
//!
//! Light and dark color schemes for the portfolio page.
//!
//! - [`ThemeMode`] is what the site configuration asks for (`light`, `dark`
//!   or follow the `system`)
//! - [`ColorScheme`] is what is actually shown
//! - [`ColorTokens`] holds the palette for one scheme
//! - [`ThemeState`] tracks the current scheme, toggles it and lets other
//!   parts of the page subscribe to changes
//!
//! ```rust
//! use folio_theme::{ColorScheme, ThemeMode, ThemeState};
//!
//! let theme = ThemeState::resolve(ThemeMode::System, true);
//! assert_eq!(theme.scheme(), ColorScheme::Dark);
//! assert_eq!(theme.root_class(), Some("dark"));
//!
//! theme.toggle();
//! assert_eq!(theme.scheme(), ColorScheme::Light);
//! ```

mod scheme;
mod state;
mod tokens;

pub use scheme::{ColorScheme, ThemeMode};
pub use state::ThemeState;
pub use tokens::ColorTokens;
