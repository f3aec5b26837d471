//! Current theme

use folio_core::{Store, Subscription};

use crate::scheme::{ColorScheme, ThemeMode};
use crate::tokens::ColorTokens;

/// The scheme in effect, shared by every part of the page
///
/// Clones share state. Changes are not persisted anywhere.
#[derive(Clone, Debug)]
pub struct ThemeState {
    scheme: Store<ColorScheme>,
}

impl ThemeState {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme: Store::new(scheme),
        }
    }

    /// Initial state from configuration and host preference
    pub fn resolve(mode: ThemeMode, prefers_dark: bool) -> Self {
        let scheme = mode.resolve(prefers_dark);
        tracing::info!("theme: {} (mode {:?}, prefers dark: {})", scheme, mode, prefers_dark);
        Self::new(scheme)
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.scheme().is_dark()
    }

    pub fn set_scheme(&self, scheme: ColorScheme) {
        if self.scheme() != scheme {
            tracing::debug!("theme: switching to {}", scheme);
            self.scheme.set(scheme);
        }
    }

    /// Flip between light and dark, returning the new scheme
    pub fn toggle(&self) -> ColorScheme {
        let next = self.scheme().toggled();
        self.set_scheme(next);
        next
    }

    pub fn tokens(&self) -> ColorTokens {
        ColorTokens::for_scheme(self.scheme())
    }

    /// Class for the document root; `dark` enables dark styles
    pub fn root_class(&self) -> Option<&'static str> {
        self.is_dark().then_some("dark")
    }

    /// Glyph on the toggle button: a sun offers to leave dark mode,
    /// a moon offers to enter it
    pub fn toggle_icon(&self) -> &'static str {
        match self.scheme() {
            ColorScheme::Dark => "☀️",
            ColorScheme::Light => "🌙",
        }
    }

    pub fn toggle_label(&self) -> String {
        format!("Switch to {} theme", self.scheme().toggled())
    }

    /// Observe scheme changes until the guard is dropped
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(ColorScheme) + 'static,
    {
        self.scheme.subscribe(move |scheme| callback(*scheme))
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ColorScheme::default())
    }
}
