use serde::{Deserialize, Serialize};
use std::fmt;

/// The scheme currently rendered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The scheme requested by configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the host's "prefers dark" setting
    #[default]
    System,
}

impl ThemeMode {
    /// Pick the initial scheme given the host preference
    pub fn resolve(self, prefers_dark: bool) -> ColorScheme {
        match self {
            Self::Light => ColorScheme::Light,
            Self::Dark => ColorScheme::Dark,
            Self::System if prefers_dark => ColorScheme::Dark,
            Self::System => ColorScheme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(ThemeMode::System.resolve(true), ColorScheme::Dark);
        assert_eq!(ThemeMode::System.resolve(false), ColorScheme::Light);
        assert_eq!(ThemeMode::Light.resolve(true), ColorScheme::Light);
        assert_eq!(ThemeMode::Dark.resolve(false), ColorScheme::Dark);
    }

    #[test]
    fn test_mode_from_toml() {
        #[derive(Deserialize)]
        struct Site {
            theme: ThemeMode,
        }
        let site: Site = toml::from_str(r#"theme = "dark""#).unwrap();
        assert_eq!(site.theme, ThemeMode::Dark);
    }
}
