//! Site configuration (`folio.toml`)
//!
//! Every key is optional; a missing file or table falls back to the
//! built-in portfolio.
//!
//! ```toml
//! skills = ["Rust", "Python"]
//!
//! [site]
//! title = "Harsh Singh"
//! theme = "system"        # light | dark | system
//!
//! [scroll]
//! top_threshold = 400.0
//! activation_ratio = 0.45
//!
//! [typing]
//! default_delay_ms = 80
//! headline_delay_ms = 40
//!
//! [[projects]]
//! title = "Folio"
//! description = "This page"
//! ```

use folio_layout::ScrollTrackerConfig;
use folio_theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{
    default_experience, default_projects, default_skills, Experience, Profile, Project,
};
use crate::error::{FolioError, Result};

/// File name looked up by [`FolioConfig::load_from_dir`]
pub const CONFIG_FILE: &str = "folio.toml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document title and nav brand
    pub title: String,
    pub theme: ThemeMode,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Harsh Singh".into(),
            theme: ThemeMode::System,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    /// Per-character delay for the greeting and any text without its own
    pub default_delay_ms: u32,
    pub headline_delay_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            default_delay_ms: folio_animation::DEFAULT_DELAY_MS,
            headline_delay_ms: 40,
        }
    }
}

/// Everything `folio.toml` can set
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub site: SiteConfig,
    pub scroll: ScrollTrackerConfig,
    pub typing: TypingConfig,
    pub profile: Profile,
    pub skills: Vec<String>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            scroll: ScrollTrackerConfig::default(),
            typing: TypingConfig::default(),
            profile: Profile::default(),
            skills: default_skills(),
            experience: default_experience(),
            projects: default_projects(),
        }
    }
}

impl FolioConfig {
    /// Load `folio.toml` from `dir`, or the defaults if there is none
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, dir.display());
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Load a specific config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| config_error(path, e))?;
        let config = Self::parse(&content).map_err(|e| match e {
            FolioError::Config { message, .. } => FolioError::Config {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;
        tracing::info!("loaded {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| config_error(Path::new(CONFIG_FILE), e))?;
        Ok(config.sanitized())
    }

    /// Replace out-of-range scroll tunables with their defaults
    fn sanitized(mut self) -> Self {
        let defaults = ScrollTrackerConfig::default();
        let ratio = self.scroll.activation_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            tracing::warn!(
                "scroll.activation_ratio {} outside (0, 1], using {}",
                ratio,
                defaults.activation_ratio
            );
            self.scroll.activation_ratio = defaults.activation_ratio;
        }
        if !self.scroll.top_threshold.is_finite() || self.scroll.top_threshold < 0.0 {
            tracing::warn!(
                "scroll.top_threshold {} is invalid, using {}",
                self.scroll.top_threshold,
                defaults.top_threshold
            );
            self.scroll.top_threshold = defaults.top_threshold;
        }
        self
    }
}

fn config_error(path: &Path, err: impl std::fmt::Display) -> FolioError {
    FolioError::Config {
        path: PathBuf::from(path),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(FolioConfig::parse("").unwrap(), FolioConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = FolioConfig::parse(
            r#"
            skills = ["Rust"]

            [site]
            theme = "dark"

            [typing]
            default_delay_ms = 20

            [[projects]]
            title = "Folio"
            description = "This page"
            "#,
        )
        .unwrap();

        assert_eq!(config.site.theme, ThemeMode::Dark);
        assert_eq!(config.site.title, "Harsh Singh");
        assert_eq!(config.typing.default_delay_ms, 20);
        assert_eq!(config.typing.headline_delay_ms, 40);
        assert_eq!(config.skills, vec!["Rust".to_string()]);
        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.experience.len(), 2);
        assert_eq!(config.scroll, ScrollTrackerConfig::default());
    }

    #[test]
    fn test_invalid_ratio_falls_back() {
        let config = FolioConfig::parse("[scroll]\nactivation_ratio = 3.0\n").unwrap();
        assert_eq!(config.scroll.activation_ratio, 0.45);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = FolioConfig::parse("[site\ntitle = 1").unwrap_err();
        assert!(matches!(err, FolioError::Config { .. }));
    }

    #[test]
    fn test_unknown_theme_rejected() {
        assert!(FolioConfig::parse("[site]\ntheme = \"sepia\"\n").is_err());
    }

    #[test]
    fn test_missing_dir_file_gives_defaults() {
        let dir = std::env::temp_dir().join("folio-config-test-missing");
        let config = FolioConfig::load_from_dir(&dir).unwrap();
        assert_eq!(config.site.title, "Harsh Singh");
        assert!(FolioConfig::load(&dir.join(CONFIG_FILE)).is_err());
    }
}
