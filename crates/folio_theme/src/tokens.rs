//! Palette tokens

use folio_core::Color;

use crate::scheme::ColorScheme;

/// Semantic colors for one scheme
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    /// Page background
    pub background: Color,
    /// Section cards and the nav bar
    pub surface: Color,
    /// Project cards inside a section
    pub surface_raised: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub border: Color,
    /// Brand purple: links, progress bar, headings underline
    pub accent: Color,
    pub accent_hover: Color,
    /// Skill chip fill and label
    pub chip_bg: Color,
    pub chip_text: Color,
    /// Hero gradient stops
    pub hero_from: Color,
    pub hero_via: Color,
    pub hero_to: Color,
}

impl ColorTokens {
    pub fn light() -> Self {
        Self {
            background: Color::from_hex(0xF9FAFB),
            surface: Color::from_hex(0xF3F4F6),
            surface_raised: Color::from_hex(0xE5E7EB),
            text_primary: Color::from_hex(0x111827),
            text_secondary: Color::from_hex(0x374151),
            border: Color::from_hex(0xE5E7EB),
            accent: Color::from_hex(0x9333EA),
            accent_hover: Color::from_hex(0x7E22CE),
            chip_bg: Color::from_hex(0xE9D5FF),
            chip_text: Color::from_hex(0x581C87),
            hero_from: Color::from_hex(0x6366F1),
            hero_via: Color::from_hex(0xA855F7),
            hero_to: Color::from_hex(0xEC4899),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::from_hex(0x111827),
            surface: Color::from_hex(0x1F2937),
            surface_raised: Color::from_hex(0x374151),
            text_primary: Color::from_hex(0xF3F4F6),
            text_secondary: Color::from_hex(0xD1D5DB),
            border: Color::from_hex(0x374151),
            accent: Color::from_hex(0xC084FC),
            accent_hover: Color::from_hex(0xA855F7),
            chip_bg: Color::from_hex(0x6B21A8),
            chip_text: Color::from_hex(0xF3E8FF),
            hero_from: Color::from_hex(0x6366F1),
            hero_via: Color::from_hex(0xA855F7),
            hero_to: Color::from_hex(0xEC4899),
        }
    }

    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }

    /// CSS custom properties for this palette
    pub fn css_variables(&self) -> String {
        [
            ("--folio-bg", self.background),
            ("--folio-surface", self.surface),
            ("--folio-surface-raised", self.surface_raised),
            ("--folio-text", self.text_primary),
            ("--folio-text-secondary", self.text_secondary),
            ("--folio-border", self.border),
            ("--folio-accent", self.accent),
            ("--folio-accent-hover", self.accent_hover),
            ("--folio-chip-bg", self.chip_bg),
            ("--folio-chip-text", self.chip_text),
            ("--folio-hero-from", self.hero_from),
            ("--folio-hero-via", self.hero_via),
            ("--folio-hero-to", self.hero_to),
        ]
        .iter()
        .map(|(name, color)| format!("{name}: {color};"))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schemes_differ() {
        let light = ColorTokens::light();
        let dark = ColorTokens::dark();
        assert_ne!(light.background, dark.background);
        assert_eq!(light.hero_via, dark.hero_via);
    }

    #[test]
    fn test_css_variables() {
        let css = ColorTokens::light().css_variables();
        assert!(css.starts_with("--folio-bg: #f9fafb;"));
        assert!(css.contains("--folio-accent: #9333ea;"));
    }
}
