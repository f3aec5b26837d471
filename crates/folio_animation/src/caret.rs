//! Pulsing text caret

use crate::easing::Easing;

/// The cursor drawn right after revealed typing text
///
/// Pulses between full and reduced opacity: fully opaque at the start of
/// each period, dimmest halfway through.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Caret {
    pub period_ms: f64,
    pub min_opacity: f32,
    pub easing: Easing,
    /// Bar width in px
    pub width: f32,
}

impl Default for Caret {
    fn default() -> Self {
        Self {
            period_ms: 2000.0,
            min_opacity: 0.5,
            easing: Easing::PULSE,
            width: 2.0,
        }
    }
}

impl Caret {
    /// Opacity `elapsed_ms` after the caret appeared
    pub fn opacity_at(&self, elapsed_ms: f64) -> f32 {
        if self.period_ms <= 0.0 {
            return 1.0;
        }
        let phase = (elapsed_ms.max(0.0) % self.period_ms / self.period_ms) as f32;
        let span = 1.0 - self.min_opacity;
        if phase < 0.5 {
            1.0 - span * self.easing.apply(phase * 2.0)
        } else {
            self.min_opacity + span * self.easing.apply((phase - 0.5) * 2.0)
        }
    }

    /// Name of the CSS animation declared by [`Caret::keyframes_css`]
    pub const KEYFRAMES: &'static str = "folio-pulse";

    /// `@keyframes` rule pulsing opacity down to `min_opacity` and back
    ///
    /// The easing applies to each half, matching [`Caret::opacity_at`].
    pub fn keyframes_css(&self) -> String {
        format!(
            "@keyframes {} {{ 0%, 100% {{ opacity: 1; }} 50% {{ opacity: {}; }} }}",
            Self::KEYFRAMES,
            self.min_opacity
        )
    }

    /// `animation` declaration that runs the pulse forever
    pub fn animation_css(&self) -> String {
        format!(
            "animation: {} {}ms {} infinite",
            Self::KEYFRAMES,
            self.period_ms,
            self.easing.to_css()
        )
    }

    /// Inline style for the caret element
    ///
    /// Opacity is left to the stylesheet animation so the caret keeps
    /// blinking between repaints.
    pub fn style(&self) -> String {
        format!(
            "display: inline-block; width: {}px; height: 1em; margin-left: 0.25rem; \
             vertical-align: middle; background: currentColor; {}",
            self.width,
            self.animation_css()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_shape() {
        let caret = Caret::default();
        assert!((caret.opacity_at(0.0) - 1.0).abs() < 1e-4);
        assert!((caret.opacity_at(1000.0) - 0.5).abs() < 1e-4);
        assert!(caret.opacity_at(500.0) < 1.0 && caret.opacity_at(500.0) > 0.5);
        assert!((caret.opacity_at(2000.0) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_periodic() {
        let caret = Caret::default();
        let a = caret.opacity_at(300.0);
        let b = caret.opacity_at(4300.0);
        assert!((a - b).abs() < 1e-4);
    }

    #[test]
    fn test_keyframes() {
        let caret = Caret::default();
        assert_eq!(
            caret.keyframes_css(),
            "@keyframes folio-pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.5; } }"
        );
        assert_eq!(
            caret.animation_css(),
            "animation: folio-pulse 2000ms cubic-bezier(0.4, 0, 0.6, 1) infinite"
        );
    }

    #[test]
    fn test_style_runs_animation() {
        let style = Caret::default().style();
        assert!(style.ends_with("animation: folio-pulse 2000ms cubic-bezier(0.4, 0, 0.6, 1) infinite"));
        assert!(!style.contains("opacity"));
    }
}
