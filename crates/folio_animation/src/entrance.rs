//! Entrance animations
//!
//! Content fades up into place the first time it scrolls into view. An
//! [`Entrance`] describes the motion, a [`Stagger`] offsets it per item in a
//! list, and an [`InViewLatch`] remembers when an element entered the
//! viewport so the animation can be sampled at any later time.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Fade-and-rise from an offset to rest
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entrance {
    pub from_opacity: f32,
    /// Starting translateY in px (positive is below the resting position)
    pub from_offset_y: f32,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
}

impl Entrance {
    /// Whole sections: rise 50px over 800ms
    pub fn section() -> Self {
        Self {
            from_opacity: 0.0,
            from_offset_y: 50.0,
            duration_ms: 800.0,
            delay_ms: 0.0,
            easing: Easing::EaseOut,
        }
    }

    /// Project cards: rise 20px
    pub fn card() -> Self {
        Self {
            from_opacity: 0.0,
            from_offset_y: 20.0,
            duration_ms: 300.0,
            delay_ms: 0.0,
            easing: Easing::EaseOut,
        }
    }

    /// Skill chips: rise 10px
    pub fn chip() -> Self {
        Self {
            from_opacity: 0.0,
            from_offset_y: 10.0,
            duration_ms: 300.0,
            delay_ms: 0.0,
            easing: Easing::EaseOut,
        }
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Time from trigger until the element is at rest
    pub fn total_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }

    /// Appearance before the animation starts
    pub fn hidden(&self) -> EntranceFrame {
        EntranceFrame {
            opacity: self.from_opacity,
            offset_y: self.from_offset_y,
        }
    }

    /// Sample the animation `elapsed_ms` after it was triggered
    pub fn frame(&self, elapsed_ms: f64) -> EntranceFrame {
        let local = elapsed_ms - self.delay_ms;
        if local <= 0.0 {
            return self.hidden();
        }
        if self.duration_ms <= 0.0 || local >= self.duration_ms {
            return EntranceFrame::REST;
        }

        let t = self.easing.apply((local / self.duration_ms) as f32);
        EntranceFrame {
            opacity: self.from_opacity + (1.0 - self.from_opacity) * t,
            offset_y: self.from_offset_y * (1.0 - t),
        }
    }
}

/// Sampled appearance of an entering element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceFrame {
    pub opacity: f32,
    pub offset_y: f32,
}

impl EntranceFrame {
    pub const REST: EntranceFrame = EntranceFrame {
        opacity: 1.0,
        offset_y: 0.0,
    };

    pub fn is_at_rest(&self) -> bool {
        *self == Self::REST
    }

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {:.2}; transform: translateY({:.1}px)",
            self.opacity, self.offset_y
        )
    }
}

/// Fixed delay between consecutive items of a list
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stagger {
    pub step_ms: f64,
}

impl Stagger {
    pub fn new(step_ms: f64) -> Self {
        Self { step_ms }
    }

    pub fn delay_for(&self, index: usize) -> f64 {
        self.step_ms * index as f64
    }

    /// `entrance` delayed for the item at `index`
    pub fn apply(&self, entrance: Entrance, index: usize) -> Entrance {
        entrance.with_delay(entrance.delay_ms + self.delay_for(index))
    }
}

/// Whether an element animates only on its first appearance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealMode {
    /// Animate once and stay visible
    #[default]
    Once,
    /// Hide again when scrolled out, re-animate on return
    Repeat,
}

/// Records when an element entered the viewport
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InViewLatch {
    mode: RevealMode,
    entered_at: Option<f64>,
}

impl InViewLatch {
    pub fn new(mode: RevealMode) -> Self {
        Self {
            mode,
            entered_at: None,
        }
    }

    /// Feed the current visibility; returns true if the element just entered
    pub fn observe(&mut self, in_view: bool, now_ms: f64) -> bool {
        match (self.entered_at, in_view) {
            (None, true) => {
                self.entered_at = Some(now_ms);
                true
            }
            (Some(_), false) if self.mode == RevealMode::Repeat => {
                self.entered_at = None;
                false
            }
            _ => false,
        }
    }

    pub fn has_entered(&self) -> bool {
        self.entered_at.is_some()
    }

    pub fn entered_at(&self) -> Option<f64> {
        self.entered_at
    }

    /// Sample `entrance` for this element at `now_ms`
    pub fn frame(&self, entrance: &Entrance, now_ms: f64) -> EntranceFrame {
        match self.entered_at {
            Some(at) => entrance.frame(now_ms - at),
            None => entrance.hidden(),
        }
    }

    /// Whether `entrance` is mid-flight at `now_ms`
    pub fn is_animating(&self, entrance: &Entrance, now_ms: f64) -> bool {
        self.entered_at
            .map(|at| now_ms - at < entrance.total_ms())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_entrance() {
        let e = Entrance::section();
        assert_eq!(e.frame(0.0), e.hidden());
        assert_eq!(e.frame(800.0), EntranceFrame::REST);

        let mid = e.frame(400.0);
        assert!(mid.opacity > 0.5 && mid.opacity < 1.0);
        assert!(mid.offset_y > 0.0 && mid.offset_y < 25.0);
    }

    #[test]
    fn test_stagger_delays() {
        let stagger = Stagger::new(150.0);
        let third = stagger.apply(Entrance::card(), 2);
        assert_eq!(third.delay_ms, 300.0);
        assert_eq!(third.frame(300.0), third.hidden());
        assert!(third.frame(450.0).opacity > 0.0);
        assert!(third.frame(600.0).is_at_rest());
    }

    #[test]
    fn test_latch_once() {
        let mut latch = InViewLatch::new(RevealMode::Once);
        assert!(!latch.observe(false, 0.0));
        assert!(latch.observe(true, 100.0));
        assert!(!latch.observe(true, 200.0));
        assert!(!latch.observe(false, 300.0));
        assert_eq!(latch.entered_at(), Some(100.0));
        assert!(latch.frame(&Entrance::section(), 2000.0).is_at_rest());
    }

    #[test]
    fn test_latch_repeat_resets() {
        let mut latch = InViewLatch::new(RevealMode::Repeat);
        latch.observe(true, 0.0);
        latch.observe(false, 1000.0);
        assert!(!latch.has_entered());
        assert_eq!(
            latch.frame(&Entrance::section(), 1500.0),
            Entrance::section().hidden()
        );
        assert!(latch.observe(true, 2000.0));
    }

    #[test]
    fn test_is_animating() {
        let mut latch = InViewLatch::new(RevealMode::Once);
        let entrance = Entrance::section();
        assert!(!latch.is_animating(&entrance, 0.0));
        latch.observe(true, 0.0);
        assert!(latch.is_animating(&entrance, 799.0));
        assert!(!latch.is_animating(&entrance, 800.0));
    }

    #[test]
    fn test_frame_css() {
        assert_eq!(
            EntranceFrame::REST.to_css(),
            "opacity: 1.00; transform: translateY(0.0px)"
        );
    }
}
