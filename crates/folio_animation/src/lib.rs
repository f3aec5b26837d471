//! Folio Animation System
//!
//! Small, timer-paced animations for the portfolio page.
//!
//! # Features
//!
//! - **Text reveal**: character-by-character typing effect driven by one-shot
//!   host timers, with a pure [`RevealState`] step machine underneath
//! - **Caret**: pulsing cursor drawn after the revealed prefix
//! - **Entrances**: fade-up presets for sections, cards and chips with
//!   per-index stagger and "once" latching
//! - **Easing**: standard curves plus CSS `cubic-bezier`

pub mod caret;
pub mod easing;
pub mod entrance;
pub mod reveal;

pub use caret::Caret;
pub use easing::Easing;
pub use entrance::{Entrance, EntranceFrame, InViewLatch, RevealMode, Stagger};
pub use reveal::{RevealSnapshot, RevealState, TextRevealer, DEFAULT_DELAY_MS};
