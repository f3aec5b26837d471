//! Typing-text reveal
//!
//! Reveals a string one character at a time at a fixed cadence, the way a
//! typewriter prints. The work is split in two:
//!
//! - [`RevealState`] is a pure step machine. [`RevealState::advance`] reveals
//!   exactly one more character; nothing in it knows about time.
//! - [`TextRevealer`] drives a `RevealState` with one-shot timers from a
//!   [`TimerHost`]. It owns at most one pending timer, and dropping it (or
//!   calling [`TextRevealer::cancel`]) cancels that timer, so a torn-down
//!   widget is never touched by a late callback.
//!
//! Characters are Unicode scalar values, so the revealed prefix is always a
//! valid `&str`.
//!
//! # Example
//!
//! ```rust
//! use folio_animation::TextRevealer;
//! use folio_platform::HeadlessPlatform;
//!
//! let platform = HeadlessPlatform::new(800.0);
//! let hello = TextRevealer::start(platform.clone(), "Hi", 80);
//!
//! assert_eq!(hello.revealed(), "");
//! platform.advance(80);
//! assert_eq!(hello.revealed(), "H");
//! platform.advance(80);
//! assert_eq!(hello.revealed(), "Hi");
//! assert!(hello.is_complete());
//! ```

use folio_platform::{TimerHost, TimerId};
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Per-character delay used when none is given
pub const DEFAULT_DELAY_MS: u32 = 80;

/// Progress of one reveal
///
/// `revealed_count` only ever grows and never exceeds the character count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealState {
    source: String,
    char_count: usize,
    revealed: usize,
    delay_ms: u32,
}

impl RevealState {
    /// A fresh reveal with nothing shown yet
    ///
    /// `delay_ms` is not validated; a zero delay reveals one character per
    /// timer turn.
    pub fn new(source: impl Into<String>, delay_ms: u32) -> Self {
        let source = source.into();
        Self {
            char_count: source.chars().count(),
            source,
            revealed: 0,
            delay_ms,
        }
    }

    pub fn with_default_delay(source: impl Into<String>) -> Self {
        Self::new(source, DEFAULT_DELAY_MS)
    }

    /// The state a reveal started at time zero has reached after
    /// `elapsed_ms`, assuming every timer fired on time
    pub fn at_elapsed(source: impl Into<String>, delay_ms: u32, elapsed_ms: u64) -> Self {
        let mut state = Self::new(source, delay_ms);
        let steps = if delay_ms == 0 {
            state.char_count
        } else {
            (elapsed_ms / u64::from(delay_ms)).min(state.char_count as u64) as usize
        };
        state.advance_by(steps);
        state
    }

    /// Reveal one more character
    ///
    /// Returns `false` (and changes nothing) once everything is shown.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.revealed += 1;
        true
    }

    /// Reveal up to `steps` characters, returning how many were revealed
    pub fn advance_by(&mut self, steps: usize) -> usize {
        let taken = steps.min(self.remaining());
        self.revealed += taken;
        taken
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.char_count
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// Length of the source in characters
    pub fn len(&self) -> usize {
        self.char_count
    }

    pub fn is_empty(&self) -> bool {
        self.char_count == 0
    }

    pub fn remaining(&self) -> usize {
        self.char_count - self.revealed
    }

    /// Wall-clock time a full reveal takes
    pub fn total_duration_ms(&self) -> u64 {
        u64::from(self.delay_ms) * self.char_count as u64
    }

    /// The prefix shown so far
    pub fn revealed_text(&self) -> &str {
        let end = self
            .source
            .char_indices()
            .nth(self.revealed)
            .map(|(idx, _)| idx)
            .unwrap_or(self.source.len());
        &self.source[..end]
    }

    pub fn snapshot(&self) -> RevealSnapshot {
        RevealSnapshot {
            text: self.revealed_text().to_string(),
            revealed: self.revealed,
            len: self.char_count,
            complete: self.is_complete(),
        }
    }
}

/// Serializable view of a reveal's progress
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RevealSnapshot {
    pub text: String,
    pub revealed: usize,
    pub len: usize,
    pub complete: bool,
}

type AdvanceCallback = Rc<dyn Fn(&RevealState)>;

struct RevealerInner {
    state: RevealState,
    pending: Option<TimerId>,
    stopped: bool,
    on_advance: Option<AdvanceCallback>,
}

/// Timer-driven typing animation
///
/// Starts revealing as soon as it is created. There is no pause or rewind;
/// to replay, create a new instance.
pub struct TextRevealer<H: TimerHost + Clone + 'static> {
    host: H,
    inner: Rc<RefCell<RevealerInner>>,
}

impl<H: TimerHost + Clone + 'static> TextRevealer<H> {
    /// Mount a revealer and schedule its first character
    pub fn start(host: H, text: impl Into<String>, delay_ms: u32) -> Self {
        let state = RevealState::new(text, delay_ms);
        tracing::debug!(
            "text reveal: {} chars at {}ms/char",
            state.len(),
            state.delay_ms()
        );

        let inner = Rc::new(RefCell::new(RevealerInner {
            state,
            pending: None,
            stopped: false,
            on_advance: None,
        }));
        schedule_next(&host, Rc::downgrade(&inner));

        Self { host, inner }
    }

    /// Mount with [`DEFAULT_DELAY_MS`]
    pub fn start_default(host: H, text: impl Into<String>) -> Self {
        Self::start(host, text, DEFAULT_DELAY_MS)
    }

    /// Run `callback` after every revealed character
    pub fn on_advance<F>(&self, callback: F)
    where
        F: Fn(&RevealState) + 'static,
    {
        self.inner.borrow_mut().on_advance = Some(Rc::new(callback));
    }

    /// The prefix shown so far
    pub fn revealed(&self) -> String {
        self.inner.borrow().state.revealed_text().to_string()
    }

    pub fn state(&self) -> RevealState {
        self.inner.borrow().state.clone()
    }

    pub fn snapshot(&self) -> RevealSnapshot {
        self.inner.borrow().state.snapshot()
    }

    pub fn is_complete(&self) -> bool {
        self.inner.borrow().state.is_complete()
    }

    /// Whether a timer is currently scheduled for the next character
    pub fn is_pending(&self) -> bool {
        self.inner.borrow().pending.is_some()
    }

    /// Stop revealing and release the pending timer
    ///
    /// The revealed prefix is frozen where it is. Called automatically on
    /// drop.
    pub fn cancel(&self) {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            inner.stopped = true;
            inner.pending.take()
        };
        if let Some(id) = pending {
            self.host.cancel(id);
            tracing::trace!("text reveal: cancelled pending timer {:?}", id);
        }
    }
}

impl<H: TimerHost + Clone + 'static> Drop for TextRevealer<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<H: TimerHost + Clone + 'static> fmt::Debug for TextRevealer<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("TextRevealer")
            .field("state", &inner.state)
            .field("pending", &inner.pending)
            .field("stopped", &inner.stopped)
            .finish()
    }
}

fn schedule_next<H: TimerHost + Clone + 'static>(host: &H, weak: Weak<RefCell<RevealerInner>>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };

    let delay_ms = {
        let guard = inner.borrow();
        if guard.stopped || guard.pending.is_some() || guard.state.is_complete() {
            return;
        }
        guard.state.delay_ms()
    };

    let tick_host = host.clone();
    let id = host.schedule(delay_ms, Box::new(move || tick(&tick_host, weak)));
    inner.borrow_mut().pending = Some(id);
}

fn tick<H: TimerHost + Clone + 'static>(host: &H, weak: Weak<RefCell<RevealerInner>>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };

    let notify = {
        let mut guard = inner.borrow_mut();
        guard.pending = None;
        if guard.stopped {
            return;
        }
        guard.state.advance();
        guard
            .on_advance
            .clone()
            .map(|callback| (callback, guard.state.clone()))
    };

    if let Some((callback, state)) = notify {
        callback(&state);
    }
    drop(inner);
    schedule_next(host, weak);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_platform::HeadlessPlatform;
    use std::cell::Cell;

    fn platform() -> HeadlessPlatform {
        HeadlessPlatform::new(800.0)
    }

    #[test]
    fn test_state_advance_is_bounded() {
        let mut state = RevealState::new("abc", 10);
        assert_eq!(state.revealed_text(), "");
        assert!(state.advance());
        assert!(state.advance());
        assert!(state.advance());
        assert!(!state.advance());
        assert_eq!(state.revealed_count(), 3);
        assert_eq!(state.revealed_text(), "abc");
    }

    #[test]
    fn test_state_multibyte_prefix() {
        let mut state = RevealState::new("héllo ☀️", 10);
        state.advance_by(2);
        assert_eq!(state.revealed_text(), "hé");
        state.advance_by(100);
        assert_eq!(state.revealed_text(), "héllo ☀️");
        assert_eq!(state.len(), 8);
    }

    #[test]
    fn test_state_at_elapsed() {
        assert_eq!(RevealState::at_elapsed("Hi", 80, 0).revealed_text(), "");
        assert_eq!(RevealState::at_elapsed("Hi", 80, 159).revealed_text(), "H");
        assert_eq!(RevealState::at_elapsed("Hi", 80, 10_000).revealed_text(), "Hi");
        assert!(RevealState::at_elapsed("Hi", 0, 0).is_complete());
    }

    #[test]
    fn test_default_delay() {
        let state = RevealState::with_default_delay("Hello");
        assert_eq!(state.delay_ms(), 80);
        assert_eq!(state.total_duration_ms(), 400);
    }

    #[test]
    fn test_reveals_one_char_per_delay() {
        let host = platform();
        let hi = TextRevealer::start(host.clone(), "Hi", 80);

        assert_eq!(hi.revealed(), "");
        host.advance(79);
        assert_eq!(hi.revealed(), "");
        host.advance(1);
        assert_eq!(hi.revealed(), "H");
        host.advance(80);
        assert_eq!(hi.revealed(), "Hi");
    }

    #[test]
    fn test_terminal_state_schedules_nothing() {
        let host = platform();
        let hi = TextRevealer::start(host.clone(), "Hi", 80);
        host.advance(160);

        assert!(hi.is_complete());
        assert!(!hi.is_pending());
        assert_eq!(host.pending_timers(), 0);
        assert_eq!(host.advance(1_000), 0);
        assert_eq!(hi.revealed(), "Hi");
    }

    #[test]
    fn test_empty_text_is_complete_at_mount() {
        let host = platform();
        let empty = TextRevealer::start(host.clone(), "", 80);
        assert!(empty.is_complete());
        assert_eq!(host.pending_timers(), 0);
    }

    #[test]
    fn test_cancel_freezes_state() {
        let host = platform();
        let text = TextRevealer::start(host.clone(), "Hello", 80);
        host.advance(80);
        assert!(text.is_pending());

        text.cancel();
        assert_eq!(host.pending_timers(), 0);
        host.advance(1_000);
        assert_eq!(text.revealed(), "H");
        assert_eq!(text.state().revealed_count(), 1);
    }

    #[test]
    fn test_drop_releases_timer() {
        let host = platform();
        let text = TextRevealer::start(host.clone(), "Hello", 80);
        assert_eq!(host.pending_timers(), 1);

        drop(text);
        assert_eq!(host.pending_timers(), 0);
        assert_eq!(host.advance(1_000), 0);
    }

    #[test]
    fn test_remount_reproduces_sequence() {
        fn record(host: &HeadlessPlatform) -> Vec<String> {
            let text = TextRevealer::start(host.clone(), "Folio", 40);
            let mut frames = vec![text.revealed()];
            for _ in 0..6 {
                host.advance(40);
                frames.push(text.revealed());
            }
            frames
        }

        let host = platform();
        let first = record(&host);
        let second = record(&host);
        assert_eq!(first, second);
        assert_eq!(first.last().map(String::as_str), Some("Folio"));
    }

    #[test]
    fn test_on_advance_called_per_char() {
        let host = platform();
        let text = TextRevealer::start(host.clone(), "abc", 10);
        let calls = Rc::new(Cell::new(0));

        let calls_clone = calls.clone();
        text.on_advance(move |state| {
            assert!(state.revealed_count() > 0);
            calls_clone.set(calls_clone.get() + 1);
        });

        host.advance(100);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_zero_delay_completes_on_next_turn() {
        let host = platform();
        let text = TextRevealer::start(host.clone(), "fast", 0);
        assert_eq!(text.revealed(), "");
        host.advance(0);
        assert!(text.is_complete());
    }

    #[test]
    fn test_snapshot() {
        let host = platform();
        let text = TextRevealer::start(host.clone(), "Hey", 10);
        host.advance(20);
        assert_eq!(
            text.snapshot(),
            RevealSnapshot {
                text: "He".to_string(),
                revealed: 2,
                len: 3,
                complete: false,
            }
        );
    }
}
