//! One-shot host timers

/// Callback run when a timer fires
pub type TimerCallback = Box<dyn FnOnce()>;

/// Opaque handle to a scheduled timer
///
/// Backends pick the raw representation (a slotmap key, a browser timeout
/// handle, ...); callers only hand it back to [`TimerHost::cancel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl TimerId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn to_raw(self) -> u64 {
        self.0
    }
}

/// Host timer facility
///
/// Timers are one-shot and fire on the UI thread. A cancelled timer must
/// never run its callback.
pub trait TimerHost {
    /// Run `callback` once after `delay_ms` milliseconds
    fn schedule(&self, delay_ms: u32, callback: TimerCallback) -> TimerId;

    /// Cancel a pending timer
    ///
    /// Returns `true` if the timer was still pending. Cancelling a timer
    /// that already fired or was already cancelled is a no-op.
    fn cancel(&self, id: TimerId) -> bool;

    /// Monotonic milliseconds since the platform started
    fn now_ms(&self) -> f64;
}
