//! Single-shot software countdown polled against a [`TimeSource`].
//!
//! Nothing fires on its own: the owner calls [`Countdown::check`] from its
//! loop and reacts when it returns `true`.

use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// The current state of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountdownState {
    /// Not armed. `check` always returns `false`.
    Idle,
    /// Armed and waiting for the duration to elapse.
    Armed,
}

/// A one-shot timer that expires after a duration measured from `start`.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
pub struct Countdown<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    started_at: Option<I>,
    duration: I::Duration,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> Countdown<'t, I, T> {
    /// Creates a new idle countdown.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            time_source,
            started_at: None,
            duration: I::Duration::ZERO,
        }
    }

    /// Arms the countdown to expire `duration` from now.
    ///
    /// Restarts the countdown if it was already armed.
    pub fn start(&mut self, duration: I::Duration) {
        self.started_at = Some(self.time_source.now());
        self.duration = duration;
    }

    /// Disarms the countdown without firing.
    pub fn cancel(&mut self) {
        self.started_at = None;
    }

    /// Polls for expiry.
    ///
    /// Returns `true` exactly once per arming, on the first poll at or after
    /// the deadline, and disarms the countdown.
    pub fn check(&mut self) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };

        let elapsed = self.time_source.now().duration_since(started_at);
        if elapsed.as_millis() >= self.duration.as_millis() {
            self.started_at = None;
            true
        } else {
            false
        }
    }

    /// Returns the time left before expiry, or `None` when idle.
    pub fn remaining(&self) -> Option<I::Duration> {
        self.started_at.map(|started_at| {
            let elapsed = self.time_source.now().duration_since(started_at);
            self.duration.saturating_sub(elapsed)
        })
    }

    /// Returns the current state of the countdown.
    pub fn state(&self) -> CountdownState {
        if self.started_at.is_some() {
            CountdownState::Armed
        } else {
            CountdownState::Idle
        }
    }

    /// Returns true if the countdown is armed.
    pub fn is_armed(&self) -> bool {
        self.started_at.is_some()
    }
}
