//! Event-driven state model with a pending-event queue.
//!
//! Events are queued by [`StateModel::process_event`] and applied in order by
//! [`StateModel::run`], which the owner calls from its main loop. Each event
//! takes the first transition whose source state and trigger list match; an
//! event with no matching transition is discarded.

use crate::input::ButtonId;
use heapless::{Deque, Vec};

/// Inputs that can drive a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    Press(ButtonId),
    Release(ButtonId),
    Timeout,
}

impl Event {
    /// A press of any of the four buttons.
    pub const ANY_PRESS: &'static [Event] = &[
        Event::Press(ButtonId::White),
        Event::Press(ButtonId::Red),
        Event::Press(ButtonId::Yellow),
        Event::Press(ButtonId::Blue),
    ];

    /// Countdown expiry.
    pub const TIMEOUT: &'static [Event] = &[Event::Timeout];
}

/// A state usable in a [`StateModel`].
pub trait ModelState: Copy + PartialEq {
    /// Numeric index of the state, used for logging.
    fn index(&self) -> u8;
}

/// One edge of the state graph.
#[derive(Debug, Clone, Copy)]
pub struct Transition<S> {
    pub from: S,
    pub triggers: &'static [Event],
    pub to: S,
}

/// State model errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StateModelError {
    /// Transition table capacity exceeded.
    TooManyTransitions,

    /// Pending-event queue is full; the event was dropped.
    QueueFull(Event),
}

impl core::fmt::Display for StateModelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StateModelError::TooManyTransitions => {
                write!(f, "transition table capacity exceeded")
            }
            StateModelError::QueueFull(event) => {
                write!(f, "event queue full, dropped {:?}", event)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StateModelError {}

/// A table-driven state machine.
///
/// # Type Parameters
/// * `S` - State type
/// * `T` - Maximum number of transitions
/// * `Q` - Maximum number of pending events
pub struct StateModel<S: ModelState, const T: usize, const Q: usize> {
    state: S,
    transitions: Vec<Transition<S>, T>,
    pending: Deque<Event, Q>,
}

impl<S: ModelState, const T: usize, const Q: usize> StateModel<S, T, Q> {
    /// Creates a model in `initial` with no transitions.
    pub fn new(initial: S) -> Self {
        Self {
            state: initial,
            transitions: Vec::new(),
            pending: Deque::new(),
        }
    }

    /// Adds a transition from `from` to `to` taken on any of `triggers`.
    pub fn add_transition(
        &mut self,
        from: S,
        triggers: &'static [Event],
        to: S,
    ) -> Result<(), StateModelError> {
        self.transitions
            .push(Transition { from, triggers, to })
            .map_err(|_| StateModelError::TooManyTransitions)
    }

    /// Queues an event for the next [`run`](Self::run).
    pub fn process_event(&mut self, event: Event) -> Result<(), StateModelError> {
        self.pending
            .push_back(event)
            .map_err(StateModelError::QueueFull)
    }

    /// Applies every pending event in arrival order.
    ///
    /// Returns the number of transitions taken.
    pub fn run(&mut self) -> usize {
        let mut taken = 0;

        while let Some(event) = self.pending.pop_front() {
            let next = self
                .transitions
                .iter()
                .find(|t| t.from == self.state && t.triggers.contains(&event))
                .map(|t| t.to);

            match next {
                Some(to) => {
                    debug!("state {=u8} -> {=u8} on {}", self.state.index(), to.index(), event);
                    self.state = to;
                    taken += 1;
                }
                None => trace!("state {=u8}: ignored {}", self.state.index(), event),
            }
        }

        taken
    }

    /// Returns the current state.
    pub fn state(&self) -> S {
        self.state
    }

    /// Returns the number of events waiting for [`run`](Self::run).
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Returns the transition table.
    pub fn transitions(&self) -> &[Transition<S>] {
        &self.transitions
    }
}
