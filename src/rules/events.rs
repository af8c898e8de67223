//! Rule events and observers.
//!
//! The anti-starvation rule turns some moves away. That is a policy
//! decision, not a failure, so it is reported as a [`RuleEvent`] to an
//! injected [`RuleObserver`] instead of an error.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Something the rules decided that a caller may want to know about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RuleEvent {
    /// Search or enumeration dropped a move that would leave the opponent
    /// without seeds while another move was available.
    StarvingMoveSkipped { player: PlayerId, cell: usize },

    /// A caller asked to play a starving move while another move was
    /// available; the move was refused and the game state is unchanged.
    StarvingMoveRejected { player: PlayerId, cell: usize },
}

impl std::fmt::Display for RuleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleEvent::StarvingMoveSkipped { player, cell } => {
                write!(f, "{player} cell {cell} skipped: it would starve the opponent")
            }
            RuleEvent::StarvingMoveRejected { player, cell } => {
                write!(
                    f,
                    "{player} wants to starve the opponent with cell {cell} while other moves are available"
                )
            }
        }
    }
}

/// Receiver for rule events.
///
/// Observers are shared with parallel search workers, hence `Send + Sync`.
pub trait RuleObserver: Send + Sync {
    /// Called once per event, in the order events occur on a given thread.
    fn on_event(&self, event: &RuleEvent);
}

/// Forwards events to the `log` facade.
///
/// Search skips are logged at debug level because they are routine;
/// rejected caller requests are logged as warnings.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl RuleObserver for LogObserver {
    fn on_event(&self, event: &RuleEvent) {
        match event {
            RuleEvent::StarvingMoveSkipped { .. } => log::debug!("{event}"),
            RuleEvent::StarvingMoveRejected { .. } => log::warn!("{event}"),
        }
    }
}

/// Drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl RuleObserver for NullObserver {
    fn on_event(&self, _event: &RuleEvent) {}
}

/// Records every event it receives.
///
/// ```
/// use std::sync::Arc;
/// use rust_awale::core::PlayerId;
/// use rust_awale::rules::{EventLog, RuleEvent, RuleObserver};
///
/// let log = Arc::new(EventLog::new());
/// let observer: Arc<dyn RuleObserver> = log.clone();
/// observer.on_event(&RuleEvent::StarvingMoveSkipped { player: PlayerId::FIRST, cell: 2 });
///
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<RuleEvent>>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<RuleEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether no event was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget all recorded events.
    pub fn clear(&self) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl RuleObserver for EventLog {
    fn on_event(&self, event: &RuleEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}

impl<T: RuleObserver + ?Sized> RuleObserver for Arc<T> {
    fn on_event(&self, event: &RuleEvent) {
        (**self).on_event(event);
    }
}

impl<T: RuleObserver + ?Sized> RuleObserver for &T {
    fn on_event(&self, event: &RuleEvent) {
        (**self).on_event(event);
    }
}
