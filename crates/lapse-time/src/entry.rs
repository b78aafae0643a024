//! Time entry - a labeled stopwatch with three states
//!
//! ```text
//!            start              stop
//!   Ready ----------> Running ---------> Stopped
//!     ^                  ^                  |
//!     |                  +------ start -----+
//!     +------------- reset (any state) -----+
//! ```
//!
//! `start` always discards a previous stop, so a restarted entry is plainly
//! `Running` and never reports a stale stop timestamp.

use std::time::Duration;

use lapse_core::{LapseError, LapseResult, Timestamp, Value, ValueChain};
use tracing::{debug, warn};

use crate::TimeEntryConfig;

/// Timer state, carrying the timestamps valid in that state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryState {
    /// Not started
    #[default]
    Ready,
    /// Started, not yet stopped
    Running { started_at: Timestamp },
    /// INVARIANT: `stopped_at >= started_at`
    Stopped {
        started_at: Timestamp,
        stopped_at: Timestamp,
    },
}

impl EntryState {
    pub fn name(&self) -> &'static str {
        match self {
            EntryState::Ready => "ready",
            EntryState::Running { .. } => "running",
            EntryState::Stopped { .. } => "stopped",
        }
    }

    pub fn started_at(&self) -> Option<Timestamp> {
        match *self {
            EntryState::Ready => None,
            EntryState::Running { started_at } | EntryState::Stopped { started_at, .. } => {
                Some(started_at)
            }
        }
    }

    pub fn stopped_at(&self) -> Option<Timestamp> {
        match *self {
            EntryState::Stopped { stopped_at, .. } => Some(stopped_at),
            _ => None,
        }
    }
}

/// A labeled stopwatch
///
/// Each entry is independent and does no locking of its own; share one
/// across threads only behind external synchronization.
#[derive(Clone, Debug, Default)]
pub struct TimeEntry {
    label: Option<String>,
    state: EntryState,
}

impl TimeEntry {
    /// Create an entry, starting it now if `start_flag` is strictly `true`.
    /// An empty label is stored as no label. Never fails: a non-boolean
    /// flag just leaves the entry ready.
    pub fn new(label: impl Into<String>, start_flag: impl Into<Value>) -> Self {
        Self::with_config(TimeEntryConfig {
            label: Some(label.into()),
            auto_start: start_flag.into(),
        })
    }

    /// Create an entry from a configuration
    pub fn with_config(config: TimeEntryConfig) -> Self {
        let mut entry = TimeEntry {
            label: non_empty(config.label),
            state: EntryState::Ready,
        };

        let auto_start = ValueChain::new(&config.auto_start)
            .is_set()
            .is_not_null()
            .is_boolean()
            .is_true()
            .is_valid();

        if auto_start {
            entry.start_at(None, Timestamp::now());
        } else {
            debug!(
                label = ?entry.label,
                flag = %config.auto_start,
                flag_type = config.auto_start.type_name(),
                "time entry created ready"
            );
        }
        entry
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn state(&self) -> EntryState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, EntryState::Ready)
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, EntryState::Running { .. })
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self.state, EntryState::Stopped { .. })
    }

    pub fn started_at(&self) -> Option<Timestamp> {
        self.state.started_at()
    }

    pub fn stopped_at(&self) -> Option<Timestamp> {
        self.state.stopped_at()
    }

    /// Start (or restart) the entry now. See [`start_at`](Self::start_at).
    ///
    /// The start stamp is never `ZERO`: a wall clock reading before the
    /// epoch records [`Timestamp::EARLIEST`].
    pub fn start(&mut self, label: Option<&str>) -> Timestamp {
        self.start_at(label, Timestamp::now())
    }

    /// Start (or restart) the entry at `at`, from any state.
    ///
    /// The label is replaced only when a non-empty one is given. Any previous
    /// stop is discarded. Returns the new start timestamp.
    pub fn start_at(&mut self, label: Option<&str>, at: Timestamp) -> Timestamp {
        if let Some(label) = label.filter(|l| !l.is_empty()) {
            self.label = Some(label.to_owned());
        }

        let previous = self.state.name();
        self.state = EntryState::Running { started_at: at };

        debug!(
            label = ?self.label,
            from = previous,
            started_at = at.as_millis(),
            "time entry started"
        );
        at
    }

    /// Stop the entry now. See [`stop_at`](Self::stop_at).
    pub fn stop(&mut self) -> Option<Timestamp> {
        self.stop_at(Timestamp::now())
    }

    /// Stop a running entry at `at`.
    ///
    /// Returns the stop timestamp. A stopped entry keeps its existing stop and
    /// returns it; a ready entry stays ready and returns `None`. A stop earlier
    /// than the start (wall clock stepped backward) is clamped to the start.
    pub fn stop_at(&mut self, at: Timestamp) -> Option<Timestamp> {
        match self.state {
            EntryState::Running { started_at } => {
                let stopped_at = at.max(started_at);
                self.state = EntryState::Stopped {
                    started_at,
                    stopped_at,
                };
                debug!(
                    label = ?self.label,
                    started_at = started_at.as_millis(),
                    stopped_at = stopped_at.as_millis(),
                    "time entry stopped"
                );
                Some(stopped_at)
            }
            EntryState::Stopped { stopped_at, .. } => Some(stopped_at),
            EntryState::Ready => None,
        }
    }

    /// Return to ready, clearing the label and both timestamps
    pub fn reset(&mut self) {
        debug!(label = ?self.label, from = self.state.name(), "time entry reset");
        self.label = None;
        self.state = EntryState::Ready;
    }

    /// Elapsed time, measured against now while running
    pub fn elapsed(&self) -> LapseResult<Duration> {
        self.elapsed_at(Timestamp::now())
    }

    /// Elapsed time with `now` as the end point of a running entry.
    ///
    /// A stopped entry reports exactly `stopped_at - started_at`, ignoring
    /// `now`. A ready entry has nothing to measure and fails with
    /// [`LapseError::InvalidState`].
    pub fn elapsed_at(&self, now: Timestamp) -> LapseResult<Duration> {
        match self.state {
            EntryState::Running { started_at } => Ok(now - started_at),
            EntryState::Stopped {
                started_at,
                stopped_at,
            } => Ok(stopped_at - started_at),
            EntryState::Ready => {
                warn!(label = ?self.label, "elapsed requested on a ready time entry");
                Err(LapseError::InvalidState {
                    operation: "measure elapsed time",
                    state: self.state.name(),
                })
            }
        }
    }
}

fn non_empty(label: Option<String>) -> Option<String> {
    label.filter(|l| !l.is_empty())
}
