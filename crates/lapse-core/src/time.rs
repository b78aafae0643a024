//! Time primitives for LAPSE
//!
//! Timestamps are wall-clock epoch milliseconds. Arithmetic between them
//! saturates at zero so a clock that steps backward can never produce a
//! negative duration.

use std::ops::{Add, Sub};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Epoch milliseconds
/// `ZERO` means "not recorded"
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    /// The earliest reading a clock can produce, one millisecond past the
    /// epoch. Recorded timestamps are never `ZERO`.
    pub const EARLIEST: Timestamp = Timestamp(1);

    /// Read the system wall clock
    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    /// Convert a wall-clock reading, clamped to at least `EARLIEST`.
    /// A clock set before the epoch reads as `EARLIEST`.
    pub fn from_system_time(time: SystemTime) -> Self {
        let millis = time
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0);
        Timestamp(millis).max(Self::EARLIEST)
    }

    #[inline]
    pub fn from_millis(millis: u64) -> Self {
        Timestamp(millis)
    }

    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Duration from `earlier` to `self`, zero if `earlier` is later
    #[inline]
    pub fn duration_since(self, earlier: Timestamp) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }

    #[inline]
    pub fn saturating_add(self, duration: Duration) -> Self {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        Timestamp(self.0.saturating_add(millis))
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Timestamp) -> Self::Output {
        self.duration_since(rhs)
    }
}

impl std::fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t({}ms)", self.0)
    }
}
