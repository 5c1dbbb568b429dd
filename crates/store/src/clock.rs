//! Time source for store-assigned timestamps.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Where the store reads "now" from.
///
/// Movements are stamped with [`Clock::now`]; the form layer compares price
/// dates against [`Clock::today`].
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// The current calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock. `today` follows the local timezone, which is what a person at
/// the counter considers "today".
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck at one instant (tests, reproducible demos).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
