//! Clock abstraction so date validation stays deterministic in tests.

use chrono::{DateTime, NaiveDate, Utc};

/// Supplies the current moment. The date validation rule reads this once per
/// call and never caches the result.
pub trait Clock {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock implementation used in production wiring.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the instant it was constructed with. Test double.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Convenience for `FixedClock` at midnight on the given date.
    pub fn at(date: NaiveDate) -> Self {
        Self(DateTime::from_naive_utc_and_offset(
            date.and_hms_opt(0, 0, 0).expect("midnight exists"),
            Utc,
        ))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
