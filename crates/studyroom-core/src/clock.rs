//! Time sources for the scheduling engine.
//!
//! Every engine operation reads "now" through a [`Clock`] so callers and
//! tests can pin the calendar day. "Today" is the calendar day in the
//! clock's own UTC offset, which for [`SystemClock`] is the local one.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime};

/// Source of the current instant.
pub trait Clock {
    /// Current instant, carrying the offset that defines the local day.
    fn now(&self) -> DateTime<FixedOffset>;

    /// Current calendar day.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

/// Wall clock in the machine's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }

    /// Noon UTC on the given day.
    pub fn on(day: NaiveDate) -> Self {
        let noon = day
            .and_hms_opt(12, 0, 0)
            .unwrap_or_else(|| day.and_time(NaiveTime::default()));
        Self {
            instant: noon.and_utc().fixed_offset(),
        }
    }

    /// Parse an RFC 3339 timestamp (`2025-01-15T09:30:00+02:00`) or a bare
    /// `YYYY-MM-DD` day.
    pub fn parse(value: &str) -> Option<Self> {
        if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
            return Some(Self::new(instant));
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().map(Self::on)
    }

    /// Move the frozen instant forward by whole days.
    pub fn advance_days(&mut self, days: i64) {
        self.instant += chrono::Duration::days(days);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}
