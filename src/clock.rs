use chrono::{Local, NaiveDate};

/// Time source for the store. Injected so that date-boundary behavior
/// (minimum selectable date, creation timestamps) is deterministic in
/// tests.
pub trait Clock: Send {
    fn today(&self) -> NaiveDate;
    fn now_millis(&self) -> i64;
}

/// Wall-clock time in the local timezone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }
}

/// A clock pinned to a single instant.
pub struct FixedClock {
    pub today: NaiveDate,
    pub millis: i64,
}

impl FixedClock {
    pub fn on(date: &str) -> Self {
        let today = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap_or_default();
        Self {
            today,
            millis: today
                .and_hms_opt(12, 0, 0)
                .map(|dt| dt.and_utc().timestamp_millis())
                .unwrap_or(0),
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now_millis(&self) -> i64 {
        self.millis
    }
}
