//! Injected time source.
//!
//! The store stamps logs with `now()` and reconciliation projects day offsets
//! from `today()`; tests and `--today` pin both through `FixedClock`.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: NaiveDateTime,
}

impl FixedClock {
    pub fn at(at: NaiveDateTime) -> Self {
        Self { at }
    }

    /// Midnight of the given day.
    pub fn on(date: NaiveDate) -> Self {
        Self {
            at: date.and_time(NaiveTime::MIN),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.at
    }
}
