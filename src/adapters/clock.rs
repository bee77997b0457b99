use crate::domain::ports::Clock;
use crate::utils::error::Result;
use crate::utils::validation::parse_time_of_day;
use chrono::{NaiveTime, Timelike};

/// Local wall clock, truncated to whole seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn time_of_day(&self) -> NaiveTime {
        let now = chrono::Local::now().time();
        now.with_nanosecond(0).unwrap_or(now)
    }
}

/// A clock frozen at one time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    time: NaiveTime,
}

impl FixedClock {
    pub fn new(time: NaiveTime) -> Self {
        Self { time }
    }

    /// Builds a clock from an `HH:MM:SS` string.
    pub fn parse(value: &str) -> Result<Self> {
        parse_time_of_day("clock", value).map(Self::new)
    }
}

impl Clock for FixedClock {
    fn time_of_day(&self) -> NaiveTime {
        self.time
    }
}
