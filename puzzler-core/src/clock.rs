//! Release gating based on the current date

use crate::key::{LAST_PUZZLE_DAY, PuzzleKey};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::fmt;

/// Source of the current local date and time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a fixed instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Midnight at the start of `date`
    pub fn on(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// The latest (day, year) the local gate lets through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseWindow {
    pub day: u8,
    pub year: i32,
}

impl ReleaseWindow {
    /// Window for a calendar date
    ///
    /// Days outside `1..=24` count as day 1, so day-1 puzzles stay fetchable
    /// all year round.
    pub fn from_date(date: NaiveDate) -> Self {
        let day = match u8::try_from(date.day()) {
            Ok(day) if (1..=LAST_PUZZLE_DAY).contains(&day) => day,
            _ => 1,
        };
        Self {
            day,
            year: date.year(),
        }
    }

    /// Whether `key` may be fetched
    ///
    /// Day and year are checked independently: a key is refused when its day
    /// is past the window's day or its year is past the window's year.
    pub fn permits(&self, key: PuzzleKey) -> bool {
        !(key.day > self.day || i32::from(key.year) > self.year)
    }
}

impl fmt::Display for ReleaseWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/day{:02}", self.year, self.day)
    }
}

/// Today's release window according to `clock`
pub fn current_release_window(clock: &impl Clock) -> ReleaseWindow {
    ReleaseWindow::from_date(clock.now().date())
}

/// Time left until the next puzzle unlocks at local midnight
pub fn time_until_next_release(clock: &impl Clock) -> TimeDelta {
    let now = clock.now();
    match now.date().succ_opt() {
        Some(tomorrow) => tomorrow.and_time(NaiveTime::MIN) - now,
        None => TimeDelta::zero(),
    }
}

/// Format a countdown as `H:MM:SS`
pub fn format_countdown(delta: TimeDelta) -> String {
    let total = delta.num_seconds().max(0);
    format!(
        "{}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
