//! Alarm definitions: fire time, weekday eligibility, and the alarm record.

mod store;

pub use store::AlarmStore;

use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// A recurring alarm definition.
///
/// Owned exclusively by [`AlarmStore`]; mutated only via toggle, destroyed
/// only via delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alarm {
    pub id: Uuid,
    pub label: String,
    /// Fire time, minute precision (seconds are always zero).
    pub time: NaiveTime,
    /// Days the alarm is eligible to fire. Empty = every day.
    pub days: WeekdaySet,
    pub enabled: bool,
}

impl Alarm {
    /// True when `now` falls in this alarm's minute on an eligible day.
    /// Enablement is the caller's check.
    pub fn matches_at(&self, now: NaiveDateTime) -> bool {
        self.time.hour() == now.hour()
            && self.time.minute() == now.minute()
            && self.days.matches(now.weekday())
    }
}

/// Parse a wall-clock time in `HH:MM` form.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| ValidationError::InvalidTimeOfDay {
        value: value.to_string(),
    })
}

/// Set of weekdays an alarm may fire on, stored as a Mon-first bitmask.
///
/// Serializes as a list of lowercase three-letter tokens (`["mon", "sat"]`).
/// The empty set means "every day".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// Parse weekday tokens. `chrono` accepts both three-letter and full
    /// names, case-insensitive. An empty token list means every day.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, ValidationError> {
        let mut mask = 0u8;
        for token in tokens {
            let day: Weekday =
                token
                    .as_ref()
                    .parse()
                    .map_err(|_| ValidationError::UnknownWeekday {
                        token: token.as_ref().to_string(),
                    })?;
            mask |= 1 << day.num_days_from_monday();
        }
        Ok(WeekdaySet(mask))
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & (1 << day.num_days_from_monday()) != 0
    }

    /// Eligibility check: the empty set matches every day.
    pub fn matches(&self, day: Weekday) -> bool {
        self.is_empty() || self.contains(day)
    }
}

impl TryFrom<Vec<String>> for WeekdaySet {
    type Error = ValidationError;

    fn try_from(tokens: Vec<String>) -> Result<Self, Self::Error> {
        Self::parse(&tokens)
    }
}

impl From<WeekdaySet> for Vec<String> {
    fn from(set: WeekdaySet) -> Self {
        const TOKENS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];
        TOKENS
            .iter()
            .enumerate()
            .filter(|(i, _)| set.0 & (1 << i) != 0)
            .map(|(_, t)| (*t).to_string())
            .collect()
    }
}
