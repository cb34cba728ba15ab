use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::alarm::Alarm;

/// The live "an alarm is sounding" record. At most one exists at a time;
/// the engine owns the only slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingingSession {
    pub alarm_id: Uuid,
    /// Label captured at trigger time; survives toggle/delete of the alarm.
    pub label: String,
    pub started_at: NaiveDateTime,
    pub session_id: Uuid,
}

impl RingingSession {
    pub(crate) fn begin(alarm: &Alarm, now: NaiveDateTime) -> Self {
        Self {
            alarm_id: alarm.id,
            label: alarm.label.clone(),
            started_at: now,
            session_id: Uuid::new_v4(),
        }
    }
}
