use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ring::RingState;

/// State changes the engine reports to its driver.
/// The driver polls `tick()`; whatever UI sits on top renders these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// An alarm just started ringing (idle-to-ringing transition).
    AlarmTriggered {
        alarm_id: Uuid,
        session_id: Uuid,
        label: String,
        at: NaiveDateTime,
    },
    /// Full engine state, for status output.
    StateSnapshot {
        state: RingState,
        session_label: Option<String>,
        ringing_since: Option<NaiveDateTime>,
        alarm_count: usize,
        log_count: usize,
        at: NaiveDateTime,
    },
}
