//! Alarm engine implementation.
//!
//! The engine is a wall-clock-driven state machine. It does not use
//! internal threads and never reads the system clock - the caller supplies
//! `now` and is responsible for calling `tick()` periodically.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Ringing -> Idle
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = AlarmEngine::new();
//! engine.create_alarm("Wake", "07:00", &[] as &[&str])?;
//! // In a loop:
//! engine.tick(now); // Returns Some(Event::AlarmTriggered) when an alarm fires
//! // On user action:
//! engine.stop(now)?; // Appends a LogEntry and clears the slot
//! ```

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::session::RingingSession;
use super::trigger;
use crate::alarm::{Alarm, AlarmStore};
use crate::error::{CoreError, Result};
use crate::events::Event;
use crate::history::{LogEntry, RingLog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RingState {
    Idle,
    Ringing,
}

/// Core alarm engine.
///
/// Owns the alarm definitions, the single ringing slot, and the ring
/// history. `tick` and `stop` are the only two mutators of the slot, both
/// called from a single logical actor; the early return in `tick` is what
/// upholds the one-session-at-a-time invariant. A concurrent driver would
/// need a compare-and-set on the slot instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlarmEngine {
    alarms: AlarmStore,
    /// The single ringing slot. `Some` while an alarm is sounding.
    #[serde(default)]
    session: Option<RingingSession>,
    log: RingLog,
    /// Minute of the most recent trigger. While `now` is still inside it,
    /// no further trigger fires - stopping a session mid-minute must not
    /// re-arm the same minute.
    #[serde(default)]
    consumed_minute: Option<NaiveDateTime>,
}

impl AlarmEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Alarm management ─────────────────────────────────────────────

    /// Validate and add an alarm. New alarms start enabled.
    pub fn create_alarm<S: AsRef<str>>(
        &mut self,
        label: &str,
        time_of_day: &str,
        days: &[S],
    ) -> Result<Alarm> {
        self.alarms.add(label, time_of_day, days)
    }

    /// Flip an alarm's enabled flag; returns the new value. Leaves any
    /// active session untouched, even one started by this alarm.
    pub fn toggle_alarm(&mut self, id: Uuid) -> Result<bool> {
        self.alarms.toggle(id)
    }

    /// Remove an alarm. An active session it started keeps ringing; the
    /// session carries its own copy of the label.
    pub fn delete_alarm(&mut self, id: Uuid) -> Result<()> {
        self.alarms.delete(id).map(|_| ())
    }

    /// All alarms in insertion order.
    pub fn alarms(&self) -> &[Alarm] {
        self.alarms.alarms()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> RingState {
        if self.session.is_some() {
            RingState::Ringing
        } else {
            RingState::Idle
        }
    }

    pub fn session(&self) -> Option<&RingingSession> {
        self.session.as_ref()
    }

    /// Completed sessions in append order.
    pub fn log(&self) -> &[LogEntry] {
        self.log.entries()
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self, now: NaiveDateTime) -> Event {
        Event::StateSnapshot {
            state: self.state(),
            session_label: self.session.as_ref().map(|s| s.label.clone()),
            ringing_since: self.session.as_ref().map(|s| s.started_at),
            alarm_count: self.alarms.len(),
            log_count: self.log.len(),
            at: now,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Call periodically with the current wall-clock time. Returns
    /// `Some(Event::AlarmTriggered)` on the idle-to-ringing transition.
    ///
    /// A minute that has already produced a trigger stays consumed until
    /// the clock leaves it, so drivers may tick faster than once per
    /// minute and still get exactly-once triggering.
    pub fn tick(&mut self, now: NaiveDateTime) -> Option<Event> {
        if self.session.is_some() {
            return None; // The single slot is occupied.
        }
        if let Some(consumed) = self.consumed_minute {
            if truncate_to_minute(now) == consumed {
                return None; // This minute already fired.
            }
        }
        let alarm = trigger::first_match(now, self.alarms.alarms())?;
        let session = RingingSession::begin(alarm, now);
        let event = Event::AlarmTriggered {
            alarm_id: session.alarm_id,
            session_id: session.session_id,
            label: session.label.clone(),
            at: now,
        };
        self.consumed_minute = Some(truncate_to_minute(now));
        self.session = Some(session);
        Some(event)
    }

    /// Dismiss the ringing alarm: append a duration-stamped entry to the
    /// history and clear the slot. Fails with `NoActiveSession` while idle
    /// so the driver can decide whether to report it.
    pub fn stop(&mut self, now: NaiveDateTime) -> Result<LogEntry> {
        let session = self.session.take().ok_or(CoreError::NoActiveSession)?;
        let duration_secs = (now - session.started_at).num_seconds().max(0) as u64;
        let entry = LogEntry {
            label: session.label,
            duration_secs,
            logged_at: now,
        };
        self.log.append(entry.clone());
        Ok(entry)
    }
}

fn truncate_to_minute(at: NaiveDateTime) -> NaiveDateTime {
    at.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(at)
}
