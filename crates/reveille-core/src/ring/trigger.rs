//! Trigger matching: decides which alarm, if any, should start ringing.

use chrono::NaiveDateTime;

use crate::alarm::Alarm;

/// First enabled alarm whose minute and day match `now`, scanning in store
/// insertion order. Later matches in the same tick are dropped: only one
/// alarm may ring per idle-to-ringing transition.
pub(crate) fn first_match(now: NaiveDateTime, alarms: &[Alarm]) -> Option<&Alarm> {
    alarms
        .iter()
        .find(|alarm| alarm.enabled && alarm.matches_at(now))
}
