//! End-to-end ringing lifecycle tests through the public API.

use chrono::{NaiveDate, NaiveDateTime};
use reveille_core::{AlarmEngine, CoreError, Event, RingState};

const NO_DAYS: &[&str] = &[];

fn mon(h: u32, m: u32, s: u32) -> NaiveDateTime {
    // 2025-03-03 is a Monday.
    NaiveDate::from_ymd_opt(2025, 3, 3)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

#[test]
fn wake_alarm_full_day() {
    let mut engine = AlarmEngine::new();
    engine.create_alarm("Wake", "07:00", NO_DAYS).unwrap();

    // Nothing before the minute.
    assert!(engine.tick(mon(6, 59, 0)).is_none());

    // Fires at 07:00 Monday, even with an empty day set.
    let event = engine.tick(mon(7, 0, 0)).unwrap();
    let Event::AlarmTriggered { label, .. } = event else {
        panic!("Expected AlarmTriggered");
    };
    assert_eq!(label, "Wake");

    // Ringing occupies the only slot; a repeat tick stays silent.
    assert!(engine.tick(mon(7, 0, 0)).is_none());

    // Dismissal five minutes later logs 300 seconds.
    let entry = engine.stop(mon(7, 5, 0)).unwrap();
    assert_eq!(entry.label, "Wake");
    assert_eq!(entry.duration_secs, 300);
    assert_eq!(engine.log().len(), 1);
    assert_eq!(engine.state(), RingState::Idle);
}

#[test]
fn at_most_one_session_across_a_tick_sequence() {
    let mut engine = AlarmEngine::new();
    engine.create_alarm("A", "07:00", NO_DAYS).unwrap();
    engine.create_alarm("B", "07:00", NO_DAYS).unwrap();
    engine.create_alarm("C", "07:01", NO_DAYS).unwrap();

    let mut events = 0;
    for m in 0..3 {
        for s in (0..60).step_by(5) {
            let fired = engine.tick(mon(7, m, s)).is_some();
            if fired {
                events += 1;
            }
            // A tick can only fire from an empty slot, and firing fills it.
            assert_eq!(engine.state(), RingState::Ringing);
        }
    }

    // A won 07:00 (B dropped); the slot stayed occupied through 07:01, so
    // C never fired.
    assert_eq!(events, 1);
    assert_eq!(engine.session().unwrap().label, "A");
}

#[test]
fn sessions_log_in_dismissal_order() {
    let mut engine = AlarmEngine::new();
    engine.create_alarm("Early", "07:00", NO_DAYS).unwrap();
    engine.create_alarm("Late", "07:02", NO_DAYS).unwrap();

    engine.tick(mon(7, 0, 0)).unwrap();
    engine.stop(mon(7, 0, 40)).unwrap();

    engine.tick(mon(7, 2, 0)).unwrap();
    engine.stop(mon(7, 3, 0)).unwrap();

    let labels: Vec<&str> = engine.log().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Early", "Late"]);
    assert_eq!(engine.log()[0].duration_secs, 40);
    assert_eq!(engine.log()[1].duration_secs, 60);
}

#[test]
fn weekend_alarm_skips_weekdays() {
    let mut engine = AlarmEngine::new();
    engine.create_alarm("Lie-in", "09:00", &["sat", "sun"]).unwrap();

    // Wednesday 2025-03-05.
    let wed = NaiveDate::from_ymd_opt(2025, 3, 5)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    assert!(engine.tick(wed).is_none());

    // Saturday 2025-03-01.
    let sat = NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    assert!(engine.tick(sat).is_some());
}

#[test]
fn stop_without_session_is_surfaced_not_swallowed() {
    let mut engine = AlarmEngine::new();
    engine.create_alarm("Wake", "07:00", NO_DAYS).unwrap();
    assert!(matches!(
        engine.stop(mon(7, 0, 0)).unwrap_err(),
        CoreError::NoActiveSession
    ));
    assert!(engine.log().is_empty());
}

#[test]
fn deleted_alarm_still_logs_under_its_original_label() {
    let mut engine = AlarmEngine::new();
    let alarm = engine.create_alarm("Ephemeral", "07:00", NO_DAYS).unwrap();

    engine.tick(mon(7, 0, 0)).unwrap();
    engine.delete_alarm(alarm.id).unwrap();
    assert!(engine.alarms().is_empty());

    let entry = engine.stop(mon(7, 1, 30)).unwrap();
    assert_eq!(entry.label, "Ephemeral");
    assert_eq!(entry.duration_secs, 90);
}

#[test]
fn sub_minute_ticks_trigger_exactly_once_per_minute() {
    let mut engine = AlarmEngine::new();
    engine.create_alarm("Wake", "07:00", NO_DAYS).unwrap();

    assert!(engine.tick(mon(7, 0, 0)).is_some());
    engine.stop(mon(7, 0, 10)).unwrap();

    // Stopped inside the matching minute: every later tick in that minute
    // stays silent.
    for s in [11, 20, 30, 59] {
        assert!(engine.tick(mon(7, 0, s)).is_none());
    }
}

#[test]
fn engine_state_survives_serde_roundtrip() {
    let mut engine = AlarmEngine::new();
    engine.create_alarm("Wake", "07:00", NO_DAYS).unwrap();
    engine.tick(mon(7, 0, 0)).unwrap();

    let json = serde_json::to_string(&engine).unwrap();
    let mut restored: AlarmEngine = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.state(), RingState::Ringing);
    let entry = restored.stop(mon(7, 2, 0)).unwrap();
    assert_eq!(entry.duration_secs, 120);
}
