//! Insertion-ordered alarm collection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{parse_time_of_day, Alarm, WeekdaySet};
use crate::error::{CoreError, Result};

/// Owns every alarm definition. Scan order is insertion order, which is
/// also the tie-break order for trigger matching.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlarmStore {
    alarms: Vec<Alarm>,
}

impl AlarmStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and insert a new alarm. New alarms start enabled and get a
    /// fresh id.
    pub fn add<S: AsRef<str>>(
        &mut self,
        label: &str,
        time_of_day: &str,
        days: &[S],
    ) -> Result<Alarm> {
        let time = parse_time_of_day(time_of_day)?;
        let days = WeekdaySet::parse(days)?;
        let alarm = Alarm {
            id: Uuid::new_v4(),
            label: label.to_string(),
            time,
            days,
            enabled: true,
        };
        self.alarms.push(alarm.clone());
        Ok(alarm)
    }

    /// Flip an alarm's enabled flag; returns the new value.
    pub fn toggle(&mut self, id: Uuid) -> Result<bool> {
        let alarm = self
            .alarms
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(CoreError::AlarmNotFound(id))?;
        alarm.enabled = !alarm.enabled;
        Ok(alarm.enabled)
    }

    /// Remove an alarm, returning it.
    pub fn delete(&mut self, id: Uuid) -> Result<Alarm> {
        let index = self
            .alarms
            .iter()
            .position(|a| a.id == id)
            .ok_or(CoreError::AlarmNotFound(id))?;
        Ok(self.alarms.remove(index))
    }

    pub fn get(&self, id: Uuid) -> Option<&Alarm> {
        self.alarms.iter().find(|a| a.id == id)
    }

    /// All alarms in insertion order.
    pub fn alarms(&self) -> &[Alarm] {
        &self.alarms
    }

    pub fn len(&self) -> usize {
        self.alarms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alarms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_DAYS: &[&str] = &[];

    #[test]
    fn add_assigns_id_and_starts_enabled() {
        let mut store = AlarmStore::new();
        let alarm = store.add("Wake", "07:00", NO_DAYS).unwrap();
        assert!(alarm.enabled);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(alarm.id).unwrap().label, "Wake");
    }

    #[test]
    fn add_rejects_bad_time() {
        let mut store = AlarmStore::new();
        let err = store.add("Bad", "7pm", NO_DAYS).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn add_rejects_bad_weekday() {
        let mut store = AlarmStore::new();
        let err = store.add("Bad", "07:00", &["blursday"]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn toggle_flips_enabled() {
        let mut store = AlarmStore::new();
        let alarm = store.add("Wake", "07:00", NO_DAYS).unwrap();
        assert!(!store.toggle(alarm.id).unwrap());
        assert!(store.toggle(alarm.id).unwrap());
    }

    #[test]
    fn toggle_unknown_id_is_not_found() {
        let mut store = AlarmStore::new();
        let err = store.toggle(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, CoreError::AlarmNotFound(_)));
    }

    #[test]
    fn delete_removes_and_returns() {
        let mut store = AlarmStore::new();
        let alarm = store.add("Wake", "07:00", NO_DAYS).unwrap();
        let removed = store.delete(alarm.id).unwrap();
        assert_eq!(removed.id, alarm.id);
        assert!(store.is_empty());
        assert!(matches!(
            store.delete(alarm.id).unwrap_err(),
            CoreError::AlarmNotFound(_)
        ));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = AlarmStore::new();
        store.add("A", "07:00", NO_DAYS).unwrap();
        store.add("B", "07:00", NO_DAYS).unwrap();
        store.add("C", "08:30", NO_DAYS).unwrap();
        let labels: Vec<&str> = store.alarms().iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);

        // Deleting from the middle keeps the rest in order.
        let b = store.alarms()[1].id;
        store.delete(b).unwrap();
        let labels: Vec<&str> = store.alarms().iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "C"]);
    }
}
