//! Append-only history of completed ringing sessions.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One completed ringing session. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Label captured when the alarm triggered.
    pub label: String,
    /// How long the alarm rang, whole seconds.
    pub duration_secs: u64,
    /// When the session was stopped and logged.
    pub logged_at: NaiveDateTime,
}

/// Ordered history of log entries. Append order is chronological;
/// newest-first presentation is a caller concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RingLog {
    entries: Vec<LogEntry>,
}

impl RingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(label: &str, duration_secs: u64) -> LogEntry {
        LogEntry {
            label: label.to_string(),
            duration_secs,
            logged_at: NaiveDate::from_ymd_opt(2025, 3, 3)
                .unwrap()
                .and_hms_opt(7, 5, 0)
                .unwrap(),
        }
    }

    #[test]
    fn append_keeps_order() {
        let mut log = RingLog::new();
        log.append(entry("Wake", 300));
        log.append(entry("Gym", 12));
        let labels: Vec<&str> = log.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Wake", "Gym"]);
        assert_eq!(log.len(), 2);
    }
}
