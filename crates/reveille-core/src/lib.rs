//! # Reveille Core Library
//!
//! This library provides the core business logic for the Reveille alarm
//! clock: recurring wall-clock alarms, trigger matching, and the
//! ringing-session lifecycle. A UI or CLI sits on top as a thin driver
//! layer over the same core library.
//!
//! ## Architecture
//!
//! - **Alarm Engine**: A wall-clock-driven state machine that requires the
//!   caller to periodically invoke `tick(now)`; the core never reads the
//!   system clock itself
//! - **Alarm Store**: Insertion-ordered collection of alarm definitions,
//!   pure CRUD plus enable/disable
//! - **Ring History**: Append-only record of how long each dismissed alarm
//!   rang
//! - **Config**: TOML-based alarm definition files for driver processes
//!
//! ## Key Components
//!
//! - [`AlarmEngine`]: Facade owning the store, the single ringing slot, and
//!   the history; `tick` and `stop` are its only mutators
//! - [`AlarmStore`]: Alarm definition CRUD
//! - [`RingLog`]: Completed-session history
//! - [`AlarmsFile`]: Alarm definition file loading

pub mod alarm;
pub mod config;
pub mod error;
pub mod events;
pub mod history;
pub mod ring;

pub use alarm::{Alarm, AlarmStore, WeekdaySet};
pub use config::{AlarmSpec, AlarmsFile};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use events::Event;
pub use history::{LogEntry, RingLog};
pub use ring::{AlarmEngine, RingState, RingingSession};
