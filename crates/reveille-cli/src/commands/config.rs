use std::path::PathBuf;

use clap::Subcommand;
use reveille_core::alarm::{parse_time_of_day, WeekdaySet};
use reveille_core::AlarmsFile;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Check a definitions file and report per-alarm problems
    Validate {
        /// Path to the alarm definitions file
        file: PathBuf,
    },
    /// Print the parsed alarms as JSON
    Show {
        /// Path to the alarm definitions file
        file: PathBuf,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Validate { file } => {
            let parsed = AlarmsFile::load(&file)?;
            let mut problems = 0usize;
            for spec in &parsed.alarms {
                let checked = parse_time_of_day(&spec.time)
                    .map(|_| ())
                    .and_then(|_| WeekdaySet::parse(&spec.days).map(|_| ()));
                match checked {
                    Ok(()) => println!("ok: {} @ {}", spec.label, spec.time),
                    Err(e) => {
                        problems += 1;
                        println!("error: {}: {e}", spec.label);
                    }
                }
            }
            if problems > 0 {
                return Err(format!("{problems} invalid alarm(s)").into());
            }
        }
        ConfigAction::Show { file } => {
            let engine = AlarmsFile::load_engine(&file)?;
            println!("{}", serde_json::to_string_pretty(&engine.alarms())?);
        }
    }
    Ok(())
}
