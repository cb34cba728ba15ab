use std::path::PathBuf;

use chrono::NaiveDateTime;
use reveille_core::AlarmsFile;

/// One-shot evaluation: load definitions, tick once at the given instant,
/// print the trigger event if one fires, a state snapshot otherwise.
pub fn run(config: PathBuf, at: &str) -> Result<(), Box<dyn std::error::Error>> {
    let now = NaiveDateTime::parse_from_str(at, "%Y-%m-%d %H:%M")?;
    let mut engine = AlarmsFile::load_engine(&config)?;
    match engine.tick(now) {
        Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
        None => println!("{}", serde_json::to_string_pretty(&engine.snapshot(now))?),
    }
    Ok(())
}
