use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use chrono::Local;
use reveille_core::AlarmsFile;

/// Drive the engine at a fixed cadence until the user quits.
///
/// Stdin is read on a helper thread feeding a channel, so the tick loop
/// never blocks and the engine itself stays single-threaded. An empty line
/// dismisses the ringing alarm; `q` quits and prints the ring history.
pub fn run(config: PathBuf, interval: u64) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = AlarmsFile::load_engine(&config)?;
    eprintln!(
        "loaded {} alarm(s); press Enter to dismiss, q to quit",
        engine.alarms().len()
    );

    let (tx, rx) = mpsc::channel::<String>();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    loop {
        let now = Local::now().naive_local();
        if let Some(event) = engine.tick(now) {
            println!("{}", serde_json::to_string_pretty(&event)?);
        }

        while let Ok(line) = rx.try_recv() {
            let now = Local::now().naive_local();
            if line.trim() == "q" {
                println!("{}", serde_json::to_string_pretty(&engine.log())?);
                return Ok(());
            }
            match engine.stop(now) {
                Ok(entry) => println!("{}", serde_json::to_string_pretty(&entry)?),
                Err(e) => eprintln!("error: {e}"),
            }
        }

        std::thread::sleep(Duration::from_secs(interval));
    }
}
