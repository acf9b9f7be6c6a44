use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::driver::{Driver, DriverEvent};
use crate::core::notifier::TerminalNotifier;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::date;
use std::io::{self, BufRead};
use std::path::Path;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// Forward stdin lines to the tick loop. The loop owns all driver state;
/// this thread only reads.
fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn describe_next(driver: &Driver<TerminalNotifier>) -> String {
    match driver.next_reminder() {
        Some(t) => format!("Next reminder at {}", t.format("%H:%M")),
        None => "No more reminders today".to_string(),
    }
}

pub fn handle(cli: &Cli, cfg: &Config, path: &Path) -> AppResult<()> {
    let Commands::Watch { tick_ms, max_ticks } = &cli.command else {
        return Ok(());
    };

    let schedule = cfg.schedule()?;
    let sound = cfg.sound_enabled && !cli.test;
    let mut driver = Driver::new(schedule, sound, TerminalNotifier, date::now());

    header("Watching your workday");
    info(describe_next(&driver));
    if !cli.test {
        info("Commands: s = snooze 10 min, d = dismiss, p = pause/resume, r = reload config, q = quit");
    }

    // in test mode the sender is dropped right away and the loop just sleeps
    let commands = if cli.test {
        mpsc::channel::<String>().1
    } else {
        spawn_stdin_reader()
    };

    let tick = Duration::from_millis(*tick_ms);
    let mut stdin_open = true;
    let mut ticks: u64 = 0;

    loop {
        if stdin_open {
            match commands.recv_timeout(tick) {
                Ok(line) => {
                    if !handle_command(line.trim(), &mut driver, path) {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => stdin_open = false,
            }
        } else {
            thread::sleep(tick);
        }

        for event in driver.tick(date::now()) {
            log::debug!("tick event: {:?}", event);
            if let DriverEvent::Reminder(_) = event {
                info(describe_next(&driver));
            }
        }

        ticks += 1;
        if max_ticks.is_some_and(|max| ticks >= max) {
            break;
        }
    }

    success("Stopped watching");
    Ok(())
}

/// Apply one interactive command. Returns false to stop the loop.
fn handle_command(cmd: &str, driver: &mut Driver<TerminalNotifier>, path: &Path) -> bool {
    let now = date::now();
    match cmd {
        "" => {}
        "s" | "snooze" => match driver.snooze() {
            Some(t) => info(format!("Snoozed until {}", t.format("%H:%M"))),
            None => warning("Nothing to snooze"),
        },
        "d" | "dismiss" => info("Dismissed"),
        "p" | "pause" => {
            let enabled = !driver.config().enabled;
            driver.set_enabled(enabled, now);
            if enabled {
                success(format!("Reminders resumed. {}", describe_next(driver)));
            } else {
                info("Reminders paused");
            }
        }
        "r" | "reload" => {
            match Config::load_from(path).and_then(|c| driver.apply_settings(&c, now)) {
                Ok(()) => success(format!("Configuration reloaded. {}", describe_next(driver))),
                Err(e) => warning(format!("Keeping previous configuration: {}", e)),
            }
        }
        "q" | "quit" => return false,
        other => warning(format!("Unknown command '{}'", other)),
    }
    true
}
