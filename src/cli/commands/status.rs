use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::Engine;
use crate::core::status::{Indicator, StatusView};
use crate::errors::AppResult;
use crate::utils::date::{self, short_weekday, weekday_index};
use ansi_term::Colour::{Fixed, Green, Yellow};
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { at, json } = cmd {
        let schedule = cfg.schedule()?;
        let now = date::now_or(at.as_deref())?;
        let decision = Engine::evaluate(&schedule, now);
        let view = StatusView::build(&schedule, decision, now, &mut rand::rng());

        if *json {
            println!("{}", serde_json::to_string_pretty(&view)?);
        } else {
            print_status(&view, cfg, now);
        }
    }
    Ok(())
}

fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}

fn print_status(view: &StatusView, cfg: &Config, now: NaiveDateTime) {
    let indicator = match view.indicator {
        Indicator::Active => Green.bold().paint(view.indicator.as_str()),
        Indicator::Weekend => Fixed(8).paint(view.indicator.as_str()),
        Indicator::Paused => Yellow.paint(view.indicator.as_str()),
    };

    let days: Vec<&str> = cfg.work_days.iter().map(|d| short_weekday(*d)).collect();

    println!(
        "\n=== {} {} ===",
        short_weekday(weekday_index(now.date())),
        now.format("%Y-%m-%d %H:%M:%S")
    );
    println!("Status        : {}", indicator);
    println!(
        "Work days     : {}",
        if days.is_empty() {
            "none".to_string()
        } else {
            days.join(", ")
        }
    );
    println!("Work day      : {}", yes_no(view.decision.is_work_day));
    println!("Active hours  : {}", yes_no(view.decision.is_active));
    println!("Next reminder : {} ({})", view.next_label, view.countdown);

    if let Some(entry) = &view.current_entry {
        println!(
            "Now           : {} {} (since {})",
            entry.kind.icon(),
            entry.label,
            entry.time.format("%H:%M")
        );
    }

    println!("\n{}", view.mascot);
}
