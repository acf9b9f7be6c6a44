use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::{build_daily_schedule, is_work_day};
use crate::core::status::current_entry_index;
use crate::errors::AppResult;
use crate::utils::date;
use crate::utils::table::{Column, Table};
use ansi_term::Colour::Cyan;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule { at, json } = cmd {
        let schedule = cfg.schedule()?;
        let entries = build_daily_schedule(&schedule);

        if *json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }

        let now = date::now_or(at.as_deref())?;
        let current = current_entry_index(&entries, is_work_day(&schedule, now), now);

        let mut table = Table::new(vec![
            Column::new("", 2),
            Column::new("TIME", 5),
            Column::new("", 2),
            Column::new("EVENT", 16),
        ]);

        for (i, entry) in entries.iter().enumerate() {
            let marker = if current == Some(i) { "▶" } else { "" };
            table.add_row(vec![
                marker.to_string(),
                entry.time.format("%H:%M").to_string(),
                entry.kind.icon().to_string(),
                entry.label.to_string(),
            ]);
        }

        println!(
            "{}",
            Cyan.bold().paint(format!(
                "Daily schedule (every {} min)",
                schedule.interval_minutes()
            ))
        );
        print!("{}", table.render());

        if !schedule.has_ordered_boundaries() {
            crate::ui::messages::warning("Boundaries are out of order; the schedule is degenerate");
        }
    }
    Ok(())
}
