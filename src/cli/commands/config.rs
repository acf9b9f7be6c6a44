use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
        set,
    } = cmd
    {
        // ---- SET ----
        if !set.is_empty() {
            // start from the file on disk; one that fails to load is never replaced
            let current = Config::load_from(path)?;
            let updated = current.with_assignments(set)?;
            updated.save_to(path)?;
            success(format!("Configuration saved to {}", path.display()));
        }

        // ---- MIGRATE ----
        if *migrate {
            if !path.exists() {
                warning(format!("No configuration file at {}", path.display()));
            } else {
                let actions = migrate::migrate_file(path)?;
                if actions.is_empty() {
                    info("Configuration already up to date");
                } else {
                    for a in &actions {
                        success(a);
                    }
                }
            }
        }

        // ---- CHECK ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (run `rstandup init`)",
                    path.display()
                ));
            } else {
                let missing = migrate::missing_fields(path)?;
                if missing.is_empty() {
                    success("All configuration fields present");
                } else {
                    warning(format!("Missing fields: {}", missing.join(", ")));
                    info("Run `rstandup config --migrate` to add them with default values");
                }

                match Config::load_from(path).and_then(|c| c.schedule()) {
                    Ok(schedule) if !schedule.has_ordered_boundaries() => warning(
                        "Boundaries are out of order (expected start < lunch start < lunch end < end)",
                    ),
                    Ok(schedule) if schedule.work_days.is_empty() => {
                        warning("No work days selected, reminders will never fire")
                    }
                    Ok(_) => success("Configuration is valid"),
                    Err(e) => warning(e),
                }
            }
        }

        // ---- PRINT ----
        if *print_config {
            info("Current configuration:\n");
            ConfigLogic::print(path, cfg)?;
        }

        // ---- EDIT ----
        if *edit_config {
            ConfigLogic::edit(path, editor)?;
        }
    }

    Ok(())
}
