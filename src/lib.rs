//! rStandup library root.
//! Exposes the schedule engine, the tick driver, the CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, path),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::Schedule { .. } => cli::commands::schedule::handle(&cli.command, cfg),
        Commands::Watch { .. } => cli::commands::watch::handle(cli, cfg, path),
    }
}

/// `RSTANDUP_LOG` wins over `log_level` from the config file.
fn init_logging(cfg: &Config) {
    let env = env_logger::Env::new().filter_or("RSTANDUP_LOG", cfg.log_level.as_str());
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let path = Config::resolve_path(cli.config.as_deref());

    // A broken file must not lock the user out of the commands that fix it.
    let cfg = match Config::load_from(&path) {
        Ok(cfg) => cfg,
        Err(e) if matches!(cli.command, Commands::Init | Commands::Config { .. }) => {
            ui::messages::warning(format!("{} (falling back to defaults)", e));
            Config::default()
        }
        Err(e) => return Err(e),
    };

    init_logging(&cfg);
    log::debug!("using configuration {}", path.display());

    dispatch(&cli, &cfg, &path)
}
