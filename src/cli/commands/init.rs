use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Creates the config directory and writes a default configuration file.
/// An existing file is never overwritten.
pub fn handle(path: &Path) -> AppResult<()> {
    header("Initializing rStandup");

    if Config::init_all(path)? {
        success(format!("Config file: {}", path.display()));
    } else {
        info(format!(
            "Config file already exists, left untouched: {}",
            path.display()
        ));
    }

    success("rStandup initialization completed!");
    Ok(())
}
