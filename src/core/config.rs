use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the file as stored, or the effective defaults if there is none.
    pub fn print(path: &Path, cfg: &Config) -> AppResult<()> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|_| AppError::ConfigLoad(path.display().to_string()))?;
            println!("{}", content);
        } else {
            warning(format!(
                "No configuration file at {}, showing defaults",
                path.display()
            ));
            println!("{}", serde_yaml::to_string(cfg)?);
        }
        Ok(())
    }

    /// Open the file in an editor: `--editor`, then $EDITOR / $VISUAL, then
    /// the platform default. A failing requested editor falls back once.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        if Self::run_editor(&editor_to_use, path) {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
            return Ok(());
        }

        if editor_to_use != default_editor {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));
            if Self::run_editor(&default_editor, path) {
                success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                ));
                return Ok(());
            }
        }

        Err(AppError::Config(format!(
            "failed to edit {} with '{}'",
            path.display(),
            default_editor
        )))
    }

    fn run_editor(editor: &str, path: &Path) -> bool {
        Command::new(editor)
            .arg(path)
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}
