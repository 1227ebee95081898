use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// The configuration actually in effect, as YAML.
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Open `path` in the requested editor, falling back to $EDITOR/$VISUAL
    /// and then to the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "configuration file not found: {} (run `init` first)",
                path.display()
            )));
        }

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

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                ));
                Ok(())
            }
            _ => {
                error(format!(
                    "Failed to edit configuration file using fallback '{}'",
                    default_editor
                ));
                Err(AppError::Config(format!("editor '{}' failed", default_editor)))
            }
        }
    }
}
