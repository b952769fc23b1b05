use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{add_missing_keys, missing_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn run_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Open the configuration in `requested`, falling back to the default editor.
fn edit(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let fallback = default_editor();
    let editor = requested.unwrap_or(&fallback);

    if run_editor(editor, path) {
        success(format!("Configuration file edited using '{}'", editor));
        return Ok(());
    }
    if editor == fallback {
        return Err(AppError::Config(format!("Failed to start editor '{}'", editor)));
    }

    warning(format!(
        "Editor '{}' not available, falling back to '{}'",
        editor, fallback
    ));
    if run_editor(&fallback, path) {
        success(format!("Configuration file edited using fallback '{}'", fallback));
        Ok(())
    } else {
        Err(AppError::Config(format!("Failed to start editor '{}'", fallback)))
    }
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        println!("📄 Current configuration:\n");
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("{}", yaml);
    }

    if *check {
        if !path.exists() {
            warning(format!("No configuration file at {:?}; defaults in use.", path));
        } else {
            let missing = missing_keys(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing keys: {}", missing.join(", ")));
                info("Run `rplanner config --migrate` to add them with default values.");
            }
        }
    }

    if *migrate {
        if !path.exists() {
            warning(format!("No configuration file at {:?}; run `rplanner init`.", path));
        } else {
            let added = add_missing_keys(&path)?;
            if added.is_empty() {
                info("Configuration already up to date.");
            } else {
                success(format!("Added keys: {}", added.join(", ")));
            }
        }
    }

    if *edit_config {
        edit(&path, editor.as_deref())?;
    }

    Ok(())
}
