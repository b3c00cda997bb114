use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::path::{Path, PathBuf};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, custom_path: Option<&Path>) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
    } = cmd
    {
        let path: PathBuf = custom_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Config::config_file);

        // ---- INIT CONFIG ----
        if *init {
            if path.exists() && !*force {
                return Err(AppError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            Config::default().save_to(&path)?;
            success(format!("Config file: {}", path.display()));
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            info(format!("Current configuration ({}):", path.display()));
            print!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
