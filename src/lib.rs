//! fitness-tracker library root.
//! Exposes the CLI parser, the high-level run() function and the workout model.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Report line for one raw sensor package.
pub fn report(workout_type: &str, data: &[f64]) -> AppResult<String> {
    let training = crate::core::read_package(workout_type, data)?;
    Ok(training.show_training_info()?.get_message())
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // no subcommand: behave like `demo`
    let default_cmd = Commands::Demo { format: None };
    let cmd = cli.command.as_ref().unwrap_or(&default_cmd);

    match cmd {
        Commands::Demo { .. } => cli::commands::demo::handle(cmd, cfg),
        Commands::Report { .. } => cli::commands::report::handle(cmd, cfg),
        Commands::Batch { .. } => cli::commands::batch::handle(cmd, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cmd, cfg, cli.config.as_deref()),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `config --init` must be able to replace an unparsable file
    let cfg = match &cli.command {
        Some(Commands::Config { init: true, .. }) => Config::default(),
        _ => Config::load(cli.config.as_deref())?,
    };
    ui::messages::set_color(cfg.color);

    dispatch(&cli, &cfg)
}
