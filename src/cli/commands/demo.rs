use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::output::print_reports;
use crate::errors::AppResult;
use crate::models::SensorPackage;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Demo { format } = cmd {
        let format = format.unwrap_or(cfg.output_format);
        print_reports(&SensorPackage::samples(), format)?;
    }

    Ok(())
}
