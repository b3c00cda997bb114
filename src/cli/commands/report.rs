use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::output::OutputFormat;
use crate::core::read_package;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        code,
        values,
        format,
    } = cmd
    {
        let info = read_package(code, values)?.show_training_info()?;

        match format.unwrap_or(cfg.output_format) {
            OutputFormat::Text => println!("{}", info),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&info)?),
        }
    }

    Ok(())
}
