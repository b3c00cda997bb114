use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::batch::{InputFormat, load_packages};
use crate::core::output::print_reports;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Batch {
        file,
        input,
        format,
    } = cmd
    {
        let input = match input {
            Some(f) => *f,
            None => InputFormat::from_path(file)?,
        };
        let packages = load_packages(file, Some(input))?;

        if packages.is_empty() {
            warning(format!(
                "No packages found in {} ({} input)",
                file.display(),
                input.as_str()
            ));
            return Ok(());
        }

        print_reports(&packages, format.unwrap_or(cfg.output_format))?;
    }

    Ok(())
}
