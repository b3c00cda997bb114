//! Rendering summaries as text lines or JSON.

use crate::core::batch::{summarize, summarize_one};
use crate::errors::AppResult;
use crate::models::{InfoMessage, SensorPackage};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render already computed summaries: one line each, or a JSON array.
pub fn render(messages: &[InfoMessage], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(messages
            .iter()
            .map(InfoMessage::get_message)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(messages)?),
    }
}

/// Print the report of every package to stdout.
///
/// Text lines are printed as soon as each package is computed, so a faulty
/// package still leaves the reports before it on screen.
pub fn print_reports(packages: &[SensorPackage], format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Text => {
            for package in packages {
                println!("{}", summarize_one(package)?);
            }
        }
        OutputFormat::Json => {
            let messages = summarize(packages)?;
            println!("{}", render(&messages, format)?);
        }
    }
    Ok(())
}
