//! Loading sensor packages from files.

use crate::core::reader::read_sensor_package;
use crate::errors::{AppError, AppResult};
use crate::models::{InfoMessage, SensorPackage};
use clap::ValueEnum;
use csv::{ReaderBuilder, Trim};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Json,
    Yaml,
    Csv,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Json => "json",
            InputFormat::Yaml => "yaml",
            InputFormat::Csv => "csv",
        }
    }

    /// Guess the format from the file extension.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(InputFormat::Json),
            "yaml" | "yml" => Ok(InputFormat::Yaml),
            "csv" => Ok(InputFormat::Csv),
            _ => Err(AppError::InvalidInputFormat(path.display().to_string())),
        }
    }
}

/// Read every package in `path`. Without an explicit `format` the file
/// extension decides.
pub fn load_packages(path: &Path, format: Option<InputFormat>) -> AppResult<Vec<SensorPackage>> {
    let format = match format {
        Some(f) => f,
        None => InputFormat::from_path(path)?,
    };

    match format {
        InputFormat::Json => {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        InputFormat::Yaml => {
            let content = fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&content)?)
        }
        InputFormat::Csv => read_csv(path),
    }
}

/// Rows look like `RUN,15000,1,75`: no header, one package per row.
fn read_csv(path: &Path) -> AppResult<Vec<SensorPackage>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_path(path)?;

    let mut packages = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let mut cells = record.iter();

        let Some(code) = cells.next() else {
            continue;
        };

        let data = cells
            .map(|c| {
                c.parse::<f64>()
                    .map_err(|_| AppError::InvalidNumber(c.to_string()))
            })
            .collect::<AppResult<Vec<f64>>>()?;

        packages.push(SensorPackage::new(code, data));
    }

    Ok(packages)
}

/// One summary per package, in input order. Stops at the first faulty package.
pub fn summarize(packages: &[SensorPackage]) -> AppResult<Vec<InfoMessage>> {
    packages.iter().map(summarize_one).collect()
}

pub fn summarize_one(package: &SensorPackage) -> AppResult<InfoMessage> {
    read_sensor_package(package)?.show_training_info()
}
