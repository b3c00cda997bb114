//! Unified application error type.
//! Every module (core, cli, config) returns AppError so that main.rs has a
//! single place where faults are reported.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Sensor package errors
    // ---------------------------
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("Wrong field count for {code}: expected {expected}, got {got}")]
    WrongFieldCount {
        code: String,
        expected: usize,
        got: usize,
    },

    #[error("Invalid value for {code} field '{field}': {value}")]
    InvalidField {
        code: String,
        field: &'static str,
        value: f64,
    },

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Input format not supported: {0}")]
    InvalidInputFormat(String),

    // ---------------------------
    // Arithmetic
    // ---------------------------
    #[error("Division by zero: {what} must not be 0")]
    DivisionByZero { what: &'static str },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
