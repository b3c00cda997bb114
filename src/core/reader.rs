//! Turns raw sensor packages into concrete workouts.

use crate::core::{Running, SportsWalking, Swimming, Training};
use crate::errors::{AppError, AppResult};
use crate::models::{SensorPackage, WorkoutType};

/// Build the workout matching `workout_type` from its positional `data`.
pub fn read_package(workout_type: &str, data: &[f64]) -> AppResult<Box<dyn Training>> {
    let kind = WorkoutType::from_code(workout_type)
        .ok_or_else(|| AppError::UnknownWorkoutType(workout_type.to_string()))?;

    let training: Box<dyn Training> = match kind {
        WorkoutType::Running => Box::new(Running::from_data(data)?),
        WorkoutType::SportsWalking => Box::new(SportsWalking::from_data(data)?),
        WorkoutType::Swimming => Box::new(Swimming::from_data(data)?),
    };

    Ok(training)
}

pub fn read_sensor_package(package: &SensorPackage) -> AppResult<Box<dyn Training>> {
    read_package(&package.workout_type, &package.data)
}

pub(crate) fn expect_fields(kind: WorkoutType, data: &[f64]) -> AppResult<()> {
    if data.len() != kind.field_count() {
        return Err(AppError::WrongFieldCount {
            code: kind.code().to_string(),
            expected: kind.field_count(),
            got: data.len(),
        });
    }
    Ok(())
}

/// Counters (steps, strokes, laps) must be whole non-negative numbers.
pub(crate) fn whole_field(kind: WorkoutType, field: &'static str, value: f64) -> AppResult<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(invalid(kind, field, value));
    }
    Ok(value as u32)
}

pub(crate) fn real_field(kind: WorkoutType, field: &'static str, value: f64) -> AppResult<f64> {
    if !value.is_finite() {
        return Err(invalid(kind, field, value));
    }
    Ok(value)
}

fn invalid(kind: WorkoutType, field: &'static str, value: f64) -> AppError {
    AppError::InvalidField {
        code: kind.code().to_string(),
        field,
        value,
    }
}
