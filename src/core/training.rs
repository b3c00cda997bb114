use crate::errors::{AppError, AppResult};
use crate::models::{InfoMessage, WorkoutType};

/// Metres in a kilometre.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const M_IN_HOUR: f64 = 60.0;
/// Default distance covered by one step, in metres.
pub const LEN_STEP: f64 = 0.65;

/// Common behaviour of every workout kind.
///
/// `distance` and `mean_speed` have default formulas based on the step
/// length; `spent_calories` has none, so each variant must provide its own.
pub trait Training {
    fn workout_type(&self) -> WorkoutType;

    /// Steps or strokes counted by the tracker.
    fn action(&self) -> u32;

    /// Duration in hours.
    fn duration(&self) -> f64;

    /// Body weight in kg.
    fn weight(&self) -> f64;

    /// Metres covered by one action.
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km.
    fn distance(&self) -> f64 {
        self.action() as f64 * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> AppResult<f64> {
        checked_div(self.distance(), self.duration(), "duration")
    }

    /// Calories burned, in kcal.
    fn spent_calories(&self) -> AppResult<f64>;

    fn show_training_info(&self) -> AppResult<InfoMessage> {
        Ok(InfoMessage::new(
            self.workout_type().name(),
            self.duration(),
            self.distance(),
            self.mean_speed()?,
            self.spent_calories()?,
        ))
    }
}

/// `numerator / denominator`, failing instead of producing inf/NaN.
pub(crate) fn checked_div(numerator: f64, denominator: f64, what: &'static str) -> AppResult<f64> {
    if denominator == 0.0 {
        return Err(AppError::DivisionByZero { what });
    }
    Ok(numerator / denominator)
}
