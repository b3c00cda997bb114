use crate::core::reader::{expect_fields, real_field, whole_field};
use crate::core::training::{M_IN_KM, Training, checked_div};
use crate::errors::AppResult;
use crate::models::WorkoutType;

/// Swimming: `[action, duration, weight, length_pool, count_pool]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
    /// metres
    pub length_pool: f64,
    pub count_pool: u32,
}

impl Swimming {
    pub const LEN_STEP: f64 = 1.38;
    pub const SWIM_COEF_1: f64 = 1.1;
    pub const SWIM_COEF_2: f64 = 2.0;

    pub fn new(action: u32, duration: f64, weight: f64, length_pool: f64, count_pool: u32) -> Self {
        Self {
            action,
            duration,
            weight,
            length_pool,
            count_pool,
        }
    }

    pub fn from_data(data: &[f64]) -> AppResult<Self> {
        let kind = WorkoutType::Swimming;
        expect_fields(kind, data)?;
        Ok(Self::new(
            whole_field(kind, "action", data[0])?,
            real_field(kind, "duration", data[1])?,
            real_field(kind, "weight", data[2])?,
            real_field(kind, "length_pool", data[3])?,
            whole_field(kind, "count_pool", data[4])?,
        ))
    }
}

impl Training for Swimming {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    /// Speed comes from the pool laps, not from the stroke count.
    fn mean_speed(&self) -> AppResult<f64> {
        checked_div(
            self.length_pool * self.count_pool as f64 / M_IN_KM,
            self.duration,
            "duration",
        )
    }

    fn spent_calories(&self) -> AppResult<f64> {
        Ok(
            (self.mean_speed()? + Self::SWIM_COEF_1) * Self::SWIM_COEF_2 * self.weight
                * self.duration,
        )
    }
}
