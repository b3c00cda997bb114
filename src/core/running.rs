use crate::core::reader::{expect_fields, real_field, whole_field};
use crate::core::training::{M_IN_HOUR, M_IN_KM, Training};
use crate::errors::AppResult;
use crate::models::WorkoutType;

/// Running: `[action, duration, weight]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
}

impl Running {
    pub const SPENT_CAL_1: f64 = 18.0;
    pub const SPENT_CAL_2: f64 = 1.79;

    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }

    pub fn from_data(data: &[f64]) -> AppResult<Self> {
        let kind = WorkoutType::Running;
        expect_fields(kind, data)?;
        Ok(Self::new(
            whole_field(kind, "action", data[0])?,
            real_field(kind, "duration", data[1])?,
            real_field(kind, "weight", data[2])?,
        ))
    }
}

impl Training for Running {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
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

    fn spent_calories(&self) -> AppResult<f64> {
        Ok((Self::SPENT_CAL_1 * self.mean_speed()? + Self::SPENT_CAL_2) * self.weight / M_IN_KM
            * self.duration
            * M_IN_HOUR)
    }
}
