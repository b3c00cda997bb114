use crate::core::reader::{expect_fields, real_field, whole_field};
use crate::core::training::{M_IN_HOUR, Training, checked_div};
use crate::errors::AppResult;
use crate::models::WorkoutType;

/// Sports walking: `[action, duration, weight, height]`, height in cm.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
    pub height: f64,
}

impl SportsWalking {
    pub const SW_COEF_1: f64 = 0.035;
    pub const SW_COEF_2: f64 = 0.029;
    /// km/h → m/s
    pub const KMH_IN_MSEC: f64 = 0.278;
    pub const CM_IN_M: f64 = 100.0;

    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            height,
        }
    }

    pub fn from_data(data: &[f64]) -> AppResult<Self> {
        let kind = WorkoutType::SportsWalking;
        expect_fields(kind, data)?;
        Ok(Self::new(
            whole_field(kind, "action", data[0])?,
            real_field(kind, "duration", data[1])?,
            real_field(kind, "weight", data[2])?,
            real_field(kind, "height", data[3])?,
        ))
    }
}

impl Training for SportsWalking {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::SportsWalking
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

    // SW_COEF_2 * weight scales only the speed/height term.
    fn spent_calories(&self) -> AppResult<f64> {
        let speed_ms = self.mean_speed()? * Self::KMH_IN_MSEC;
        let height_m = self.height / Self::CM_IN_M;
        let speed_term = checked_div(speed_ms.powi(2), height_m, "height")?;

        Ok(
            (Self::SW_COEF_1 * self.weight + speed_term * Self::SW_COEF_2 * self.weight)
                * self.duration
                * M_IN_HOUR,
        )
    }
}
