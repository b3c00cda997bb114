use serde::Deserialize;

/// Raw data received from the tracker: a type code plus positional values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SensorPackage {
    #[serde(rename = "type")]
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Packages used by the `demo` command.
    pub fn samples() -> Vec<SensorPackage> {
        vec![
            SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ]
    }
}
