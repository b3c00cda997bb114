#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutType {
    Running,       // RUN
    SportsWalking, // WLK
    Swimming,      // SWM
}

impl WorkoutType {
    /// Sensor code as sent by the tracker.
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutType::Running => "RUN",
            WorkoutType::SportsWalking => "WLK",
            WorkoutType::Swimming => "SWM",
        }
    }

    /// Label printed in the report.
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::SportsWalking => "SportsWalking",
            WorkoutType::Swimming => "Swimming",
        }
    }

    /// Number of positional values a package of this type carries.
    pub fn field_count(&self) -> usize {
        match self {
            WorkoutType::Running => 3,
            WorkoutType::SportsWalking => 4,
            WorkoutType::Swimming => 5,
        }
    }

    /// Codes are matched exactly: the tracker always sends them uppercase.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RUN" => Some(WorkoutType::Running),
            "WLK" => Some(WorkoutType::SportsWalking),
            "SWM" => Some(WorkoutType::Swimming),
            _ => None,
        }
    }
}
