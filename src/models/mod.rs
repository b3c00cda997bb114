pub mod info_message;
pub mod package;
pub mod workout_type;

pub use info_message::InfoMessage;
pub use package::SensorPackage;
pub use workout_type::WorkoutType;
