//! Workout calculations: the `Training` capability, its three variants,
//! the package dispatcher and batch helpers.

pub mod batch;
pub mod output;
pub mod reader;
pub mod running;
pub mod swimming;
pub mod training;
pub mod walking;

pub use reader::read_package;
pub use running::Running;
pub use swimming::Swimming;
pub use training::Training;
pub use walking::SportsWalking;
