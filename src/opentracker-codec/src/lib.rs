#[macro_use]
extern crate serde;

mod packet;
pub use packet::SensorPacket;

mod error;
pub use error::TrackerError;

mod workout;
pub use workout::{WorkoutKind, WorkoutRecord};
