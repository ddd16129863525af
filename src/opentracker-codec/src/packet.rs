/// One reading burst from a wrist tracker: an activity code plus the
/// positional numeric fields for that activity.
///
/// The field layout depends on the code and is resolved by
/// [`WorkoutRecord::from_packet`](crate::WorkoutRecord::from_packet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPacket {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPacket {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}
