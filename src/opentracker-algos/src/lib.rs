pub(crate) mod metrics;
pub use metrics::{WorkoutMetrics, calories_kcal, distance_km, mean_speed_kmh};

pub(crate) mod summary;
pub use summary::WorkoutSummary;
