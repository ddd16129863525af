use std::fmt::Display;

use opentracker_codec::{TrackerError, WorkoutKind, WorkoutRecord};

use crate::WorkoutMetrics;

/// Read-only view of one finished workout, rendered as a single report line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutSummary {
    pub kind: WorkoutKind,
    pub duration_h: f64,
    pub metrics: WorkoutMetrics,
}

impl WorkoutSummary {
    pub fn new(record: &WorkoutRecord) -> Result<Self, TrackerError> {
        Ok(Self {
            kind: record.kind(),
            duration_h: record.duration_h(),
            metrics: WorkoutMetrics::compute(record)?,
        })
    }
}

impl Display for WorkoutSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.kind,
            self.duration_h,
            self.metrics.distance_km,
            self.metrics.mean_speed_kmh,
            self.metrics.calories_kcal,
        ))
    }
}
