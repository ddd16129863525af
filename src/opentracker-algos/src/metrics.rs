use opentracker_codec::{TrackerError, WorkoutRecord};

/// Meters in a kilometer.
const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
const MIN_IN_H: f64 = 60.0;
/// Distance covered by one step, running and walking.
const STEP_LEN_M: f64 = 0.65;
/// Distance covered by one swim stroke.
const STROKE_LEN_M: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_WEIGHT_MULTIPLIER: f64 = 0.029;
/// km/h to m/s.
const KMH_IN_MS: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Metric set derived from one workout record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutMetrics {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl WorkoutMetrics {
    pub fn compute(record: &WorkoutRecord) -> Result<Self, TrackerError> {
        Ok(Self {
            distance_km: distance_km(record),
            mean_speed_kmh: mean_speed_kmh(record),
            calories_kcal: calories_kcal(record)?,
        })
    }
}

/// Distance in km: counted actions times the per-kind action length.
pub fn distance_km(record: &WorkoutRecord) -> f64 {
    let action_len = match record {
        WorkoutRecord::Swimming { .. } => STROKE_LEN_M,
        _ => STEP_LEN_M,
    };
    record.action() * action_len / M_IN_KM
}

/// Mean speed in km/h. Swimming derives it from pool length and lap count
/// rather than stroke distance.
///
/// A zero duration is not guarded: the division follows IEEE semantics and
/// yields an infinite (or NaN) speed.
pub fn mean_speed_kmh(record: &WorkoutRecord) -> f64 {
    match *record {
        WorkoutRecord::Swimming {
            duration_h,
            pool_length_m,
            pool_laps,
            ..
        } => pool_length_m * pool_laps / M_IN_KM / duration_h,
        _ => distance_km(record) / record.duration_h(),
    }
}

/// Calories burned over the workout. The fallback record has no calorie
/// formula; asking for one is an explicit error, never a silent zero.
pub fn calories_kcal(record: &WorkoutRecord) -> Result<f64, TrackerError> {
    match *record {
        WorkoutRecord::Running {
            duration_h,
            weight_kg,
            ..
        } => {
            let speed = mean_speed_kmh(record);
            Ok((RUN_SPEED_MULTIPLIER * speed + RUN_SPEED_SHIFT) * weight_kg / M_IN_KM
                * (duration_h * MIN_IN_H))
        }
        WorkoutRecord::SportsWalking {
            duration_h,
            weight_kg,
            height_cm,
            ..
        } => {
            let speed_ms = mean_speed_kmh(record) * KMH_IN_MS;
            let height_m = height_cm / CM_IN_M;
            Ok((WALK_WEIGHT_MULTIPLIER * weight_kg
                + speed_ms.powi(2) / height_m * WALK_SPEED_WEIGHT_MULTIPLIER * weight_kg)
                * (duration_h * MIN_IN_H))
        }
        WorkoutRecord::Swimming {
            duration_h,
            weight_kg,
            ..
        } => {
            let speed = mean_speed_kmh(record);
            Ok((speed + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * weight_kg * duration_h)
        }
        WorkoutRecord::Unknown { .. } => Err(TrackerError::Unimplemented),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(got: f64, want: f64) {
        assert!(
            (got - want).abs() < EPS,
            "expected {}, got {}",
            want,
            got
        );
    }

    #[test]
    fn running_distance_and_speed() {
        let record = WorkoutRecord::Running {
            action: 15000.0,
            duration_h: 1.0,
            weight_kg: 75.0,
        };
        // 15000 * 0.65 / 1000 = 9.75
        assert_close(distance_km(&record), 9.75);
        assert_close(mean_speed_kmh(&record), 9.75);
    }

    #[test]
    fn running_calories() {
        let record = WorkoutRecord::Running {
            action: 15000.0,
            duration_h: 1.0,
            weight_kg: 75.0,
        };
        // (18 * 9.75 + 1.79) * 75 / 1000 * 60 = 797.805
        assert_close(calories_kcal(&record).unwrap(), 797.805);
    }

    #[test]
    fn walking_distance_and_speed() {
        let record = WorkoutRecord::SportsWalking {
            action: 9000.0,
            duration_h: 1.0,
            weight_kg: 75.0,
            height_cm: 180.0,
        };
        // 9000 * 0.65 / 1000 = 5.85
        assert_close(distance_km(&record), 5.85);
        assert_close(mean_speed_kmh(&record), 5.85);
    }

    #[test]
    fn walking_calories() {
        let record = WorkoutRecord::SportsWalking {
            action: 9000.0,
            duration_h: 1.0,
            weight_kg: 75.0,
            height_cm: 180.0,
        };
        // speed_ms = 5.85 * 0.278 = 1.6263; height_m = 1.8
        // (0.035*75 + 1.6263^2/1.8 * 0.029 * 75) * 60 = 349.251747525
        assert_close(calories_kcal(&record).unwrap(), 349.251747525);
    }

    #[test]
    fn swimming_distance_uses_stroke_length() {
        let record = WorkoutRecord::Swimming {
            action: 720.0,
            duration_h: 1.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_laps: 40.0,
        };
        // 720 * 1.38 / 1000 = 0.9936
        assert_close(distance_km(&record), 0.9936);
    }

    #[test]
    fn swimming_speed_uses_pool() {
        let record = WorkoutRecord::Swimming {
            action: 720.0,
            duration_h: 1.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_laps: 40.0,
        };
        // 25 * 40 / 1000 / 1 = 1.0
        assert_close(mean_speed_kmh(&record), 1.0);
    }

    #[test]
    fn swimming_calories() {
        let record = WorkoutRecord::Swimming {
            action: 720.0,
            duration_h: 1.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_laps: 40.0,
        };
        // (1.0 + 1.1) * 2 * 80 * 1 = 336.0
        assert_close(calories_kcal(&record).unwrap(), 336.0);
    }

    #[test]
    fn unknown_record_has_distance_but_no_calories() {
        let record = WorkoutRecord::Unknown {
            action: 5000.0,
            duration_h: 2.0,
            weight_kg: 70.0,
        };
        assert_close(distance_km(&record), 3.25);
        assert_close(mean_speed_kmh(&record), 1.625);
        assert_eq!(calories_kcal(&record), Err(TrackerError::Unimplemented));
    }

    #[test]
    fn compute_bundles_all_metrics() {
        let record = WorkoutRecord::Running {
            action: 15000.0,
            duration_h: 1.0,
            weight_kg: 75.0,
        };
        let metrics = WorkoutMetrics::compute(&record).unwrap();
        assert_close(metrics.distance_km, 9.75);
        assert_close(metrics.mean_speed_kmh, 9.75);
        assert_close(metrics.calories_kcal, 797.805);
    }

    #[test]
    fn compute_fails_for_unknown_record() {
        let record = WorkoutRecord::Unknown {
            action: 5000.0,
            duration_h: 2.0,
            weight_kg: 70.0,
        };
        assert_eq!(
            WorkoutMetrics::compute(&record),
            Err(TrackerError::Unimplemented)
        );
    }

    #[test]
    fn zero_duration_gives_infinite_speed() {
        let record = WorkoutRecord::Running {
            action: 15000.0,
            duration_h: 0.0,
            weight_kg: 75.0,
        };
        assert!(mean_speed_kmh(&record).is_infinite());
        assert!(calories_kcal(&record).unwrap().is_infinite());
    }
}
