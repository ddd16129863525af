use std::fmt;

use crate::{SensorPacket, TrackerError};

/// Display tag for a decoded workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        })
    }
}

/// A sensor packet resolved into its workout variant. The tag is fixed at
/// decode time and the fields are never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutRecord {
    Running {
        action: f64,
        duration_h: f64,
        weight_kg: f64,
    },
    SportsWalking {
        action: f64,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    },
    Swimming {
        action: f64,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: f64,
    },
    /// Fallback for activity codes the decoder does not recognize. Only the
    /// running-shaped fields are kept; no calorie formula is defined for
    /// this variant.
    Unknown {
        action: f64,
        duration_h: f64,
        weight_kg: f64,
    },
}

impl WorkoutRecord {
    pub fn from_packet(packet: &SensorPacket) -> Result<Self, TrackerError> {
        let data = packet.data.as_slice();
        match packet.workout_type.as_str() {
            "SWM" => {
                let [action, duration_h, weight_kg, pool_length_m, pool_laps] = fields(data)?;
                Ok(Self::Swimming {
                    action,
                    duration_h,
                    weight_kg,
                    pool_length_m,
                    pool_laps,
                })
            }
            "RUN" => {
                let [action, duration_h, weight_kg] = fields(data)?;
                Ok(Self::Running {
                    action,
                    duration_h,
                    weight_kg,
                })
            }
            "WLK" => {
                let [action, duration_h, weight_kg, height_cm] = fields(data)?;
                Ok(Self::SportsWalking {
                    action,
                    duration_h,
                    weight_kg,
                    height_cm,
                })
            }
            // Unrecognized codes still decode; fields beyond the
            // running-shaped three are ignored.
            _ => {
                let [action, duration_h, weight_kg] = leading_fields(data)?;
                Ok(Self::Unknown {
                    action,
                    duration_h,
                    weight_kg,
                })
            }
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running { .. } => WorkoutKind::Running,
            Self::SportsWalking { .. } => WorkoutKind::SportsWalking,
            Self::Swimming { .. } => WorkoutKind::Swimming,
            // The fallback record is running-shaped and reports as such.
            Self::Unknown { .. } => WorkoutKind::Running,
        }
    }

    /// Step or stroke count.
    pub fn action(&self) -> f64 {
        match *self {
            Self::Running { action, .. }
            | Self::SportsWalking { action, .. }
            | Self::Swimming { action, .. }
            | Self::Unknown { action, .. } => action,
        }
    }

    pub fn duration_h(&self) -> f64 {
        match *self {
            Self::Running { duration_h, .. }
            | Self::SportsWalking { duration_h, .. }
            | Self::Swimming { duration_h, .. }
            | Self::Unknown { duration_h, .. } => duration_h,
        }
    }

    pub fn weight_kg(&self) -> f64 {
        match *self {
            Self::Running { weight_kg, .. }
            | Self::SportsWalking { weight_kg, .. }
            | Self::Swimming { weight_kg, .. }
            | Self::Unknown { weight_kg, .. } => weight_kg,
        }
    }
}

fn fields<const N: usize>(data: &[f64]) -> Result<[f64; N], TrackerError> {
    <[f64; N]>::try_from(data).map_err(|_| TrackerError::InvalidFieldCount {
        expected: N,
        got: data.len(),
    })
}

fn leading_fields<const N: usize>(data: &[f64]) -> Result<[f64; N], TrackerError> {
    if data.len() < N {
        return Err(TrackerError::InvalidFieldCount {
            expected: N,
            got: data.len(),
        });
    }
    fields(&data[..N])
}
