use super::{coords::Coords, workout_id::WorkoutId, workout_type::WorkoutType};
use crate::errors::{AppError, AppResult};
use crate::utils::date::workout_label;
use crate::utils::formatting::round1;
use chrono::{DateTime, Local};

const RUNNING_INVALID_MSG: &str = "Make sure your inputs are positive numbers!";
const CYCLING_INVALID_MSG: &str =
    "Make sure your Duration and Distance inputs are positive numbers!";

/// Kind-specific input, as read from the form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivityInput {
    Running { cadence_spm: f64 },
    Cycling { elevation_gain_m: f64 },
}

impl ActivityInput {
    pub fn kind(&self) -> WorkoutType {
        match self {
            ActivityInput::Running { .. } => WorkoutType::Running,
            ActivityInput::Cycling { .. } => WorkoutType::Cycling,
        }
    }
}

/// Validated-or-not form values, before a map location is attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutDraft {
    pub distance_km: f64,
    pub duration_min: f64,
    pub activity: ActivityInput,
}

impl WorkoutDraft {
    pub fn running(distance_km: f64, duration_min: f64, cadence_spm: f64) -> Self {
        Self {
            distance_km,
            duration_min,
            activity: ActivityInput::Running { cadence_spm },
        }
    }

    pub fn cycling(distance_km: f64, duration_min: f64, elevation_gain_m: f64) -> Self {
        Self {
            distance_km,
            duration_min,
            activity: ActivityInput::Cycling { elevation_gain_m },
        }
    }

    pub fn kind(&self) -> WorkoutType {
        self.activity.kind()
    }

    /// Reject non-positive (or non-numeric) distance, duration and cadence.
    pub fn validate(&self) -> AppResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;

        match self.activity {
            ActivityInput::Running { cadence_spm } => {
                if !positive(self.distance_km)
                    || !positive(self.duration_min)
                    || !positive(cadence_spm)
                {
                    return Err(AppError::InvalidInput(RUNNING_INVALID_MSG.into()));
                }
            }
            ActivityInput::Cycling { elevation_gain_m } => {
                if !positive(self.distance_km)
                    || !positive(self.duration_min)
                    || !elevation_gain_m.is_finite()
                {
                    return Err(AppError::InvalidInput(CYCLING_INVALID_MSG.into()));
                }
            }
        }
        Ok(())
    }
}

/// Kind-specific fields of a stored workout, derived metric included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activity {
    Running {
        cadence_spm: f64,
        pace_min_per_km: f64,
    },
    Cycling {
        elevation_gain_m: f64,
        speed_km_per_h: f64,
    },
}

impl Activity {
    fn derive(distance_km: f64, duration_min: f64, input: ActivityInput) -> Self {
        match input {
            ActivityInput::Running { cadence_spm } => Activity::Running {
                cadence_spm,
                pace_min_per_km: pace_min_per_km(distance_km, duration_min),
            },
            ActivityInput::Cycling { elevation_gain_m } => Activity::Cycling {
                elevation_gain_m,
                speed_km_per_h: speed_km_per_h(distance_km, duration_min),
            },
        }
    }

    pub fn kind(&self) -> WorkoutType {
        match self {
            Activity::Running { .. } => WorkoutType::Running,
            Activity::Cycling { .. } => WorkoutType::Cycling,
        }
    }

    pub fn input(&self) -> ActivityInput {
        match *self {
            Activity::Running { cadence_spm, .. } => ActivityInput::Running { cadence_spm },
            Activity::Cycling {
                elevation_gain_m, ..
            } => ActivityInput::Cycling { elevation_gain_m },
        }
    }
}

/// Minutes per kilometre, one decimal.
pub fn pace_min_per_km(distance_km: f64, duration_min: f64) -> f64 {
    round1(duration_min / distance_km)
}

/// Kilometres per hour, one decimal.
pub fn speed_km_per_h(distance_km: f64, duration_min: f64) -> f64 {
    round1(distance_km / (duration_min / 60.0))
}

/// One recorded workout. Built fully in one step and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Local>,
    distance_km: f64,
    duration_min: f64,
    location: Coords,
    label: String,
    activity: Activity,
}

impl Workout {
    pub fn new(
        id: WorkoutId,
        created_at: DateTime<Local>,
        location: Coords,
        draft: WorkoutDraft,
    ) -> AppResult<Self> {
        let label = workout_label(draft.kind(), &created_at);
        Self::restore(id, created_at, location, draft, Some(label))
    }

    /// Rebuild a workout from stored primitives. The label is kept verbatim
    /// when present; derived metrics are always recomputed.
    pub fn restore(
        id: WorkoutId,
        created_at: DateTime<Local>,
        location: Coords,
        draft: WorkoutDraft,
        label: Option<String>,
    ) -> AppResult<Self> {
        draft.validate()?;
        if !location.is_finite() {
            return Err(AppError::InvalidCoordinates(location.to_string()));
        }

        let label = label
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| workout_label(draft.kind(), &created_at));

        Ok(Self {
            id,
            created_at,
            distance_km: draft.distance_km,
            duration_min: draft.duration_min,
            location,
            label,
            activity: Activity::derive(draft.distance_km, draft.duration_min, draft.activity),
        })
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Local> {
        &self.created_at
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn location(&self) -> Coords {
        self.location
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    pub fn kind(&self) -> WorkoutType {
        self.activity.kind()
    }

    /// Primitive inputs the workout was built from.
    pub fn draft(&self) -> WorkoutDraft {
        WorkoutDraft {
            distance_km: self.distance_km,
            duration_min: self.duration_min,
            activity: self.activity.input(),
        }
    }

    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.activity {
            Activity::Running {
                pace_min_per_km, ..
            } => Some(pace_min_per_km),
            Activity::Cycling { .. } => None,
        }
    }

    pub fn speed_km_per_h(&self) -> Option<f64> {
        match self.activity {
            Activity::Cycling { speed_km_per_h, .. } => Some(speed_km_per_h),
            Activity::Running { .. } => None,
        }
    }

    pub fn cadence_spm(&self) -> Option<f64> {
        match self.activity {
            Activity::Running { cadence_spm, .. } => Some(cadence_spm),
            Activity::Cycling { .. } => None,
        }
    }

    pub fn elevation_gain_m(&self) -> Option<f64> {
        match self.activity {
            Activity::Cycling {
                elevation_gain_m, ..
            } => Some(elevation_gain_m),
            Activity::Running { .. } => None,
        }
    }

    /// Derived metric with its unit: pace for runs, speed for rides.
    pub fn metric(&self) -> (f64, &'static str) {
        match self.activity {
            Activity::Running {
                pace_min_per_km, ..
            } => (pace_min_per_km, "min/km"),
            Activity::Cycling { speed_km_per_h, .. } => (speed_km_per_h, "km/h"),
        }
    }
}
