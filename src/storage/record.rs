//! On-disk shape of a workout inside the JSON blob.

use crate::errors::AppResult;
use crate::models::coords::Coords;
use crate::models::workout::{Workout, WorkoutDraft};
use crate::models::workout_id::WorkoutId;
use crate::models::workout_type::WorkoutType;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Every primitive input is stored, so pace/speed can be recomputed on load.
/// `pace` and `speed` are written for readability and ignored when read back.
/// The `cadance` / `discription` aliases accept dumps from the browser app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredWorkout {
    pub id: WorkoutId,
    pub date: DateTime<Local>,
    #[serde(rename = "type")]
    pub kind: WorkoutType,
    pub distance: f64,
    pub duration: f64,
    pub coords: Coords,
    #[serde(default, alias = "discription")]
    pub description: String,
    #[serde(default, alias = "cadance", skip_serializing_if = "Option::is_none")]
    pub cadence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<f64>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub pace: Option<f64>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl From<&Workout> for StoredWorkout {
    fn from(w: &Workout) -> Self {
        Self {
            id: w.id().clone(),
            date: *w.created_at(),
            kind: w.kind(),
            distance: w.distance_km(),
            duration: w.duration_min(),
            coords: w.location(),
            description: w.label().to_string(),
            cadence: w.cadence_spm(),
            elevation_gain: w.elevation_gain_m(),
            pace: w.pace_min_per_km(),
            speed: w.speed_km_per_h(),
        }
    }
}

impl StoredWorkout {
    /// Rebuild a validated `Workout`; a missing kind-specific field is invalid.
    pub fn into_workout(self) -> AppResult<Workout> {
        let draft = match self.kind {
            WorkoutType::Running => {
                WorkoutDraft::running(self.distance, self.duration, self.cadence.unwrap_or(f64::NAN))
            }
            WorkoutType::Cycling => WorkoutDraft::cycling(
                self.distance,
                self.duration,
                self.elevation_gain.unwrap_or(f64::NAN),
            ),
        };

        let label = Some(self.description).filter(|d| !d.trim().is_empty());
        Workout::restore(self.id, self.date, self.coords, draft, label)
    }
}
