//! The map collaborator: where workouts are shown as markers.

pub mod terminal;

use crate::models::coords::Coords;
use crate::models::workout::Workout;
use crate::models::workout_id::WorkoutId;
use crate::models::workout_type::WorkoutType;

pub use terminal::TerminalMap;

/// Default zoom level used when centering on a workout.
pub const DEFAULT_ZOOM: u8 = 12;

/// A marker with its popup, one per workout.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: WorkoutId,
    pub coords: Coords,
    pub kind: WorkoutType,
    pub popup: String,
}

impl Marker {
    pub fn for_workout(w: &Workout) -> Self {
        Self {
            id: w.id().clone(),
            coords: w.location(),
            kind: w.kind(),
            popup: format!("{} {}", w.kind().icon(), w.label()),
        }
    }

    /// CSS-style class of the popup: "{type}-popup {id}".
    pub fn popup_class(&self) -> String {
        format!("{}-popup {}", self.kind.as_str(), self.id)
    }
}

/// Operations the session needs from a map widget.
pub trait MapView {
    fn set_view(&mut self, center: Coords, zoom: u8);
    fn fit_bounds(&mut self, points: &[Coords]);
    fn add_marker(&mut self, marker: Marker);
    fn remove_marker(&mut self, id: &WorkoutId);
    fn clear_markers(&mut self);
}
