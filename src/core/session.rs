//! The application session: owns the workouts and drives map, form and store.

use crate::errors::{AppError, AppResult};
use crate::form::WorkoutForm;
use crate::map::{DEFAULT_ZOOM, MapView, Marker};
use crate::models::collection::WorkoutCollection;
use crate::models::coords::Coords;
use crate::models::workout::Workout;
use crate::models::workout_id::WorkoutId;
use crate::models::workout_type::WorkoutType;
use crate::storage::KeyValueStore;
use crate::storage::persistence;
use crate::storage::record::StoredWorkout;
use chrono::{DateTime, Local};

/// Hover text of the (not yet implemented) edit action.
pub const EDIT_COMING_SOON: &str = "Coming soon ...";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapSettings {
    pub zoom: u8,
    pub default_center: Coords,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            default_center: Coords {
                lat: 35.7114346,
                lng: 51.3529667,
            },
        }
    }
}

pub struct Session<S: KeyValueStore, M: MapView> {
    store: S,
    map: M,
    form: WorkoutForm,
    workouts: WorkoutCollection,
    pending_click: Option<Coords>,
    settings: MapSettings,
}

impl<S: KeyValueStore, M: MapView> Session<S, M> {
    /// Load history from `store` and draw it on `map`.
    pub fn start(store: S, mut map: M, settings: MapSettings) -> AppResult<Self> {
        let workouts = persistence::load(&store)?;

        for w in &workouts {
            map.add_marker(Marker::for_workout(w));
        }

        if workouts.is_empty() {
            map.set_view(settings.default_center, settings.zoom);
        } else {
            map.fit_bounds(&workouts.coords());
        }

        Ok(Self {
            store,
            map,
            form: WorkoutForm::new(),
            workouts,
            pending_click: None,
            settings,
        })
    }

    pub fn workouts(&self) -> &WorkoutCollection {
        &self.workouts
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn form(&self) -> &WorkoutForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut WorkoutForm {
        &mut self.form
    }

    pub fn settings(&self) -> MapSettings {
        self.settings
    }

    pub fn pending_click(&self) -> Option<Coords> {
        self.pending_click
    }

    /// A map click opens the form for a workout at `coords`.
    pub fn click_map(&mut self, coords: Coords) {
        self.pending_click = Some(coords);
        self.form.show();
    }

    pub fn select_kind(&mut self, kind: WorkoutType) {
        self.form.select_kind(kind);
    }

    pub fn submit_form(&mut self) -> AppResult<&Workout> {
        self.submit_form_at(Local::now())
    }

    /// Turn the open form into a workout created at `now`.
    ///
    /// Invalid input or a failed save leaves the collection, the map, the
    /// store and the open form as they were.
    pub fn submit_form_at(&mut self, now: DateTime<Local>) -> AppResult<&Workout> {
        let location = self.pending_click.ok_or(AppError::NoPendingLocation)?;
        let draft = self.form.read()?;

        let id = self.workouts.next_id(&now);
        let workout = Workout::new(id, now, location, draft)?;

        let mut candidate = self.workouts.clone();
        candidate.push(workout.clone());
        persistence::save(&mut self.store, &candidate)?;

        self.map.add_marker(Marker::for_workout(&workout));
        self.form.hide();
        self.pending_click = None;

        Ok(self.workouts.push(workout))
    }

    /// Center the map on a workout. Unknown ids are ignored.
    pub fn focus(&mut self, id: &WorkoutId) -> Option<Coords> {
        let coords = self.workouts.find(id)?.location();
        self.map.set_view(coords, self.settings.zoom);
        Some(coords)
    }

    /// Delete one workout. Returns `false` (and does nothing) for unknown ids.
    /// Nothing changes when the save fails.
    pub fn delete(&mut self, id: &WorkoutId) -> AppResult<bool> {
        if !self.workouts.contains(id) {
            return Ok(false);
        }

        let mut candidate = self.workouts.clone();
        candidate.remove(id);
        persistence::save(&mut self.store, &candidate)?;

        self.workouts = candidate;
        self.map.remove_marker(id);
        Ok(true)
    }

    /// Drop every workout and the persisted value. The persisted value goes
    /// first, so a store failure keeps the session intact.
    pub fn clear_all(&mut self) -> AppResult<usize> {
        persistence::clear(&mut self.store)?;

        let n = self.workouts.len();
        self.workouts.clear();
        self.map.clear_markers();
        Ok(n)
    }

    /// Editing is not implemented: known ids get the "coming soon" hint,
    /// nothing is ever changed.
    pub fn edit(&self, id: &WorkoutId) -> Option<&'static str> {
        self.workouts.find(id).map(|_| EDIT_COMING_SOON)
    }

    /// Append stored records (e.g. from a file). Ids already taken are
    /// re-assigned; invalid records are skipped. Saves once at the end and
    /// changes nothing if that save fails.
    pub fn import(&mut self, records: Vec<StoredWorkout>) -> AppResult<usize> {
        let restored = persistence::collect_records(records);
        if restored.is_empty() {
            return Ok(0);
        }

        let mut candidate = self.workouts.clone();
        let mut markers = Vec::with_capacity(restored.len());
        for w in restored.iter() {
            let id = candidate.free_id(w.id().clone());
            let workout = Workout::restore(
                id,
                *w.created_at(),
                w.location(),
                w.draft(),
                Some(w.label().to_string()),
            )?;
            markers.push(Marker::for_workout(candidate.push(workout)));
        }

        persistence::save(&mut self.store, &candidate)?;

        self.workouts = candidate;
        let added = markers.len();
        for m in markers {
            self.map.add_marker(m);
        }
        Ok(added)
    }

    pub fn into_parts(self) -> (S, M, WorkoutCollection) {
        (self.store, self.map, self.workouts)
    }
}
