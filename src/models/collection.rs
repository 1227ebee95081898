use super::{coords::Coords, workout::Workout, workout_id::WorkoutId, workout_type::WorkoutType};
use chrono::{DateTime, Local};

/// Ordered set of workouts; insertion order is creation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutCollection {
    items: Vec<Workout>,
}

impl WorkoutCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Workout> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Workout] {
        &self.items
    }

    pub fn contains(&self, id: &WorkoutId) -> bool {
        self.items.iter().any(|w| w.id() == id)
    }

    pub fn find(&self, id: &WorkoutId) -> Option<&Workout> {
        self.items.iter().find(|w| w.id() == id)
    }

    /// Append `workout` and hand back the stored copy.
    pub fn push(&mut self, workout: Workout) -> &Workout {
        let idx = self.items.len();
        self.items.push(workout);
        &self.items[idx]
    }

    pub fn pop(&mut self) -> Option<Workout> {
        self.items.pop()
    }

    /// Remove the first workout with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: &WorkoutId) -> Option<Workout> {
        let idx = self.items.iter().position(|w| w.id() == id)?;
        Some(self.items.remove(idx))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn coords(&self) -> Vec<Coords> {
        self.items.iter().map(Workout::location).collect()
    }

    pub fn filter_by_type(&self, kind: WorkoutType) -> Vec<&Workout> {
        self.items.iter().filter(|w| w.kind() == kind).collect()
    }

    /// First free id at or after the one derived from `created_at`.
    pub fn next_id(&self, created_at: &DateTime<Local>) -> WorkoutId {
        self.free_id(WorkoutId::from_timestamp(created_at))
    }

    /// `candidate` itself if unused, otherwise its first unused successor.
    pub fn free_id(&self, candidate: WorkoutId) -> WorkoutId {
        let mut id = candidate;
        while self.contains(&id) {
            id = id.successor();
        }
        id
    }
}

impl<'a> IntoIterator for &'a WorkoutCollection {
    type Item = &'a Workout;
    type IntoIter = std::slice::Iter<'a, Workout>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
