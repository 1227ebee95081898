//! Save/load the workout collection under one fixed key.

use super::KeyValueStore;
use super::record::StoredWorkout;
use crate::errors::AppResult;
use crate::models::collection::WorkoutCollection;
use crate::ui::messages::warning;
use serde_json::Value;

/// The single key holding the JSON-encoded collection.
pub const WORKOUTS_KEY: &str = "workouts";

/// Encode the collection as the JSON array stored under [`WORKOUTS_KEY`].
pub fn encode(workouts: &WorkoutCollection) -> AppResult<String> {
    let records: Vec<StoredWorkout> = workouts.iter().map(StoredWorkout::from).collect();
    Ok(serde_json::to_string(&records)?)
}

/// Decode a stored blob. A blob that is not a JSON array yields an empty
/// collection; records that fail to parse or validate, and repeated ids,
/// are skipped.
pub fn decode(raw: &str) -> WorkoutCollection {
    let values: Vec<Value> = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            warning(format!(
                "Stored workouts could not be read ({}); starting with an empty history.",
                e
            ));
            return WorkoutCollection::new();
        }
    };

    let (records, unparsable) = parse_records(values);
    restore_records(records, unparsable)
}

/// Split raw JSON values into well-formed records and a count of the rest.
pub fn parse_records(values: Vec<Value>) -> (Vec<StoredWorkout>, usize) {
    let mut records = Vec::with_capacity(values.len());
    let mut skipped = 0usize;

    for value in values {
        match serde_json::from_value::<StoredWorkout>(value) {
            Ok(rec) => records.push(rec),
            Err(_) => skipped += 1,
        }
    }

    (records, skipped)
}

/// Restore records in order, dropping invalid ones and repeated ids.
pub fn collect_records(records: Vec<StoredWorkout>) -> WorkoutCollection {
    restore_records(records, 0)
}

fn restore_records(records: Vec<StoredWorkout>, already_skipped: usize) -> WorkoutCollection {
    let mut out = WorkoutCollection::new();
    let mut skipped = already_skipped;

    for rec in records {
        if out.contains(&rec.id) {
            skipped += 1;
            continue;
        }
        match rec.into_workout() {
            Ok(w) => {
                out.push(w);
            }
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        warning(format!("Skipped {} invalid stored workout(s).", skipped));
    }

    out
}

pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, workouts: &WorkoutCollection) -> AppResult<()> {
    let json = encode(workouts)?;
    store.set(WORKOUTS_KEY, &json)
}

/// Absent key or corrupt value → empty collection. Only backend failures are errors.
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> AppResult<WorkoutCollection> {
    match store.get(WORKOUTS_KEY)? {
        Some(raw) => Ok(decode(&raw)),
        None => Ok(WorkoutCollection::new()),
    }
}

pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S) -> AppResult<()> {
    store.remove(WORKOUTS_KEY)
}
