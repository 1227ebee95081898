use chrono::{Local, TimeZone};
use rworkoutmap::errors::AppError;
use rworkoutmap::models::collection::WorkoutCollection;
use rworkoutmap::models::coords::Coords;
use rworkoutmap::models::workout::{Workout, WorkoutDraft};
use rworkoutmap::storage::persistence::{self, WORKOUTS_KEY};
use rworkoutmap::storage::{KeyValueStore, MemoryStore, SqliteStore};

mod common;
use common::BROWSER_DUMP;

fn sample_collection() -> WorkoutCollection {
    let mut c = WorkoutCollection::new();
    let t1 = Local.with_ymd_and_hms(2025, 3, 1, 7, 15, 0).unwrap();
    let t2 = Local.with_ymd_and_hms(2025, 3, 2, 18, 40, 0).unwrap();
    let t3 = Local.with_ymd_and_hms(2025, 3, 4, 6, 5, 0).unwrap();

    let drafts = [
        (t1, Coords::new(35.71, 51.35).unwrap(), WorkoutDraft::running(5.0, 25.0, 170.0)),
        (t2, Coords::new(35.80, 51.42).unwrap(), WorkoutDraft::cycling(27.3, 71.0, 420.0)),
        (t3, Coords::new(-33.86, 151.21).unwrap(), WorkoutDraft::running(10.2, 52.5, 178.0)),
    ];

    for (t, coords, draft) in drafts {
        let id = c.next_id(&t);
        c.push(Workout::new(id, t, coords, draft).unwrap());
    }
    c
}

#[test]
fn round_trip_through_memory_store() {
    let mut store = MemoryStore::new();
    let saved = sample_collection();

    persistence::save(&mut store, &saved).unwrap();
    let loaded = persistence::load(&store).unwrap();

    assert_eq!(loaded, saved);
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded.as_slice()[1].speed_km_per_h(), saved.as_slice()[1].speed_km_per_h());
}

#[test]
fn round_trip_through_sqlite_store() {
    let mut store = SqliteStore::in_memory().unwrap();
    let saved = sample_collection();

    persistence::save(&mut store, &saved).unwrap();
    let loaded = persistence::load(&store).unwrap();

    let ids: Vec<String> = loaded.iter().map(|w| w.id().to_string()).collect();
    let expected: Vec<String> = saved.iter().map(|w| w.id().to_string()).collect();
    assert_eq!(ids, expected);
    assert_eq!(loaded, saved);
}

#[test]
fn stored_blob_keeps_primitive_fields() {
    let mut store = MemoryStore::new();
    persistence::save(&mut store, &sample_collection()).unwrap();

    let raw = store.get(WORKOUTS_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value[0];

    assert_eq!(first["type"], "running");
    assert_eq!(first["distance"], 5.0);
    assert_eq!(first["duration"], 25.0);
    assert_eq!(first["cadence"], 170.0);
    assert_eq!(first["pace"], 5.0);
    assert_eq!(first["coords"][0], 35.71);
    assert!(first.get("speed").is_none());
}

#[test]
fn absent_key_loads_empty() {
    let store = MemoryStore::new();
    assert!(persistence::load(&store).unwrap().is_empty());
}

#[test]
fn corrupt_value_loads_empty() {
    let mut store = MemoryStore::new();
    store.set(WORKOUTS_KEY, "{not json").unwrap();
    assert!(persistence::load(&store).unwrap().is_empty());

    store.set(WORKOUTS_KEY, r#"{"an":"object"}"#).unwrap();
    assert!(persistence::load(&store).unwrap().is_empty());
}

#[test]
fn invalid_and_duplicate_records_are_skipped() {
    let mut store = MemoryStore::new();
    let raw = r#"[
      {"date":"2025-03-01T07:15:00Z","id":"1","distance":5,"duration":25,"coords":[1,2],"type":"running","cadence":170},
      {"date":"2025-03-01T07:16:00Z","id":"2","distance":0,"duration":25,"coords":[1,2],"type":"running","cadence":170},
      {"date":"2025-03-01T07:17:00Z","id":"1","distance":8,"duration":40,"coords":[1,2],"type":"running","cadence":160},
      {"date":"2025-03-01T07:18:00Z","id":"3","distance":20,"duration":60,"coords":[1,2],"type":"cycling"}
    ]"#;
    store.set(WORKOUTS_KEY, raw).unwrap();

    let loaded = persistence::load(&store).unwrap();
    let ids: Vec<&str> = loaded.iter().map(|w| w.id().as_str()).collect();
    assert_eq!(ids, vec!["1"]);
    assert_eq!(loaded.as_slice()[0].distance_km(), 5.0);
}

#[test]
fn browser_dump_is_readable() {
    let mut store = MemoryStore::new();
    store.set(WORKOUTS_KEY, BROWSER_DUMP).unwrap();

    let loaded = persistence::load(&store).unwrap();
    assert_eq!(loaded.len(), 2);

    let run = &loaded.as_slice()[0];
    assert_eq!(run.id().as_str(), "1681467630");
    assert_eq!(run.cadence_spm(), Some(170.0));
    assert_eq!(run.pace_min_per_km(), Some(5.0));
    assert_eq!(run.label(), "Running on April 14");

    let ride = &loaded.as_slice()[1];
    assert_eq!(ride.elevation_gain_m(), Some(300.0));
    assert_eq!(ride.speed_km_per_h(), Some(20.0));
}

#[test]
fn clear_removes_the_persisted_value() {
    let mut store = SqliteStore::in_memory().unwrap();
    persistence::save(&mut store, &sample_collection()).unwrap();

    persistence::clear(&mut store).unwrap();

    assert!(store.get(WORKOUTS_KEY).unwrap().is_none());
    assert!(persistence::load(&store).unwrap().is_empty());
}

#[test]
fn sqlite_store_overwrites_existing_key() {
    let mut store = SqliteStore::in_memory().unwrap();
    store.set("k", "one").unwrap();
    store.set("k", "two").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));

    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn one_malformed_record_does_not_drop_the_history() {
    let mut store = MemoryStore::new();
    let raw = r#"[
      {"date":"2025-03-01T07:15:00Z","id":"1","distance":5,"duration":25,"coords":[1,2],"type":"running","cadence":170},
      {"date":"2025-03-01T07:16:00Z","id":"2","distance":5,"duration":25,"coords":[1,2],"type":"walking"},
      {"date":"2025-03-01T07:17:00Z","id":"3","distance":8,"duration":40,"type":"running","cadence":160},
      {"date":"2025-03-01T07:18:00Z","id":"4","distance":"far","duration":60,"coords":[1,2],"type":"cycling","elevationGain":10},
      {"date":"2025-03-01T07:19:00Z","id":"5","distance":20,"duration":60,"coords":[3,4],"type":"cycling","elevationGain":10}
    ]"#;
    store.set(WORKOUTS_KEY, raw).unwrap();

    let loaded = persistence::load(&store).unwrap();
    let ids: Vec<&str> = loaded.iter().map(|w| w.id().as_str()).collect();
    assert_eq!(ids, vec!["1", "5"]);

    // saving again keeps the well-formed records
    persistence::save(&mut store, &loaded).unwrap();
    assert_eq!(persistence::load(&store).unwrap(), loaded);
}

#[test]
fn sqlite_store_reports_unusable_parent_dir() {
    let blocker = std::env::temp_dir().join("rworkoutmap_parent_is_a_file");
    std::fs::write(&blocker, "not a directory").unwrap();

    let db = blocker.join("nested").join("workouts.sqlite");
    let res = SqliteStore::open(&db.to_string_lossy());
    assert!(matches!(res, Err(AppError::Io(_))));

    std::fs::remove_file(&blocker).ok();
}
