use chrono::{Local, TimeZone};
use rworkoutmap::errors::AppError;
use rworkoutmap::models::collection::WorkoutCollection;
use rworkoutmap::models::coords::Coords;
use rworkoutmap::models::workout::{Activity, Workout, WorkoutDraft, pace_min_per_km, speed_km_per_h};
use rworkoutmap::models::workout_id::WorkoutId;
use rworkoutmap::models::workout_type::WorkoutType;

fn tehran() -> Coords {
    Coords::new(35.71, 51.35).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::DateTime<Local> {
    Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

#[test]
fn running_example_has_pace_five() {
    let now = at(2025, 4, 14, 9, 30);
    let w = Workout::new(
        WorkoutId::from_timestamp(&now),
        now,
        tehran(),
        WorkoutDraft::running(5.0, 25.0, 170.0),
    )
    .unwrap();

    assert_eq!(w.pace_min_per_km(), Some(5.0));
    assert_eq!(w.speed_km_per_h(), None);
    assert_eq!(w.cadence_spm(), Some(170.0));
    assert_eq!(w.kind(), WorkoutType::Running);
    assert_eq!(w.label(), "Running on April 14");
}

#[test]
fn cycling_example_has_speed_twenty() {
    let now = at(2025, 12, 3, 18, 0);
    let w = Workout::new(
        WorkoutId::from_timestamp(&now),
        now,
        tehran(),
        WorkoutDraft::cycling(20.0, 60.0, 300.0),
    )
    .unwrap();

    assert_eq!(w.speed_km_per_h(), Some(20.0));
    assert_eq!(w.elevation_gain_m(), Some(300.0));
    assert_eq!(w.label(), "Cycling on December 3");
    assert!(matches!(
        w.activity(),
        Activity::Cycling {
            speed_km_per_h, ..
        } if *speed_km_per_h == 20.0
    ));
}

#[test]
fn metrics_are_rounded_to_one_decimal() {
    assert_eq!(pace_min_per_km(3.0, 20.0), 6.7);
    assert_eq!(pace_min_per_km(7.0, 31.0), 4.4);
    assert_eq!(speed_km_per_h(12.0, 35.0), 20.6);
    assert_eq!(speed_km_per_h(1.0, 7.0), 8.6);
}

#[test]
fn non_positive_inputs_are_rejected() {
    let now = at(2025, 1, 1, 8, 0);
    let bad = [
        WorkoutDraft::running(0.0, 25.0, 170.0),
        WorkoutDraft::running(5.0, -1.0, 170.0),
        WorkoutDraft::running(5.0, 25.0, 0.0),
        WorkoutDraft::running(f64::NAN, 25.0, 170.0),
        WorkoutDraft::cycling(-3.0, 60.0, 100.0),
        WorkoutDraft::cycling(20.0, 0.0, 100.0),
        WorkoutDraft::cycling(20.0, 60.0, f64::INFINITY),
    ];

    for draft in bad {
        let res = Workout::new(WorkoutId::new("1"), now, tehran(), draft);
        assert!(
            matches!(res, Err(AppError::InvalidInput(_))),
            "expected rejection for {:?}",
            draft
        );
    }
}

#[test]
fn cycling_accepts_zero_or_negative_elevation() {
    let now = at(2025, 1, 1, 8, 0);
    assert!(Workout::new(WorkoutId::new("1"), now, tehran(), WorkoutDraft::cycling(20.0, 60.0, 0.0)).is_ok());
    assert!(Workout::new(WorkoutId::new("2"), now, tehran(), WorkoutDraft::cycling(20.0, 60.0, -40.0)).is_ok());
}

#[test]
fn coords_must_be_finite() {
    assert!(matches!(
        Coords::new(f64::NAN, 10.0),
        Err(AppError::InvalidCoordinates(_))
    ));
    assert!(Coords::new(-33.86, 151.2).is_ok());
}

#[test]
fn id_is_last_ten_digits_of_epoch_millis() {
    let now = Local.timestamp_millis_opt(1_681_467_630_123).unwrap();
    assert_eq!(WorkoutId::from_timestamp(&now).as_str(), "1467630123");
}

#[test]
fn collection_hands_out_unique_ids_for_same_timestamp() {
    let now = at(2025, 5, 5, 7, 0);
    let mut c = WorkoutCollection::new();

    for _ in 0..3 {
        let id = c.next_id(&now);
        let w = Workout::new(id, now, tehran(), WorkoutDraft::running(5.0, 25.0, 170.0)).unwrap();
        c.push(w);
    }

    let ids: Vec<&str> = c.iter().map(|w| w.id().as_str()).collect();
    assert_eq!(ids.len(), 3);
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
    assert_ne!(ids[0], ids[2]);
}

#[test]
fn removing_one_keeps_the_others_in_order() {
    let now = at(2025, 5, 5, 7, 0);
    let mut c = WorkoutCollection::new();
    for id in ["a", "b", "c", "d"] {
        c.push(
            Workout::new(WorkoutId::new(id), now, tehran(), WorkoutDraft::cycling(10.0, 30.0, 5.0))
                .unwrap(),
        );
    }

    let removed = c.remove(&WorkoutId::new("b")).unwrap();
    assert_eq!(removed.id().as_str(), "b");

    let ids: Vec<&str> = c.iter().map(|w| w.id().as_str()).collect();
    assert_eq!(ids, vec!["a", "c", "d"]);

    assert!(c.remove(&WorkoutId::new("zzz")).is_none());
    assert_eq!(c.len(), 3);
}

#[test]
fn workout_type_parsing() {
    assert_eq!(WorkoutType::wt_from_str("Running"), Some(WorkoutType::Running));
    assert_eq!(WorkoutType::wt_from_str(" cycling "), Some(WorkoutType::Cycling));
    assert_eq!(WorkoutType::wt_from_str("swimming"), None);
}

#[test]
fn successor_never_overflows() {
    assert_eq!(WorkoutId::new("0000000009").successor().as_str(), "0000000010");

    let max = WorkoutId::new(u64::MAX.to_string());
    assert_eq!(max.successor().as_str(), "18446744073709551615-1");
    assert_eq!(max.successor().successor().as_str(), "18446744073709551615-1-1");
    assert_eq!(WorkoutId::new("abc").successor().as_str(), "abc-1");
}
