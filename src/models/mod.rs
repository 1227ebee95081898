pub mod collection;
pub mod coords;
pub mod workout;
pub mod workout_id;
pub mod workout_type;
