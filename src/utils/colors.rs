//! ANSI color helper utilities for terminal output.
use crate::models::workout_type::WorkoutType;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Running rows are green, cycling rows orange-ish (yellow on most terminals).
pub fn color_for_type(kind: WorkoutType) -> &'static str {
    match kind {
        WorkoutType::Running => GREEN,
        WorkoutType::Cycling => YELLOW,
    }
}

pub fn colorize_type(kind: WorkoutType, value: &str) -> String {
    format!("{}{}{}", color_for_type(kind), value, RESET)
}
