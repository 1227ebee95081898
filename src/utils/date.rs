use crate::models::workout_type::WorkoutType;
use chrono::{DateTime, Datelike, Local};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// "{Running|Cycling} on {Month} {Day}", e.g. "Running on April 14".
pub fn workout_label(kind: WorkoutType, at: &DateTime<Local>) -> String {
    format!("{} on {} {}", kind.title(), month_name(at.month()), at.day())
}

/// Short timestamp used in tables: "2025-04-14 09:30".
pub fn short_datetime(at: &DateTime<Local>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}
