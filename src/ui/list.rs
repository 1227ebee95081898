//! Rendering of workouts for the terminal: one card per workout, or a table.

use crate::models::workout::{Activity, Workout};
use crate::utils::colors::{GREY, RESET, color_for_type};
use crate::utils::date::short_datetime;
use crate::utils::formatting::{bold, fmt_metric, fmt_number};
use crate::utils::table::{Column, Table};

/// Detail lines of a workout card: (icon, value, unit).
pub fn details(w: &Workout) -> Vec<(&'static str, String, &'static str)> {
    let mut out = vec![
        (w.kind().icon(), fmt_number(w.distance_km()), "km"),
        ("⏱", fmt_number(w.duration_min()), "min"),
    ];

    match *w.activity() {
        Activity::Running {
            cadence_spm,
            pace_min_per_km,
        } => {
            out.push(("⚡️", fmt_metric(pace_min_per_km), "min/km"));
            out.push(("🦶🏼", fmt_number(cadence_spm), "spm"));
        }
        Activity::Cycling {
            elevation_gain_m,
            speed_km_per_h,
        } => {
            out.push(("⚡️", fmt_metric(speed_km_per_h), "km/h"));
            out.push(("🗻", fmt_number(elevation_gain_m), "m"));
        }
    }

    out
}

/// A full card: colored title line, id and location, then the details row.
pub fn render_card(w: &Workout) -> String {
    let color = color_for_type(w.kind());
    let mut out = format!("{}▍{} {}\n", color, RESET, bold(w.label()));
    out.push_str(&format!("  id: {}  at {}\n", w.id(), w.location()));

    let cells: Vec<String> = details(w)
        .into_iter()
        .map(|(icon, value, unit)| format!("{} {} {}", icon, value, unit))
        .collect();
    out.push_str(&format!("  {}\n", cells.join("   ")));
    out
}

/// Compact table of workouts, in the order given.
pub fn render_table<'a, I>(workouts: I) -> String
where
    I: IntoIterator<Item = &'a Workout>,
{
    let mut table = Table::new(vec![
        Column::new("ID", 12),
        Column::new("DATE", 17),
        Column::new("WORKOUT", 22),
        Column::new("KM", 7),
        Column::new("MIN", 7),
        Column::new("PACE/SPEED", 14),
        Column::new("CAD/ELEV", 10),
    ]);

    for w in workouts {
        let (metric, unit) = w.metric();
        let extra = match *w.activity() {
            Activity::Running { cadence_spm, .. } => format!("{} spm", fmt_number(cadence_spm)),
            Activity::Cycling {
                elevation_gain_m, ..
            } => format!("{} m", fmt_number(elevation_gain_m)),
        };

        table.add_row(vec![
            w.id().to_string(),
            short_datetime(w.created_at()),
            w.label().to_string(),
            fmt_number(w.distance_km()),
            fmt_number(w.duration_min()),
            format!("{} {}", fmt_metric(metric), unit),
            extra,
        ]);
    }

    table.render()
}

/// Empty-list placeholder, greyed out.
pub fn render_empty() -> String {
    format!("{GREY}No workouts recorded yet.{RESET}")
}
