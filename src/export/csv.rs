use crate::errors::AppResult;
use crate::models::collection::WorkoutCollection;
use crate::utils::formatting::{fmt_metric, fmt_number};
use csv::Writer;
use std::path::Path;

const HEADERS: [&str; 11] = [
    "id",
    "date",
    "type",
    "description",
    "lat",
    "lng",
    "distance_km",
    "duration_min",
    "cadence_spm",
    "elevation_gain_m",
    "pace_or_speed",
];

/// Write workouts to CSV, one row each; the unused kind column stays empty.
pub fn write_csv(path: &Path, workouts: &WorkoutCollection) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(HEADERS)?;

    for w in workouts {
        let (metric, _) = w.metric();
        wtr.write_record(&[
            w.id().to_string(),
            w.created_at().to_rfc3339(),
            w.kind().as_str().to_string(),
            w.label().to_string(),
            w.location().lat.to_string(),
            w.location().lng.to_string(),
            fmt_number(w.distance_km()),
            fmt_number(w.duration_min()),
            w.cadence_spm().map(fmt_number).unwrap_or_default(),
            w.elevation_gain_m().map(fmt_number).unwrap_or_default(),
            fmt_metric(metric),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
