use super::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::errors::{AppError, AppResult};
use crate::form::FormField;
use crate::models::coords::Coords;
use crate::models::workout_type::WorkoutType;
use crate::ui::list::render_card;
use crate::ui::messages::{notice, success};

/// Record a workout: simulate the map click, fill the form, submit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        kind,
        lat,
        lng,
        distance,
        duration,
        cadence,
        elevation,
    } = cmd
    {
        //
        // 1. Parse type and coordinates
        //
        let kind = WorkoutType::wt_from_str(kind).ok_or_else(|| {
            AppError::InvalidWorkoutType(format!("'{}' (use 'running' or 'cycling')", kind))
        })?;
        let coords = Coords::new(*lat, *lng)?;

        //
        // 2. Open session (loads history, draws markers)
        //
        let mut session = open_session(cfg)?;

        //
        // 3. Map click + form
        //
        session.click_map(coords);
        session.select_kind(kind);

        let form = session.form_mut();
        form.set(FormField::Distance, distance.as_str());
        form.set(FormField::Duration, duration.as_str());
        match kind {
            WorkoutType::Running => {
                form.set(FormField::Cadence, cadence.clone().unwrap_or_default())
            }
            WorkoutType::Cycling => {
                form.set(FormField::Elevation, elevation.clone().unwrap_or_default())
            }
        }

        //
        // 4. Submit
        //
        let (id, label, card) = match session.submit_form() {
            Ok(w) => (w.id().to_string(), w.label().to_string(), render_card(w)),
            Err(e @ AppError::InvalidInput(_)) => {
                notice(&e);
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        success(format!("Added workout {}: {}", id, label));
        println!("{}", card);

        log::audit(session.store().conn(), "add", &id, &label);
    }

    Ok(())
}
