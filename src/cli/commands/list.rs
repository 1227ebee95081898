use super::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::workout::Workout;
use crate::models::workout_type::WorkoutType;
use crate::ui::list::{render_card, render_empty, render_table};
use crate::ui::messages::header;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { kind, details } = cmd {
        let kind = match kind {
            Some(k) => Some(
                WorkoutType::wt_from_str(k)
                    .ok_or_else(|| AppError::InvalidWorkoutType(k.to_string()))?,
            ),
            None => None,
        };

        let session = open_session(cfg)?;

        let mut workouts: Vec<&Workout> = match kind {
            Some(k) => session.workouts().filter_by_type(k),
            None => session.workouts().iter().collect(),
        };

        if workouts.is_empty() {
            println!("{}", render_empty());
            return Ok(());
        }

        // New workouts appear on top, like in the sidebar.
        if cfg.newest_first {
            workouts.reverse();
        }

        header(format!("Workouts ({})", workouts.len()));

        if *details {
            for w in workouts {
                println!("{}", render_card(w));
            }
        } else {
            print!("{}", render_table(workouts));
        }
    }
    Ok(())
}
