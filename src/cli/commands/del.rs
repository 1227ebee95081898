use super::{ask_confirmation, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::models::workout_id::WorkoutId;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let id = WorkoutId::from(id.as_str());
        let mut session = open_session(cfg)?;

        let Some(label) = session.workouts().find(&id).map(|w| w.label().to_string()) else {
            info(format!("No workout with id {}. Nothing to delete.", id));
            return Ok(());
        };

        //
        // Confirmation prompt
        //
        let prompt = format!("Delete workout {} ({})? This action is irreversible.", id, label);
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        if session.delete(&id)? {
            success(format!("Workout {} has been deleted.", id));
            log::audit(session.store().conn(), "del", id.as_str(), &label);
        }
    }

    Ok(())
}
