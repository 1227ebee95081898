use super::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::workout_id::WorkoutId;
use crate::ui::messages::info;
use crate::utils::formatting::italic;

/// Editing is not available yet: show the hint, change nothing.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id } = cmd {
        let id = WorkoutId::from(id.as_str());
        let session = open_session(cfg)?;

        match session.edit(&id) {
            Some(hint) => info(format!("Edit {}: {}", id, italic(hint))),
            None => info(format!("No workout with id {}.", id)),
        }
    }

    Ok(())
}
