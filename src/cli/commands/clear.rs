use super::{ask_confirmation, open_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut session = open_session(cfg)?;

        if session.workouts().is_empty() {
            info("No workouts to clear.");
            return Ok(());
        }

        let prompt = format!(
            "Delete ALL {} workouts? This action is irreversible.",
            session.workouts().len()
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let n = session.clear_all()?;
        success(format!("All workouts have been cleared ({} removed).", n));
        log::audit(
            session.store().conn(),
            "clear",
            "workouts",
            &format!("Cleared {} workouts", n),
        );
    }

    Ok(())
}
