use super::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::workout_id::WorkoutId;
use crate::ui::list::render_card;
use crate::ui::messages::info;

/// Show one workout and move the map to it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let id = WorkoutId::from(id.as_str());
        let mut session = open_session(cfg)?;

        if session.focus(&id).is_none() {
            info(format!("No workout with id {}.", id));
            return Ok(());
        }

        if let Some(w) = session.workouts().find(&id) {
            println!("{}", render_card(w));
        }
        println!("{}", session.map().render_view());
    }
    Ok(())
}
