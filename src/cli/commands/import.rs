use super::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let records = ExportLogic::read_import(file)?;
        let total = records.len();

        let mut session = open_session(cfg)?;
        let added = session.import(records)?;

        if added == 0 {
            info(format!("No valid workouts found in {}.", file));
            return Ok(());
        }

        success(format!("Imported {} of {} workouts from {}.", added, total, file));
        log::audit(
            session.store().conn(),
            "import",
            file,
            &format!("Imported {} workouts", added),
        );
    }
    Ok(())
}
