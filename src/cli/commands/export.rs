use super::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let session = open_session(cfg)?;
        ExportLogic::export(session.workouts(), file, *format, *force)?;
    }
    Ok(())
}
