use super::open_session;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = open_session(cfg)?;
    header("Map");
    print!("{}", session.map().render());
    Ok(())
}
