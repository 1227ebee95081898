pub mod add;
pub mod clear;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod map;
pub mod show;

use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::map::TerminalMap;
use crate::storage::SqliteStore;
use crate::ui::messages::warning;
use std::io::{self, Write};

pub type CliSession = Session<SqliteStore, TerminalMap>;

/// Open the configured database and start a session on a terminal map.
pub fn open_session(cfg: &Config) -> AppResult<CliSession> {
    let store = SqliteStore::open(&cfg.database)?;
    Session::start(store, TerminalMap::new(), cfg.map_settings())
}

/// Ask a yes/no confirmation from the user
pub fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
