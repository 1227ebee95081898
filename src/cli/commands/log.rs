use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_all;
use crate::errors::AppResult;
use crate::storage::SqliteStore;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            info("Use --print to show the internal log.");
            return Ok(());
        }

        let store = SqliteStore::open(&cfg.database)?;
        let entries = load_all(store.conn())?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        header("Internal log");
        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("DATE", 26),
            Column::new("OPERATION", 18),
            Column::new("TARGET", 28),
            Column::new("MESSAGE", 30),
        ]);
        for e in entries {
            table.add_row(vec![
                e.id.to_string(),
                e.date,
                e.operation,
                e.target,
                e.message,
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
