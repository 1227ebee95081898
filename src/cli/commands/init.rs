use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::storage::SqliteStore;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped with `--test`)
///  - the SQLite database with its schema
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing rWorkoutMap…");

    if let Some(path) = Config::init_all(&db_path, cli.test)? {
        println!("📄 Config file : {}", path.display());
    }
    println!("🗄️  Database   : {}", &db_path);

    // Opening the store creates the file and runs the migrations.
    let store = SqliteStore::open(&db_path)?;

    println!("✅ Database initialized at {}", &db_path);

    log::audit(
        store.conn(),
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 rWorkoutMap initialization completed!");
    Ok(())
}
