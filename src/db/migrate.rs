use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `table` has a column named `column`.
fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `kv_store` table holding the JSON blobs.
fn create_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key         TEXT PRIMARY KEY,
            value       TEXT NOT NULL,
            updated_at  TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// Early databases stored only key/value; add the `updated_at` column.
fn migrate_add_updated_at(conn: &Connection) -> Result<()> {
    let version = "20250310_0002_kv_updated_at";

    if table_has_column(conn, "kv_store", "updated_at")? {
        return Ok(());
    }

    conn.execute(
        "ALTER TABLE kv_store ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';",
        [],
    )?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added updated_at to kv_store')",
        [version],
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Run on every store open. Idempotent.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if table_exists(conn, "kv_store")? {
        migrate_add_updated_at(conn)?;
    } else {
        create_kv_table(conn)?;
    }

    Ok(())
}
