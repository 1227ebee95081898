use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{Connection, params};

/// One row of the internal `log` table.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write an internal log line into the `log` table.
pub fn write(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Like [`write`], but a failure only produces a warning: auditing must
/// never fail the command that triggered it.
pub fn audit(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = write(conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

/// All log rows, oldest first.
pub fn load_all(conn: &Connection) -> AppResult<Vec<LogEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LogEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get(3)?,
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
