use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of trailing epoch-millisecond digits kept in an id.
const ID_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Id derived from the creation timestamp: the last 10 digits of the
    /// Unix epoch in milliseconds.
    pub fn from_timestamp(ts: &DateTime<Local>) -> Self {
        let millis = ts.timestamp_millis().unsigned_abs().to_string();
        let start = millis.len().saturating_sub(ID_DIGITS);
        Self(millis[start..].to_string())
    }

    /// The id immediately following this one, used to resolve collisions.
    /// Non-numeric ids, and numbers at `u64::MAX`, get a `-1` suffix instead.
    pub fn successor(&self) -> Self {
        match self.0.parse::<u64>().ok().and_then(|n| n.checked_add(1)) {
            Some(n) => Self(format!("{:0width$}", n, width = self.0.len())),
            None => Self(format!("{}-1", self.0)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkoutId {
    fn from(s: &str) -> Self {
        Self(s.trim().to_string())
    }
}
