use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Running,
    Cycling,
}

impl WorkoutType {
    /// Parse CLI / storage input (case-insensitive).
    pub fn wt_from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "running" | "run" | "r" => Some(Self::Running),
            "cycling" | "cycle" | "c" => Some(Self::Cycling),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
        }
    }

    /// Capitalized name used in labels ("Running on April 14").
    pub fn title(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutType::Running => "🏃",
            WorkoutType::Cycling => "🚴‍♀️",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
