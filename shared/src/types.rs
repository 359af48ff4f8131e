//! Common types used across the planner

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Default length of a season in days
pub const DAYS_IN_SEASON: u32 = 28;

/// Planting seasons
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// All seasons in calendar order
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Season {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            // "autumn" shows up in imported catalogs
            "fall" | "autumn" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            _ => Err(PlannerError::UnknownSeason(s.to_string())),
        }
    }
}
