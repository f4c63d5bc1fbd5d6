//! Seasons gating the inventory update operations

use crate::error::OrchardError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The seasons the seasonal operations recognize
///
/// The game state stores an `Option<Season>`: `None` is the explicit
/// unset/invalid state, and both `grow` and `shrink` treat it as
/// not-their-season rather than a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Winter,
}

impl Season {
    /// Do fruit trees replenish in this season?
    pub fn is_growing(&self) -> bool {
        matches!(self, Season::Spring | Season::Summer)
    }

    /// Lowercase label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Season {
    type Err = OrchardError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "winter" => Ok(Season::Winter),
            _ => Err(OrchardError::ParseError(format!(
                "unknown season '{s}' (expected: spring, summer, winter)"
            ))),
        }
    }
}
