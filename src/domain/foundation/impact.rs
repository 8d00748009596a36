//! Impact value object: the preferred direction of a criterion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether higher or lower values of a criterion are preferable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    /// Higher is better (`+`).
    Benefit,
    /// Lower is better (`-`).
    Cost,
}

impl Impact {
    /// Parses the single-character symbol form.
    ///
    /// Only `+` and `-` are recognized; surrounding whitespace is ignored.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            "+" => Some(Impact::Benefit),
            "-" => Some(Impact::Cost),
            _ => None,
        }
    }

    /// Returns the single-character symbol form.
    pub fn symbol(&self) -> char {
        match self {
            Impact::Benefit => '+',
            Impact::Cost => '-',
        }
    }

    /// Returns true if higher values are preferred.
    pub fn is_benefit(&self) -> bool {
        matches!(self, Impact::Benefit)
    }

    /// Returns true if `candidate` is strictly preferable to `other` under this impact.
    pub fn prefers(&self, candidate: f64, other: f64) -> bool {
        match self {
            Impact::Benefit => candidate > other,
            Impact::Cost => candidate < other,
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
