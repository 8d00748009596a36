//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a single ranking run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankingId(Uuid);

impl RankingId {
    /// Creates a new random RankingId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RankingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RankingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
