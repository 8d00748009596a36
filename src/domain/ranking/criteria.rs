//! Criteria - Per-criterion weights and impacts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::{RankingError, ShapeViolation, WeightViolation};
use crate::domain::foundation::Impact;

/// Relative importance of each criterion.
///
/// # Invariants
/// - At least one weight
/// - Every weight finite and non-negative
/// - Not all zero
///
/// Only relative magnitudes matter: `1,2,1` and `10,20,10` rank identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Creates a weight vector, returning the first violated invariant.
    pub fn new(weights: Vec<f64>) -> Result<Self, RankingError> {
        if weights.is_empty() {
            return Err(RankingError::shape(ShapeViolation::NoCriteria));
        }

        for (criterion, &value) in weights.iter().enumerate() {
            if !value.is_finite() {
                return Err(RankingError::weight(WeightViolation::NonFinite { criterion, value }));
            }
            if value < 0.0 {
                return Err(RankingError::weight(WeightViolation::Negative { criterion, value }));
            }
        }

        if weights.iter().all(|&w| w == 0.0) {
            return Err(RankingError::weight(WeightViolation::AllZero));
        }

        Ok(Self(weights))
    }

    /// Number of criteria covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; an empty vector cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The weights as given.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Weights rescaled to sum to 1.
    ///
    /// Weights are first divided by the largest one so the sum cannot
    /// overflow for large finite inputs.
    pub fn normalized(&self) -> Vec<f64> {
        let largest = self.0.iter().copied().fold(0.0_f64, f64::max);
        let scaled: Vec<f64> = self.0.iter().map(|w| w / largest).collect();
        let total: f64 = scaled.iter().sum();
        scaled.into_iter().map(|w| w / total).collect()
    }
}

impl TryFrom<Vec<f64>> for WeightVector {
    type Error = RankingError;

    fn try_from(weights: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(weights)
    }
}

impl From<WeightVector> for Vec<f64> {
    fn from(weights: WeightVector) -> Self {
        weights.0
    }
}

/// Parses a comma-separated list such as `1,2,1` or `0.5, 0.25, 0.25`.
impl FromStr for WeightVector {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let weights = s
            .split(',')
            .enumerate()
            .map(|(criterion, item)| {
                let text = item.trim();
                text.parse::<f64>().map_err(|_| {
                    RankingError::weight(WeightViolation::Unparsable {
                        criterion,
                        text: text.to_string(),
                    })
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(weights)
    }
}

impl fmt::Display for WeightVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.0.iter().map(|w| w.to_string()).collect();
        write!(f, "{}", items.join(","))
    }
}

/// Preferred direction of each criterion, aligned with matrix columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Impact>", into = "Vec<Impact>")]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    /// Creates an impact vector; it must cover at least one criterion.
    pub fn new(impacts: Vec<Impact>) -> Result<Self, RankingError> {
        if impacts.is_empty() {
            return Err(RankingError::shape(ShapeViolation::NoCriteria));
        }
        Ok(Self(impacts))
    }

    /// Parses symbols one per criterion; anything other than `+` or `-` is rejected.
    pub fn from_symbols<S: AsRef<str>>(symbols: &[S]) -> Result<Self, RankingError> {
        let impacts = symbols
            .iter()
            .enumerate()
            .map(|(criterion, symbol)| {
                let symbol = symbol.as_ref();
                Impact::from_symbol(symbol)
                    .ok_or_else(|| RankingError::invalid_impact(criterion, symbol.trim()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(impacts)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }
}

impl TryFrom<Vec<Impact>> for ImpactVector {
    type Error = RankingError;

    fn try_from(impacts: Vec<Impact>) -> Result<Self, Self::Error> {
        Self::new(impacts)
    }
}

impl From<ImpactVector> for Vec<Impact> {
    fn from(impacts: ImpactVector) -> Self {
        impacts.0
    }
}

/// Parses a comma-separated list such as `+,-,+`.
impl FromStr for ImpactVector {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<&str> = s.split(',').collect();
        Self::from_symbols(&symbols)
    }
}

impl fmt::Display for ImpactVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        write!(f, "{}", items.join(","))
    }
}
