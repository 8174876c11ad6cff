// ============================================================================
// Component Domain Model
// ============================================================================

use super::errors::{MixError, MixResult};
use crate::numeric::Rational;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One known-intensity ingredient of a mixture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Display name, e.g. "Component 1"
    pub name: String,

    /// Per-unit concentration/strength
    pub intensity: Rational,

    /// Rank for priority mode (1 is the highest)
    pub priority: Option<u32>,
}

impl Component {
    pub fn new(name: impl Into<String>, intensity: Rational) -> Self {
        Self {
            name: name.into(),
            intensity,
            priority: None,
        }
    }

    /// Builder method: Set priority rank
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Name used when the caller supplies none (`index` is zero-based).
    pub fn default_name(index: usize) -> String {
        format!("Component {}", index + 1)
    }
}

/// How a complex (N >= 3) request is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MixMode {
    /// Enumerate every feasible two-component sub-mix
    #[default]
    Standard,

    /// Saturate components in ascending priority order
    Priority,
}

impl MixMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MixMode::Standard => "standard",
            MixMode::Priority => "priority",
        }
    }
}

impl fmt::Display for MixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MixMode {
    type Err = MixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(MixMode::Standard),
            "priority" => Ok(MixMode::Priority),
            other => Err(MixError::validation(format!(
                "unknown mix type '{}', expected 'standard' or 'priority'",
                other
            ))),
        }
    }
}

/// The two global constraints every solution must meet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixTarget {
    /// Desired average intensity `m`
    pub desired_intensity: Rational,

    /// Total amount `S` (always positive)
    pub total_amount: Rational,
}

impl MixTarget {
    /// Create a target, rejecting `S <= 0`.
    pub fn new(desired_intensity: Rational, total_amount: Rational) -> MixResult<Self> {
        if !total_amount.is_positive() {
            return Err(MixError::validation("total amount must be greater than zero"));
        }

        Ok(Self {
            desired_intensity,
            total_amount,
        })
    }

    /// Intensity mass `m·S` the mixture has to carry.
    pub fn required_mass(&self) -> MixResult<Rational> {
        Ok(self.desired_intensity.checked_mul(self.total_amount)?)
    }
}
