// ============================================================================
// Solver Configuration
// Precision, tolerance and policy knobs for the mixture solver
// ============================================================================

use super::component::MixMode;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal places used for display when nothing else is configured
pub const DEFAULT_DISPLAY_DECIMALS: u32 = 2;

/// Largest accepted `display_decimals`
pub const MAX_DISPLAY_DECIMALS: u32 = 12;

/// Default upper bound on components per request
pub const DEFAULT_MAX_COMPONENTS: usize = 26;

// ============================================================================
// Duplicate Priority Policy
// ============================================================================

/// What priority mode does when two components share a rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DuplicatePriorityPolicy {
    /// Equal ranks are processed in request order
    #[default]
    InputOrder,

    /// Equal ranks fail validation
    Reject,
}

// ============================================================================
// Complete Solver Configuration
// ============================================================================

/// Configuration for creating a mixture solver
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    /// Decimal places quantities are rounded to for display
    pub display_decimals: u32,

    /// Maximum allowed distance between the returned average/total and the
    /// requested ones. Exact solutions always hit zero.
    pub average_tolerance: Decimal,

    /// Optional: Maximum components per complex request
    /// None means unlimited
    pub max_components: Option<usize>,

    /// Mode used when a complex request does not name one
    pub default_mode: MixMode,

    /// Tie-break for equal priorities
    pub duplicate_priorities: DuplicatePriorityPolicy,
}

impl SolverConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self {
            display_decimals: DEFAULT_DISPLAY_DECIMALS,
            average_tolerance: Decimal::new(1, 3), // 0.001
            max_components: Some(DEFAULT_MAX_COMPONENTS),
            default_mode: MixMode::Standard,
            duplicate_priorities: DuplicatePriorityPolicy::InputOrder,
        }
    }

    /// Builder method: Set display precision
    pub fn with_display_decimals(mut self, decimals: u32) -> Self {
        self.display_decimals = decimals;
        self
    }

    /// Builder method: Set invariant tolerance
    pub fn with_average_tolerance(mut self, tolerance: Decimal) -> Self {
        self.average_tolerance = tolerance;
        self
    }

    /// Builder method: Set component limit
    pub fn with_max_components(mut self, max: Option<usize>) -> Self {
        self.max_components = max;
        self
    }

    /// Builder method: Set default complex mode
    pub fn with_default_mode(mut self, mode: MixMode) -> Self {
        self.default_mode = mode;
        self
    }

    /// Builder method: Set duplicate priority handling
    pub fn with_duplicate_priorities(mut self, policy: DuplicatePriorityPolicy) -> Self {
        self.duplicate_priorities = policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.display_decimals > MAX_DISPLAY_DECIMALS {
            return Err(format!(
                "Display decimals cannot exceed {}",
                MAX_DISPLAY_DECIMALS
            ));
        }

        if self.average_tolerance < Decimal::ZERO {
            return Err("Average tolerance cannot be negative".to_string());
        }

        if let Some(max) = self.max_components {
            if max < 3 {
                return Err("Component limit must allow at least 3 components".to_string());
            }
        }

        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl SolverConfig {
    /// Calculator defaults
    /// - Two display decimals
    /// - 0.001 tolerance
    /// - Equal priorities fall back to input order
    pub fn classroom() -> Self {
        Self::new()
    }

    /// Strict configuration
    /// - Zero tolerance on the average/total checks
    /// - Equal priorities are rejected
    pub fn strict() -> Self {
        Self::new()
            .with_average_tolerance(Decimal::ZERO)
            .with_duplicate_priorities(DuplicatePriorityPolicy::Reject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = SolverConfig::new();
        assert_eq!(config.display_decimals, 2);
        assert_eq!(config.default_mode, MixMode::Standard);
        assert_eq!(config.max_components, Some(DEFAULT_MAX_COMPONENTS));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SolverConfig::new()
            .with_display_decimals(4)
            .with_max_components(None)
            .with_default_mode(MixMode::Priority);

        assert_eq!(config.display_decimals, 4);
        assert_eq!(config.max_components, None);
        assert_eq!(config.default_mode, MixMode::Priority);
    }

    #[test]
    fn test_validation() {
        assert!(SolverConfig::new()
            .with_display_decimals(13)
            .validate()
            .is_err());
        assert!(SolverConfig::new()
            .with_average_tolerance(Decimal::new(-1, 2))
            .validate()
            .is_err());
        assert!(SolverConfig::new()
            .with_max_components(Some(2))
            .validate()
            .is_err());
    }

    #[test]
    fn test_preset_configs() {
        let strict = SolverConfig::strict();
        assert_eq!(strict.average_tolerance, Decimal::ZERO);
        assert_eq!(strict.duplicate_priorities, DuplicatePriorityPolicy::Reject);
        assert!(strict.validate().is_ok());

        assert_eq!(SolverConfig::classroom(), SolverConfig::default());
    }
}
