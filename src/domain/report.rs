// ============================================================================
// Mix Reports
// Display-ready response payloads produced by the result formatter
// ============================================================================

use super::component::MixMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Response for a simple two-component request
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimpleMixReport {
    /// Quantities rounded to display precision
    pub quantities: [f64; 2],

    /// Quantities as fixed-decimal strings, e.g. "92.00"
    pub quantities_formatted: [String; 2],

    /// Reduced ratio, e.g. "2 : 3"
    pub simplified_ratio: String,
}

/// One component line of a priority-mode report
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComponentLine {
    pub name: String,
    pub quantity_formatted: String,
    pub intensity: f64,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub priority: Option<u32>,
}

/// Response for a single-solution complex request
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrioritizedMixReport {
    pub mix_type: MixMode,
    pub components: Vec<ComponentLine>,
    pub simplified_ratio: String,
    /// Exact weighted average of the returned quantities
    pub average_intensity: f64,
}

/// One feasible pair in standard mode
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CombinationLine {
    /// Names of the two contributing components
    pub combination_used: String,
    /// Full-width quantities (zero outside the pair)
    pub quantities: Vec<f64>,
    pub simplified_ratio: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MethodDetails {
    pub all_solutions: Vec<CombinationLine>,
}

/// Response for a complex request
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ComplexMixReport {
    Prioritized(PrioritizedMixReport),
    Combinations { method_details: MethodDetails },
}

impl ComplexMixReport {
    pub fn solution_count(&self) -> usize {
        match self {
            ComplexMixReport::Prioritized(_) => 1,
            ComplexMixReport::Combinations { method_details } => {
                method_details.all_solutions.len()
            },
        }
    }
}

/// Formatted response for any request
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum MixReport {
    Simple(SimpleMixReport),
    Complex(ComplexMixReport),
}
