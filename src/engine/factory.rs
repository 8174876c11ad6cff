// ============================================================================
// Mixture Solver Factory
// Creates mixture solvers with proper configuration
// ============================================================================

use crate::domain::{DuplicatePriorityPolicy, MixMode, SolverConfig};
use crate::engine::{CombinationEnumerator, MixtureSolver, PriorityAllocator};
use crate::interfaces::{EventHandler, MixStrategy};
use rust_decimal::Decimal;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a mixture solver from configuration
///
/// # Arguments
/// * `config` - Solver configuration
/// * `event_handler` - Event handler for solve events
///
/// # Returns
/// * `Result<MixtureSolver, String>` - Configured solver or error
///
/// # Example
/// ```
/// use mixture_solver::prelude::*;
/// use std::sync::Arc;
///
/// let solver = create_from_config(SolverConfig::classroom(), Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(solver.config().display_decimals, 2);
/// ```
pub fn create_from_config(
    config: SolverConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<MixtureSolver, String> {
    config.validate()?;

    let standard = create_strategy(MixMode::Standard, &config);
    let priority = create_strategy(MixMode::Priority, &config);

    MixtureSolver::new(config, standard, priority, event_handler)
}

/// Creates the strategy serving `mode`
pub fn create_strategy(mode: MixMode, config: &SolverConfig) -> Box<dyn MixStrategy> {
    match mode {
        MixMode::Standard => Box::new(CombinationEnumerator::new()),
        MixMode::Priority => Box::new(PriorityAllocator::new(config.duplicate_priorities)),
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating mixture solvers with fluent API
///
/// # Example
/// ```
/// use mixture_solver::prelude::*;
/// use std::sync::Arc;
///
/// let solver = MixtureSolverBuilder::new()
///     .display_decimals(3)
///     .default_mode(MixMode::Priority)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// assert_eq!(solver.config().display_decimals, 3);
/// ```
pub struct MixtureSolverBuilder {
    config: SolverConfig,
}

impl MixtureSolverBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: SolverConfig::new(),
        }
    }

    // ========================================================================
    // Output Configuration
    // ========================================================================

    /// Decimals shown in formatted quantities
    pub fn display_decimals(mut self, decimals: u32) -> Self {
        self.config.display_decimals = decimals;
        self
    }

    /// Tolerance for the total and average checks
    pub fn average_tolerance(mut self, tolerance: Decimal) -> Self {
        self.config.average_tolerance = tolerance;
        self
    }

    // ========================================================================
    // Request Handling
    // ========================================================================

    /// Upper bound on components per request (`None` for unbounded)
    pub fn max_components(mut self, max: Option<usize>) -> Self {
        self.config.max_components = max;
        self
    }

    /// Mode used when a complex request does not name one
    pub fn default_mode(mut self, mode: MixMode) -> Self {
        self.config.default_mode = mode;
        self
    }

    /// Handling of equal priorities in priority mode
    pub fn duplicate_priorities(mut self, policy: DuplicatePriorityPolicy) -> Self {
        self.config.duplicate_priorities = policy;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Start from the classroom preset
    pub fn classroom() -> Self {
        Self {
            config: SolverConfig::classroom(),
        }
    }

    /// Start from the strict preset
    pub fn strict() -> Self {
        Self {
            config: SolverConfig::strict(),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the mixture solver
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<MixtureSolver, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &SolverConfig {
        &self.config
    }
}

impl Default for MixtureSolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Component, MixError, MixRequest};
    use crate::interfaces::NoOpEventHandler;
    use crate::numeric::Rational;

    fn int(v: i64) -> Rational {
        Rational::from_integer(v)
    }

    fn tied_request() -> MixRequest {
        let comps = vec![
            Component::new("A", int(10)).with_priority(1),
            Component::new("B", int(50)).with_priority(1),
            Component::new("C", int(90)).with_priority(2),
        ];
        MixRequest::complex(comps, int(40), int(100), MixMode::Priority).unwrap()
    }

    #[test]
    fn test_create_classroom_solver() {
        let solver =
            create_from_config(SolverConfig::classroom(), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(solver.config().display_decimals, 2);
        assert_eq!(solver.strategy_name(MixMode::Standard), "PairwiseCombination");
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config = SolverConfig::new().with_average_tolerance(Decimal::new(-1, 3));
        assert!(create_from_config(config, Arc::new(NoOpEventHandler)).is_err());
    }

    #[test]
    fn test_strict_preset_rejects_ties() {
        let strict = MixtureSolverBuilder::strict()
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        assert!(matches!(
            strict.solve(&tied_request()),
            Err(MixError::Validation { .. })
        ));

        let lenient = MixtureSolverBuilder::classroom()
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        assert!(lenient.solve(&tied_request()).is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let builder = MixtureSolverBuilder::new()
            .display_decimals(4)
            .average_tolerance(Decimal::ZERO)
            .max_components(None)
            .default_mode(MixMode::Priority)
            .duplicate_priorities(DuplicatePriorityPolicy::Reject);

        assert_eq!(builder.get_config().display_decimals, 4);
        assert_eq!(builder.get_config().max_components, None);

        let solver = builder.build(Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(solver.config().default_mode, MixMode::Priority);
        assert_eq!(
            solver.config().duplicate_priorities,
            DuplicatePriorityPolicy::Reject
        );
    }

    #[test]
    fn test_builder_invalid_decimals() {
        let result = MixtureSolverBuilder::new()
            .display_decimals(13)
            .build(Arc::new(NoOpEventHandler));
        assert!(result.is_err());
    }
}
