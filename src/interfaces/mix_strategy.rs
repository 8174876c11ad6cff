// ============================================================================
// Mix Strategy Interface
// Defines the contract for pluggable N-component resolution strategies
// ============================================================================

use crate::domain::{Component, MixResult, MixTarget, Solution};
use crate::interfaces::EventHandler;

/// Strategy pattern interface for resolving an under-determined mixture
/// Implementations: CombinationEnumerator (standard), PriorityAllocator (priority)
pub trait MixStrategy: Send + Sync {
    /// Compute the solutions for a set of components
    ///
    /// # Arguments
    /// * `components` - Request components, in request order
    /// * `target` - Desired average intensity and total amount
    /// * `events` - Receives candidate-level events (discarded pairs, found solutions)
    ///
    /// # Returns
    /// Every solution the strategy produces, each full-width over `components`
    fn solve(
        &self,
        components: &[Component],
        target: &MixTarget,
        events: &dyn EventHandler,
    ) -> MixResult<Vec<Solution>>;

    /// Get the strategy name for logging
    fn name(&self) -> &str;
}
