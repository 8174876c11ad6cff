// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod component;
pub mod config;
pub mod errors;
pub mod report;
pub mod request;
pub mod solution;

pub use component::{Component, MixMode, MixTarget};
pub use config::{DuplicatePriorityPolicy, SolverConfig};
pub use errors::{MixError, MixResult};
pub use report::{
    CombinationLine, ComplexMixReport, ComponentLine, MethodDetails, MixReport,
    PrioritizedMixReport, SimpleMixReport,
};
pub use request::{MixRequest, MIN_COMPLEX_COMPONENTS};
pub use solution::{ReducedRatio, Solution, SolveOutcome};
