// ============================================================================
// Mixture Solver Library
// Exact alligation engine with pluggable mixing strategies
// ============================================================================

//! # Mixture Solver
//!
//! Computes how much of each component to combine so that a mixture reaches
//! a desired total amount and a desired weighted-average intensity.
//!
//! ## Features
//!
//! - **Exact rational arithmetic** for every intermediate value
//! - **Two-component alligation** with a reduced integer ratio
//! - **Pairwise enumeration** of all feasible sub-mixes for N >= 3
//! - **Priority allocation** that saturates components in rank order
//! - **Event hooks** for auditing and logging solve requests
//! - **JSON API surface** behind the `serde` feature
//!
//! ## Example
//!
//! ```rust
//! use mixture_solver::prelude::*;
//! use std::sync::Arc;
//!
//! let solver = MixtureSolverBuilder::new()
//!     .build(Arc::new(NoOpEventHandler))
//!     .unwrap();
//!
//! let request = MixRequest::simple(
//!     "70".parse().unwrap(),
//!     "95".parse().unwrap(),
//!     "85".parse().unwrap(),
//!     "230".parse().unwrap(),
//! )
//! .unwrap();
//!
//! let report = solver.report_simple(&request).unwrap();
//! assert_eq!(report.quantities_formatted, ["92.00", "138.00"]);
//! assert_eq!(report.simplified_ratio, "2 : 3");
//! ```

#[cfg(feature = "serde")]
pub mod api;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    #[cfg(feature = "serde")]
    pub use crate::api::{ApiResponse, MixApi};
    pub use crate::domain::{
        ComplexMixReport, Component, DuplicatePriorityPolicy, MixError, MixMode, MixReport,
        MixRequest, MixResult, MixTarget, ReducedRatio, SimpleMixReport, Solution, SolveOutcome,
        SolverConfig,
    };
    pub use crate::engine::{
        create_from_config, AlligationSolver, CombinationEnumerator, MixtureSolver,
        MixtureSolverBuilder, PriorityAllocator, RatioReducer, ResultFormatter,
    };
    pub use crate::interfaces::{
        EventHandler, LoggingEventHandler, MixStrategy, NoOpEventHandler, SolveEvent,
    };
    pub use crate::numeric::Rational;
}
