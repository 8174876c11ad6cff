// ============================================================================
// Engine Module
// Contains the exact mixing algorithms and the solver that drives them
// ============================================================================

mod alligation;
mod combination;
mod formatter;
mod mixture_solver;
mod priority;
mod ratio;

pub mod factory;

pub use alligation::AlligationSolver;
pub use combination::CombinationEnumerator;
pub use factory::{create_from_config, create_strategy, MixtureSolverBuilder};
pub use formatter::ResultFormatter;
pub use mixture_solver::MixtureSolver;
pub use priority::PriorityAllocator;
pub use ratio::RatioReducer;
