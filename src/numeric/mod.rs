// ============================================================================
// Numeric Module
// Exact rational arithmetic for mixture calculations
// ============================================================================
//
// This module provides:
// - Rational: reduced i128 fraction built from decimal user input
// - NumericError: Error types for arithmetic and parsing
// - gcd/lcm helpers shared with the ratio reducer
//
// Design principles:
// - No floating-point operations in any feasibility decision
// - All arithmetic returns Result (no panics)
// - Rounding happens only when a value is formatted for display

mod errors;
mod rational;

pub use errors::{NumericError, NumericResult};
pub use rational::{gcd, lcm, Rational};
