// ============================================================================
// Solution Domain Model
// ============================================================================

use super::errors::{MixError, MixResult};
use crate::numeric::{gcd, Rational};
use smallvec::SmallVec;
use std::fmt;

/// Ratio terms reduced to coprime integers, e.g. `2 : 3`.
///
/// Zero terms are kept, so a boundary solution `50 : 0` reads `1 : 0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReducedRatio {
    terms: SmallVec<[u128; 4]>,
}

impl ReducedRatio {
    /// Wrap already reduced terms. Use `RatioReducer` to build one from quantities.
    pub(crate) fn from_terms(terms: SmallVec<[u128; 4]>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[u128] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True when the GCD of all terms is exactly 1.
    pub fn is_coprime(&self) -> bool {
        self.terms.iter().fold(0u128, |acc, t| gcd(acc, *t)) == 1
    }
}

impl fmt::Display for ReducedRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" : ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}

/// One complete answer to a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Quantity per request component, in request order (zeros included)
    pub quantities: Vec<Rational>,

    /// Indices of the components this solution was built from
    pub contributors: SmallVec<[usize; 4]>,

    /// Reduced ratio over the contributors' quantities
    pub ratio: ReducedRatio,

    /// Human-readable description of the contributors
    pub label: String,
}

impl Solution {
    /// Quantities of the contributing components, in contributor order.
    pub fn contributing_quantities(&self) -> Vec<Rational> {
        self.contributors
            .iter()
            .map(|&i| self.quantities[i])
            .collect()
    }

    /// Sum of all quantities.
    pub fn total(&self) -> MixResult<Rational> {
        Ok(Rational::checked_sum(&self.quantities)?)
    }

    /// Exact weighted average `Σxᵢaᵢ / Σxᵢ` for the given intensities.
    pub fn weighted_average(&self, intensities: &[Rational]) -> MixResult<Rational> {
        if intensities.len() != self.quantities.len() {
            return Err(MixError::invariant(format!(
                "solution has {} quantities but {} intensities were given",
                self.quantities.len(),
                intensities.len()
            )));
        }

        let mass = self
            .quantities
            .iter()
            .zip(intensities)
            .try_fold(Rational::ZERO, |acc, (x, a)| {
                x.checked_mul(*a).and_then(|xa| acc.checked_add(xa))
            })?;

        Ok(mass.checked_div(self.total()?)?)
    }
}

/// Result of a solve, one variant per dispatch path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Simple two-component request
    Pair(Solution),

    /// Priority-mode allocation over all components
    Prioritized(Solution),

    /// Every feasible two-component sub-mix, in input pair order
    Combinations(Vec<Solution>),
}

impl SolveOutcome {
    pub fn solutions(&self) -> &[Solution] {
        match self {
            SolveOutcome::Pair(solution) | SolveOutcome::Prioritized(solution) => {
                std::slice::from_ref(solution)
            },
            SolveOutcome::Combinations(solutions) => solutions,
        }
    }

    pub fn len(&self) -> usize {
        self.solutions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions().is_empty()
    }
}
