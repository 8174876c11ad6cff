// ============================================================================
// Alligation Solver
// Exact two-component mixture
// ============================================================================

use super::ratio::RatioReducer;
use crate::domain::{Component, MixError, MixResult, MixTarget, Solution};
use crate::numeric::Rational;
use smallvec::smallvec;

/// Classic alligation: two intensities, one target
///
/// Solves `x1 + x2 = S` and `x1·a1 + x2·a2 = m·S`:
/// ```text
/// x1 = S · (a2 − m) / (a2 − a1)
/// x2 = S − x1
///
/// a1 = 70, a2 = 95, m = 85, S = 230
///   x1 = 230 · 10 / 25 = 92
///   x2 = 138              ratio 2 : 3
/// ```
///
/// The interval `[min(a1, a2), max(a1, a2)]` is closed: a target equal to
/// one intensity puts the whole amount on that component.
pub struct AlligationSolver;

impl AlligationSolver {
    /// Exact quantities `(x1, x2)` for intensities `a1`, `a2`.
    ///
    /// # Errors
    /// - `DegenerateComponents` if `a1 == a2` and the target differs
    /// - `Infeasible` if `a1 == a2 == m` (every split works, none is preferred)
    /// - `InfeasibleRange` if `m` lies outside `[min, max]`
    pub fn quantities(
        a1: Rational,
        a2: Rational,
        target: &MixTarget,
    ) -> MixResult<(Rational, Rational)> {
        let m = target.desired_intensity;
        let s = target.total_amount;

        if a1 == a2 {
            if m == a1 {
                return Err(MixError::infeasible(format!(
                    "both components have intensity {}, so the split is indeterminate",
                    a1.to_f64()
                )));
            }
            return Err(MixError::DegenerateComponents {
                intensity: a1,
                target: m,
            });
        }

        let low = a1.min(a2);
        let high = a1.max(a2);
        if m < low || m > high {
            return Err(MixError::InfeasibleRange {
                target: m,
                low,
                high,
            });
        }

        let x1 = s
            .checked_mul(a2.checked_sub(m)?)?
            .checked_div(a2.checked_sub(a1)?)?;
        let x2 = s.checked_sub(x1)?;

        Ok((x1, x2))
    }

    /// Solve the pair `(i, j)` of `components`, leaving every other
    /// quantity at zero.
    pub fn solve_pair(
        components: &[Component],
        i: usize,
        j: usize,
        target: &MixTarget,
    ) -> MixResult<Solution> {
        let (first, second) = match (components.get(i), components.get(j)) {
            (Some(first), Some(second)) if i != j => (first, second),
            _ => {
                return Err(MixError::invariant(format!(
                    "pair ({}, {}) is not valid for {} components",
                    i,
                    j,
                    components.len()
                )))
            },
        };

        let (xi, xj) = Self::quantities(first.intensity, second.intensity, target)?;
        let ratio = RatioReducer::reduce(&[xi, xj])?;

        let mut quantities = vec![Rational::ZERO; components.len()];
        quantities[i] = xi;
        quantities[j] = xj;

        Ok(Solution {
            quantities,
            contributors: smallvec![i, j],
            ratio,
            label: pair_label(first, second),
        })
    }

    /// Solve the two-component request `first` + `second`.
    pub fn solve(first: &Component, second: &Component, target: &MixTarget) -> MixResult<Solution> {
        Self::solve_pair(&[first.clone(), second.clone()], 0, 1, target)
    }
}

/// Label for a two-component sub-mix
pub(crate) fn pair_label(first: &Component, second: &Component) -> String {
    format!("{} + {}", first.name, second.name)
}
