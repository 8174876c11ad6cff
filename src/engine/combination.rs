// ============================================================================
// Pairwise Combination Enumerator
// Standard mode for three or more components
// ============================================================================

use super::alligation::{pair_label, AlligationSolver};
use crate::domain::{Component, MixError, MixResult, MixTarget, Solution};
use crate::interfaces::{EventHandler, MixStrategy, SolveEvent};
use chrono::Utc;

/// Standard-mode strategy
///
/// With N components and only the total and the average fixed, the system
/// has N unknowns and two equations. Every solution returned here uses
/// exactly two components; all other quantities are zero.
///
/// # Example
/// ```text
/// Intensities 10, 50, 90   m = 40   S = 100
///
/// (10, 50) -> 25 / 75      1 : 3
/// (10, 90) -> 62.5 / 37.5  5 : 3
/// (50, 90) -> discarded, 40 is outside [50, 90]
/// ```
///
/// Pairs are visited as `(i, j)`, `i < j`, in request order, and the
/// surviving solutions keep that order.
pub struct CombinationEnumerator;

impl CombinationEnumerator {
    pub fn new() -> Self {
        Self
    }

    /// All unordered index pairs in request order.
    fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
    }
}

impl Default for CombinationEnumerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MixStrategy for CombinationEnumerator {
    fn solve(
        &self,
        components: &[Component],
        target: &MixTarget,
        events: &dyn EventHandler,
    ) -> MixResult<Vec<Solution>> {
        let mut solutions = Vec::new();

        for (i, j) in Self::pairs(components.len()) {
            match AlligationSolver::solve_pair(components, i, j, target) {
                Ok(solution) => {
                    events.on_event(SolveEvent::SolutionFound {
                        label: solution.label.clone(),
                        ratio: solution.ratio.to_string(),
                        timestamp: Utc::now(),
                    });
                    solutions.push(solution);
                },
                Err(
                    err @ (MixError::DegenerateComponents { .. }
                    | MixError::InfeasibleRange { .. }
                    | MixError::Infeasible { .. }),
                ) => {
                    let label = pair_label(&components[i], &components[j]);
                    tracing::trace!(pair = %label, reason = err.kind(), "pair discarded");
                    events.on_event(SolveEvent::CandidateDiscarded {
                        label,
                        reason: err.to_string(),
                        timestamp: Utc::now(),
                    });
                },
                Err(err) => return Err(err),
            }
        }

        if solutions.is_empty() {
            return Err(MixError::infeasible(format!(
                "desired intensity {} cannot be reached by any pair of components",
                target.desired_intensity.to_f64()
            )));
        }

        Ok(solutions)
    }

    fn name(&self) -> &str {
        "PairwiseCombination"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;
    use crate::numeric::Rational;
    use proptest::prelude::*;
    use std::sync::Mutex;

    fn int(v: i64) -> Rational {
        Rational::from_integer(v)
    }

    fn components(intensities: &[i64]) -> Vec<Component> {
        intensities
            .iter()
            .enumerate()
            .map(|(i, a)| Component::new(Component::default_name(i), int(*a)))
            .collect()
    }

    fn target(m: i64, s: i64) -> MixTarget {
        MixTarget::new(int(m), int(s)).unwrap()
    }

    struct DiscardCounter(Mutex<Vec<String>>);

    impl EventHandler for DiscardCounter {
        fn on_event(&self, event: SolveEvent) {
            if let SolveEvent::CandidateDiscarded { label, .. } = event {
                self.0.lock().unwrap().push(label);
            }
        }
    }

    #[test]
    fn test_pair_order() {
        let pairs: Vec<_> = CombinationEnumerator::pairs(4).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert_eq!(CombinationEnumerator::pairs(1).count(), 0);
    }

    #[test]
    fn test_three_components() {
        let comps = components(&[10, 50, 90]);
        let solutions = CombinationEnumerator::new()
            .solve(&comps, &target(40, 100), &NoOpEventHandler)
            .unwrap();

        assert_eq!(solutions.len(), 2);

        assert_eq!(solutions[0].label, "Component 1 + Component 2");
        assert_eq!(solutions[0].quantities, vec![int(25), int(75), int(0)]);
        assert_eq!(solutions[0].ratio.to_string(), "1 : 3");

        assert_eq!(solutions[1].label, "Component 1 + Component 3");
        assert_eq!(
            solutions[1].quantities,
            vec![
                Rational::new(125, 2).unwrap(),
                int(0),
                Rational::new(75, 2).unwrap()
            ]
        );
        assert_eq!(solutions[1].ratio.to_string(), "5 : 3");
    }

    #[test]
    fn test_duplicate_intensities_are_not_merged() {
        let comps = components(&[20, 20, 80]);
        let handler = DiscardCounter(Mutex::new(Vec::new()));
        let solutions = CombinationEnumerator::new()
            .solve(&comps, &target(50, 90), &handler)
            .unwrap();

        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions[0].contributors.as_slice(), &[0, 2]);
        assert_eq!(solutions[1].contributors.as_slice(), &[1, 2]);
        assert_eq!(solutions[0].quantities[0], solutions[1].quantities[1]);

        // The (20, 20) pair is degenerate
        assert_eq!(
            *handler.0.lock().unwrap(),
            vec!["Component 1 + Component 2".to_string()]
        );
    }

    #[test]
    fn test_no_feasible_pair() {
        let comps = components(&[10, 50, 90]);
        let result = CombinationEnumerator::new().solve(&comps, &target(95, 100), &NoOpEventHandler);
        assert!(matches!(result, Err(MixError::Infeasible { .. })));
    }

    proptest! {
        #[test]
        fn prop_completeness(
            intensities in proptest::collection::vec(0i64..100, 3..8),
            m in 0i64..100,
            s in 1i64..1_000,
        ) {
            let comps = components(&intensities);
            let expected = CombinationEnumerator::pairs(comps.len())
                .filter(|&(i, j)| {
                    let (a, b) = (intensities[i], intensities[j]);
                    a != b && a.min(b) <= m && m <= a.max(b)
                })
                .count();

            let result = CombinationEnumerator::new().solve(&comps, &target(m, s), &NoOpEventHandler);
            match result {
                Ok(solutions) => {
                    prop_assert_eq!(solutions.len(), expected);
                    for solution in &solutions {
                        prop_assert_eq!(solution.total().unwrap(), int(s));
                        let all: Vec<Rational> = intensities.iter().map(|a| int(*a)).collect();
                        prop_assert_eq!(solution.weighted_average(&all).unwrap(), int(m));
                    }
                },
                Err(err) => {
                    prop_assert_eq!(expected, 0);
                    let is_infeasible = matches!(err, MixError::Infeasible { .. });
                    prop_assert!(is_infeasible);
                },
            }
        }
    }
}
