// ============================================================================
// Priority Allocator
// Legacy priority mode: saturate components in rank order
// ============================================================================

use super::ratio::RatioReducer;
use crate::domain::{
    Component, DuplicatePriorityPolicy, MixError, MixResult, MixTarget, Solution,
};
use crate::interfaces::{EventHandler, MixStrategy, SolveEvent};
use crate::numeric::Rational;
use chrono::Utc;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Priority-mode strategy
///
/// Components are processed in ascending priority (rank 1 first). Each one
/// receives the largest quantity that still lets the components after it
/// absorb the remaining amount at the remaining intensity mass. The last
/// component takes exactly what is left.
///
/// Components without a priority rank after all ranked ones. Equal ranks
/// follow the configured [`DuplicatePriorityPolicy`].
///
/// # Example
/// ```text
/// Intensities 10 (p1), 50 (p2), 90 (p3)   m = 40   S = 100
///
/// 10: remaining window [50, 90], largest x keeping the rest feasible = 62.5
/// 50: remaining window [90, 90], largest x = 0
/// 90: takes the remaining 37.5
///
/// Result 62.5 / 0 / 37.5, ratio 5 : 0 : 3
/// ```
pub struct PriorityAllocator {
    /// Tie-break for equal priorities
    pub duplicates: DuplicatePriorityPolicy,
}

impl PriorityAllocator {
    pub fn new(duplicates: DuplicatePriorityPolicy) -> Self {
        Self { duplicates }
    }

    /// Component indices in processing order.
    fn ranking(&self, components: &[Component]) -> MixResult<Vec<usize>> {
        if self.duplicates == DuplicatePriorityPolicy::Reject {
            let mut seen = HashSet::new();
            for priority in components.iter().filter_map(|c| c.priority) {
                if !seen.insert(priority) {
                    return Err(MixError::validation(format!(
                        "priority {} is assigned to more than one component",
                        priority
                    )));
                }
            }
        }

        // Stable sort keeps request order among equal keys
        let mut order: Vec<usize> = (0..components.len()).collect();
        order.sort_by_key(|&i| match components[i].priority {
            Some(p) => (0u8, p),
            None => (1u8, 0),
        });
        Ok(order)
    }

    /// Lowest and highest intensity among `indices`.
    fn window(components: &[Component], indices: &[usize]) -> Option<(Rational, Rational)> {
        indices.iter().map(|&i| components[i].intensity).fold(None, |acc, a| {
            Some(match acc {
                None => (a, a),
                Some((lo, hi)) => (lo.min(a), hi.max(a)),
            })
        })
    }

    /// Largest admissible quantity for a component of intensity `a`.
    ///
    /// With `remaining` amount and `mass` left to place, the components
    /// after this one (intensities within `[lo, hi]`) must still satisfy
    /// `(remaining − x)·lo ≤ mass − x·a ≤ (remaining − x)·hi`.
    fn saturation(
        a: Rational,
        remaining: Rational,
        mass: Rational,
        lo: Rational,
        hi: Rational,
    ) -> MixResult<Rational> {
        let mut lower = Rational::ZERO;
        let mut upper = remaining;

        // x·(a − lo) ≤ mass − remaining·lo
        let slack_low = mass.checked_sub(remaining.checked_mul(lo)?)?;
        let bound = |slack: Rational, gap: Rational| -> MixResult<Rational> {
            Ok(slack.checked_div(gap)?)
        };

        match a.cmp(&lo) {
            Ordering::Greater => upper = upper.min(bound(slack_low, a.checked_sub(lo)?)?),
            Ordering::Less => lower = lower.max(bound(slack_low, a.checked_sub(lo)?)?),
            Ordering::Equal if slack_low.is_negative() => {
                return Err(MixError::infeasible("remaining components cannot reach the target"))
            },
            Ordering::Equal => {},
        }

        // x·(hi − a) ≤ remaining·hi − mass
        let slack_high = remaining.checked_mul(hi)?.checked_sub(mass)?;
        match a.cmp(&hi) {
            Ordering::Less => upper = upper.min(bound(slack_high, hi.checked_sub(a)?)?),
            Ordering::Greater => lower = lower.max(bound(slack_high, hi.checked_sub(a)?)?),
            Ordering::Equal if slack_high.is_negative() => {
                return Err(MixError::infeasible("remaining components cannot reach the target"))
            },
            Ordering::Equal => {},
        }

        if lower > upper {
            return Err(MixError::infeasible(
                "no admissible quantity for the current priority rank",
            ));
        }

        Ok(upper)
    }
}

impl Default for PriorityAllocator {
    fn default() -> Self {
        Self::new(DuplicatePriorityPolicy::InputOrder)
    }
}

impl MixStrategy for PriorityAllocator {
    fn solve(
        &self,
        components: &[Component],
        target: &MixTarget,
        events: &dyn EventHandler,
    ) -> MixResult<Vec<Solution>> {
        let order = self.ranking(components)?;
        let m = target.desired_intensity;

        let (low, high) = Self::window(components, &order)
            .ok_or_else(|| MixError::validation("no components supplied"))?;
        if m < low || m > high {
            return Err(MixError::infeasible(format!(
                "desired intensity {} must lie between {} and {}",
                m.to_f64(),
                low.to_f64(),
                high.to_f64()
            )));
        }

        let mut quantities = vec![Rational::ZERO; components.len()];
        let mut remaining = target.total_amount;
        let mut mass = target.required_mass()?;

        for (position, &index) in order.iter().enumerate() {
            let a = components[index].intensity;

            let x = match Self::window(components, &order[position + 1..]) {
                Some((lo, hi)) => Self::saturation(a, remaining, mass, lo, hi)?,
                None => {
                    if remaining.checked_mul(a)? != mass {
                        return Err(MixError::infeasible(
                            "last component cannot complete the mixture",
                        ));
                    }
                    remaining
                },
            };

            tracing::trace!(component = %components[index].name, quantity = %x, "allocated");
            quantities[index] = x;
            remaining = remaining.checked_sub(x)?;
            mass = mass.checked_sub(x.checked_mul(a)?)?;
        }

        let ratio = RatioReducer::reduce(&quantities)?;
        let label = order
            .iter()
            .map(|&i| components[i].name.as_str())
            .collect::<Vec<_>>()
            .join(" > ");

        events.on_event(SolveEvent::SolutionFound {
            label: label.clone(),
            ratio: ratio.to_string(),
            timestamp: Utc::now(),
        });

        Ok(vec![Solution {
            quantities,
            contributors: (0..components.len()).collect(),
            ratio,
            label,
        }])
    }

    fn name(&self) -> &str {
        "PriorityAllocation"
    }
}
