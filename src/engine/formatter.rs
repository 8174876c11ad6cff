// ============================================================================
// Result Formatter
// Post-condition checks and display rounding
// ============================================================================

use crate::domain::{
    CombinationLine, ComplexMixReport, ComponentLine, MethodDetails, MixError, MixReport,
    MixRequest, MixResult, MixTarget, PrioritizedMixReport, SimpleMixReport, Solution,
    SolveOutcome, SolverConfig,
};
use crate::numeric::Rational;
use rust_decimal::prelude::ToPrimitive;

/// Turns exact solutions into display payloads
///
/// Every solution is checked before it is formatted: quantities are
/// non-negative, they add up to the total, their weighted average equals
/// the target (both within the configured tolerance) and the ratio is
/// coprime. A failed check is an `InternalInvariant` error, never a user
/// error. Rounding only happens after the checks passed.
pub struct ResultFormatter {
    display_decimals: u32,
    tolerance: Rational,
}

impl ResultFormatter {
    pub fn new(display_decimals: u32, tolerance: Rational) -> Self {
        Self {
            display_decimals,
            tolerance,
        }
    }

    pub fn from_config(config: &SolverConfig) -> MixResult<Self> {
        Ok(Self::new(
            config.display_decimals,
            Rational::from_decimal(config.average_tolerance)?,
        ))
    }

    pub fn display_decimals(&self) -> u32 {
        self.display_decimals
    }

    // ========================================================================
    // Invariant Checks
    // ========================================================================

    /// Check one solution; returns its exact weighted average.
    pub fn verify(
        &self,
        solution: &Solution,
        intensities: &[Rational],
        target: &MixTarget,
    ) -> MixResult<Rational> {
        if solution.quantities.iter().any(|x| x.is_negative()) {
            return Err(MixError::invariant(format!(
                "solution '{}' has a negative quantity",
                solution.label
            )));
        }

        let total = solution.total()?;
        if !self.within_tolerance(total, target.total_amount)? {
            return Err(MixError::invariant(format!(
                "solution '{}' totals {} instead of {}",
                solution.label, total, target.total_amount
            )));
        }

        let average = solution.weighted_average(intensities)?;
        if !self.within_tolerance(average, target.desired_intensity)? {
            return Err(MixError::invariant(format!(
                "solution '{}' averages {} instead of {}",
                solution.label, average, target.desired_intensity
            )));
        }

        if solution.ratio.len() != solution.contributors.len() || !solution.ratio.is_coprime() {
            return Err(MixError::invariant(format!(
                "solution '{}' has ratio '{}' which is not a coprime ratio over its contributors",
                solution.label, solution.ratio
            )));
        }

        Ok(average)
    }

    /// Check every solution of an outcome against its request.
    pub fn verify_outcome(&self, request: &MixRequest, outcome: &SolveOutcome) -> MixResult<()> {
        let intensities = intensities(request);
        for solution in outcome.solutions() {
            self.verify(solution, &intensities, request.target())?;
        }
        Ok(())
    }

    fn within_tolerance(&self, actual: Rational, expected: Rational) -> MixResult<bool> {
        let diff = actual.checked_sub(expected)?;
        let distance = if diff.is_negative() {
            diff.checked_neg()?
        } else {
            diff
        };
        Ok(distance <= self.tolerance)
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Quantity as a fixed-decimal string, e.g. "92.00".
    pub fn format_quantity(&self, value: Rational) -> MixResult<String> {
        Ok(value.round_to_decimal(self.display_decimals)?.to_string())
    }

    /// Quantity rounded to display precision, as a JSON number.
    fn display_number(&self, value: Rational) -> MixResult<f64> {
        value
            .round_to_decimal(self.display_decimals)?
            .to_f64()
            .ok_or_else(|| MixError::invariant(format!("{} has no f64 representation", value)))
    }

    /// Build the response payload for a solved request.
    pub fn format(&self, request: &MixRequest, outcome: &SolveOutcome) -> MixResult<MixReport> {
        let intensities = intensities(request);
        let target = request.target();

        match (request, outcome) {
            (MixRequest::Simple { .. }, SolveOutcome::Pair(solution)) => {
                self.verify(solution, &intensities, target)?;
                let (x1, x2) = (solution.quantities[0], solution.quantities[1]);

                Ok(MixReport::Simple(SimpleMixReport {
                    quantities: [self.display_number(x1)?, self.display_number(x2)?],
                    quantities_formatted: [self.format_quantity(x1)?, self.format_quantity(x2)?],
                    simplified_ratio: solution.ratio.to_string(),
                }))
            },

            (
                MixRequest::Complex {
                    components, mode, ..
                },
                SolveOutcome::Prioritized(solution),
            ) => {
                let average = self.verify(solution, &intensities, target)?;

                let lines = components
                    .iter()
                    .zip(&solution.quantities)
                    .map(|(component, quantity)| {
                        Ok(ComponentLine {
                            name: component.name.clone(),
                            quantity_formatted: self.format_quantity(*quantity)?,
                            intensity: component.intensity.to_f64(),
                            priority: component.priority,
                        })
                    })
                    .collect::<MixResult<Vec<_>>>()?;

                Ok(MixReport::Complex(ComplexMixReport::Prioritized(
                    PrioritizedMixReport {
                        mix_type: *mode,
                        components: lines,
                        simplified_ratio: solution.ratio.to_string(),
                        average_intensity: average.to_f64(),
                    },
                )))
            },

            (MixRequest::Complex { .. }, SolveOutcome::Combinations(solutions)) => {
                let all_solutions = solutions
                    .iter()
                    .map(|solution| {
                        self.verify(solution, &intensities, target)?;
                        Ok(CombinationLine {
                            combination_used: solution.label.clone(),
                            quantities: solution
                                .quantities
                                .iter()
                                .map(|x| self.display_number(*x))
                                .collect::<MixResult<Vec<_>>>()?,
                            simplified_ratio: solution.ratio.to_string(),
                        })
                    })
                    .collect::<MixResult<Vec<_>>>()?;

                Ok(MixReport::Complex(ComplexMixReport::Combinations {
                    method_details: MethodDetails { all_solutions },
                }))
            },

            (request, _) => Err(MixError::invariant(format!(
                "outcome does not match a {} request",
                request.kind()
            ))),
        }
    }
}

/// Intensities of the request components, in request order.
fn intensities(request: &MixRequest) -> Vec<Rational> {
    match request {
        MixRequest::Simple { first, second, .. } => vec![first.intensity, second.intensity],
        MixRequest::Complex { components, .. } => {
            components.iter().map(|c| c.intensity).collect()
        },
    }
}
