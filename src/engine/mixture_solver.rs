// ============================================================================
// Mixture Solver
// Dispatches requests to the mixing strategies and formats the result
// ============================================================================

use super::alligation::AlligationSolver;
use super::formatter::ResultFormatter;
use crate::domain::{
    ComplexMixReport, MixError, MixMode, MixReport, MixRequest, MixResult, SimpleMixReport,
    SolveOutcome, SolverConfig, MIN_COMPLEX_COMPONENTS,
};
use crate::interfaces::{EventHandler, MixStrategy, SolveEvent};
use chrono::Utc;
use std::sync::Arc;

/// Stateless mixture solver with pluggable complex-mode strategies
pub struct MixtureSolver {
    /// Validated configuration
    config: SolverConfig,

    /// Strategy for complex requests in standard mode
    standard: Box<dyn MixStrategy>,

    /// Strategy for complex requests in priority mode
    priority: Box<dyn MixStrategy>,

    /// Post-condition checks and rounding
    formatter: ResultFormatter,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl MixtureSolver {
    /// Create a new solver; fails when the configuration is invalid
    pub fn new(
        config: SolverConfig,
        standard: Box<dyn MixStrategy>,
        priority: Box<dyn MixStrategy>,
        event_handler: Arc<dyn EventHandler>,
    ) -> Result<Self, String> {
        config.validate()?;
        let formatter = ResultFormatter::from_config(&config).map_err(|e| e.to_string())?;

        Ok(Self {
            config,
            standard,
            priority,
            formatter,
            event_handler,
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Name of the strategy that serves `mode`
    pub fn strategy_name(&self, mode: MixMode) -> &str {
        match mode {
            MixMode::Standard => self.standard.name(),
            MixMode::Priority => self.priority.name(),
        }
    }

    /// Solve a request exactly.
    ///
    /// Every returned solution has passed the post-condition checks.
    pub fn solve(&self, request: &MixRequest) -> MixResult<SolveOutcome> {
        let kind = request.kind();

        self.event_handler.on_event(SolveEvent::RequestReceived {
            kind: kind.to_string(),
            components: request.component_count(),
            timestamp: Utc::now(),
        });

        let result = self.dispatch(request).and_then(|outcome| {
            self.formatter.verify_outcome(request, &outcome)?;
            Ok(outcome)
        });

        match &result {
            Ok(outcome) => {
                tracing::debug!(kind, solutions = outcome.len(), "request solved");
                self.event_handler.on_event(SolveEvent::RequestSolved {
                    kind: kind.to_string(),
                    solutions: outcome.len(),
                    timestamp: Utc::now(),
                });
            },
            Err(err) => {
                if err.is_user_error() {
                    tracing::warn!(kind, error = %err, "request rejected");
                } else {
                    tracing::error!(kind, error = %err, "invariant violated");
                }
                self.event_handler.on_event(SolveEvent::RequestRejected {
                    kind: kind.to_string(),
                    reason: err.to_string(),
                    timestamp: Utc::now(),
                });
            },
        }

        result
    }

    fn dispatch(&self, request: &MixRequest) -> MixResult<SolveOutcome> {
        if let Some(max) = self.config.max_components {
            if request.component_count() > max {
                return Err(MixError::validation(format!(
                    "at most {} components are supported, got {}",
                    max,
                    request.component_count()
                )));
            }
        }

        match request {
            MixRequest::Simple {
                first,
                second,
                target,
            } => {
                let solution = AlligationSolver::solve(first, second, target)?;
                self.event_handler.on_event(SolveEvent::SolutionFound {
                    label: solution.label.clone(),
                    ratio: solution.ratio.to_string(),
                    timestamp: Utc::now(),
                });
                Ok(SolveOutcome::Pair(solution))
            },

            MixRequest::Complex {
                components,
                target,
                mode: MixMode::Standard,
            } => {
                let solutions =
                    self.standard
                        .solve(components, target, self.event_handler.as_ref())?;
                Ok(SolveOutcome::Combinations(solutions))
            },

            MixRequest::Complex {
                components,
                target,
                mode: MixMode::Priority,
            } => {
                let solution = self
                    .priority
                    .solve(components, target, self.event_handler.as_ref())?
                    .into_iter()
                    .next()
                    .ok_or_else(|| {
                        MixError::invariant(format!(
                            "{} returned no solution",
                            self.priority.name()
                        ))
                    })?;
                Ok(SolveOutcome::Prioritized(solution))
            },
        }
    }

    /// Solve and format a request.
    pub fn report(&self, request: &MixRequest) -> MixResult<MixReport> {
        let outcome = self.solve(request)?;
        self.formatter.format(request, &outcome)
    }

    /// Solve and format a simple request.
    pub fn report_simple(&self, request: &MixRequest) -> MixResult<SimpleMixReport> {
        match self.report(request)? {
            MixReport::Simple(report) => Ok(report),
            MixReport::Complex(_) => Err(MixError::validation(
                "expected a request with exactly two components",
            )),
        }
    }

    /// Solve and format a complex request.
    pub fn report_complex(&self, request: &MixRequest) -> MixResult<ComplexMixReport> {
        match self.report(request)? {
            MixReport::Complex(report) => Ok(report),
            MixReport::Simple(_) => Err(MixError::validation(format!(
                "expected a request with at least {} components",
                MIN_COMPLEX_COMPONENTS
            ))),
        }
    }
}
