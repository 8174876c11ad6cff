// ============================================================================
// Basic Usage Example
// ============================================================================

use mixture_solver::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Mixture Solver Example ===\n");

    let solver = MixtureSolverBuilder::classroom()
        .build(Arc::new(LoggingEventHandler))
        .unwrap();

    // Two components: 70% and 95% into 230 units at 85%
    println!("Simple mix");
    let request = MixRequest::simple(
        "70".parse().unwrap(),
        "95".parse().unwrap(),
        "85".parse().unwrap(),
        "230".parse().unwrap(),
    )
    .unwrap();

    match solver.report_simple(&request) {
        Ok(report) => {
            println!("  quantities: {:?}", report.quantities_formatted);
            println!("  ratio:      {}\n", report.simplified_ratio);
        },
        Err(err) => println!("  error: {}\n", err),
    }

    // Three components, every feasible pair
    let components = vec![
        Component::new("Low", Rational::from_integer(10)).with_priority(2),
        Component::new("Mid", Rational::from_integer(50)).with_priority(1),
        Component::new("High", Rational::from_integer(90)).with_priority(3),
    ];

    println!("Standard mode");
    let standard = MixRequest::complex(
        components.clone(),
        Rational::from_integer(40),
        Rational::from_integer(100),
        MixMode::Standard,
    )
    .unwrap();

    if let Ok(SolveOutcome::Combinations(solutions)) = solver.solve(&standard) {
        for solution in solutions {
            println!("  {:<12} ratio {}", solution.label, solution.ratio);
        }
    }

    // Same components, saturated in priority order
    println!("\nPriority mode");
    let priority = MixRequest::complex(
        components,
        Rational::from_integer(40),
        Rational::from_integer(100),
        MixMode::Priority,
    )
    .unwrap();

    match solver.report_complex(&priority) {
        Ok(ComplexMixReport::Prioritized(report)) => {
            for line in &report.components {
                println!("  {:<6} {:>8}", line.name, line.quantity_formatted);
            }
            println!("  ratio {}  average {}", report.simplified_ratio, report.average_intensity);
        },
        Ok(other) => println!("  unexpected report: {:?}", other),
        Err(err) => println!("  error: {}", err),
    }

    // Unreachable target
    println!("\nInfeasible target");
    let infeasible = MixRequest::simple(
        Rational::from_integer(70),
        Rational::from_integer(95),
        Rational::from_integer(100),
        Rational::from_integer(230),
    )
    .unwrap();
    if let Err(err) = solver.solve(&infeasible) {
        println!("  rejected: {}", err);
    }

    #[cfg(feature = "serde")]
    {
        println!("\nJSON API");
        let api = MixApi::new(solver);
        let response = api.handle(
            "POST",
            "/api/mix/simple",
            r#"{"a1": "70", "a2": 95, "m": 85, "S": 230}"#,
        );
        println!("  {} {}", response.status, response.body);
    }
}
