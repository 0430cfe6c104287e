use log::{debug, info, warn};
use std::time::Instant;

use crate::domain::extract::{extract, Tolerances};
use crate::domain::model::build;
use crate::domain::solver::{Solver, SolverOutcome};
use crate::domain::validate::validate_requirements;
use crate::error::Result;
use crate::models::{DietReport, NutrientRequirement};
use crate::table::FoodTable;

/// Validate, build, solve and extract one diet. Stateless: every model and
/// value vector lives only for this call.
pub fn solve_diet(
    table: &FoodTable,
    requirements: &[NutrientRequirement],
    solver: &dyn Solver,
    tolerances: &Tolerances,
) -> Result<DietReport> {
    validate_requirements(requirements, table)?;

    let model = build(requirements, table)?;
    debug!(
        "Built diet model: {} variables, {} constraints",
        model.num_variables(),
        model.num_constraints(),
    );

    info!("Solving with {}", solver.name());
    let started = Instant::now();
    let outcome = solver.solve(&model);
    let solve_millis = started.elapsed().as_secs_f64() * 1000.0;
    match &outcome {
        SolverOutcome::Optimal(_) => debug!("Solver found an optimal solution"),
        SolverOutcome::FeasibleSuboptimal(_) => {
            warn!("A potentially suboptimal solution was found")
        }
        SolverOutcome::NoSolution(reason) => warn!("The solver could not solve the problem: {}", reason),
    }

    let mut report = extract(table, requirements, outcome, solver.name(), tolerances)?;
    report.solve_millis = solve_millis;
    info!("Problem solved in {:.3} milliseconds", solve_millis);
    info!(
        "Optimal annual price: ${:.4} ({} foods)",
        report.annual_cost,
        report.food_purchases.len(),
    );

    Ok(report)
}
