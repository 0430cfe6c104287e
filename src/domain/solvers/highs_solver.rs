use crate::domain::model::DietModel;
use crate::domain::solver::{Solver, SolverOptions, SolverOutcome};

use ::highs::{ColProblem, HighsModelStatus, Sense};
use log::debug;

/// HiGHS solver implementation
pub struct HighsSolver {
    options: SolverOptions,
}

impl HighsSolver {
    pub fn new(options: SolverOptions) -> Self {
        HighsSolver { options }
    }

    /// Convert a HiGHS model status plus its column values to an outcome
    fn convert_status(model_status: HighsModelStatus, values: Vec<f64>) -> SolverOutcome {
        match model_status {
            HighsModelStatus::Optimal => SolverOutcome::Optimal(values),
            HighsModelStatus::ReachedTimeLimit | HighsModelStatus::ReachedIterationLimit
                if !values.is_empty() =>
            {
                SolverOutcome::FeasibleSuboptimal(values)
            }
            HighsModelStatus::Infeasible => SolverOutcome::NoSolution("problem is infeasible".into()),
            HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => {
                SolverOutcome::NoSolution("problem is unbounded or infeasible".into())
            }
            other => SolverOutcome::NoSolution(format!("HiGHS stopped with status {:?}", other)),
        }
    }
}

impl Solver for HighsSolver {
    fn solve(&self, model: &DietModel) -> SolverOutcome {
        let mut problem = ColProblem::new();

        // First, add all constraint rows
        let rows: Vec<_> = model
            .constraints
            .iter()
            .map(|constraint| problem.add_row(constraint.lower_bound..))
            .collect();

        // Add variables (columns) with their constraint coefficients
        for (var, (obj_coeff, entries)) in model
            .variables
            .iter()
            .zip(model.objective.iter().zip(model.columns()))
        {
            let row_factors: Vec<_> = entries
                .iter()
                .map(|&(row_idx, coeff)| (rows[row_idx], coeff))
                .collect();

            if var.upper.is_finite() {
                problem.add_column(*obj_coeff, var.lower..=var.upper, &row_factors);
            } else {
                problem.add_column(*obj_coeff, var.lower.., &row_factors);
            }
        }

        let mut highs_model = problem.optimise(Sense::Minimise);
        highs_model.set_option("output_flag", false);
        if let Some(limit) = self.options.time_limit {
            highs_model.set_option("time_limit", limit.as_secs_f64());
        }

        let solved = match highs_model.try_solve() {
            Ok(solved) => solved,
            Err(status) => {
                return SolverOutcome::NoSolution(format!("HiGHS failed: {:?}", status));
            }
        };

        let model_status = solved.status();
        debug!("HiGHS model status: {:?}", model_status);

        let values = solved.get_solution().columns().to_vec();
        if !values.is_empty() && values.len() != model.num_variables() {
            return SolverOutcome::NoSolution(format!(
                "HiGHS returned {} values for {} variables",
                values.len(),
                model.num_variables(),
            ));
        }

        Self::convert_status(model_status, values)
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}
