use crate::domain::model::DietModel;
use crate::domain::solver::{Solver, SolverOptions, SolverOutcome};

use grb::prelude::*;

/// Gurobi solver implementation
pub struct GurobiSolver {
    options: SolverOptions,
}

impl GurobiSolver {
    pub fn new(options: SolverOptions) -> Self {
        GurobiSolver { options }
    }

    /// Build and optimize the model; any Gurobi error becomes a message.
    fn run(&self, diet: &DietModel) -> Result<SolverOutcome, String> {
        let mut env = Env::new("").map_err(|e| format!("Failed to create Gurobi environment: {}", e))?;

        // Disable Gurobi console output
        env.set(param::OutputFlag, 0)
            .map_err(|e| format!("Failed to set Gurobi output flag: {}", e))?;

        if let Some(limit) = self.options.time_limit {
            env.set(param::TimeLimit, limit.as_secs_f64())
                .map_err(|e| format!("Failed to set Gurobi time limit: {}", e))?;
        }

        let mut model =
            Model::with_env("diet", &env).map_err(|e| format!("Failed to create Gurobi model: {}", e))?;

        // Add continuous variables
        let mut vars: Vec<Var> = Vec::with_capacity(diet.num_variables());
        for var in &diet.variables {
            let gurobi_var = if var.upper.is_finite() {
                add_ctsvar!(model, name: &var.name, bounds: var.lower..var.upper)
            } else {
                add_ctsvar!(model, name: &var.name, bounds: var.lower..)
            }
            .map_err(|e| format!("Failed to add variable: {}", e))?;
            vars.push(gurobi_var);
        }

        model
            .update()
            .map_err(|e| format!("Failed to update model after adding variables: {}", e))?;

        // Add constraints (sum >= lower bound)
        for constraint in &diet.constraints {
            let expr = constraint
                .coefficients
                .iter()
                .zip(&vars)
                .filter(|(coeff, _)| **coeff != 0.0)
                .fold(Expr::Constant(0.0), |acc, (&coeff, &var)| acc + coeff * var);

            let rhs = constraint.lower_bound;
            model
                .add_constr(&constraint.name, c!(expr >= rhs))
                .map_err(|e| format!("Failed to add constraint: {}", e))?;
        }

        let obj_expr = diet
            .objective
            .iter()
            .zip(&vars)
            .fold(Expr::Constant(0.0), |acc, (&coeff, &var)| acc + coeff * var);

        model
            .set_objective(obj_expr, ModelSense::Minimize)
            .map_err(|e| format!("Failed to set objective: {}", e))?;

        model
            .optimize()
            .map_err(|e| format!("Failed to optimize: {}", e))?;

        let status = model
            .status()
            .map_err(|e| format!("Failed to get model status: {}", e))?;

        let has_point = model.get_attr(attr::SolCount).map(|n| n > 0).unwrap_or(false);
        let values = if has_point {
            model
                .get_obj_attr_batch(attr::X, vars.iter().copied())
                .map_err(|e| format!("Failed to read solution: {}", e))?
        } else {
            Vec::new()
        };

        Ok(match status {
            grb::Status::Optimal => SolverOutcome::Optimal(values),
            grb::Status::SubOptimal | grb::Status::TimeLimit | grb::Status::IterationLimit if has_point => {
                SolverOutcome::FeasibleSuboptimal(values)
            }
            grb::Status::Infeasible => SolverOutcome::NoSolution("problem is infeasible".into()),
            grb::Status::InfOrUnbd | grb::Status::Unbounded => {
                SolverOutcome::NoSolution("problem is unbounded or infeasible".into())
            }
            other => SolverOutcome::NoSolution(format!("Gurobi stopped with status {:?}", other)),
        })
    }
}

impl Solver for GurobiSolver {
    fn solve(&self, model: &DietModel) -> SolverOutcome {
        self.run(model).unwrap_or_else(SolverOutcome::NoSolution)
    }

    fn name(&self) -> &str {
        "Gurobi"
    }
}
