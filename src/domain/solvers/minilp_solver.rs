use crate::domain::model::DietModel;
use crate::domain::solver::{Solver, SolverOutcome};

use minilp::{ComparisonOp, Error, LinearExpr, OptimizationDirection, Problem};

/// Pure-Rust simplex backend.
///
/// minilp works in plain `f64` with fixed tolerances and no scaling. Rows
/// whose coefficients span many orders of magnitude (a food supplying 1e-12
/// of a nutrient against a minimum of 1e6) can be reported as infeasible even
/// though an unbounded purchase covers them. Such reports are tagged as a
/// numerical failure; use the HiGHS backend for badly scaled tables.
pub struct MinilpSolver;

impl MinilpSolver {
    pub fn new() -> Self {
        MinilpSolver
    }
}

impl Default for MinilpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for MinilpSolver {
    fn solve(&self, model: &DietModel) -> SolverOutcome {
        let mut problem = Problem::new(OptimizationDirection::Minimize);

        let vars: Vec<_> = model
            .variables
            .iter()
            .zip(&model.objective)
            .map(|(var, &obj_coeff)| problem.add_var(obj_coeff, (var.lower, var.upper)))
            .collect();

        for constraint in &model.constraints {
            if constraint.coefficients.iter().all(|&c| c == 0.0) {
                if constraint.lower_bound > 0.0 {
                    return SolverOutcome::NoSolution(format!(
                        "no food supplies '{}'",
                        constraint.name
                    ));
                }
                continue;
            }
            let mut expr = LinearExpr::empty();
            for (var, &coeff) in vars.iter().zip(&constraint.coefficients) {
                if coeff != 0.0 {
                    expr.add(*var, coeff);
                }
            }
            problem.add_constraint(expr, ComparisonOp::Ge, constraint.lower_bound);
        }

        // minilp has no iteration or time limits, so a returned point is always optimal
        match problem.solve() {
            Ok(solution) => SolverOutcome::Optimal(vars.iter().map(|var| solution[*var]).collect()),
            Err(Error::Infeasible) if every_row_supplied(model) => SolverOutcome::NoSolution(
                "minilp reported infeasible although every nutrient has a supplier (numerical failure)".into(),
            ),
            Err(err) => SolverOutcome::NoSolution(err.to_string()),
        }
    }

    fn name(&self) -> &str {
        "minilp"
    }
}

/// With non-negative coefficients and no upper bounds, the model is feasible
/// whenever each row with a positive bound has some positive coefficient.
fn every_row_supplied(model: &DietModel) -> bool {
    model.variables.iter().all(|var| var.upper == f64::INFINITY)
        && model.constraints.iter().all(|constraint| {
            constraint.coefficients.iter().all(|&c| c >= 0.0)
                && (constraint.lower_bound <= 0.0 || constraint.coefficients.iter().any(|&c| c > 0.0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DecisionVariable, NutrientConstraint};

    fn var(name: &str) -> DecisionVariable {
        DecisionVariable {
            name: name.into(),
            lower: 0.0,
            upper: f64::INFINITY,
        }
    }

    #[test]
    fn test_minilp_picks_cheapest_cover() {
        // x + 2y >= 4, 3y >= 3 -> y = 2, x = 0
        let model = DietModel {
            variables: vec![var("x"), var("y")],
            constraints: vec![
                NutrientConstraint { name: "a".into(), lower_bound: 4.0, coefficients: vec![1.0, 2.0] },
                NutrientConstraint { name: "b".into(), lower_bound: 3.0, coefficients: vec![0.0, 3.0] },
            ],
            objective: vec![1.0, 1.0],
        };
        match MinilpSolver::new().solve(&model) {
            SolverOutcome::Optimal(values) => {
                assert!(values[0].abs() < 1e-9);
                assert!((values[1] - 2.0).abs() < 1e-9);
            }
            other => panic!("expected optimal, got {:?}", other),
        }
    }

    #[test]
    fn test_minilp_given_unreachable_row_should_return_no_solution() {
        let model = DietModel {
            variables: vec![var("x")],
            constraints: vec![NutrientConstraint {
                name: "a".into(),
                lower_bound: 1.0,
                coefficients: vec![0.0],
            }],
            objective: vec![1.0],
        };
        assert!(matches!(
            MinilpSolver::new().solve(&model),
            SolverOutcome::NoSolution(_)
        ));
    }

    #[test]
    fn test_minilp_given_badly_scaled_row_should_not_claim_plain_infeasibility() {
        // 1e-12 x >= 1e6 is met by x = 1e18
        let model = DietModel {
            variables: vec![var("x")],
            constraints: vec![NutrientConstraint {
                name: "a".into(),
                lower_bound: 1e6,
                coefficients: vec![1e-12],
            }],
            objective: vec![1.0],
        };
        match MinilpSolver::new().solve(&model) {
            SolverOutcome::Optimal(values) => assert!(values[0] * 1e-12 >= 1e6 * (1.0 - 1e-6)),
            SolverOutcome::NoSolution(reason) => assert!(reason.contains("numerical"), "{}", reason),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_every_row_supplied() {
        let mut model = DietModel {
            variables: vec![var("x"), var("y")],
            constraints: vec![NutrientConstraint {
                name: "a".into(),
                lower_bound: 1.0,
                coefficients: vec![0.0, 2.0],
            }],
            objective: vec![1.0, 1.0],
        };
        assert!(every_row_supplied(&model));

        model.constraints[0].coefficients = vec![0.0, 0.0];
        assert!(!every_row_supplied(&model));

        model.constraints[0].coefficients = vec![-1.0, 2.0];
        assert!(!every_row_supplied(&model));
    }

    #[test]
    fn test_minilp_name() {
        assert_eq!(MinilpSolver::new().name(), "minilp");
    }
}
