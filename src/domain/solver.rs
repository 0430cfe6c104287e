use std::time::Duration;

use crate::domain::model::DietModel;
use crate::models::SolveStatus;

/// What a backend reports back for one model.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverOutcome {
    /// Provably optimal; one value per model variable
    Optimal(Vec<f64>),
    /// Feasible point found but the solver stopped before proving optimality
    FeasibleSuboptimal(Vec<f64>),
    /// Infeasible, unbounded, or the backend failed
    NoSolution(String),
}

impl SolverOutcome {
    /// Report status for this outcome.
    pub fn status(&self) -> SolveStatus {
        match self {
            SolverOutcome::Optimal(_) => SolveStatus::Optimal,
            SolverOutcome::FeasibleSuboptimal(_) => SolveStatus::FeasibleSuboptimal,
            SolverOutcome::NoSolution(_) => SolveStatus::NoSolution,
        }
    }
}

/// Limits passed through to backends that support them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolverOptions {
    pub time_limit: Option<Duration>,
}

/// Common interface for continuous LP solvers
pub trait Solver: Send + Sync {
    /// Solve a diet model once. Backend failures are reported as
    /// [`SolverOutcome::NoSolution`]; there are no retries.
    fn solve(&self, model: &DietModel) -> SolverOutcome;

    /// Get the solver name for logging/debugging
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_follows_outcome_variant() {
        assert_eq!(SolverOutcome::Optimal(vec![1.0]).status(), SolveStatus::Optimal);
        assert_eq!(
            SolverOutcome::FeasibleSuboptimal(vec![1.0]).status(),
            SolveStatus::FeasibleSuboptimal
        );
        assert_eq!(
            SolverOutcome::NoSolution("infeasible".into()).status(),
            SolveStatus::NoSolution
        );
    }
}
