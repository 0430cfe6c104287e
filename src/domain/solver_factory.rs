use crate::domain::solver::{Solver, SolverOptions};
use crate::domain::solvers::MinilpSolver;

#[cfg(feature = "highs-solver")]
use crate::domain::solvers::HighsSolver;

#[cfg(feature = "gurobi-solver")]
use crate::domain::solvers::GurobiSolver;

/// Available solver backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverType {
    #[default]
    Minilp,
    #[cfg(feature = "highs-solver")]
    Highs,
    #[cfg(feature = "gurobi-solver")]
    Gurobi,
}

impl SolverType {
    /// Parse solver type from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "minilp" => Some(SolverType::Minilp),
            #[cfg(feature = "highs-solver")]
            "highs" => Some(SolverType::Highs),
            #[cfg(feature = "gurobi-solver")]
            "gurobi" => Some(SolverType::Gurobi),
            _ => None,
        }
    }
}

/// Create a solver instance based on the specified type
pub fn create_solver(solver_type: SolverType, options: &SolverOptions) -> Box<dyn Solver> {
    match solver_type {
        SolverType::Minilp => {
            if options.time_limit.is_some() {
                log::warn!("minilp does not support a time limit; ignoring it");
            }
            Box::new(MinilpSolver::new())
        }
        #[cfg(feature = "highs-solver")]
        SolverType::Highs => Box::new(HighsSolver::new(options.clone())),
        #[cfg(feature = "gurobi-solver")]
        SolverType::Gurobi => Box::new(GurobiSolver::new(options.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_type_from_str() {
        assert_eq!(SolverType::from_str("minilp"), Some(SolverType::Minilp));
        assert_eq!(SolverType::from_str("MiniLP"), Some(SolverType::Minilp));
        #[cfg(feature = "highs-solver")]
        assert_eq!(SolverType::from_str("highs"), Some(SolverType::Highs));
        #[cfg(feature = "highs-solver")]
        assert_eq!(SolverType::from_str("HiGHS"), Some(SolverType::Highs));
        #[cfg(feature = "gurobi-solver")]
        assert_eq!(SolverType::from_str("Gurobi"), Some(SolverType::Gurobi));
        assert_eq!(SolverType::from_str("glop"), None);
    }

    #[test]
    fn test_create_minilp_solver() {
        let solver = create_solver(SolverType::Minilp, &SolverOptions::default());
        assert_eq!(solver.name(), "minilp");
    }

    #[cfg(feature = "highs-solver")]
    #[test]
    fn test_create_highs_solver() {
        let solver = create_solver(SolverType::Highs, &SolverOptions::default());
        assert_eq!(solver.name(), "HiGHS");
    }

    #[cfg(feature = "gurobi-solver")]
    #[test]
    fn test_create_gurobi_solver() {
        let solver = create_solver(SolverType::Gurobi, &SolverOptions::default());
        assert_eq!(solver.name(), "Gurobi");
    }
}
