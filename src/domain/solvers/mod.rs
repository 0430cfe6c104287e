pub mod minilp_solver;

#[cfg(feature = "highs-solver")]
pub mod highs_solver;

#[cfg(feature = "gurobi-solver")]
pub mod gurobi_solver;

pub use minilp_solver::MinilpSolver;

#[cfg(feature = "highs-solver")]
pub use highs_solver::HighsSolver;

#[cfg(feature = "gurobi-solver")]
pub use gurobi_solver::GurobiSolver;
