//! Minimum-cost diet planning with linear programming.
//!
//! A [`FoodTable`] lists foods with their nutrient content per dollar. Given a
//! vector of daily nutrient minimums, [`solve_diet`] builds one continuous
//! variable per food and one `>=` constraint per nutrient, minimizes total
//! spend with a [`Solver`] backend and reports the annual cost per food plus
//! the nutrients the diet achieves.
//!
//! ```no_run
//! use diet_lp::{create_solver, solve_diet, FoodTable, SolverOptions, SolverType, Tolerances};
//!
//! let table = FoodTable::stigler_1939()?;
//! let mut requirements = table.zero_requirements();
//! requirements[1].minimum = 70.0; // protein (g)
//!
//! let solver = create_solver(SolverType::Minilp, &SolverOptions::default());
//! let report = solve_diet(&table, &requirements, solver.as_ref(), &Tolerances::default())?;
//! println!("${:.2} per year", report.annual_cost);
//! # Ok::<(), diet_lp::DietError>(())
//! ```

pub mod config;
pub mod convert;
pub mod domain;
pub mod error;
pub mod models;
pub mod table;

pub use config::Config;
pub use domain::extract::{extract, Tolerances, DAYS_PER_YEAR};
pub use domain::model::{build, DecisionVariable, DietModel, NutrientConstraint};
pub use domain::solve::solve_diet;
pub use domain::solver::{Solver, SolverOptions, SolverOutcome};
pub use domain::solver_factory::{create_solver, SolverType};
pub use domain::validate::validate_requirements;
pub use error::{DietError, Result};
pub use models::{
    DietReport, FoodPurchase, FoodRecord, NutrientAchievement, NutrientInfo, NutrientRequirement,
    SolveStatus,
};
pub use table::FoodTable;
