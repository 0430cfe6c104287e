use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::extract::Tolerances;
use crate::domain::solver::SolverOptions;
use crate::domain::solver_factory::SolverType;
use crate::error::{DietError, Result};

/// Runtime configuration read from the environment (and `.env`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub solver: SolverType,
    pub solver_options: SolverOptions,
    pub tolerances: Tolerances,
    pub foods_path: Option<PathBuf>,
}

impl Config {
    /// `DIET_SOLVER`, `DIET_TIME_LIMIT_SECS`, `DIET_ZERO_TOLERANCE`,
    /// `DIET_FEASIBILITY_TOLERANCE`, `DIET_FOODS_PATH`.
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        let solver = match env::var("DIET_SOLVER") {
            Ok(name) => SolverType::from_str(&name)
                .ok_or_else(|| DietError::Config(format!("unknown solver '{}'", name)))?,
            Err(_) => defaults.solver,
        };

        let time_limit = read_positive("DIET_TIME_LIMIT_SECS")?.map(Duration::from_secs_f64);

        let tolerances = Tolerances {
            zero: read_positive("DIET_ZERO_TOLERANCE")?.unwrap_or(defaults.tolerances.zero),
            feasibility: read_positive("DIET_FEASIBILITY_TOLERANCE")?
                .unwrap_or(defaults.tolerances.feasibility),
        };

        let foods_path = env::var("DIET_FOODS_PATH").ok().map(PathBuf::from);

        Ok(Config {
            solver,
            solver_options: SolverOptions { time_limit },
            tolerances,
            foods_path,
        })
    }
}

fn read_positive(name: &str) -> Result<Option<f64>> {
    match env::var(name) {
        Ok(raw) => match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => Ok(Some(value)),
            _ => Err(DietError::Config(format!("{} must be a positive number, got '{}'", name, raw))),
        },
        Err(_) => Ok(None),
    }
}
