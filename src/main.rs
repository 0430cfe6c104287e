use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;
use std::sync::OnceLock;

use dotenv::dotenv;
use log::{error, info};

use diet_lp::convert::{keyed_minimums_from_json, requirements_from_keyed};
use diet_lp::{create_solver, solve_diet, Config, DietError, FoodTable, Result};

// Loaded once, read by every solve
static FOOD_TABLE: OnceLock<FoodTable> = OnceLock::new();

fn load_table(config: &Config) -> Result<&'static FoodTable> {
    let table = match &config.foods_path {
        Some(path) => FoodTable::from_path(path)?,
        None => FoodTable::stigler_1939()?,
    };
    info!("Loaded food table '{}' ({} foods)", table.version, table.foods().len());
    Ok(FOOD_TABLE.get_or_init(|| table))
}

/// Read the keyed minimums document from the path argument, or stdin.
fn read_input() -> Result<String> {
    match env::args().nth(1) {
        Some(path) if path != "-" => Ok(fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run() -> Result<()> {
    let config = Config::from_env()?;
    let table = load_table(&config)?;

    let minimums = keyed_minimums_from_json(&read_input()?)?;
    let requirements = requirements_from_keyed(&minimums, table)?;

    let solver = create_solver(config.solver, &config.solver_options);
    let report = solve_diet(table, &requirements, solver.as_ref(), &config.tolerances)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ DietError::NoSolution { .. }) => {
            error!("{}", err);
            ExitCode::from(2)
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
