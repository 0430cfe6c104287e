use crate::domain::solver::SolverOutcome;
use crate::error::{DietError, Result};
use crate::models::{DietReport, FoodPurchase, NutrientAchievement, NutrientRequirement};
use crate::table::FoodTable;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Numeric tolerances applied when reading a solver's point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Purchases at or below this daily amount are left out of the food table.
    pub zero: f64,
    /// Allowed shortfall per nutrient, relative to `max(1, minimum)`.
    pub feasibility: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Tolerances {
            zero: 1e-9,
            feasibility: 1e-6,
        }
    }
}

/// Turn a solver outcome into the food and nutrient tables.
///
/// Fails with [`DietError::NoSolution`] when the solver found nothing, when
/// the value vector does not match the table, or when the point misses a
/// nutrient minimum by more than `tolerances.feasibility`. The last check
/// applies to suboptimal and optimal outcomes alike.
pub fn extract(
    table: &FoodTable,
    requirements: &[NutrientRequirement],
    outcome: SolverOutcome,
    solver_name: &str,
    tolerances: &Tolerances,
) -> Result<DietReport> {
    let status = outcome.status();
    let values = match outcome {
        SolverOutcome::Optimal(values) | SolverOutcome::FeasibleSuboptimal(values) => values,
        SolverOutcome::NoSolution(reason) => return Err(DietError::NoSolution { reason }),
    };

    if values.len() != table.foods().len() {
        return Err(DietError::NoSolution {
            reason: format!(
                "solver returned {} values for {} foods",
                values.len(),
                table.foods().len(),
            ),
        });
    }

    // round-off can leave tiny negatives
    let values: Vec<f64> = values.into_iter().map(|v| v.max(0.0)).collect();

    let mut achieved = vec![0.0; requirements.len()];
    let mut food_purchases = Vec::new();
    for (food, &value) in table.foods().iter().zip(&values) {
        if value <= 0.0 {
            continue;
        }
        for (total, coeff) in achieved.iter_mut().zip(&food.nutrients) {
            *total += coeff * value;
        }
        if value > tolerances.zero {
            food_purchases.push(FoodPurchase {
                name: food.name.clone(),
                annual_cost: DAYS_PER_YEAR * value,
            });
        }
    }

    let nutrient_achievements: Vec<NutrientAchievement> = requirements
        .iter()
        .zip(achieved)
        .map(|(requirement, achieved)| NutrientAchievement {
            name: requirement.name.clone(),
            achieved,
            minimum: requirement.minimum,
        })
        .collect();

    if let Some(short) = nutrient_achievements
        .iter()
        .find(|n| n.achieved < n.minimum - tolerances.feasibility * n.minimum.max(1.0))
    {
        return Err(DietError::NoSolution {
            reason: format!(
                "solver point misses '{}': {} < {}",
                short.name, short.achieved, short.minimum,
            ),
        });
    }

    Ok(DietReport {
        status,
        solver: solver_name.to_string(),
        // fold from +0.0; an empty f64 sum is -0.0
        annual_cost: DAYS_PER_YEAR * values.iter().fold(0.0, |acc, v| acc + v),
        food_purchases,
        nutrient_achievements,
        solve_millis: 0.0,
    })
}
