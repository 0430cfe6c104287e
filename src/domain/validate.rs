use crate::error::{DietError, Result};
use crate::models::NutrientRequirement;
use crate::table::FoodTable;

/// Check a requirement vector against the table before any model is built.
pub fn validate_requirements(
    requirements: &[NutrientRequirement],
    table: &FoodTable,
) -> Result<()> {
    if requirements.len() != table.dimension() {
        return Err(DietError::InputShape {
            expected: table.dimension(),
            actual: requirements.len(),
        });
    }

    for (index, (requirement, nutrient)) in requirements.iter().zip(table.nutrients()).enumerate() {
        if requirement.name != nutrient.name {
            return Err(DietError::NutrientMismatch {
                index,
                expected: nutrient.name.clone(),
                actual: requirement.name.clone(),
            });
        }
        if !requirement.minimum.is_finite() || requirement.minimum < 0.0 {
            return Err(DietError::InvalidMinimum {
                name: requirement.name.clone(),
                value: requirement.minimum,
            });
        }
    }

    Ok(())
}
