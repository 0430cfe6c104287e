use std::collections::HashMap;

use crate::error::{DietError, Result};
use crate::models::NutrientRequirement;
use crate::table::FoodTable;

/// Minimums keyed by nutrient key, e.g. `{"calories": 3, "vitamin_c": 75}`.
pub type KeyedMinimums = HashMap<String, f64>;

/// Map keyed minimums onto the table's canonical nutrient order.
///
/// Missing nutrients default to zero. Unknown keys are rejected so a typo
/// cannot silently drop a requirement.
pub fn requirements_from_keyed(
    minimums: &KeyedMinimums,
    table: &FoodTable,
) -> Result<Vec<NutrientRequirement>> {
    if let Some(key) = minimums
        .keys()
        .find(|key| !table.nutrients().iter().any(|n| &n.key == *key))
    {
        return Err(DietError::UnknownNutrient { key: key.clone() });
    }

    Ok(table
        .nutrients()
        .iter()
        .map(|n| NutrientRequirement::new(n.name.clone(), minimums.get(&n.key).copied().unwrap_or(0.0)))
        .collect())
}

pub fn keyed_minimums_from_json(json: &str) -> Result<KeyedMinimums> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirements_from_keyed_fills_missing_with_zero() {
        let table = FoodTable::stigler_1939().unwrap();
        let minimums = KeyedMinimums::from([("protein".to_string(), 70.0), ("vitamin_c".to_string(), 75.0)]);
        let reqs = requirements_from_keyed(&minimums, &table).unwrap();

        assert_eq!(reqs.len(), 9);
        assert_eq!(reqs[0], NutrientRequirement::new("Calories (kcal)", 0.0));
        assert_eq!(reqs[1], NutrientRequirement::new("Protein (g)", 70.0));
        assert_eq!(reqs[8], NutrientRequirement::new("Vitamin C (mg)", 75.0));
    }

    #[test]
    fn test_requirements_from_keyed_given_unknown_key_should_return_error() {
        let table = FoodTable::stigler_1939().unwrap();
        let minimums = KeyedMinimums::from([("vitamin_d".to_string(), 1.0)]);
        assert!(matches!(
            requirements_from_keyed(&minimums, &table),
            Err(DietError::UnknownNutrient { key }) if key == "vitamin_d"
        ));
    }

    #[test]
    fn test_keyed_minimums_from_json() {
        let minimums = keyed_minimums_from_json(r#"{"calories": 3, "calcium": 0.8}"#).unwrap();
        assert_eq!(minimums.get("calories"), Some(&3.0));
        assert_eq!(minimums.get("calcium"), Some(&0.8));
        assert!(keyed_minimums_from_json(r#"{"calories": "three"}"#).is_err());
    }
}
