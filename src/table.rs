use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DietError, Result};
use crate::models::{FoodRecord, NutrientInfo, NutrientRequirement};

const STIGLER_1939: &str = include_str!("../data/stigler_1939.json");

/// Immutable food/nutrient table shared read-only by every solve.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FoodTable {
    pub version: String,
    nutrients: Vec<NutrientInfo>,
    foods: Vec<FoodRecord>,
}

impl FoodTable {
    /// Build a table, checking every food against the nutrient header.
    pub fn new(
        version: impl Into<String>,
        nutrients: Vec<NutrientInfo>,
        foods: Vec<FoodRecord>,
    ) -> Result<Self> {
        let table = FoodTable {
            version: version.into(),
            nutrients,
            foods,
        };
        table.check()?;
        Ok(table)
    }

    /// The 1939 Stigler dataset: 77 foods, nutrients per dollar of 1939 prices.
    pub fn stigler_1939() -> Result<Self> {
        Self::from_json(STIGLER_1939)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let table: FoodTable = serde_json::from_str(json)?;
        table.check()?;
        Ok(table)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn check(&self) -> Result<()> {
        if self.nutrients.is_empty() {
            return Err(DietError::Table("table declares no nutrients".into()));
        }
        for food in &self.foods {
            if food.nutrients.len() != self.nutrients.len() {
                return Err(DietError::Table(format!(
                    "food '{}' has {} nutrient values, expected {}",
                    food.name,
                    food.nutrients.len(),
                    self.nutrients.len(),
                )));
            }
            if let Some(bad) = food.nutrients.iter().find(|v| !v.is_finite() || **v < 0.0) {
                return Err(DietError::Table(format!(
                    "food '{}' has invalid nutrient value {}",
                    food.name, bad,
                )));
            }
        }
        Ok(())
    }

    pub fn foods(&self) -> &[FoodRecord] {
        &self.foods
    }

    pub fn nutrients(&self) -> &[NutrientInfo] {
        &self.nutrients
    }

    /// Number of nutrients every food vector and requirement vector must have.
    pub fn dimension(&self) -> usize {
        self.nutrients.len()
    }

    /// Requirement vector in canonical order with every minimum set to zero.
    pub fn zero_requirements(&self) -> Vec<NutrientRequirement> {
        self.nutrients
            .iter()
            .map(|n| NutrientRequirement::new(n.name.clone(), 0.0))
            .collect()
    }
}
