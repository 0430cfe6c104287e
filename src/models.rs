use serde::{Deserialize, Serialize};

// ---------- Food table records ----------

/// A nutrient column of the food table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NutrientInfo {
    pub key: String,  // machine key used by keyed input, e.g. "vitamin_a"
    pub name: String, // display name, e.g. "Vitamin A (KIU)"
}

/// One food with its nutrient content per dollar spent.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FoodRecord {
    pub name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub price_cents: f64,
    pub nutrients: Vec<f64>,
}

// ---------- Request side ----------

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NutrientRequirement {
    pub name: String,
    pub minimum: f64,
}

impl NutrientRequirement {
    pub fn new(name: impl Into<String>, minimum: f64) -> Self {
        NutrientRequirement {
            name: name.into(),
            minimum,
        }
    }
}

// ---------- Response side ----------

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    Optimal,
    FeasibleSuboptimal,
    NoSolution,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FoodPurchase {
    pub name: String,
    pub annual_cost: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NutrientAchievement {
    pub name: String,
    pub achieved: f64,
    pub minimum: f64,
}

/// Outcome of a successful solve: the two result tables plus the aggregate price.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DietReport {
    pub status: SolveStatus,
    pub solver: String,
    pub annual_cost: f64,
    pub food_purchases: Vec<FoodPurchase>,
    pub nutrient_achievements: Vec<NutrientAchievement>,
    /// Wall-clock time spent inside the backend's solve call.
    #[serde(default)]
    pub solve_millis: f64,
}

impl DietReport {
    /// False when the solver stopped early and optimality is not guaranteed.
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }
}
