use crate::error::{DietError, Result};
use crate::models::NutrientRequirement;
use crate::table::FoodTable;

/// Annual units of one food to purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionVariable {
    pub name: String,
    pub lower: f64,
    pub upper: f64,
}

/// `sum_i coefficients[i] * x_i >= lower_bound`, no upper bound.
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientConstraint {
    pub name: String,
    pub lower_bound: f64,
    pub coefficients: Vec<f64>, // dense, one entry per variable
}

/// A continuous minimization LP over the foods of one table.
#[derive(Debug, Clone, PartialEq)]
pub struct DietModel {
    pub variables: Vec<DecisionVariable>,
    pub constraints: Vec<NutrientConstraint>,
    pub objective: Vec<f64>, // minimized
}

impl DietModel {
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Constraint entries grouped by variable: `(constraint index, coefficient)`,
    /// zero coefficients skipped. Column-oriented backends consume this.
    pub fn columns(&self) -> Vec<Vec<(usize, f64)>> {
        let mut columns = vec![Vec::new(); self.variables.len()];
        for (row, constraint) in self.constraints.iter().enumerate() {
            for (col, &coeff) in constraint.coefficients.iter().enumerate() {
                if coeff != 0.0 {
                    columns[col].push((row, coeff));
                }
            }
        }
        columns
    }
}

/// Build the diet LP: one variable per food, one `>=` row per nutrient,
/// unit objective on every variable.
pub fn build(requirements: &[NutrientRequirement], table: &FoodTable) -> Result<DietModel> {
    if requirements.len() != table.dimension() {
        return Err(DietError::InputShape {
            expected: table.dimension(),
            actual: requirements.len(),
        });
    }

    let variables: Vec<DecisionVariable> = table
        .foods()
        .iter()
        .map(|food| DecisionVariable {
            name: food.name.clone(),
            lower: 0.0,
            upper: f64::INFINITY,
        })
        .collect();

    let constraints: Vec<NutrientConstraint> = requirements
        .iter()
        .enumerate()
        .map(|(j, requirement)| NutrientConstraint {
            name: requirement.name.clone(),
            lower_bound: requirement.minimum,
            coefficients: table.foods().iter().map(|food| food.nutrients[j]).collect(),
        })
        .collect();

    let objective = vec![1.0; variables.len()];

    Ok(DietModel {
        variables,
        constraints,
        objective,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodRecord, NutrientInfo};

    fn small_table() -> FoodTable {
        FoodTable::new(
            "test",
            vec![
                NutrientInfo { key: "a".into(), name: "A".into() },
                NutrientInfo { key: "b".into(), name: "B".into() },
            ],
            vec![
                FoodRecord { name: "x".into(), unit: String::new(), price_cents: 0.0, nutrients: vec![1.0, 0.0] },
                FoodRecord { name: "y".into(), unit: String::new(), price_cents: 0.0, nutrients: vec![2.0, 3.0] },
                FoodRecord { name: "z".into(), unit: String::new(), price_cents: 0.0, nutrients: vec![0.5, 4.0] },
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_build_creates_one_variable_per_food() {
        let table = small_table();
        let model = build(&table.zero_requirements(), &table).unwrap();
        assert_eq!(model.num_variables(), 3);
        assert_eq!(model.variables[1].name, "y");
        assert!(model.variables.iter().all(|v| v.lower == 0.0 && v.upper == f64::INFINITY));
        assert_eq!(model.objective, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_build_creates_one_constraint_per_nutrient_with_column_coefficients() {
        let table = small_table();
        let reqs = vec![NutrientRequirement::new("A", 2.5), NutrientRequirement::new("B", 7.0)];
        let model = build(&reqs, &table).unwrap();
        assert_eq!(model.num_constraints(), 2);
        assert_eq!(model.constraints[0].lower_bound, 2.5);
        assert_eq!(model.constraints[0].coefficients, vec![1.0, 2.0, 0.5]);
        assert_eq!(model.constraints[1].name, "B");
        assert_eq!(model.constraints[1].coefficients, vec![0.0, 3.0, 4.0]);
    }

    #[test]
    fn test_build_given_wrong_length_should_return_shape_error() {
        let table = small_table();
        let reqs = vec![NutrientRequirement::new("A", 1.0)];
        assert!(matches!(
            build(&reqs, &table),
            Err(DietError::InputShape { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_columns_skip_zero_coefficients() {
        let table = small_table();
        let model = build(&table.zero_requirements(), &table).unwrap();
        let columns = model.columns();
        assert_eq!(columns[0], vec![(0, 1.0)]);
        assert_eq!(columns[2], vec![(0, 0.5), (1, 4.0)]);
    }
}
