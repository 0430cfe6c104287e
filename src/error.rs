use thiserror::Error;

/// Result type for diet planning operations
pub type Result<T> = std::result::Result<T, DietError>;

/// Errors that can occur while building, solving or reporting a diet
#[derive(Error, Debug)]
pub enum DietError {
    /// The requirement vector does not match the table's nutrient dimension
    #[error("expected {expected} nutrient requirements, got {actual}")]
    InputShape { expected: usize, actual: usize },

    /// A nutrient minimum is negative or not a finite number
    #[error("invalid minimum {value} for nutrient '{name}'")]
    InvalidMinimum { name: String, value: f64 },

    /// A requirement is not in the position the table expects it
    #[error("nutrient at position {index} should be '{expected}', got '{actual}'")]
    NutrientMismatch {
        index: usize,
        expected: String,
        actual: String,
    },

    /// Input referenced a nutrient the table does not know
    #[error("unknown nutrient '{key}'")]
    UnknownNutrient { key: String },

    /// No feasible diet exists, or the solver failed
    #[error("no solution: {reason}")]
    NoSolution { reason: String },

    /// The food table could not be loaded
    #[error("invalid food table: {0}")]
    Table(String),

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DietError {
    /// True when the error means the solve ran but produced no usable diet.
    pub fn is_no_solution(&self) -> bool {
        matches!(self, DietError::NoSolution { .. })
    }
}
