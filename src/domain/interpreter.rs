use std::fmt;

use crate::domain::AppError;

/// Interpreter used when nothing overrides it.
pub const DEFAULT_INTERPRETER: &str = "python";

/// Name or path of the Python executable every step is run through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter(String);

impl Interpreter {
    /// Validate and wrap an interpreter name or path.
    pub fn new(value: &str) -> Result<Self, AppError> {
        if value.trim().is_empty() {
            return Err(AppError::InvalidSetting {
                field: "python".to_string(),
                reason: "interpreter cannot be empty".to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self(DEFAULT_INTERPRETER.to_string())
    }
}

impl fmt::Display for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
