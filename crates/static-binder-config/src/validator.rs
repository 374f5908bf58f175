//! Configuration validation.

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::schema::{BinderConfig, MAX_INITIAL_CAPACITY};

const LARGE_CAPACITY: usize = 65_536;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error, if any, into a [`ConfigError::InvalidValue`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &BinderConfig) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_registry(config, &mut result);
        Self::validate_scopes(config, &mut result);

        Ok(result)
    }

    fn validate_registry(config: &BinderConfig, result: &mut ValidationResult) {
        let capacity = config.registry.initial_capacity;
        if capacity == 0 {
            result.add_warning(ValidationWarning::new(
                "registry.initial_capacity",
                "initial_capacity is 0, the registry will allocate on first registration",
            ));
        }

        if capacity > MAX_INITIAL_CAPACITY {
            result.add_error(ValidationError::new(
                "registry.initial_capacity",
                format!("initial_capacity cannot exceed {}", MAX_INITIAL_CAPACITY),
            ));
        } else if capacity > LARGE_CAPACITY {
            result.add_warning(ValidationWarning::new(
                "registry.initial_capacity",
                format!(
                    "initial_capacity is very high (>{}), memory is reserved up front",
                    LARGE_CAPACITY
                ),
            ));
        }
    }

    fn validate_scopes(config: &BinderConfig, result: &mut ValidationResult) {
        if config.scopes.default_scope.trim().is_empty() {
            result.add_error(ValidationError::new(
                "scopes.default_scope",
                "Default scope cannot be empty",
            ));
        }

        let mut seen = HashSet::new();
        for (index, name) in config.scopes.preload.iter().enumerate() {
            if name.trim().is_empty() {
                result.add_error(ValidationError::new(
                    format!("scopes.preload[{}]", index),
                    "Scope name cannot be empty",
                ));
            } else if !seen.insert(name.as_str()) {
                result.add_error(ValidationError::new(
                    format!("scopes.preload[{}]", index),
                    format!("Scope '{}' is listed more than once", name),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
