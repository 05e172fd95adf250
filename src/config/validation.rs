//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route declarations are well formed before compiling them
//! - Validate the configured log level
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MatcherConfig → Result<(), Vec<ValidationError>>
//! - Template syntax errors are left to the path compiler

use std::fmt;

use crate::config::schema::MatcherConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted location of the offending field, e.g. `routes[2].path`.
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

impl std::error::Error for ValidationError {}

/// Check the configuration, collecting every problem.
pub fn validate_config(config: &MatcherConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (i, route) in config.routes.iter().enumerate() {
        if route.path.is_empty() {
            errors.push(ValidationError::new(format!("routes[{i}].path"), "must not be empty"));
        } else if route.path != "*" && !route.path.starts_with('/') {
            errors.push(ValidationError::new(
                format!("routes[{i}].path"),
                format!("'{}' must start with '/' or be '*'", route.path),
            ));
        }

        if route.handler.trim().is_empty() {
            errors.push(ValidationError::new(
                format!("routes[{i}].handler"),
                "must not be empty",
            ));
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("'{}' is not one of {}", config.observability.log_level, LOG_LEVELS.join(", ")),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
