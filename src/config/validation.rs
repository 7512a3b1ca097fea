//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeout > 0, at least one attempt)
//! - Check the base URL actually parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RunConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::RunConfig;

/// A single semantic violation in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("request_timeout_ms must be greater than zero")]
    ZeroTimeout,

    #[error("max_attempts must be at least 1")]
    ZeroAttempts,

    #[error("probe_path must start with '/'")]
    BadProbePath,
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &RunConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = Url::parse(&config.client.base_url) {
        errors.push(ValidationError::InvalidBaseUrl {
            url: config.client.base_url.clone(),
            reason: e.to_string(),
        });
    }

    if config.client.request_timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.retry.max_attempts == 0 {
        errors.push(ValidationError::ZeroAttempts);
    }

    if !config.client.probe_path.starts_with('/') {
        errors.push(ValidationError::BadProbePath);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
