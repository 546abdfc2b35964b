//! Shared error types for the pricing configuration layer.
//!
//! The calculation engine itself is total and never returns errors. Everything
//! that can fail lives at the edges: reading a pricing file, parsing TOML, and
//! checking catalog invariants before the catalog reaches the engine.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single catalog or configuration problem, addressed by field path.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// Dotted field path, e.g. `tiers[2].size_band.min`.
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Main error type for pricing configuration operations
#[derive(Debug, Error)]
pub enum PricingError {
    /// Reading a configuration file failed
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML could not be parsed into a pricing configuration
    #[error("Failed to parse pricing config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A single field holds an unusable value
    #[error("Invalid value for {field}: {message}")]
    InvalidConfig { field: String, message: String },

    /// The catalog violates one or more invariants
    #[error("Pricing config has {} problem(s):\n{}", .0.len(), format_issues(.0))]
    Validation(Vec<ValidationIssue>),

    /// Serializing the configuration back to TOML failed
    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),
}

impl PricingError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Issues carried by a validation failure; empty for other variants.
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::Validation(issues) => issues,
            _ => &[],
        }
    }
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {issue}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, PricingError>;
