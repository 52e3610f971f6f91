/// Structured error types for hrdesk-core.
///
/// Uses `thiserror` so library consumers get composable errors.
/// The `hrdesk` binary wraps these in `anyhow` at command boundaries.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for hrdesk-core operations
#[derive(Error, Debug)]
pub enum HrError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// JSON parsing or serialization failed
    #[error("JSON error at {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// TOML config could not be parsed
    #[error("Invalid config file {path:?}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Field name is not declared by the record type
    #[error("Unknown field '{field}' for {record}")]
    UnknownField { field: String, record: &'static str },

    /// Path does not name any screen
    #[error("No screen at path '{path}'")]
    UnknownRoute { path: String },

    /// View mode string is neither grid nor table
    #[error("Invalid view mode '{value}' (expected grid or table)")]
    InvalidViewMode { value: String },

    /// Status string outside the enumeration
    #[error("Invalid {kind} status '{value}'")]
    InvalidStatus { kind: &'static str, value: String },

    /// Employee identifier not present in the fixture set
    #[error("Employee not found: {id}")]
    EmployeeNotFound { id: String },

    /// Required form field left empty
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// Email fails the client-side shape check
    #[error("Invalid email address '{value}'")]
    InvalidEmail { value: String },

    /// Simulated login rejection. The message never depends on the input.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Identifier appears twice in one collection
    #[error("Duplicate {collection} id '{id}'")]
    DuplicateId { collection: &'static str, id: String },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for hrdesk-core operations
pub type Result<T> = std::result::Result<T, HrError>;

impl HrError {
    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create an unknown field error
    pub fn unknown_field(field: impl Into<String>, record: &'static str) -> Self {
        Self::UnknownField {
            field: field.into(),
            record,
        }
    }

    /// Create an unknown route error
    pub fn unknown_route(path: impl Into<String>) -> Self {
        Self::UnknownRoute { path: path.into() }
    }

    /// Create an invalid status error
    pub fn invalid_status(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidStatus {
            kind,
            value: value.into(),
        }
    }

    /// Create an employee-not-found error
    pub fn employee_not_found(id: impl Into<String>) -> Self {
        Self::EmployeeNotFound { id: id.into() }
    }

    /// Create a duplicate id error
    pub fn duplicate_id(collection: &'static str, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            collection,
            id: id.into(),
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HrError::unknown_field("salary", "employee");
        assert_eq!(err.to_string(), "Unknown field 'salary' for employee");

        let err = HrError::employee_not_found("EMP999");
        assert!(err.to_string().contains("EMP999"));
    }

    #[test]
    fn test_invalid_credentials_is_generic() {
        assert_eq!(
            HrError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let hr_err: HrError = io_err.into();

        assert!(matches!(hr_err, HrError::Io { .. }));
    }
}
