//! Error types and exit codes for graphwalk
//!
//! Graph operations and the traversal engine are total and never fail.
//! These errors belong to the boundary: argument parsing, graph files,
//! configuration and start-node validation.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown start node)
//! - 3: Data error (unreadable or malformed graph document)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph document (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur at the graphwalk boundary
#[derive(Error, Debug)]
pub enum GraphwalkError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("start node not in graph: {node}")]
    InvalidStartNode { node: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("invalid graph in {path:?}: {reason}")]
    InvalidGraph { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphwalkError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphwalkError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        GraphwalkError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a start node the graph does not contain
    pub fn invalid_start(node: impl std::fmt::Display) -> Self {
        GraphwalkError::InvalidStartNode {
            node: node.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphwalkError::UnknownFormat(_)
            | GraphwalkError::UsageError(_)
            | GraphwalkError::InvalidStartNode { .. }
            | GraphwalkError::InvalidValue { .. }
            | GraphwalkError::Unsupported { .. } => ExitCode::Usage,

            GraphwalkError::InvalidGraph { .. } => ExitCode::Data,

            GraphwalkError::Io(_)
            | GraphwalkError::Json(_)
            | GraphwalkError::Toml(_)
            | GraphwalkError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphwalkError::UnknownFormat(_) => "unknown_format",
            GraphwalkError::UsageError(_) => "usage_error",
            GraphwalkError::InvalidStartNode { .. } => "invalid_start_node",
            GraphwalkError::InvalidValue { .. } => "invalid_value",
            GraphwalkError::Unsupported { .. } => "unsupported",
            GraphwalkError::InvalidGraph { .. } => "invalid_graph",
            GraphwalkError::Io(_) => "io_error",
            GraphwalkError::Json(_) => "json_error",
            GraphwalkError::Toml(_) => "toml_error",
            GraphwalkError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphwalkError>;
