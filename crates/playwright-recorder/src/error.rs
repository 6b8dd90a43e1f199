// Error types for playwright-recorder

use thiserror::Error;

/// Result type alias for translator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while translating recorded actions
#[derive(Debug, Error)]
pub enum Error {
    /// The recorder produced an action kind this translator does not know
    ///
    /// Only reachable when actions arrive as JSON. Actions built in Rust are
    /// checked for exhaustiveness at compile time.
    #[error("Unsupported action kind: '{0}'")]
    UnsupportedActionKind(String),

    /// A selector-bearing action arrived without a frame description
    ///
    /// Contains the name of the offending action.
    #[error("Invalid context: action '{0}' requires a frame description")]
    InvalidContext(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }
}
