//! Error types for command execution.
//!
//! The executor owns the errors of the invocation surface itself (argument
//! counts, unknown verbs) and wraps registry errors transparently. Argument
//! errors are produced before any store access.

use thiserror::Error;

/// Result type alias for command execution
pub type Result<T> = std::result::Result<T, Error>;

/// Command execution errors
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong number of positional arguments - checked before any store access
    #[error("Incorrect number of arguments for {function}: expecting {expected}, got {got}")]
    ArgumentCount {
        /// Function name as invoked
        function: String,
        /// Number of arguments the function takes
        expected: usize,
        /// Number of arguments actually supplied
        got: usize,
    },

    /// `init`'s single argument must parse as an integer
    #[error("Expecting integer value for initial counter")]
    InvalidCounter,

    /// Verb not present in the dispatch table
    #[error("Received unknown function invocation: {0}")]
    UnknownFunction(String),

    /// Read failure, wrapped as the structured `{"Error":"..."}` payload the
    /// router forwards verbatim
    #[error("{payload}")]
    ReadFailed {
        /// JSON payload describing the failure
        payload: String,
    },

    /// Registry-level failure
    #[error(transparent)]
    Registry(#[from] pactdb_core::Error),
}
