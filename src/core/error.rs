/*!
Error handling for the algorithm registry.

Only two kinds of failure exist: a name that cannot be resolved to a
usable algorithm, and an algorithm that cannot complete a transform.
*/

use std::fmt;
use thiserror::Error;

/// Result type for registry and algorithm operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for registry and algorithm operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested name resolves to no usable implementation.
    ///
    /// `algorithm` is always the name the caller asked for, never the
    /// fallback entry it was redirected to.
    #[error("No algorithm for {algorithm} found: {reason}")]
    NoSuchAlgorithm {
        algorithm: String,
        reason: LookupFailure,
    },

    /// A resolved algorithm could not complete a transform
    #[error("Algorithm execution failed: {0}")]
    AlgorithmExecution(String),
}

/// Why a resolution failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// Neither the name nor the default entry is configured
    NotConfigured,

    /// The entry maps to the disabling sentinel
    Disabled,

    /// The entry names an implementation that does not exist
    Instantiation(String),
}

impl fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupFailure::NotConfigured => write!(f, "no implementation configured"),
            LookupFailure::Disabled => write!(f, "implementation disabled"),
            LookupFailure::Instantiation(id) => write!(f, "error instantiating {}", id),
        }
    }
}

impl Error {
    /// Create a `NoSuchAlgorithm` error for `algorithm`
    pub fn no_such_algorithm(algorithm: impl Into<String>, reason: LookupFailure) -> Self {
        Error::NoSuchAlgorithm {
            algorithm: algorithm.into(),
            reason,
        }
    }

    /// Create an `AlgorithmExecution` error
    pub fn execution(msg: impl Into<String>) -> Self {
        Error::AlgorithmExecution(msg.into())
    }

    pub fn is_no_such_algorithm(&self) -> bool {
        matches!(self, Error::NoSuchAlgorithm { .. })
    }

    pub fn is_execution(&self) -> bool {
        matches!(self, Error::AlgorithmExecution(_))
    }

    /// The algorithm name a `NoSuchAlgorithm` error was raised for
    pub fn algorithm(&self) -> Option<&str> {
        match self {
            Error::NoSuchAlgorithm { algorithm, .. } => Some(algorithm),
            Error::AlgorithmExecution(_) => None,
        }
    }
}

/// Create a `NoSuchAlgorithm` error result
#[macro_export]
macro_rules! no_such_algorithm {
    ($algorithm:expr, $reason:expr) => {
        Err($crate::core::error::Error::no_such_algorithm($algorithm, $reason))
    };
}

/// Create an `AlgorithmExecution` error result
#[macro_export]
macro_rules! execution_err {
    ($msg:expr) => {
        Err($crate::core::error::Error::AlgorithmExecution($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        Err($crate::core::error::Error::AlgorithmExecution(format!($fmt, $($arg)*)))
    };
}
