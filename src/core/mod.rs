//! Core components of the algorithm registry.
//!
//! This module contains the encoding algorithms, the registry resolving
//! names to them, and error handling.

// Algorithms and registry
pub mod crypto;

// Registry constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::error::{Error, LookupFailure, Result};
