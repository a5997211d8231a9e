/*!
Core types for the algorithm registry.

This module provides the type definitions, enums, and constants
used throughout the crypto subsystem.
*/

pub mod algorithms;
pub mod constants;
pub mod config;

// Re-export core types for easier access
pub use algorithms::{MessageDigestAlgorithm, ProviderKind};
pub use config::{AlgorithmEntry, CryptoServiceConfig};
