/*!
Core traits for the algorithm registry.

This module defines the interface shared by all algorithm
implementations.
*/

pub mod algorithm;

// Re-export core traits for easier access
pub use algorithm::CryptoAlgorithm;
