/*!
Encoding algorithms and their registry.

This module provides the algorithm handle interface, the concrete
implementations, and the registry that resolves names to them.
*/

// Implementations
pub mod algorithms;

// Handle interface
pub mod traits;

// Types, configuration and constants
pub mod types;

// Registry for algorithm management
pub mod registry;

// Re-export frequently used types
pub use algorithms::{create_algorithm, ClearCrypt, DigestCrypt, LegacyDigestCrypt, UnixCrypt};
pub use registry::{CryptoRegistry, RegistryBuilder};
pub use traits::CryptoAlgorithm;
pub use types::{AlgorithmEntry, CryptoServiceConfig, MessageDigestAlgorithm, ProviderKind};
