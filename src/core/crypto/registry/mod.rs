/*!
Registry for encoding algorithms.

This module maps configured algorithm names to implementations and
hands out fresh algorithm handles.
*/

pub mod builder;
pub mod manager;

pub use builder::RegistryBuilder;
pub use manager::CryptoRegistry;
