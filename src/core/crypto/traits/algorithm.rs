/*!
Traits for one-way credential encoding.

This module defines the interface every registry-resolved algorithm
handle implements.
*/

use std::fmt;

use crate::core::error::Result;
use crate::core::crypto::types::algorithms::ProviderKind;

/// Trait for one-way encoding algorithms.
///
/// A handle is configured with `set_cipher`/`set_seed` and then used for
/// one or more transforms. Handles keep mutable state and are meant to
/// be owned by a single thread, so only `Send` is required.
pub trait CryptoAlgorithm: Send + fmt::Debug {
    /// Select the cipher or digest used internally.
    ///
    /// Never fails; an unsupported name is reported by `transform`.
    fn set_cipher(&mut self, cipher: &str);

    /// Set the seed (salt), or `None` to have one generated on first use.
    ///
    /// Never fails; an unusable seed is reported by `transform`.
    fn set_seed(&mut self, seed: Option<&str>);

    /// Encode `input`
    fn transform(&mut self, input: &str) -> Result<String>;

    /// Get the implementation backing this handle
    fn provider(&self) -> ProviderKind;

    /// Get the currently selected cipher, if the implementation uses one
    fn cipher(&self) -> Option<&str>;
}
