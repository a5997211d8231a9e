/*!
Clear text pass-through.

Returns its input unchanged. Only for deployments that deliberately
store credentials in plain form.
*/

use crate::core::error::Result;
use crate::core::crypto::types::algorithms::ProviderKind;
use crate::core::crypto::traits::algorithm::CryptoAlgorithm;

/// Pass-through implementation
#[derive(Debug, Default, Clone)]
pub struct ClearCrypt;

impl ClearCrypt {
    pub fn new() -> Self {
        Self
    }
}

impl CryptoAlgorithm for ClearCrypt {
    fn set_cipher(&mut self, _cipher: &str) {}

    fn set_seed(&mut self, _seed: Option<&str>) {}

    fn transform(&mut self, input: &str) -> Result<String> {
        Ok(input.to_string())
    }

    fn provider(&self) -> ProviderKind {
        ProviderKind::ClearText
    }

    fn cipher(&self) -> Option<&str> {
        None
    }
}
