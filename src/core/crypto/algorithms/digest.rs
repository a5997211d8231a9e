/*!
Message digest with padded Base64 encoding.

This is the interoperable implementation: the full digest is encoded
with standard Base64 including padding, so a 16-byte digest yields 24
characters, 20 bytes yield 28, 32 bytes yield 44 and 64 bytes yield 88.
*/

use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::trace;

use crate::core::error::{Error, Result};
use crate::core::crypto::types::algorithms::{MessageDigestAlgorithm, ProviderKind};
use crate::core::crypto::types::constants::digest::DEFAULT_CIPHER;
use crate::core::crypto::traits::algorithm::CryptoAlgorithm;

/// Digest the UTF-8 bytes of `input` with the named digest and Base64-encode it.
///
/// Returns the raw digest length alongside the encoding.
pub(crate) fn encode_digest(cipher: &str, input: &str) -> Result<(usize, String)> {
    let algorithm = MessageDigestAlgorithm::from_name(cipher)
        .ok_or_else(|| Error::execution(format!("unsupported digest: {}", cipher)))?;

    let digest = algorithm.digest(input.as_bytes());
    trace!(digest = algorithm.name(), bytes = digest.len(), "computed digest");

    Ok((digest.len(), STANDARD.encode(&digest)))
}

/// Message digest implementation
#[derive(Debug, Clone)]
pub struct DigestCrypt {
    cipher: String,
}

impl Default for DigestCrypt {
    fn default() -> Self {
        Self {
            cipher: DEFAULT_CIPHER.to_string(),
        }
    }
}

impl DigestCrypt {
    /// Create a handle using the default cipher (SHA-1)
    pub fn new() -> Self {
        Self::default()
    }
}

impl CryptoAlgorithm for DigestCrypt {
    fn set_cipher(&mut self, cipher: &str) {
        self.cipher = cipher.to_string();
    }

    fn set_seed(&mut self, _seed: Option<&str>) {}

    fn transform(&mut self, input: &str) -> Result<String> {
        let (_, encoded) = encode_digest(&self.cipher, input)?;
        Ok(encoded)
    }

    fn provider(&self) -> ProviderKind {
        ProviderKind::GenericDigest
    }

    fn cipher(&self) -> Option<&str> {
        Some(&self.cipher)
    }
}
