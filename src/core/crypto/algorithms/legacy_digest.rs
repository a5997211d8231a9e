/*!
Bug-compatible truncated message digest.

Older deployments stored digests whose Base64 encoding was cut short
instead of padded: 20 characters for a 16-byte digest and 24 characters
for any other length. The cut assumed every other digest is 20 bytes
long, so a 32- or 64-byte digest also ends up as 24 characters. That
behaviour is reproduced exactly so stored values can still be
re-derived.

Do not select this implementation for new data. Changing the encoded
length is a breaking change to the stored format.
*/

use crate::core::error::Result;
use crate::core::crypto::algorithms::digest::encode_digest;
use crate::core::crypto::types::algorithms::ProviderKind;
use crate::core::crypto::types::constants::digest::DEFAULT_CIPHER;
use crate::core::crypto::types::constants::legacy;
use crate::core::crypto::traits::algorithm::CryptoAlgorithm;

/// Encoded length kept for a digest of `digest_len` raw bytes
pub fn truncated_length(digest_len: usize) -> usize {
    if digest_len == legacy::SHORT_DIGEST_BYTES {
        legacy::SHORT_ENCODED_LEN
    } else {
        legacy::LONG_ENCODED_LEN
    }
}

/// Truncated digest implementation
#[derive(Debug, Clone)]
pub struct LegacyDigestCrypt {
    cipher: String,
}

impl Default for LegacyDigestCrypt {
    fn default() -> Self {
        Self {
            cipher: DEFAULT_CIPHER.to_string(),
        }
    }
}

impl LegacyDigestCrypt {
    /// Create a handle using the default cipher (SHA-1)
    pub fn new() -> Self {
        Self::default()
    }
}

impl CryptoAlgorithm for LegacyDigestCrypt {
    fn set_cipher(&mut self, cipher: &str) {
        self.cipher = cipher.to_string();
    }

    // Unsalted
    fn set_seed(&mut self, _seed: Option<&str>) {}

    fn transform(&mut self, input: &str) -> Result<String> {
        let (digest_len, mut encoded) = encode_digest(&self.cipher, input)?;
        // Base64 output is ASCII, any index is a char boundary
        encoded.truncate(truncated_length(digest_len));
        Ok(encoded)
    }

    fn provider(&self) -> ProviderKind {
        ProviderKind::LegacyTruncatedDigest
    }

    fn cipher(&self) -> Option<&str> {
        Some(&self.cipher)
    }
}
