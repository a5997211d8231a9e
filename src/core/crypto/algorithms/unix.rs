/*!
Traditional Unix crypt(3).

The DES-based scheme with a two-character salt. The output is the salt
followed by eleven encoded characters, so a stored value carries its
own salt: feeding a previous output back in as the seed reproduces it.

This is a legacy, low-entropy scheme kept for compatibility with
existing password stores.
*/

use rand::Rng;
use tracing::{debug, trace};

use crate::core::error::{Error, Result};
use crate::core::crypto::types::algorithms::ProviderKind;
use crate::core::crypto::types::constants::unix::{SALT_CHARS, SALT_LENGTH};
use crate::core::crypto::traits::algorithm::CryptoAlgorithm;

/// Generate a random salt from the crypt alphabet
pub fn generate_salt() -> String {
    let mut rng = rand::rng();
    (0..SALT_LENGTH)
        .map(|_| SALT_CHARS[rng.random_range(0..SALT_CHARS.len())] as char)
        .collect()
}

/// Extract the salt from a seed or a previously encoded value.
///
/// Only the first two characters are used; both must be in the crypt
/// alphabet.
pub fn extract_salt(seed: &str) -> Result<String> {
    let salt: String = seed.chars().take(SALT_LENGTH).collect();
    if salt.chars().count() < SALT_LENGTH {
        return crate::execution_err!("salt must be at least {} characters, got {:?}", SALT_LENGTH, seed);
    }
    if !salt.bytes().all(|b| SALT_CHARS.contains(&b)) {
        return crate::execution_err!("invalid salt characters in {:?}", salt);
    }
    Ok(salt)
}

#[allow(deprecated)]
fn unix_crypt(salt: &str, input: &str) -> Result<String> {
    pwhash::unix_crypt::hash_with(salt, input)
        .map_err(|e| Error::execution(format!("unix crypt failed: {}", e)))
}

/// Unix crypt implementation
#[derive(Debug, Default, Clone)]
pub struct UnixCrypt {
    seed: Option<String>,
}

impl UnixCrypt {
    /// Create a handle that generates its salt on first use
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle with a fixed seed
    pub fn with_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: Some(seed.into()),
        }
    }

    /// The seed in use, if one was set or has been generated
    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }
}

impl CryptoAlgorithm for UnixCrypt {
    fn set_cipher(&mut self, _cipher: &str) {}

    fn set_seed(&mut self, seed: Option<&str>) {
        self.seed = seed.map(str::to_string);
    }

    fn transform(&mut self, input: &str) -> Result<String> {
        let seed = self.seed.get_or_insert_with(|| {
            debug!("no seed set, generating a random salt");
            generate_salt()
        });

        let salt = extract_salt(seed)?;
        trace!(salt = %salt, "applying unix crypt");

        unix_crypt(&salt, input)
    }

    fn provider(&self) -> ProviderKind {
        ProviderKind::SaltedCrypt
    }

    fn cipher(&self) -> Option<&str> {
        None
    }
}
