/*!
Implementations of the encoding algorithms.

This module provides concrete implementations of the
`CryptoAlgorithm` interface and a factory mapping each
`ProviderKind` to a fresh handle.
*/

pub mod clear;
pub mod digest;
pub mod legacy_digest;
pub mod unix;

pub use clear::ClearCrypt;
pub use digest::DigestCrypt;
pub use legacy_digest::LegacyDigestCrypt;
pub use unix::UnixCrypt;

use crate::core::crypto::types::algorithms::ProviderKind;
use crate::core::crypto::traits::algorithm::CryptoAlgorithm;

/// Create a fresh handle for the specified implementation
pub fn create_algorithm(provider: ProviderKind) -> Box<dyn CryptoAlgorithm> {
    match provider {
        ProviderKind::ClearText => Box::new(ClearCrypt::new()),
        ProviderKind::GenericDigest => Box::new(DigestCrypt::new()),
        ProviderKind::LegacyTruncatedDigest => Box::new(LegacyDigestCrypt::new()),
        ProviderKind::SaltedCrypt => Box::new(UnixCrypt::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_provider_matches() {
        for kind in ProviderKind::ALL {
            assert_eq!(create_algorithm(kind).provider(), kind);
        }
    }
}
