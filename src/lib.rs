/*!
# crypt-registry

A pluggable registry of one-way credential encoding algorithms.

## Overview

Applications request an algorithm by name and receive a handle that
turns an input string into a deterministic encoded string. Which
implementation backs a name is decided by configuration, so the
hashing scheme can change without touching call sites.

Available implementations:

- `clear` - pass-through, for deliberately plain credential stores
- `java` - message digest (MD5, SHA-1, SHA-2, SHA-3) with padded Base64
- `oldjava` - bug-compatible truncated Base64 digest of older deployments
- `unix` - traditional DES-based Unix crypt(3) with a two-character salt

```no_run
use crypt_registry::{CryptoRegistry, ProviderKind, Result};

fn main() -> Result<()> {
    let registry = CryptoRegistry::builder()
        .provider("unix", ProviderKind::SaltedCrypt)
        .build();

    let mut algorithm = registry.resolve("unix")?;
    algorithm.set_seed(Some("z5"));
    assert_eq!(algorithm.transform("Oeltanks")?, "z5EQaXpuu059c");

    // Unconfigured names use the default digest, with the name as cipher
    assert_eq!(registry.encrypt("MD5", "Oeltanks")?, "XSop0mncK19Ii2r2CUe29w==");
    Ok(())
}
```
*/

// Core registry components
pub mod core;

// Serialization support (optional)
#[cfg(feature = "serde-support")]
pub mod serde;

// Re-export commonly used types for convenience
pub use crate::core::error::{Error, LookupFailure, Result};
pub use crate::core::constants::{ALGORITHM_SECTION, DEFAULT_KEY, DISABLED};
pub use crate::core::crypto::{
    create_algorithm, AlgorithmEntry, ClearCrypt, CryptoAlgorithm, CryptoRegistry,
    CryptoServiceConfig, DigestCrypt, LegacyDigestCrypt, MessageDigestAlgorithm, ProviderKind,
    RegistryBuilder, UnixCrypt,
};
