/*!
Algorithm type definitions.

This module defines the closed set of implementations the registry can
instantiate, and the message digests the digest-based implementations
can compute.
*/

use digest::Digest;

/// Implementations an algorithm table entry may name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Pass-through, the input is returned unchanged
    ClearText,
    /// Message digest with padded Base64 encoding
    GenericDigest,
    /// Bug-compatible truncated Base64 digest of older deployments
    LegacyTruncatedDigest,
    /// Traditional DES-based Unix crypt(3)
    SaltedCrypt,
}

impl Default for ProviderKind {
    fn default() -> Self {
        ProviderKind::GenericDigest
    }
}

impl ProviderKind {
    /// All known implementations
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::ClearText,
        ProviderKind::GenericDigest,
        ProviderKind::LegacyTruncatedDigest,
        ProviderKind::SaltedCrypt,
    ];

    /// Canonical identifier used in algorithm tables
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::ClearText => "clear",
            ProviderKind::GenericDigest => "java",
            ProviderKind::LegacyTruncatedDigest => "oldjava",
            ProviderKind::SaltedCrypt => "unix",
        }
    }

    /// Provider class name used by configuration files of existing deployments
    pub fn legacy_name(&self) -> &'static str {
        match self {
            ProviderKind::ClearText => "org.apache.fulcrum.crypto.provider.ClearCrypt",
            ProviderKind::GenericDigest => "org.apache.fulcrum.crypto.provider.JavaCrypt",
            ProviderKind::LegacyTruncatedDigest => "org.apache.fulcrum.crypto.provider.OldJavaCrypt",
            ProviderKind::SaltedCrypt => "org.apache.fulcrum.crypto.provider.UnixCrypt",
        }
    }

    /// Parse an implementation identifier, either the short or the legacy form
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|kind| id.eq_ignore_ascii_case(kind.name()) || id.eq_ignore_ascii_case(kind.legacy_name()))
    }

    /// Check if the implementation is available in the current build
    pub fn is_available(&self) -> bool {
        true
    }
}

/// Message digests selectable by cipher name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageDigestAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl MessageDigestAlgorithm {
    /// Look up a digest by cipher name, ignoring case.
    ///
    /// Accepts the standard algorithm names, including the `SHA` and
    /// `SHA1` aliases for SHA-1.
    pub fn from_name(name: &str) -> Option<Self> {
        let algorithm = match name.to_ascii_uppercase().as_str() {
            "MD5" => MessageDigestAlgorithm::Md5,
            "SHA" | "SHA1" | "SHA-1" => MessageDigestAlgorithm::Sha1,
            "SHA-224" | "SHA224" => MessageDigestAlgorithm::Sha224,
            "SHA-256" | "SHA256" => MessageDigestAlgorithm::Sha256,
            "SHA-384" | "SHA384" => MessageDigestAlgorithm::Sha384,
            "SHA-512" | "SHA512" => MessageDigestAlgorithm::Sha512,
            "SHA-512/224" | "SHA512/224" => MessageDigestAlgorithm::Sha512_224,
            "SHA-512/256" | "SHA512/256" => MessageDigestAlgorithm::Sha512_256,
            "SHA3-224" => MessageDigestAlgorithm::Sha3_224,
            "SHA3-256" => MessageDigestAlgorithm::Sha3_256,
            "SHA3-384" => MessageDigestAlgorithm::Sha3_384,
            "SHA3-512" => MessageDigestAlgorithm::Sha3_512,
            _ => return None,
        };
        Some(algorithm)
    }

    /// Get the standard name of the digest
    pub fn name(&self) -> &'static str {
        match self {
            MessageDigestAlgorithm::Md5 => "MD5",
            MessageDigestAlgorithm::Sha1 => "SHA-1",
            MessageDigestAlgorithm::Sha224 => "SHA-224",
            MessageDigestAlgorithm::Sha256 => "SHA-256",
            MessageDigestAlgorithm::Sha384 => "SHA-384",
            MessageDigestAlgorithm::Sha512 => "SHA-512",
            MessageDigestAlgorithm::Sha512_224 => "SHA-512/224",
            MessageDigestAlgorithm::Sha512_256 => "SHA-512/256",
            MessageDigestAlgorithm::Sha3_224 => "SHA3-224",
            MessageDigestAlgorithm::Sha3_256 => "SHA3-256",
            MessageDigestAlgorithm::Sha3_384 => "SHA3-384",
            MessageDigestAlgorithm::Sha3_512 => "SHA3-512",
        }
    }

    /// Size of the raw digest in bytes
    pub fn output_size(&self) -> usize {
        match self {
            MessageDigestAlgorithm::Md5 => 16,
            MessageDigestAlgorithm::Sha1 => 20,
            MessageDigestAlgorithm::Sha224
            | MessageDigestAlgorithm::Sha512_224
            | MessageDigestAlgorithm::Sha3_224 => 28,
            MessageDigestAlgorithm::Sha256
            | MessageDigestAlgorithm::Sha512_256
            | MessageDigestAlgorithm::Sha3_256 => 32,
            MessageDigestAlgorithm::Sha384 | MessageDigestAlgorithm::Sha3_384 => 48,
            MessageDigestAlgorithm::Sha512 | MessageDigestAlgorithm::Sha3_512 => 64,
        }
    }

    /// Compute the digest of `data` in one shot
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            MessageDigestAlgorithm::Md5 => hash::<md5::Md5>(data),
            MessageDigestAlgorithm::Sha1 => hash::<sha1::Sha1>(data),
            MessageDigestAlgorithm::Sha224 => hash::<sha2::Sha224>(data),
            MessageDigestAlgorithm::Sha256 => hash::<sha2::Sha256>(data),
            MessageDigestAlgorithm::Sha384 => hash::<sha2::Sha384>(data),
            MessageDigestAlgorithm::Sha512 => hash::<sha2::Sha512>(data),
            MessageDigestAlgorithm::Sha512_224 => hash::<sha2::Sha512_224>(data),
            MessageDigestAlgorithm::Sha512_256 => hash::<sha2::Sha512_256>(data),
            MessageDigestAlgorithm::Sha3_224 => hash::<sha3::Sha3_224>(data),
            MessageDigestAlgorithm::Sha3_256 => hash::<sha3::Sha3_256>(data),
            MessageDigestAlgorithm::Sha3_384 => hash::<sha3::Sha3_384>(data),
            MessageDigestAlgorithm::Sha3_512 => hash::<sha3::Sha3_512>(data),
        }
    }
}

fn hash<D: Digest>(data: &[u8]) -> Vec<u8> {
    D::digest(data).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_ids() {
        assert_eq!(ProviderKind::from_id("clear"), Some(ProviderKind::ClearText));
        assert_eq!(ProviderKind::from_id("JAVA"), Some(ProviderKind::GenericDigest));
        assert_eq!(ProviderKind::from_id("oldjava"), Some(ProviderKind::LegacyTruncatedDigest));
        assert_eq!(
            ProviderKind::from_id("org.apache.fulcrum.crypto.provider.UnixCrypt"),
            Some(ProviderKind::SaltedCrypt)
        );
        assert_eq!(ProviderKind::from_id(" unix "), Some(ProviderKind::SaltedCrypt));
        assert_eq!(ProviderKind::from_id("none"), None);
        assert_eq!(ProviderKind::from_id("com.example.Missing"), None);
    }

    #[test]
    fn test_provider_names_round_trip() {
        for kind in ProviderKind::ALL {
            assert!(kind.is_available());
            assert_eq!(ProviderKind::from_id(kind.name()), Some(kind));
            assert_eq!(ProviderKind::from_id(kind.legacy_name()), Some(kind));
        }
        assert_eq!(ProviderKind::default(), ProviderKind::GenericDigest);
    }

    #[test]
    fn test_digest_names() {
        assert_eq!(MessageDigestAlgorithm::from_name("md5"), Some(MessageDigestAlgorithm::Md5));
        assert_eq!(MessageDigestAlgorithm::from_name("SHA"), Some(MessageDigestAlgorithm::Sha1));
        assert_eq!(MessageDigestAlgorithm::from_name("SHA1"), Some(MessageDigestAlgorithm::Sha1));
        assert_eq!(MessageDigestAlgorithm::from_name("sha-512"), Some(MessageDigestAlgorithm::Sha512));
        assert_eq!(MessageDigestAlgorithm::from_name("java"), None);
        assert_eq!(MessageDigestAlgorithm::from_name(""), None);
        assert_eq!(MessageDigestAlgorithm::from_name(" MD5 "), None);
        assert_eq!(MessageDigestAlgorithm::from_name("SHA-256\t"), None);
    }

    #[test]
    fn test_digest_output_sizes() {
        for name in [
            "MD5", "SHA-1", "SHA-224", "SHA-256", "SHA-384", "SHA-512",
            "SHA-512/224", "SHA-512/256", "SHA3-224", "SHA3-256", "SHA3-384", "SHA3-512",
        ] {
            let algorithm = MessageDigestAlgorithm::from_name(name).unwrap();
            assert_eq!(algorithm.name(), name);
            assert_eq!(algorithm.digest(b"Oeltanks").len(), algorithm.output_size());
        }
    }

    #[test]
    fn test_sha256_known_value() {
        let result = MessageDigestAlgorithm::Sha256.digest(b"hello");
        let hex: String = result.iter().map(|b| format!("{b:02x}")).collect();
        assert_eq!(hex, "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824");
    }
}
