use crypt_registry::{
    CryptoRegistry,
    Error,
    LookupFailure,
};

use proptest::prelude::*;

fn registry() -> CryptoRegistry {
    CryptoRegistry::builder()
        .algorithm("unix", "unix")
        .algorithm("clear", "clear")
        .algorithm("java", "java")
        .algorithm("oldjava", "oldjava")
        .build()
}

// Strategy for generating arbitrary credential text
fn inputs() -> impl Strategy<Value = String> {
    ".{0,64}"
}

// Strategy for generating digest cipher names
fn digest_names() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("MD5"),
        Just("SHA1"),
        Just("SHA-224"),
        Just("SHA-256"),
        Just("SHA-384"),
        Just("SHA-512"),
        Just("SHA3-256"),
    ]
}

// Strategy for generating names that have no entry of their own
fn unconfigured_names() -> impl Strategy<Value = String> {
    "[A-Za-z0-9-]{1,12}".prop_filter("configured name", |name| {
        !matches!(name.as_str(), "unix" | "clear" | "java" | "oldjava" | "default")
    })
}

proptest! {
    #[test]
    fn test_clear_is_identity(input in inputs()) {
        let mut algorithm = registry().resolve("clear").unwrap();
        prop_assert_eq!(algorithm.transform(&input).unwrap(), input);
    }

    #[test]
    fn test_digest_is_deterministic(input in inputs(), cipher in digest_names()) {
        let mut algorithm = registry().resolve("java").unwrap();
        algorithm.set_cipher(cipher);
        let first = algorithm.transform(&input).unwrap();
        let second = algorithm.transform(&input).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_legacy_digest_is_truncated_prefix(input in inputs(), cipher in digest_names()) {
        let registry = registry();

        let mut full = registry.resolve("java").unwrap();
        full.set_cipher(cipher);
        let full = full.transform(&input).unwrap();

        let mut legacy = registry.resolve("oldjava").unwrap();
        legacy.set_cipher(cipher);
        let legacy = legacy.transform(&input).unwrap();

        let expected_len = if cipher == "MD5" { 20 } else { 24 };
        prop_assert_eq!(legacy.len(), expected_len);
        prop_assert_eq!(&full[..expected_len], legacy.as_str());
    }

    #[test]
    fn test_unix_salt_round_trip(input in inputs()) {
        let registry = registry();

        let mut algorithm = registry.resolve("unix").unwrap();
        algorithm.set_seed(None);
        let result = algorithm.transform(&input).unwrap();

        let mut again = registry.resolve("unix").unwrap();
        again.set_seed(Some(&result[..2]));
        prop_assert_eq!(again.transform(&input).unwrap(), result);
    }

    #[test]
    fn test_unconfigured_names_use_default(name in unconfigured_names(), input in inputs()) {
        let registry = registry();

        let mut fallback = registry.resolve(&name).unwrap();
        let mut default = registry.resolve("default").unwrap();
        default.set_cipher(&name);
        prop_assert_eq!(fallback.provider(), default.provider());
        prop_assert_eq!(fallback.transform(&input), default.transform(&input));
    }

    #[test]
    fn test_disabled_default_names_request(name in unconfigured_names()) {
        let registry = CryptoRegistry::builder().disable_default().build();

        let err = registry.resolve(&name).unwrap_err();
        prop_assert_eq!(err, Error::NoSuchAlgorithm { algorithm: name, reason: LookupFailure::Disabled });
    }
}
