/*!
Registry builder.

Collects algorithm entries and produces a configured registry in one
step, ready to be shared.
*/

use crate::core::constants::{DEFAULT_KEY, DISABLED};
use crate::core::crypto::registry::manager::CryptoRegistry;
use crate::core::crypto::types::algorithms::ProviderKind;
use crate::core::crypto::types::config::CryptoServiceConfig;

/// Builder for `CryptoRegistry` instances
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    config: CryptoServiceConfig,
}

impl RegistryBuilder {
    /// Create a builder with no entries besides the built-in default
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `name` to an implementation identifier
    pub fn algorithm(mut self, name: impl Into<String>, implementation: impl Into<String>) -> Self {
        self.config.push(name, implementation);
        self
    }

    /// Map `name` to a known implementation
    pub fn provider(self, name: impl Into<String>, provider: ProviderKind) -> Self {
        self.algorithm(name, provider.name())
    }

    /// Use `provider` for names without an entry of their own
    pub fn default_algorithm(self, provider: ProviderKind) -> Self {
        self.provider(DEFAULT_KEY, provider)
    }

    /// Make names without an entry of their own fail to resolve
    pub fn disable_default(self) -> Self {
        self.algorithm(DEFAULT_KEY, DISABLED)
    }

    /// Append all entries of a configuration section
    pub fn from_config(mut self, config: &CryptoServiceConfig) -> Self {
        for entry in config.entries() {
            self.config.push(entry.name.clone(), entry.implementation.clone());
        }
        self
    }

    /// Build the registry
    pub fn build(self) -> CryptoRegistry {
        CryptoRegistry::from_config(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_entries() {
        let registry = RegistryBuilder::new()
            .provider("unix", ProviderKind::SaltedCrypt)
            .algorithm("clear", "org.apache.fulcrum.crypto.provider.ClearCrypt")
            .default_algorithm(ProviderKind::LegacyTruncatedDigest)
            .build();

        assert_eq!(registry.implementation_for("unix"), Some("unix"));
        assert_eq!(registry.implementation_for("default"), Some("oldjava"));
        assert_eq!(registry.resolve("clear").unwrap().provider(), ProviderKind::ClearText);
        assert_eq!(
            registry.resolve("MD5").unwrap().provider(),
            ProviderKind::LegacyTruncatedDigest
        );
    }

    #[test]
    fn test_builder_disable_default() {
        let registry = CryptoRegistry::builder().disable_default().build();
        assert!(registry.resolve("SHA1").unwrap_err().is_no_such_algorithm());
    }

    #[test]
    fn test_builder_from_config() {
        let config = CryptoServiceConfig::new().with_algorithm("unix", "unix");
        let registry = RegistryBuilder::new()
            .from_config(&config)
            .algorithm("unix", "clear")
            .build();
        assert_eq!(registry.implementation_for("unix"), Some("clear"));
    }
}
