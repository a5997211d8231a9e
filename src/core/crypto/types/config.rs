/*!
Registry configuration.

The hosting application supplies an ordered list of algorithm entries,
conventionally read from a section named `algorithm`. Each entry maps a
name callers will request to an implementation identifier. Later
entries win over earlier ones with the same name.
*/

use crate::core::constants::{DEFAULT_KEY, DISABLED};
use crate::core::crypto::types::algorithms::ProviderKind;

/// A single `name = implementation` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmEntry {
    /// Name callers pass to `resolve`
    pub name: String,
    /// Implementation identifier, or `none` to disable the name
    pub implementation: String,
}

impl AlgorithmEntry {
    pub fn new(name: impl Into<String>, implementation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            implementation: implementation.into(),
        }
    }
}

/// Contents of the `algorithm` configuration section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CryptoServiceConfig {
    algorithm: Vec<AlgorithmEntry>,
}

impl CryptoServiceConfig {
    /// Create an empty configuration, leaving only the built-in default
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from entries in order
    pub fn from_entries(entries: Vec<AlgorithmEntry>) -> Self {
        Self { algorithm: entries }
    }

    /// Append an entry
    pub fn with_algorithm(mut self, name: impl Into<String>, implementation: impl Into<String>) -> Self {
        self.push(name, implementation);
        self
    }

    /// Replace the fallback implementation
    pub fn with_default(self, provider: ProviderKind) -> Self {
        self.with_algorithm(DEFAULT_KEY, provider.name())
    }

    /// Disable the fallback so that unknown names fail
    pub fn without_default(self) -> Self {
        self.with_algorithm(DEFAULT_KEY, DISABLED)
    }

    /// Append an entry
    pub fn push(&mut self, name: impl Into<String>, implementation: impl Into<String>) {
        self.algorithm.push(AlgorithmEntry::new(name, implementation));
    }

    /// Entries in the order they were supplied
    pub fn entries(&self) -> &[AlgorithmEntry] {
        &self.algorithm
    }

    pub fn is_empty(&self) -> bool {
        self.algorithm.is_empty()
    }
}

impl<N, I> FromIterator<(N, I)> for CryptoServiceConfig
where
    N: Into<String>,
    I: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        Self::from_entries(
            iter.into_iter()
                .map(|(name, implementation)| AlgorithmEntry::new(name, implementation))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CryptoServiceConfig::default();
        assert!(config.is_empty());
        assert!(config.entries().is_empty());
    }

    #[test]
    fn test_entries_keep_order() {
        let config = CryptoServiceConfig::new()
            .with_algorithm("unix", "unix")
            .with_algorithm("clear", "clear")
            .with_default(ProviderKind::LegacyTruncatedDigest);

        let names: Vec<&str> = config.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["unix", "clear", "default"]);
        assert_eq!(config.entries()[2].implementation, "oldjava");
    }

    #[test]
    fn test_without_default() {
        let config = CryptoServiceConfig::new().without_default();
        assert_eq!(config.entries(), &[AlgorithmEntry::new("default", "none")]);
    }

    #[test]
    fn test_collect_from_pairs() {
        let config: CryptoServiceConfig = [("java", "java"), ("md5", "oldjava")].into_iter().collect();
        assert_eq!(config.entries().len(), 2);
        assert_eq!(config.entries()[1], AlgorithmEntry::new("md5", "oldjava"));
    }
}
