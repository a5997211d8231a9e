/*!
Registry manager for encoding algorithms.

The registry holds a table mapping the names callers request to
implementation identifiers. The table is built once from configuration
and then only read. `configure` takes `&mut self` and `resolve` takes
`&self`, so a registry shared through an `Arc` can no longer be
reconfigured while lookups are running.
*/

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::core::constants::{DEFAULT_KEY, DISABLED};
use crate::core::error::{Error, LookupFailure, Result};
use crate::core::crypto::algorithms::create_algorithm;
use crate::core::crypto::registry::builder::RegistryBuilder;
use crate::core::crypto::traits::algorithm::CryptoAlgorithm;
use crate::core::crypto::types::algorithms::ProviderKind;
use crate::core::crypto::types::config::CryptoServiceConfig;

/// Registry of configured encoding algorithms
#[derive(Debug, Clone)]
pub struct CryptoRegistry {
    /// Algorithm name to implementation identifier
    algorithms: HashMap<String, String>,
}

impl Default for CryptoRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CryptoRegistry {
    /// Create a registry holding only the built-in default
    pub fn new() -> Self {
        let mut registry = Self {
            algorithms: HashMap::new(),
        };
        registry.configure(std::iter::empty::<(String, String)>());
        registry
    }

    /// Start building a registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Create a registry from the `algorithm` configuration section
    pub fn from_config(config: &CryptoServiceConfig) -> Self {
        let mut registry = Self::new();
        registry.configure_from(config);
        registry
    }

    /// Replace the algorithm table.
    ///
    /// The table is seeded with the built-in default before `entries` are
    /// applied in order, so entries may override `default` but never need
    /// to restate it.
    pub fn configure<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut algorithms = HashMap::new();
        algorithms.insert(DEFAULT_KEY.to_string(), ProviderKind::default().name().to_string());

        for (name, implementation) in entries {
            algorithms.insert(name.into(), implementation.into());
        }

        debug!(entries = algorithms.len(), "configured algorithm table");
        self.algorithms = algorithms;
    }

    /// Replace the algorithm table from the `algorithm` configuration section
    pub fn configure_from(&mut self, config: &CryptoServiceConfig) {
        self.configure(
            config
                .entries()
                .iter()
                .map(|entry| (entry.name.as_str(), entry.implementation.as_str())),
        );
    }

    /// Resolve `name` to a fresh algorithm handle.
    ///
    /// Unknown names fall back to the `default` entry. The handle's cipher
    /// is set to `name`, so one digest implementation can serve names such
    /// as `MD5` and `SHA-256`.
    pub fn resolve(&self, name: &str) -> Result<Box<dyn CryptoAlgorithm>> {
        let implementation = self
            .algorithms
            .get(name)
            .or_else(|| self.algorithms.get(DEFAULT_KEY));

        let implementation = match implementation {
            Some(id) if id.eq_ignore_ascii_case(DISABLED) => {
                warn!(algorithm = name, "algorithm is disabled");
                return crate::no_such_algorithm!(name, LookupFailure::Disabled);
            }
            Some(id) => id,
            None => {
                warn!(algorithm = name, "no algorithm configured");
                return crate::no_such_algorithm!(name, LookupFailure::NotConfigured);
            }
        };

        let provider = ProviderKind::from_id(implementation).ok_or_else(|| {
            warn!(algorithm = name, implementation = %implementation, "unknown implementation");
            Error::no_such_algorithm(name, LookupFailure::Instantiation(implementation.clone()))
        })?;

        debug!(algorithm = name, provider = provider.name(), "resolved algorithm");

        let mut algorithm = create_algorithm(provider);
        algorithm.set_cipher(name);
        Ok(algorithm)
    }

    /// Resolve `name` and transform `input` with a default-configured handle
    pub fn encrypt(&self, name: &str, input: &str) -> Result<String> {
        self.resolve(name)?.transform(input)
    }

    /// Get the implementation identifier configured for `name`
    pub fn implementation_for(&self, name: &str) -> Option<&str> {
        self.algorithms.get(name).map(String::as_str)
    }

    /// List all configured algorithm names, sorted
    pub fn list_algorithms(&self) -> Vec<String> {
        let mut names: Vec<String> = self.algorithms.keys().cloned().collect();
        names.sort();
        names
    }
}
