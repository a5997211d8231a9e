/*!
Serialization support for registry configuration.

This module lets `CryptoServiceConfig` be read from and written to any
Serde format. The configuration is a document with an optional
`algorithm` table of `name = "implementation"` pairs; entries keep
document order. It's only built when the `serde-support` feature is
enabled.
*/

use std::fmt;

use ::serde::de::{MapAccess, Visitor};
use ::serde::ser::SerializeMap;
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::crypto::types::config::{AlgorithmEntry, CryptoServiceConfig};

/// The `algorithm` table, kept in document order
struct AlgorithmSection(Vec<AlgorithmEntry>);

impl<'de> Deserialize<'de> for AlgorithmSection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SectionVisitor;

        impl<'de> Visitor<'de> for SectionVisitor {
            type Value = AlgorithmSection;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of algorithm names to implementation identifiers")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, implementation)) = map.next_entry::<String, String>()? {
                    entries.push(AlgorithmEntry { name, implementation });
                }
                Ok(AlgorithmSection(entries))
            }
        }

        deserializer.deserialize_map(SectionVisitor)
    }
}

struct SectionRef<'a>(&'a [AlgorithmEntry]);

impl Serialize for SectionRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(&entry.name, &entry.implementation)?;
        }
        map.end()
    }
}

#[derive(Deserialize)]
struct SerdeCryptoServiceConfig {
    #[serde(default)]
    algorithm: Option<AlgorithmSection>,
}

#[derive(Serialize)]
struct SerdeCryptoServiceConfigRef<'a> {
    algorithm: SectionRef<'a>,
}

impl<'de> Deserialize<'de> for CryptoServiceConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let config = SerdeCryptoServiceConfig::deserialize(deserializer)?;
        Ok(CryptoServiceConfig::from_entries(
            config.algorithm.map(|section| section.0).unwrap_or_default(),
        ))
    }
}

impl Serialize for CryptoServiceConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SerdeCryptoServiceConfigRef {
            algorithm: SectionRef(self.entries()),
        }
        .serialize(serializer)
    }
}
