//! Secret data model.
//!
//! A [`Secret`] mirrors the parts of a Kubernetes `Secret` object the tool
//! cares about: its name, its namespace, and the base64-encoded `data` map.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Entry name to base64-encoded value, enumerated in sorted key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SecretData(BTreeMap<String, String>);

impl SecretData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Entry names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Entries in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for SecretData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
struct Metadata {
    #[serde(default)]
    name: String,
    #[serde(default)]
    namespace: Option<String>,
}

/// The secret under inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Secret {
    pub name: String,
    pub namespace: Option<String>,
    pub data: SecretData,
}

impl Secret {
    /// Wrap already-fetched data in an unnamed secret.
    pub fn from_data(data: SecretData) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Get the display name in the format "namespace/name".
    pub fn display_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}/{}", ns, self.name),
            None => self.name.clone(),
        }
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            metadata: Metadata,
            // `data` is omitted or null for secrets without entries
            #[serde(default)]
            data: Option<SecretData>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Secret {
            name: raw.metadata.name,
            namespace: raw.metadata.namespace,
            data: raw.data.unwrap_or_default(),
        })
    }
}
