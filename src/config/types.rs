//! Configuration types, constants, and defaults.
//!
//! This module defines the insertion-ordered `Section` map used for every
//! keyed part of the configuration, plus the bounds and default value
//! functions used when deserializing the model.

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::marker::PhantomData;

/// Lower bound for `temperature` (exclusive).
pub const TEMPERATURE_MIN_EXCLUSIVE: f64 = 0.0;

/// Upper bound for `temperature` (inclusive).
pub const TEMPERATURE_MAX_INCLUSIVE: f64 = 1.0;

/// Pattern a `version` string must match (`<major>.<minor>`).
pub const VERSION_PATTERN: &str = r"^\d+\.\d+$";

pub(crate) fn default_temperature() -> f64 {
    0.1
}

/// The four keyed sections of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionName {
    LlmProfiles,
    Agents,
    Tasks,
    Teams,
}

impl SectionName {
    /// All sections, in document order.
    pub const ALL: [SectionName; 4] = [
        SectionName::LlmProfiles,
        SectionName::Agents,
        SectionName::Tasks,
        SectionName::Teams,
    ];

    /// The section's key as written in the document.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionName::LlmProfiles => "llm_profiles",
            SectionName::Agents => "agents",
            SectionName::Tasks => "tasks",
            SectionName::Teams => "teams",
        }
    }

    /// Singular, human-readable form: trailing "s" stripped and underscores
    /// replaced by spaces (`llm_profiles` -> `llm profile`).
    pub fn singular(self) -> String {
        let name = self.as_str();
        name.strip_suffix('s').unwrap_or(name).replace('_', " ")
    }
}

impl std::fmt::Display for SectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SectionName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// An insertion-ordered mapping from string keys to entries.
///
/// Iteration follows the order entries were inserted, which for a parsed
/// document is the order they were written. Lookups are exact and
/// case-sensitive. Inserting an existing key replaces its value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Section<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, keeping the position of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, value: T) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for Section<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut section = Section::new();
        for (key, value) in iter {
            section.insert(key, value);
        }
        section
    }
}

impl<T> IntoIterator for Section<T> {
    type Item = (String, T);
    type IntoIter = std::vec::IntoIter<(String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<T: Serialize> Serialize for Section<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Keys keep document order. A key written twice is an error.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Section<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SectionVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for SectionVisitor<T> {
            type Value = Section<T>;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a mapping of named entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Section<T>, A::Error> {
                let mut section = Section::new();
                while let Some((key, value)) = map.next_entry::<String, T>()? {
                    if section.contains_key(&key) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate entry with key '{}'",
                            key
                        )));
                    }
                    section.entries.push((key, value));
                }
                Ok(section)
            }
        }

        deserializer.deserialize_map(SectionVisitor(PhantomData))
    }
}
