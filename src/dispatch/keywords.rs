//! Strategy ids and the ordered keyword table.

use crate::config::Section;
use crate::strategy::BuiltinStrategy;
use serde::Serialize;

/// Default keyword table. Declaration order is match priority.
pub const DEFAULT_KEYWORDS: &[(&str, &[&str])] = &[
    ("research", &["research", "pesquisa"]),
    ("archivist", &["archive", "arquivar", "memoria", "memory"]),
    ("basic", &["basic"]),
];

/// Identifier selecting which handler processes a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StrategyId(String);

impl StrategyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The fallback strategy id, `basic`.
    pub fn basic() -> Self {
        BuiltinStrategy::Basic.into()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StrategyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StrategyId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StrategyId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<BuiltinStrategy> for StrategyId {
    fn from(strategy: BuiltinStrategy) -> Self {
        Self::new(strategy.id())
    }
}

impl PartialEq<str> for StrategyId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StrategyId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ordered mapping from strategy id to the substrings that trigger it.
///
/// Keywords are stored lowercased. Entries are evaluated in insertion order,
/// so an earlier strategy wins when keyword sets overlap. The table is
/// built once and not mutated while it is being read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTable {
    entries: Vec<(StrategyId, Vec<String>)>,
}

impl KeywordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from static entries, in the given order.
    pub fn from_entries(entries: &[(&str, &[&str])]) -> Self {
        let mut table = Self::new();
        for (id, keywords) in entries {
            table.extend_strategy(*id, keywords.iter().copied());
        }
        table
    }

    /// The built-in table ([`DEFAULT_KEYWORDS`]).
    pub fn defaults() -> Self {
        Self::from_entries(DEFAULT_KEYWORDS)
    }

    /// Defaults first, then `overrides` merged on top.
    pub fn with_overrides(overrides: &Section<Vec<String>>) -> Self {
        let mut table = Self::defaults();
        for (id, keywords) in overrides.iter() {
            table.extend_strategy(id, keywords.iter().map(String::as_str));
        }
        table
    }

    /// Add keywords for `id`.
    ///
    /// An existing strategy keeps its position and gains the new keywords;
    /// a new strategy is appended after every existing one. Empty and
    /// already-present keywords are skipped.
    pub fn extend_strategy<'k>(
        &mut self,
        id: impl Into<StrategyId>,
        keywords: impl IntoIterator<Item = &'k str>,
    ) {
        let id = id.into();
        let index = match self.entries.iter().position(|(existing, _)| *existing == id) {
            Some(index) => index,
            None => {
                self.entries.push((id, Vec::new()));
                self.entries.len() - 1
            }
        };

        let (strategy, list) = &mut self.entries[index];
        for keyword in keywords {
            let keyword = keyword.to_lowercase();
            if keyword.trim().is_empty() {
                tracing::debug!(strategy = %strategy, "skipping blank keyword");
                continue;
            }
            if !list.contains(&keyword) {
                list.push(keyword);
            }
        }
    }

    /// First strategy with a keyword contained in `text` (case-insensitive).
    pub fn matching(&self, text: &str) -> Option<&StrategyId> {
        let text = text.to_lowercase();
        self.entries
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k.as_str())))
            .map(|(id, _)| id)
    }

    /// Keywords registered for `id`.
    pub fn keywords(&self, id: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, keywords)| keywords.as_slice())
    }

    /// Iterate over entries in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (&StrategyId, &[String])> {
        self.entries.iter().map(|(id, k)| (id, k.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
