//! Craft registry: traditional artisan crafts by state name.
//!
//! The registry is built once and then shared read-only. Lookups never fail;
//! a state without an entry resolves to [`FALLBACK_CRAFTS`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::FALLBACK_CRAFTS;

/// Built-in entries. Keys must match the `name` property of the GeoJSON
/// features exactly unless normalized matching is enabled.
const BUILTIN_CRAFTS: &[(&str, &str)] = &[
    ("Rajasthan", "Tie-Dye (Bandhani), Block Printing, Blue Pottery"),
    ("Gujarat", "Patola Silk, Kutch Embroidery, Rogan Art"),
    ("Kerala", "Kathakali Masks, Aranmula Kannadi, Coir Products"),
    ("Goa", "Terracotta and Clay Work, Coir Craft, Wood Carving"),
    ("Bihar", "Madhubani Painting, Sujini Embroidery, Stonecraft"),
    ("West Bengal", "Kantha Embroidery, Terracotta, Dokra Art"),
    ("Odisha", "Pattachitra Paintings, Appliqué Work, Silver Filigree"),
    ("Uttar Pradesh", "Chikankari Embroidery, Pottery, Metalware"),
    (
        "Jammu and Kashmir",
        "Pashmina Shawls, Walnut Wood Carving, Paper Mache",
    ),
];

/// How region names are compared against registry keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Byte-for-byte comparison.
    #[default]
    Strict,
    /// Case-, whitespace- and `&`/`and`-insensitive comparison.
    Normalized,
}

/// Static mapping from state name to a free-text craft description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraftRegistry {
    entries: BTreeMap<String, String>,
    /// Folded key -> original key, only populated in normalized mode.
    folded: BTreeMap<String, String>,
    mode: MatchMode,
}

impl CraftRegistry {
    /// Creates an empty registry.
    pub fn empty(mode: MatchMode) -> Self {
        Self {
            entries: BTreeMap::new(),
            folded: BTreeMap::new(),
            mode,
        }
    }

    /// Creates the registry with the built-in entries and strict matching.
    pub fn builtin() -> Self {
        Self::builtin_with_mode(MatchMode::Strict)
    }

    /// Creates the registry with the built-in entries.
    pub fn builtin_with_mode(mode: MatchMode) -> Self {
        Self::empty(mode).with_entries(
            BUILTIN_CRAFTS
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string())),
        )
    }

    /// Adds or replaces entries.
    #[must_use]
    pub fn with_entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (name, crafts) in entries {
            self.insert(name, crafts);
        }
        self
    }

    /// Adds or replaces one entry.
    pub fn insert(&mut self, name: impl Into<String>, crafts: impl Into<String>) {
        let name = name.into();
        if self.mode == MatchMode::Normalized {
            // A new spelling of an existing folded key replaces the old entry.
            if let Some(previous) = self.folded.insert(fold_key(&name), name.clone()) {
                if previous != name {
                    self.entries.remove(&previous);
                }
            }
        }
        self.entries.insert(name, crafts.into());
    }

    /// Returns the matching mode.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns the description for `state_name`, or `None` on a miss.
    pub fn get(&self, state_name: &str) -> Option<&str> {
        match self.mode {
            MatchMode::Strict => self.entries.get(state_name).map(String::as_str),
            MatchMode::Normalized => self
                .folded
                .get(&fold_key(state_name))
                .and_then(|key| self.entries.get(key))
                .map(String::as_str),
        }
    }

    /// Returns the description for `state_name`, or the fallback text.
    pub fn lookup(&self, state_name: &str) -> &str {
        self.get(state_name).unwrap_or(FALLBACK_CRAFTS)
    }

    /// Returns true if `state_name` has an entry.
    pub fn contains(&self, state_name: &str) -> bool {
        self.get(state_name).is_some()
    }

    /// All entries in name order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CraftRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Folds a state name for normalized comparison.
///
/// Trims, lowercases, collapses internal whitespace and spells `&` as `and`.
pub fn fold_key(name: &str) -> String {
    name.replace('&', " and ")
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
