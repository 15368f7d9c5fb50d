//! Shared data model for both pipelines.
//!
//! Rows read from a single-locale file are kept as an ordered [`PerLocaleRows`]
//! sequence. Everything that is merged across locales lives in a
//! [`TranslationTable`], which is keyed and therefore cannot hold duplicates.

use std::collections::{BTreeMap, BTreeSet};

pub type TranslationKey = String;
pub type LocaleId = String;

/// One `(key, value)` line of a per-locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRow {
    pub key: TranslationKey,
    pub value: String,
}

impl LocaleRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Rows in file order. Duplicated keys are allowed here.
pub type PerLocaleRows = Vec<LocaleRow>;

/// Translations indexed by key, then by locale.
///
/// Keys iterate in ascending byte order. A `(key, locale)` pair that was never
/// inserted is simply missing; what that means is up to the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: BTreeMap<TranslationKey, BTreeMap<LocaleId, String>>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for `(key, locale)`, replacing any earlier value.
    pub fn insert(&mut self, key: &str, locale: &str, value: impl Into<String>) {
        self.ensure_key(key)
            .insert(locale.to_string(), value.into());
    }

    /// Set the value only if `(key, locale)` is missing.
    ///
    /// Returns `true` when the value was inserted.
    pub fn insert_if_missing(&mut self, key: &str, locale: &str, value: &str) -> bool {
        let cells = self.ensure_key(key);
        if cells.contains_key(locale) {
            return false;
        }
        cells.insert(locale.to_string(), value.to_string());
        true
    }

    /// Register a key without any locale value.
    pub fn ensure_key(&mut self, key: &str) -> &mut BTreeMap<LocaleId, String> {
        self.entries.entry(key.to_string()).or_default()
    }

    pub fn get(&self, key: &str, locale: &str) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|cells| cells.get(locale))
            .map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Union of every locale that holds at least one value, ascending.
    pub fn populated_locales(&self) -> BTreeSet<&str> {
        self.entries
            .values()
            .flat_map(|cells| cells.keys().map(String::as_str))
            .collect()
    }

    /// `(key, value)` pairs for one locale in ascending key order.
    ///
    /// Keys without a value for `locale` are skipped.
    pub fn column<'a>(&'a self, locale: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.entries.iter().filter_map(move |(key, cells)| {
            cells
                .get(locale)
                .map(|value| (key.as_str(), value.as_str()))
        })
    }

    /// Number of values stored for `locale`.
    pub fn column_len(&self, locale: &str) -> usize {
        self.column(locale).count()
    }
}
