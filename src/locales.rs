//! Resolution of the locale set a command operates on.
//!
//! Locales come either from an explicit list (`--locale en_GB,fr_FR` or the
//! config file) or from the sub-directories of a locale root directory.

use std::path::Path;

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

use crate::table::LocaleId;

/// Ordered, duplicate-free list of locales.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleSet {
    locales: Vec<LocaleId>,
}

impl LocaleSet {
    /// Build a set keeping the first occurrence of each locale.
    ///
    /// Surrounding whitespace is trimmed and empty entries are dropped.
    pub fn new<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for locale in locales {
            let locale = locale.as_ref().trim();
            if !locale.is_empty() && !set.contains(locale) {
                set.locales.push(locale.to_string());
            }
        }
        set
    }

    /// Parse a comma separated list such as `en_GB,fr_FR,es_ES`.
    pub fn parse_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    pub fn as_slice(&self) -> &[LocaleId] {
        &self.locales
    }
}

impl<'a> IntoIterator for &'a LocaleSet {
    type Item = &'a LocaleId;
    type IntoIter = std::slice::Iter<'a, LocaleId>;

    fn into_iter(self) -> Self::IntoIter {
        self.locales.iter()
    }
}

/// Resolve the locales for a run.
///
/// An explicit list wins. Otherwise every directory directly under `base_dir`
/// whose name does not contain a `.` is a locale, in file name order.
pub fn resolve_locales(explicit: Option<&[String]>, base_dir: &Path) -> Result<LocaleSet> {
    if let Some(list) = explicit.filter(|list| !list.is_empty()) {
        return Ok(LocaleSet::new(list));
    }
    scan_locale_dirs(base_dir)
}

/// Detect locales from the sub-directories of `base_dir`.
pub fn scan_locale_dirs(base_dir: &Path) -> Result<LocaleSet> {
    if !base_dir.is_dir() {
        bail!("'{}' is not a directory.", base_dir.display());
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(base_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry
            .with_context(|| format!("Failed to read directory: {}", base_dir.display()))?;
        // Follows symlinks to locale directories.
        if !entry.path().is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !name.contains('.') {
            names.push(name.to_string());
        }
    }

    Ok(LocaleSet::new(names))
}
