//! Non-fatal problems collected while running a command.
//!
//! Fatal problems are `anyhow` errors and abort the run. Everything here is
//! reported to the user (unless silenced) and processing continues.

use std::fmt;

/// A warning raised during processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A wide CSV column whose locale is not expected. Its cells are dropped.
    UnexpectedLocale { locale: String },
    /// An expected locale without a column in the wide CSV.
    MissingLocale { locale: String },
    /// A wide CSV data row with an empty key. The row is skipped.
    MissingKey { line: u64 },
    /// Locale resolution produced nothing to work on.
    NoLocales,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnexpectedLocale { locale } => write!(
                f,
                "Locale {} found in the file but not expected. Ignoring this column.",
                locale
            ),
            Warning::MissingLocale { locale } => {
                write!(f, "Locale {} expected but not present in the file.", locale)
            }
            Warning::MissingKey { line } => {
                write!(f, "No translation key on line {}, skipping...", line)
            }
            Warning::NoLocales => write!(
                f,
                "No locale to process. Pass --locale or create one directory per locale."
            ),
        }
    }
}
