//! Export pipeline: many per-locale files merged into one wide CSV.

use std::{collections::HashMap, path::Path};

use anyhow::Result;

use crate::csv_writer::quoted_lines;
use crate::locale_file::read_locale_file;
use crate::locales::LocaleSet;
use crate::table::{LocaleId, PerLocaleRows, TranslationTable};

/// Default label of the first header column.
pub const DEFAULT_CODE_HEADER: &str = "Code (do not modify it)";

/// Serialized wide CSV and what it took to produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutput {
    pub text: String,
    /// Number of rows written, header excluded.
    pub key_count: usize,
    /// Cells that had no translation and were filled with their key.
    pub untranslated: usize,
}

/// Read `<source_dir>/<locale>/<file_name>` for every locale.
///
/// Any unreadable file aborts the whole export.
pub fn read_sources(
    source_dir: &Path,
    file_name: &Path,
    locales: &LocaleSet,
) -> Result<HashMap<LocaleId, PerLocaleRows>> {
    let mut rows_by_locale = HashMap::new();
    for locale in locales.iter() {
        let path = source_dir.join(locale).join(file_name);
        rows_by_locale.insert(locale.to_string(), read_locale_file(&path)?);
    }
    Ok(rows_by_locale)
}

/// Merge per-locale rows into one table.
///
/// Locales are applied in the given order and rows in file order, so a later
/// row for the same `(key, locale)` overwrites an earlier one. A locale with no
/// rows entry contributes nothing.
pub fn build_export_table(
    locales: &LocaleSet,
    rows_by_locale: &HashMap<LocaleId, PerLocaleRows>,
) -> TranslationTable {
    let mut table = TranslationTable::new();
    for locale in locales {
        let Some(rows) = rows_by_locale.get(locale) else {
            continue;
        };
        for row in rows {
            table.insert(&row.key, locale, row.value.as_str());
        }
    }
    table
}

/// Cell value as exported: the translation, or the key when it is missing.
pub fn effective_value<'a>(table: &'a TranslationTable, key: &'a str, locale: &str) -> &'a str {
    table.get(key, locale).unwrap_or(key)
}

/// Serialize the table as a wide CSV.
///
/// The header line is not quoted and lists the locales in the given order.
/// The table is left untouched; fallbacks are counted in
/// [`ExportOutput::untranslated`].
pub fn serialize_export(
    table: &TranslationTable,
    locales: &LocaleSet,
    code_header: &str,
) -> Result<ExportOutput> {
    let mut header = String::from(code_header);
    for locale in locales.iter() {
        header.push(',');
        header.push_str(locale);
    }

    let mut untranslated = 0;
    let records: Vec<Vec<&str>> = table
        .keys()
        .map(|key| {
            let mut record = Vec::with_capacity(locales.len() + 1);
            record.push(key);
            for locale in locales.iter() {
                if table.get(key, locale).is_none() {
                    untranslated += 1;
                }
                record.push(effective_value(table, key, locale));
            }
            record
        })
        .collect();

    let body = quoted_lines(&records)?;
    let text = if body.is_empty() {
        header
    } else {
        format!("{}\n{}", header, body)
    };

    Ok(ExportOutput {
        text,
        key_count: records.len(),
        untranslated,
    })
}
