//! Reading and writing two-column `key,value` locale files.
//!
//! Locale files have no header line. Fields are comma separated and may be
//! wrapped in double quotes.

use std::{fs::File, io::Read, path::Path};

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use crate::csv_writer::quoted_lines;
use crate::table::{LocaleRow, PerLocaleRows};

/// Read all rows of the locale file at `path`.
pub fn read_locale_file(path: &Path) -> Result<PerLocaleRows> {
    let file = File::open(path)
        .with_context(|| format!("The file {} could not be opened", path.display()))?;
    read_locale_rows(file).with_context(|| format!("Failed to read {}", path.display()))
}

/// Read rows from any reader.
///
/// The first field is the key and the second the value. A record with a single
/// field has an empty value, extra fields are ignored.
pub fn read_locale_rows<R: Read>(reader: R) -> Result<PerLocaleRows> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = PerLocaleRows::new();
    for record in reader.records() {
        let record = record?;
        let key = record.get(0).unwrap_or_default();
        let value = record.get(1).unwrap_or_default();
        rows.push(LocaleRow::new(key, value));
    }
    Ok(rows)
}

/// Render `(key, value)` pairs as locale file content.
pub fn render_locale_rows<'a, I>(rows: I) -> Result<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    quoted_lines(rows.into_iter().map(|(key, value)| [key, value]))
}
