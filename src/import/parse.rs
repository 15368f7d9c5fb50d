use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, StringRecord};

use crate::issues::Warning;
use crate::locales::LocaleSet;
use crate::table::{LocaleId, TranslationTable};

/// Result of parsing a wide CSV.
#[derive(Debug, Clone, Default)]
pub struct ParsedWideCsv {
    pub table: TranslationTable,
    /// Locale columns in header order, expected or not.
    pub header_locales: Vec<LocaleId>,
    pub warnings: Vec<Warning>,
}

/// Outcome of reading one data row.
#[derive(Debug)]
enum WideRow<'r> {
    Entry { key: &'r str },
    MissingKey,
}

pub fn parse_wide_file(path: &Path, expected: &LocaleSet) -> Result<ParsedWideCsv> {
    let bytes = fs::read(path)
        .with_context(|| format!("The file {} could not be opened", path.display()))?;
    let text = String::from_utf8(bytes)
        .with_context(|| format!("The file {} is not valid UTF-8", path.display()))?;
    parse_wide_csv(&path.display().to_string(), &text, expected)
}

/// Parse a wide CSV (`<label>,<locale>,...` header, then one row per key).
///
/// Header mismatches and rows without a key are warnings. A row whose field
/// count differs from the header is fatal. Cells of columns whose locale is not
/// in `expected` are dropped.
///
/// Line numbers in errors and warnings are the physical line a record starts
/// on, so a quoted multi-line field shifts the following rows. Blank lines are
/// skipped rather than reported as short rows.
pub fn parse_wide_csv(
    source_name: &str,
    text: &str,
    expected: &LocaleSet,
) -> Result<ParsedWideCsv> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record.with_context(|| format!("Failed to parse {}", source_name))?,
        None => bail!("{} is empty: no header row found.", source_name),
    };
    // The first column holds the keys; its label is irrelevant.
    let header_locales: Vec<LocaleId> = header.iter().skip(1).map(str::to_string).collect();

    let mut parsed = ParsedWideCsv {
        warnings: check_header(&header_locales, expected),
        header_locales,
        ..Default::default()
    };

    for (index, record) in records.enumerate() {
        let record = record.with_context(|| format!("Failed to parse {}", source_name))?;
        // Line numbers count the header as line 1.
        let line = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(index as u64 + 2);

        match read_row(&record, parsed.header_locales.len(), line, source_name)? {
            WideRow::MissingKey => parsed.warnings.push(Warning::MissingKey { line }),
            WideRow::Entry { key } => {
                parsed.table.ensure_key(key);
                for (locale, value) in parsed.header_locales.iter().zip(record.iter().skip(1)) {
                    if expected.contains(locale) {
                        parsed.table.insert(key, locale, value);
                    }
                }
            }
        }
    }

    Ok(parsed)
}

/// Compare the header locales with the expected ones.
fn check_header(header_locales: &[LocaleId], expected: &LocaleSet) -> Vec<Warning> {
    let unexpected = header_locales
        .iter()
        .filter(|locale| !expected.contains(locale))
        .map(|locale| Warning::UnexpectedLocale {
            locale: locale.clone(),
        });
    let missing = expected
        .iter()
        .filter(|locale| !header_locales.iter().any(|h| h == *locale))
        .map(|locale| Warning::MissingLocale {
            locale: locale.to_string(),
        });
    unexpected.chain(missing).collect()
}

fn read_row<'r>(
    record: &'r StringRecord,
    locale_count: usize,
    line: u64,
    source_name: &str,
) -> Result<WideRow<'r>> {
    let entries = record.len().saturating_sub(1);
    if entries != locale_count {
        bail!(
            "In {} : The line {} has {} entries instead of {} expected.",
            source_name,
            line,
            entries,
            locale_count
        );
    }

    match record.get(0) {
        Some(key) if !key.is_empty() => Ok(WideRow::Entry { key }),
        _ => Ok(WideRow::MissingKey),
    }
}
