//! Quoted CSV output shared by the export file and the per-locale files.
//!
//! Every field is wrapped in double quotes (embedded quotes are doubled), records
//! are separated by a single `\n` and the last record has no terminator.

use anyhow::{Context, Result, anyhow};
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Render records as always-quoted CSV lines.
pub fn quoted_lines<I, R, F>(records: I) -> Result<String>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());

    for record in records {
        writer
            .write_record(record)
            .context("Failed to encode CSV record")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow!("Failed to flush CSV buffer: {}", err.error()))?;
    let mut text = String::from_utf8(bytes).context("CSV output is not valid UTF-8")?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
