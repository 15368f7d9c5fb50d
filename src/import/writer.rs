use std::{
    fs::{self, File, OpenOptions},
    io::{self, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::locale_file::{read_locale_rows, render_locale_rows};
use crate::table::{LocaleId, TranslationTable};

/// What happens to the content already present in a locale file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Keep existing entries whose key is not in the imported table.
    #[default]
    Update,
    /// Discard existing content.
    Truncate,
}

/// A locale file rewritten by [`write_back`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenLocaleFile {
    pub locale: LocaleId,
    pub path: PathBuf,
    /// Lines written.
    pub entries: usize,
    /// Entries kept from the previous content (update mode only).
    pub preserved: usize,
}

/// Write one file per populated locale under `destination_dir/<locale>/`.
///
/// The locales are the union of the locales holding a value anywhere in
/// `table`. Each file is opened once, merged with its own content in update
/// mode, then truncated and rewritten sorted by key. A failure aborts the
/// remaining locales; files already written stay written.
pub fn write_back(
    table: &mut TranslationTable,
    destination_dir: &Path,
    file_name: &str,
    mode: WriteMode,
) -> Result<Vec<WrittenLocaleFile>> {
    let locales: Vec<LocaleId> = table
        .populated_locales()
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut written = Vec::with_capacity(locales.len());
    for locale in locales {
        let mut handle = LocaleFileHandle::open(destination_dir, locale, file_name)?;
        let preserved = match mode {
            WriteMode::Update => handle.merge_existing(table)?,
            WriteMode::Truncate => 0,
        };
        let entries = handle.rewrite(table)?;
        written.push(handle.finish(entries, preserved));
    }

    Ok(written)
}

/// An open per-locale destination file.
///
/// Held across the read-merge and the rewrite of one locale, closed on drop.
struct LocaleFileHandle {
    locale: LocaleId,
    path: PathBuf,
    file: File,
}

impl LocaleFileHandle {
    fn open(destination_dir: &Path, locale: LocaleId, file_name: &str) -> Result<Self> {
        let dir = destination_dir.join(&locale);
        if !dir.is_dir() {
            fs::create_dir(&dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }

        let path = dir.join(file_name);
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .with_context(|| format!("The file {} could not be opened", path.display()))?;

        Ok(Self { locale, path, file })
    }

    /// Copy existing entries missing from `table` into it for this locale.
    fn merge_existing(&mut self, table: &mut TranslationTable) -> Result<usize> {
        let rows = read_locale_rows(&mut self.file)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let mut preserved = 0;
        for row in &rows {
            if table.insert_if_missing(&row.key, &self.locale, &row.value) {
                preserved += 1;
            }
        }
        Ok(preserved)
    }

    /// Replace the file content with this locale's column of `table`.
    fn rewrite(&mut self, table: &TranslationTable) -> Result<usize> {
        let content = render_locale_rows(table.column(&self.locale))?;

        let replace = |file: &mut File| -> io::Result<()> {
            file.set_len(0)?;
            file.seek(SeekFrom::Start(0))?;
            file.write_all(content.as_bytes())?;
            file.flush()
        };
        replace(&mut self.file)
            .with_context(|| format!("Failed to write file: {}", self.path.display()))?;

        Ok(table.column_len(&self.locale))
    }

    fn finish(self, entries: usize, preserved: usize) -> WrittenLocaleFile {
        WrittenLocaleFile {
            locale: self.locale,
            path: self.path,
            entries,
            preserved,
        }
    }
}
