use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use super::super::args::ExportArgs;
use super::context::RunContext;
use super::{CommandResult, CommandSummary, ExportSummary};
use crate::export::{build_export_table, read_sources, serialize_export};

pub fn export(args: ExportArgs) -> Result<CommandResult> {
    let mut ctx = RunContext::new(&args.common)?;

    let destination = args
        .destination
        .clone()
        .unwrap_or_else(|| Path::new(".").join(&args.file));
    check_destination(&destination)?;

    if !args.source.is_dir() {
        bail!(
            "The source dir '{}' could not be found.",
            args.source.display()
        );
    }

    let locales = ctx.resolve_locales(&args.source)?;
    let rows_by_locale = read_sources(&args.source, &args.file, &locales)?;
    let table = build_export_table(&locales, &rows_by_locale);
    let output = serialize_export(&table, &locales, &ctx.config.code_header)?;

    fs::write(&destination, &output.text)
        .with_context(|| format!("Failed to write file: {}", destination.display()))?;

    let sources: Vec<PathBuf> = locales
        .iter()
        .map(|locale| args.source.join(locale).join(&args.file))
        .collect();

    Ok(CommandResult::new(
        CommandSummary::Export(ExportSummary {
            destination,
            sources,
            locale_count: locales.len(),
            key_count: output.key_count,
            untranslated: output.untranslated,
        }),
        ctx.warnings,
    ))
}

/// Fail early when the export file cannot be written, before reading anything.
fn check_destination(destination: &Path) -> Result<()> {
    if destination.is_dir() {
        bail!(
            "The destination file ({}) is a directory.",
            destination.display()
        );
    }

    if destination.is_file() {
        let metadata = fs::metadata(destination)
            .with_context(|| format!("Failed to read {}", destination.display()))?;
        if metadata.permissions().readonly() {
            bail!(
                "The destination file ({}) is not writable!",
                destination.display()
            );
        }
        return Ok(());
    }

    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        bail!(
            "The destination file ({}) is not writable: directory '{}' does not exist.",
            destination.display(),
            parent.display()
        );
    }

    Ok(())
}
