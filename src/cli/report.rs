//! Report formatting and printing utilities.
//!
//! Separate from the pipelines so they can be used as a library without
//! printing side effects.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, ExportSummary, ImportSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::import::WriteMode;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print pending warnings, then the command's result.
pub fn print(result: &mut CommandResult, verbose: bool) {
    result.warnings.flush();

    let mut out = io::stdout().lock();
    match &result.summary {
        CommandSummary::Export(summary) => print_export(summary, verbose, &mut out),
        CommandSummary::Import(summary) => print_import(summary, verbose, &mut out),
        CommandSummary::Init(summary) => print_init(summary),
    }

    if verbose && result.warnings.is_silent() && result.warnings.total() > 0 {
        let total = result.warnings.total();
        eprintln!(
            "{} {} {} suppressed by {}",
            "note:".bold(),
            total,
            plural(total, "warning", "warnings"),
            "--silent".cyan()
        );
    }
}

fn print_export<W: Write>(summary: &ExportSummary, verbose: bool, writer: &mut W) {
    if verbose {
        for source in &summary.sources {
            let _ = writeln!(writer, "  {} {}", "read".dimmed(), source.display());
        }
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Exported {} {} for {} {} to {}",
            summary.key_count,
            plural(summary.key_count, "key", "keys"),
            summary.locale_count,
            plural(summary.locale_count, "locale", "locales"),
            summary.destination.display()
        )
        .green()
    );

    if summary.untranslated > 0 {
        let _ = writeln!(
            writer,
            "  {} {} {} defaulted to {} key",
            "=".blue(),
            summary.untranslated,
            plural(
                summary.untranslated,
                "missing translation",
                "missing translations"
            ),
            plural(summary.untranslated, "its", "their"),
        );
    }
}

fn print_import<W: Write>(summary: &ImportSummary, verbose: bool, writer: &mut W) {
    if verbose {
        for file in &summary.files {
            let _ = writeln!(
                writer,
                "  {} {} ({} {}, {} preserved)",
                "wrote".dimmed(),
                file.path.display(),
                file.entries,
                plural(file.entries, "entry", "entries"),
                file.preserved
            );
        }
    }

    let mode = match summary.mode {
        WriteMode::Update => "update",
        WriteMode::Truncate => "truncate",
    };
    let file_count = summary.files.len();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Imported {} {} from {} into {} locale {} ({} mode)",
            summary.key_count,
            plural(summary.key_count, "key", "keys"),
            summary.source.display(),
            file_count,
            plural(file_count, "file", "files"),
            mode
        )
        .green()
    );
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!(
            "{} {} already exists",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
