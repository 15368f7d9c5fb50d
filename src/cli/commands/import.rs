use std::path::Path;

use anyhow::{Context, Result, bail};

use super::super::args::ImportArgs;
use super::context::RunContext;
use super::{CommandResult, CommandSummary, ImportSummary};
use crate::import::{WriteMode, parse_wide_file, write_back};

pub fn import(args: ImportArgs) -> Result<CommandResult> {
    let mut ctx = RunContext::new(&args.common)?;

    let file_name = check_input_file(&args.file)?;
    if !args.destination.is_dir() {
        bail!(
            "The destination dir '{}' could not be found.",
            args.destination.display()
        );
    }

    let locales = ctx.resolve_locales(&args.destination)?;
    let parsed = parse_wide_file(&args.file, &locales)?;
    ctx.warnings.extend(parsed.warnings);
    // Header problems are reported before any locale file is touched.
    ctx.warnings.flush();

    let mode = if args.truncate {
        WriteMode::Truncate
    } else {
        WriteMode::Update
    };
    let mut table = parsed.table;
    let key_count = table.len();
    let files = write_back(&mut table, &args.destination, file_name, mode)?;

    Ok(CommandResult::new(
        CommandSummary::Import(ImportSummary {
            source: args.file.clone(),
            key_count,
            mode,
            files,
        }),
        ctx.warnings,
    ))
}

/// The import file must be an existing `.csv` file. Returns its file name.
fn check_input_file(file: &Path) -> Result<&str> {
    if file.extension().and_then(|ext| ext.to_str()) != Some("csv") {
        bail!("The file should be in the CSV format.");
    }
    if !file.is_file() {
        bail!("The file \"{}\" could not be found.", file.display());
    }

    file.file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Invalid file name: {}", file.display()))
}
