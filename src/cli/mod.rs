//! Command-line interface layer.
//!
//! Parses arguments, runs the requested command and prints its report.
//! Library users can call the pipelines in `export` and `import` directly.

use std::process::ExitCode;

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;
mod run;
mod warnings;

pub use args::{Arguments, Command, CommonArgs, ExportArgs, ImportArgs};
pub use commands::{CommandResult, CommandSummary, ExportSummary, ImportSummary, InitSummary};
pub use exit_status::ExitStatus;
pub use warnings::WarningSink;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let mut result = run::run(args)?;
    report::print(&mut result, verbose);

    Ok(exit_status_from_result(&result).into())
}

fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    match &result.summary {
        CommandSummary::Init(summary) if !summary.created => ExitStatus::Failure,
        _ => ExitStatus::Success,
    }
}
