use std::path::PathBuf;

use super::super::warnings::WarningSink;
use crate::import::{WriteMode, WrittenLocaleFile};

#[derive(Debug)]
pub enum CommandSummary {
    Export(ExportSummary),
    Import(ImportSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExportSummary {
    pub destination: PathBuf,
    pub sources: Vec<PathBuf>,
    pub locale_count: usize,
    pub key_count: usize,
    /// Cells filled with their key because the translation was missing.
    pub untranslated: usize,
}

#[derive(Debug)]
pub struct ImportSummary {
    pub source: PathBuf,
    pub key_count: usize,
    pub mode: WriteMode,
    pub files: Vec<WrittenLocaleFile>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a labelsync command.
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Warnings raised during the run; pending ones are printed by the reporter.
    pub warnings: WarningSink,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, warnings: WarningSink) -> Self {
        Self { summary, warnings }
    }
}
