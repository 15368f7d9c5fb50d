//! Collection and printing of warnings raised while a command runs.

use std::io::{self, Write};

use colored::Colorize;

use crate::issues::Warning;

/// Collects warnings and prints them unless silenced.
///
/// Commands flush the sink at the point where warnings should appear, e.g.
/// import prints header warnings before touching any locale file. Whatever is
/// still pending is flushed by the reporter before the result line.
#[derive(Debug, Default)]
pub struct WarningSink {
    silent: bool,
    pending: Vec<Warning>,
    total: usize,
}

impl WarningSink {
    pub fn new(silent: bool) -> Self {
        Self {
            silent,
            ..Default::default()
        }
    }

    pub fn push(&mut self, warning: Warning) {
        self.pending.push(warning);
        self.total += 1;
    }

    pub fn extend(&mut self, warnings: impl IntoIterator<Item = Warning>) {
        for warning in warnings {
            self.push(warning);
        }
    }

    /// Number of warnings raised so far, printed or not.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Print pending warnings to stderr.
    pub fn flush(&mut self) {
        self.flush_to(&mut io::stderr().lock());
    }

    /// Print pending warnings to a custom writer.
    pub fn flush_to<W: Write>(&mut self, writer: &mut W) {
        let pending = std::mem::take(&mut self.pending);
        if self.silent {
            return;
        }
        for warning in pending {
            writeln!(writer, "{}: {}", "warning".bold().yellow(), warning).ok();
        }
    }
}
