//! Per-file driver state

use std::path::Path;

use anyhow::Context as _;
use kiln_diagnostics::{DiagPrinter, DiagType};

use crate::io;

/// A loaded input file together with the printer that reports on it
#[derive(Debug)]
pub struct SourceContext {
    /// Reports diagnostics for this file
    printer: DiagPrinter,
    /// The file's full contents
    source: String,
}

impl SourceContext {
    /// Reads the file named by `printer` and wraps it in a context
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read.
    pub fn load(printer: DiagPrinter) -> anyhow::Result<Self> {
        let source = io::read_source(Path::new(printer.file_path()))
            .with_context(|| format!("failed to read `{}`", printer.file_path()))?;

        Ok(Self::new(printer, source))
    }

    /// Wraps already loaded contents
    #[must_use]
    pub const fn new(printer: DiagPrinter, source: String) -> Self {
        Self { printer, source }
    }

    /// One-line summary of what was loaded
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "loaded {} bytes ({} lines) from `{}`",
            self.source.len(),
            self.source.lines().count(),
            self.printer.file_path()
        )
    }

    /// Prints the printer's info block, then the load summary as a debug
    /// diagnostic. Both are silent outside verbose mode.
    pub fn print_info(&self) {
        self.printer.print_info();
        self.printer.emit(DiagType::Debug, &self.summary());
    }
}
