//! Per-file diagnostic printer
//!
//! A [`DiagPrinter`] is configured once from the parsed command line and
//! carries the settings that decide how a diagnostic looks: whether debug
//! output is shown and whether labels are painted.

use crate::DiagType;

/// Formats and writes diagnostics for a single input file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagPrinter {
    /// Whether debug diagnostics and the info block are shown
    verbose: bool,
    /// Whether labels are painted with ANSI escapes
    use_colors: bool,
    /// The input file this printer reports on
    file_path: String,
}

impl DiagPrinter {
    /// Creates a printer for `file_path`
    #[must_use]
    pub const fn new(verbose: bool, use_colors: bool, file_path: String) -> Self {
        Self {
            verbose,
            use_colors,
            file_path,
        }
    }

    /// The input file this printer reports on
    #[must_use]
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// The lines printed by [`Self::print_info`]. Empty unless verbose.
    #[must_use]
    pub fn info_lines(&self) -> Vec<String> {
        if !self.verbose {
            return Vec::new();
        }

        vec![
            format!("Verbose: {}", self.verbose),
            format!("Using colors: {}", self.use_colors),
            format!("Path: {}", self.file_path),
        ]
    }

    /// Prints the printer's configuration to stdout in verbose mode
    pub fn print_info(&self) {
        for line in self.info_lines() {
            println!("{line}");
        }
    }

    /// Renders a diagnostic as `label: message`
    ///
    /// Returns [`None`] for [`DiagType::Debug`] when the printer is not
    /// verbose.
    #[must_use]
    pub fn format(&self, kind: DiagType, message: &str) -> Option<String> {
        if kind == DiagType::Debug && !self.verbose {
            return None;
        }

        let label = kind.to_string();
        Some(if self.use_colors {
            format!("{}: {message}", kind.style().paint(label))
        } else {
            format!("{label}: {message}")
        })
    }

    /// Writes a diagnostic to stderr
    ///
    /// Returns whether `kind` is fatal (see [`DiagType::is_fatal`]). The
    /// printer never stops the process itself; that is up to the caller.
    pub fn emit(&self, kind: DiagType, message: &str) -> bool {
        if let Some(line) = self.format(kind, message) {
            eprintln!("{line}");
        }
        kind.is_fatal()
    }
}
