//! Defines the kiln command line interface
//!
//! [`Cli`] is the schema clap parses into. It is turned into a
//! [`ParsedArguments`] record once the input list has been checked, and that
//! record is all the rest of the driver ever sees of the command line.

use std::ffi::OsString;

use clap::{builder::NonEmptyStringValueParser, Parser};
use derive_more::Display;
use thiserror::Error;

/// Output path used when `-o` is not given
pub const DEFAULT_OUTPUT_PATH: &str = "a.out";

/// The kiln compiler driver
#[derive(Parser, Debug)]
#[command(name = "kiln", version)]
pub struct Cli {
    /// The files whose contents should be compiled
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Enable verbose printing
    #[arg(short = 'v')]
    pub verbose: bool,

    /// The path of the file to write the output to
    #[arg(short = 'o', value_name = "PATH", value_parser = NonEmptyStringValueParser::new())]
    #[clap(default_value = DEFAULT_OUTPUT_PATH)]
    pub out_file: String,

    /// When to use colors in diagnostics
    #[arg(long)]
    #[clap(default_value_t = ColorMode::Always)]
    pub color: ColorMode,
}

/// The accepted values of `--color`
#[derive(Debug, Clone, Copy, clap::ValueEnum, PartialEq, Eq, Display)]
pub enum ColorMode {
    /// Always paint diagnostics
    #[display("always")]
    Always,
    /// Never paint diagnostics
    #[display("never")]
    Never,
    /// Leave the choice to the driver. Currently the same as `never`.
    #[display("default")]
    Default,
}

impl ColorMode {
    /// Only [`ColorMode::Always`] turns colors on
    #[must_use]
    pub const fn enables_color(self) -> bool {
        matches!(self, Self::Always)
    }
}

/// The driver's view of the command line
///
/// Owns everything it holds and is never mutated after [`parse`] or
/// [`parse_from`] returns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArguments {
    /// Whether verbose diagnostic output was requested
    pub verbose: bool,
    /// Whether diagnostics should be painted
    pub use_colors: bool,
    /// Where compiled output goes. Never empty.
    pub output_path: String,
    /// The input files, in command line order. Never empty.
    pub input_paths: Vec<String>,
}

/// Why the command line could not be turned into [`ParsedArguments`]
#[derive(Debug, Error)]
pub enum ArgsError {
    /// The command line does not fit the schema. Also carries `--help` and
    /// `--version` requests, which clap reports as errors.
    #[error(transparent)]
    Schema(#[from] clap::Error),

    /// The schema accepted the command line but no input file was named
    #[error("no input file paths provided")]
    MissingInput,
}

impl TryFrom<Cli> for ParsedArguments {
    type Error = ArgsError;

    // The positional is optional in the schema; this is the only place the
    // "at least one input" rule is enforced.
    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.files.is_empty() {
            return Err(ArgsError::MissingInput);
        }

        Ok(Self {
            verbose: cli.verbose,
            use_colors: cli.color.enables_color(),
            output_path: cli.out_file,
            input_paths: cli.files,
        })
    }
}

/// Parses the process arguments
///
/// Schema violations, `--help` and `--version` are handled by clap, which
/// prints and exits the process on its own.
///
/// # Errors
///
/// Returns [`ArgsError::MissingInput`] if no input file was given.
pub fn parse() -> Result<ParsedArguments, ArgsError> {
    ParsedArguments::try_from(Cli::parse())
}

/// Parses an explicit argument vector. The first item is the program name.
///
/// # Errors
///
/// Returns [`ArgsError::Schema`] if clap rejects `argv`, and
/// [`ArgsError::MissingInput`] if no input file was given.
pub fn parse_from<I, T>(argv: I) -> Result<ParsedArguments, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    ParsedArguments::try_from(Cli::try_parse_from(argv)?)
}
