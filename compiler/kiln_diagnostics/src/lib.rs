#![doc=include_str!("../README.md")]
#![warn(
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    clippy::missing_docs_in_private_items,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

mod printer;

pub use printer::DiagPrinter;

use ansi_term::{Color, Style};
use derive_more::Display;

/// The kind of a diagnostic emitted by the kiln driver.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum DiagType {
    /// Internal compiler error. Never the user's fault.
    #[display("internal compiler error")]
    Ice,
    /// Error. The driver will not continue.
    #[display("error")]
    Error,
    /// Something suspicious that does not stop the driver.
    #[display("warning")]
    Warning,
    /// Additional context attached to another diagnostic.
    #[display("note")]
    Note,
    /// General progress information.
    #[display("info")]
    Info,
    /// Only shown in verbose mode.
    #[display("debug")]
    Debug,
}

impl DiagType {
    /// The terminal style used to paint this kind's label
    #[must_use]
    pub fn style(self) -> Style {
        match self {
            Self::Ice | Self::Error => Color::Red.bold(),
            Self::Warning => Color::Purple.bold(),
            Self::Note | Self::Info => Color::Cyan.bold(),
            Self::Debug => Color::Green.bold(),
        }
    }

    /// Whether a diagnostic of this kind should stop the driver
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::Ice | Self::Error)
    }
}
