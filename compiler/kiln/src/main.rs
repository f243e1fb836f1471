//! The kiln driver binary
//!
//! Parses the command line, then loads every input file in order and reports
//! on it. A missing input list or an unreadable file ends the run with exit
//! status 1.
#![allow(unknown_lints)] // in case you use non-nightly clippy
#![warn(
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    clippy::missing_docs_in_private_items,
    missing_docs,
    clippy::as_conversions,
    clippy::dbg_macro,
    clippy::else_if_without_else,
    clippy::format_push_string,
    clippy::if_then_some_else_none,
    clippy::let_underscore_must_use,
    clippy::todo,
    clippy::undocumented_unsafe_blocks,
    clippy::unimplemented,
    clippy::wildcard_enum_match_arm,
    let_underscore_drop,
    macro_use_extern_crate,
    missing_debug_implementations,
    unused_qualifications,
    clippy::unwrap_used
)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

use kiln::{args, build_info, context::SourceContext, ice};
use kiln_diagnostics::{DiagPrinter, DiagType};

fn main() -> anyhow::Result<()> {
    ice::setup_panic_hook();

    let args = args::parse()?;

    let driver = DiagPrinter::new(args.verbose, args.use_colors, String::new());
    for line in build_info::version().lines() {
        driver.emit(DiagType::Debug, line);
    }
    driver.emit(
        DiagType::Debug,
        &format!("output path: `{}`", args.output_path),
    );

    for path in &args.input_paths {
        let printer = DiagPrinter::new(args.verbose, args.use_colors, path.clone());
        match SourceContext::load(printer.clone()) {
            Ok(ctx) => ctx.print_info(),
            Err(err) => {
                if printer.emit(DiagType::Error, &format!("{err:#}")) {
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
