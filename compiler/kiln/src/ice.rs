//! Internal compiler error handling (ICE handling) for the kiln driver
//!
//! Any panic in the driver is a bug in kiln, never a problem with the user's
//! command line or sources. The hook installed here says so, and prints the
//! build and command line details needed to reproduce it.

use std::panic::PanicHookInfo;

use crate::build_info;

/// Builds the report printed before the default panic message
///
/// # Arguments
///
/// * `version` - The build version block from [`build_info::version`].
/// * `command_line` - The process arguments joined by spaces.
#[must_use]
pub fn ice_header(version: &str, command_line: &str) -> Vec<String> {
    let mut lines = vec![
        "error: internal compiler error encountered: thread panicked".to_string(),
        "note: this is not your fault! this is ALWAYS a kiln bug.".to_string(),
        "note: please file a bug report with the details below".to_string(),
        String::new(),
    ];
    lines.extend(version.lines().map(|line| format!("note: {line}")));
    lines.push(String::new());
    lines.push(format!("note: command line arguments: {command_line}"));
    lines.push(String::new());
    lines
}

/// Handles panics and generates the ICE screen
fn ice_hook(
    default_panic_hook: &'static (dyn Fn(&PanicHookInfo<'_>) + Send + Sync),
    panic_info: &PanicHookInfo,
) {
    let command_line = std::env::args().collect::<Vec<_>>().join(" ");
    for line in ice_header(&build_info::version(), &command_line) {
        eprintln!("{line}");
    }
    default_panic_hook(panic_info);
    eprintln!();
    eprintln!("error: end internal compiler error. aborting.");
}

/// Configures the global panic (ICE) hook
///
/// Also forces `RUST_BACKTRACE=1` unless the user already asked for `full`.
pub fn setup_panic_hook() {
    // The panic hook API wants a 'static reference to the previous hook. It
    // lives for the rest of the process anyway.
    let default_panic_hook: &'static _ = Box::leak(std::panic::take_hook());

    std::panic::set_hook(Box::new(move |panic_info| {
        ice_hook(default_panic_hook, panic_info);
    }));

    if std::env::var("RUST_BACKTRACE").ok().as_deref() != Some("full") {
        // called first thing in main, before any other thread exists
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
