//! Build information module

use std::fmt::Write as FmtWrite;

#[doc(hidden)]
#[allow(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::restriction,
    dead_code
)]
pub mod build {
    include!(concat!(env!("OUT_DIR"), "/shadow.rs"));
}

/// Returns the multi-line block describing this build of kiln
///
/// The first line names the version, commit and target; the following lines
/// name the toolchain and, for dirty checkouts, the modified files.
#[must_use]
pub fn version() -> String {
    format!(
        concat!(
            "{kiln} version {version} ({commit}, {taint_string}) built for {target} on {time}",
            " ({mode} mode)",
            "\n{rust_version} ({rust_channel} on {build_os})\n",
            "{cargo_version}{taint_extra}"
        ),
        kiln = build::PROJECT_NAME,
        version = build::PKG_VERSION,
        commit = if build::COMMIT_HASH.is_empty() {
            "unknown commit"
        } else {
            build::COMMIT_HASH
        },
        taint_string = if build::GIT_CLEAN {
            "not tainted"
        } else {
            "tainted!"
        },
        target = build::BUILD_TARGET,
        time = build::BUILD_TIME_3339,
        mode = build::BUILD_RUST_CHANNEL,
        rust_version = build::RUST_VERSION,
        rust_channel = build::RUST_CHANNEL,
        build_os = build::BUILD_OS,
        cargo_version = build::CARGO_VERSION,
        taint_extra = tainted_files(build::GIT_CLEAN, build::GIT_STATUS_FILE),
    )
}

/// Lists dirty files from shadow-rs' git status, one per line
fn tainted_files(clean: bool, status: &str) -> String {
    if clean {
        return String::new();
    }

    format!(
        "\ntainted files:{}",
        status.lines().fold(String::new(), |mut output, line| {
            write!(output, "\n{}", {
                line.strip_suffix(" (dirty)")
                    .or_else(|| line.strip_suffix(" (staged)"))
                    .unwrap_or(line)
            })
            .expect("writing to a string should succeed");
            output
        })
    )
}
