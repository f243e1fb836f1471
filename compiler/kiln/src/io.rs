//! Reading kiln source files
//!
//! An input path of `-` reads from standard input; anything else is opened as
//! a regular file.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

/// Opens the input at `path` and returns a reader over it
///
/// # Errors
///
/// If the file cannot be opened, an error is returned.
pub fn open_input(path: &Path) -> Result<Box<dyn Read>, io::Error> {
    Ok(if path.as_os_str() == "-" {
        Box::new(io::stdin())
    } else {
        Box::new(fs::File::open(path)?)
    })
}

/// Reads the whole input at `path` into a string
///
/// # Errors
///
/// If the file cannot be opened or is not valid UTF-8, an error is returned.
pub fn read_source(path: &Path) -> Result<String, io::Error> {
    let mut content = String::new();
    open_input(path)?.read_to_string(&mut content)?;
    Ok(content)
}
