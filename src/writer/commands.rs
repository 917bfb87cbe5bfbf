//! The two operations behind the binary: argument validation and the write itself.
//!
//! Failures are logged here, where they are detected. Nothing in this module prints
//! to the terminal or exits the process; that is left to `main.rs`.

use crate::error::{Result, WriterError};
use crate::model::{Invocation, WriteReport};
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::Write;

/// Number of positional arguments the tool accepts after the program name.
pub const EXPECTED_ARGS: usize = 2;

/// Checks that exactly a path and a content string were given.
///
/// `positionals` excludes the program name.
pub fn validate(positionals: Vec<OsString>) -> Result<Invocation> {
    let [path, content]: [OsString; EXPECTED_ARGS] =
        positionals.try_into().map_err(|rejected: Vec<OsString>| {
            let argc = rejected.len() + 1;
            log::error!("Invalid no. of arguments, argc = {}", argc);
            WriterError::InvalidArgumentCount { argc }
        })?;

    Ok(Invocation::new(path, content))
}

/// Creates or truncates the destination and writes the message into it.
///
/// The handle is dropped, and so closed, before this returns on every path.
pub fn write_file(invocation: &Invocation) -> Result<WriteReport> {
    let path = invocation.path();

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| {
            log::error!("File {} could not be opened in write mode.", path.display());
            WriterError::FileOpenFailure {
                path: path.to_path_buf(),
                source,
            }
        })?;

    log::debug!(
        "Writing {} to {}",
        invocation.content().to_string_lossy(),
        path.display()
    );

    let message = invocation.message();
    file.write_all(&message).map_err(|source| {
        log::error!("Write to {} failed: {}", path.display(), source);
        WriterError::WriteFailure {
            path: path.to_path_buf(),
            source,
        }
    })?;

    Ok(WriteReport {
        path: path.to_path_buf(),
        bytes_written: message.len(),
    })
}

/// Validates and writes in one step.
pub fn run(positionals: Vec<OsString>) -> Result<WriteReport> {
    let invocation = validate(positionals)?;
    write_file(&invocation)
}
