//! # writer
//!
//! Writes `Writing <content> to <path>` into `<path>` and reports to the system log.
//!
//! ```text
//! writer <path/to/filename> <string>
//! ```
//!
//! ## Layers
//!
//! - The binary (`main.rs`, `args.rs`) parses the argument vector, prints the usage
//!   text and owns the exit status. It is the only place that touches stderr.
//! - [`commands`] validates the arguments and performs the write. Failures are logged
//!   where they are detected and returned as [`error::WriterError`].
//! - [`syslog`] is the `log` backend; everything else logs through the `log` macros.
//!
//! Both failure kinds exit with status 1.
//!
//! ## Module Overview
//!
//! - [`commands`]: argument validation and the file write
//! - [`model`]: `Invocation` and the message format
//! - [`config`]: settings resolved from the environment
//! - [`syslog`]: system log backend
//! - [`error`]: error types

pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod syslog;

#[cfg(test)]
pub(crate) mod test_utils;
