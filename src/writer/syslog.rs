//! A `log` backend that forwards records to the system log.
//!
//! The log is opened once with the `LOG_USER` facility and no custom identifier,
//! so the C library tags entries with the program name.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::ffi::{CStr, CString};

const FORMAT: &CStr = c"%s";

pub struct SysLogger {
    level: LevelFilter,
}

impl SysLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Opens the system log and installs a `SysLogger` as the global logger.
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        // SAFETY: a null ident asks libc for its default; no pointer is retained.
        unsafe { libc::openlog(std::ptr::null(), 0, libc::LOG_USER) };

        log::set_boxed_logger(Box::new(Self::new(level)))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for SysLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = to_c_message(&record.args().to_string());
        // SAFETY: both pointers are valid NUL-terminated strings for the call's duration,
        // and the "%s" format consumes exactly one string argument.
        unsafe {
            libc::syslog(priority(record.level()), FORMAT.as_ptr(), message.as_ptr());
        }
    }

    fn flush(&self) {}
}

/// Maps a `log` level to its syslog priority.
pub fn priority(level: Level) -> libc::c_int {
    match level {
        Level::Error => libc::LOG_ERR,
        Level::Warn => libc::LOG_WARNING,
        Level::Info => libc::LOG_INFO,
        Level::Debug | Level::Trace => libc::LOG_DEBUG,
    }
}

fn to_c_message(message: &str) -> CString {
    let bytes: Vec<u8> = message.bytes().filter(|b| *b != 0).collect();
    CString::new(bytes).unwrap_or_default()
}
