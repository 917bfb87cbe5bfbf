//! A capturing `log` backend for unit tests.
//!
//! Records are kept per thread, so tests running in parallel only see their own entries.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLog {
    pub level: Level,
    pub message: String,
}

thread_local! {
    static CAPTURED: RefCell<Vec<CapturedLog>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let entry = CapturedLog {
            level: record.level(),
            message: record.args().to_string(),
        };
        CAPTURED.with(|logs| logs.borrow_mut().push(entry));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Installs the capturing logger (once per test binary) and clears this thread's entries.
pub fn capture_logs() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).ok();
        log::set_max_level(LevelFilter::Trace);
    });
    CAPTURED.with(|logs| logs.borrow_mut().clear());
}

/// Entries logged on this thread since the last `capture_logs`.
pub fn captured_logs() -> Vec<CapturedLog> {
    CAPTURED.with(|logs| logs.borrow().clone())
}
