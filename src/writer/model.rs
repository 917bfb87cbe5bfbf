use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// A validated request: where to write and what to embed in the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub path: PathBuf,
    pub content: OsString,
}

impl Invocation {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<OsString>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &OsStr {
        &self.content
    }

    /// The exact bytes written to the destination: `Writing {content} to {path}`.
    /// Arguments are copied verbatim, so non-UTF-8 input survives untouched.
    pub fn message(&self) -> Vec<u8> {
        let content = self.content.as_bytes();
        let path = self.path.as_os_str().as_bytes();

        let mut buf = Vec::with_capacity(content.len() + path.len() + 12);
        buf.extend_from_slice(b"Writing ");
        buf.extend_from_slice(content);
        buf.extend_from_slice(b" to ");
        buf.extend_from_slice(path);
        buf
    }
}

/// Outcome of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub path: PathBuf,
    pub bytes_written: usize,
}
