//! Errors raised while concatenating sources.

use std::io;

/// Errors that can occur while reading sources or writing output.
///
/// `Open` and `Read` are per-source and never stop the run; `Write` is fatal.
#[derive(Debug, thiserror::Error)]
pub enum CatError {
    #[error("{name}: {}", system_reason(.source))]
    Open { name: String, source: io::Error },

    #[error("{name}: {}", system_reason(.source))]
    Read { name: String, source: io::Error },

    #[error("write error: {}", system_reason(.0))]
    Write(#[source] io::Error),
}

impl CatError {
    /// Whether the error ends the whole run rather than a single source.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Write(_))
    }

    /// Whether output stopped because the reading end of a pipe went away.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }

    /// Process exit code when this error ends the run.
    ///
    /// A reader closing the pipe early is a normal way to stop and exits 0.
    pub fn exit_code(&self) -> u8 {
        if self.is_broken_pipe() {
            0
        } else {
            1
        }
    }
}

/// The OS message for an I/O error, without the ` (os error N)` suffix
/// that `io::Error`'s `Display` appends.
pub fn system_reason(err: &io::Error) -> String {
    let message = err.to_string();
    match message.find(" (os error ") {
        Some(idx) => message[..idx].to_string(),
        None => message,
    }
}
