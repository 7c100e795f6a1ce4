//! Per-level line sinks
//!
//! Each sink is bound at construction to a prefix and a target. All four
//! sinks of one logger share the same destination behind a mutex, so
//! concurrent callers cannot interleave lines.

use crate::core::{Result, Severity};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Destination stream shared by the sinks of one logger.
pub type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Where a sink sends its lines.
pub enum SinkTarget {
    /// Write lines to the shared destination stream.
    Stream(SharedWriter),
    /// Accept lines and drop them. Used to suppress debug output cheaply.
    Discard,
}

/// A line sink bound to one severity's prefix.
///
/// The prefix is the literal `"<LEVELWORD> " + name`: a trailing space after
/// the level word and no separator between the name and the message. Every
/// written line is terminated with a newline.
pub struct LineSink {
    prefix: String,
    target: SinkTarget,
}

impl LineSink {
    pub fn new(level: Severity, name: &str, target: SinkTarget) -> Self {
        Self {
            prefix: format!("{} {}", level.to_str(), name),
            target,
        }
    }

    /// Whether this sink drops everything written to it.
    pub fn is_discard(&self) -> bool {
        matches!(self.target, SinkTarget::Discard)
    }

    /// Write one prefixed, newline-terminated line to the target.
    ///
    /// The line is assembled before the lock is taken and written with a
    /// single `write_all`, so lines from concurrent callers never interleave.
    pub fn write_line(&self, message: &str) -> Result<()> {
        let SinkTarget::Stream(ref writer) = self.target else {
            return Ok(());
        };

        let mut line = String::with_capacity(self.prefix.len() + message.len() + 1);
        line.push_str(&self.prefix);
        line.push_str(message);
        line.push('\n');

        let mut guard = writer.lock();
        guard.write_all(line.as_bytes())?;
        guard.flush()?;
        Ok(())
    }
}
