//! Main logger implementation

use super::{
    metrics::LoggerMetrics,
    severity::Severity,
    sink::{LineSink, SharedWriter, SinkTarget},
};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use std::fmt::{self, Write as _};
use std::io;
use std::sync::Arc;

/// Process-wide logger slot.
///
/// Replacement is last-write-wins, but reads and writes are synchronized so
/// the slot is never observed torn.
static CURRENT: RwLock<Option<Arc<Logger>>> = RwLock::new(None);

/// A leveled logger with one line sink per severity.
///
/// Each sink writes lines prefixed with `"<SEVERITY> " + name` to the
/// destination supplied at construction. All four sinks share that
/// destination behind a mutex. When debug output is disabled, the debug
/// sink's target is a discarding sink and debug lines vanish without cost.
pub struct Logger {
    name: String,
    debug_enabled: bool,
    info_sink: LineSink,
    warning_sink: LineSink,
    error_sink: LineSink,
    debug_sink: LineSink,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Create a new logger with the given name and debug flag.
    ///
    /// The name is included in every line, allowing you to distinguish
    /// between logs from different parts of your application. If `debug_enabled`
    /// is false, debug-level lines are discarded.
    ///
    /// The destination is any `Write + Send` value: stdout, an open file, an
    /// in-memory buffer for tests, or `std::io::sink()` to discard everything.
    ///
    /// This is the dependency-injection form: it does not touch the
    /// process-wide instance. Use [`Logger::install`] for that.
    ///
    /// # Examples
    ///
    /// ```
    /// use level_logger::{Logger, Severity};
    ///
    /// // Log to the console:
    /// let logger = Logger::new("myapp", true, std::io::stdout());
    /// logger.print(Severity::Info, &[&"Hello, Info!"]);
    ///
    /// // Discard all logs (useful in testing):
    /// let logger = Logger::new("myapp", false, std::io::sink());
    /// ```
    pub fn new(name: &str, debug_enabled: bool, destination: impl io::Write + Send + 'static) -> Self {
        let shared: SharedWriter = Arc::new(Mutex::new(Box::new(destination)));

        let debug_target = if debug_enabled {
            SinkTarget::Stream(Arc::clone(&shared))
        } else {
            SinkTarget::Discard
        };

        Self {
            name: name.to_string(),
            debug_enabled,
            info_sink: LineSink::new(Severity::Info, name, SinkTarget::Stream(Arc::clone(&shared))),
            warning_sink: LineSink::new(
                Severity::Warning,
                name,
                SinkTarget::Stream(Arc::clone(&shared)),
            ),
            error_sink: LineSink::new(Severity::Error, name, SinkTarget::Stream(shared)),
            debug_sink: LineSink::new(Severity::Debug, name, debug_target),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Create a logger and install it as the process-wide instance,
    /// replacing any previously installed one.
    pub fn install(
        name: &str,
        debug_enabled: bool,
        destination: impl io::Write + Send + 'static,
    ) -> Arc<Self> {
        let logger = Arc::new(Self::new(name, debug_enabled, destination));
        *CURRENT.write() = Some(Arc::clone(&logger));
        logger
    }

    /// Return the process-wide logger.
    ///
    /// If none was installed, a default instance (name "unknown", debug
    /// enabled, writing to stdout) is created and cached first. Prefer
    /// constructing a logger at application start and passing it to
    /// consumers; this accessor exists as a transitional fallback.
    pub fn current() -> Arc<Self> {
        if let Some(logger) = CURRENT.read().as_ref() {
            return Arc::clone(logger);
        }

        let mut slot = CURRENT.write();
        // Re-check: another thread may have won the upgrade race.
        if let Some(logger) = slot.as_ref() {
            return Arc::clone(logger);
        }
        let logger = Arc::new(Self::new("unknown", true, io::stdout()));
        *slot = Some(Arc::clone(&logger));
        logger
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    /// Diagnostic counters for this logger
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    fn sink(&self, level: Severity) -> &LineSink {
        match level {
            Severity::Info => &self.info_sink,
            Severity::Warning => &self.warning_sink,
            Severity::Error => &self.error_sink,
            Severity::Debug => &self.debug_sink,
        }
    }

    /// Write `message` on the sink for `level`.
    ///
    /// Write failures are swallowed: they bump a metrics counter and nothing
    /// else. Logging never fails the caller.
    fn emit(&self, level: Severity, message: &str) {
        let sink = self.sink(level);
        if sink.is_discard() {
            self.metrics.record_suppressed();
            return;
        }
        match sink.write_line(message) {
            Ok(()) => {
                self.metrics.record_line();
            }
            Err(_) => {
                self.metrics.record_write_failure();
            }
        }
    }

    /// Emit the values concatenated with no separator as one line on the
    /// sink for `level`.
    pub fn print(&self, level: Severity, values: &[&dyn fmt::Display]) {
        let mut message = String::new();
        for value in values {
            let _ = write!(message, "{}", value);
        }
        self.emit(level, &message);
    }

    /// Emit the values joined with single spaces as one line on the sink
    /// for `level`.
    pub fn println(&self, level: Severity, values: &[&dyn fmt::Display]) {
        let mut message = String::new();
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                message.push(' ');
            }
            let _ = write!(message, "{}", value);
        }
        self.emit(level, &message);
    }

    /// KNOWN INCONSISTENCY, reproduced on purpose: this does not interpolate.
    ///
    /// The original passed the format string and the value slice straight to
    /// the print path as two positional arguments, so the emitted line is the
    /// literal format string followed by a bracketed rendering of the values,
    /// e.g. `printf(Info, "x={}", &[&1])` emits `... x={}[1]`. Callers that
    /// want interpolation should `format!` themselves and use [`Logger::print`].
    pub fn printf(&self, level: Severity, format: &str, values: &[&dyn fmt::Display]) {
        let mut message = String::from(format);
        message.push('[');
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                message.push(' ');
            }
            let _ = write!(message, "{}", value);
        }
        message.push(']');
        self.emit(level, &message);
    }

    /// Emit raw JSON bytes as a text line via [`Logger::println`].
    ///
    /// The bytes are reinterpreted as UTF-8 text; invalid sequences are
    /// replaced rather than rejected.
    pub fn print_json(&self, level: Severity, json: &[u8]) {
        let text = String::from_utf8_lossy(json);
        self.println(level, &[&text]);
    }

    /// Serialize `value` to compact JSON and emit it as a line.
    ///
    /// On serialization failure a diagnostic line is emitted at the same
    /// level, the failure is counted on the metrics, and the (empty) result
    /// is still written. Failure is never propagated to the caller.
    pub fn print_struct<T: Serialize + ?Sized>(&self, level: Severity, value: &T) {
        let payload = match serde_json::to_vec(value) {
            Ok(bytes) => bytes,
            Err(err) => {
                self.metrics.record_serialize_failure();
                self.printf(level, "logger print_struct: marshal failed with:", &[&err]);
                Vec::new()
            }
        };
        self.print_json(level, &payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::io::Write;

    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture_logger(name: &str, debug_enabled: bool) -> (Logger, Arc<Mutex<Vec<u8>>>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::new(name, debug_enabled, SharedBuffer(Arc::clone(&buffer)));
        (logger, buffer)
    }

    fn contents(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().clone()).unwrap()
    }

    #[test]
    fn test_print_concatenates_without_separator() {
        let (logger, buffer) = capture_logger("test", true);
        logger.print(Severity::Info, &[&"Hello, ", &"Info!"]);
        assert_eq!(contents(&buffer), "INFO testHello, Info!\n");
    }

    #[test]
    fn test_println_joins_with_spaces() {
        let (logger, buffer) = capture_logger("test", true);
        logger.println(Severity::Warning, &[&"retry", &3, &"of", &5]);
        assert_eq!(contents(&buffer), "WARNING testretry 3 of 5\n");
    }

    #[test]
    fn test_printf_does_not_interpolate() {
        let (logger, buffer) = capture_logger("test", true);
        logger.printf(Severity::Error, "code={}", &[&500]);
        assert_eq!(contents(&buffer), "ERROR testcode={}[500]\n");
    }

    #[test]
    fn test_debug_disabled_discards_and_counts() {
        let (logger, buffer) = capture_logger("test", false);
        logger.print(Severity::Debug, &[&"invisible"]);
        logger.print_json(Severity::Debug, b"{}");
        assert!(contents(&buffer).is_empty());
        assert_eq!(logger.metrics().suppressed(), 2);
        assert_eq!(logger.metrics().lines_written(), 0);
    }

    #[test]
    fn test_print_struct_failure_is_swallowed() {
        // serde_json cannot serialize maps with non-string keys
        use std::collections::BTreeMap;
        let mut bad = BTreeMap::new();
        bad.insert(vec![1u8], "value");

        let (logger, buffer) = capture_logger("test", true);
        logger.print_struct(Severity::Info, &bad);

        let content = contents(&buffer);
        assert!(content.contains("INFO testlogger print_struct: marshal failed with:"));
        assert_eq!(logger.metrics().serialize_failures(), 1);
        // The empty payload is still written as a bare prefixed line.
        assert!(content.ends_with("INFO test\n"));
    }

    #[test]
    fn test_write_failure_is_counted_not_raised() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "down"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let logger = Logger::new("test", true, FailingWriter);
        logger.print(Severity::Info, &[&"lost"]);
        assert_eq!(logger.metrics().write_failures(), 1);
        assert_eq!(logger.metrics().lines_written(), 0);
    }
}
