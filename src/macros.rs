//! Logging macros for ergonomic emission.
//!
//! These macros build the `&[&dyn Display]` value slice for you, so call
//! sites read like `println!`.
//!
//! # Examples
//!
//! ```
//! use level_logger::prelude::*;
//! use level_logger::{info, warning};
//!
//! let logger = Logger::new("myapp", true, std::io::sink());
//!
//! info!(logger, "Server started");
//! warning!(logger, "retry", 3, "of", 5);
//! ```

/// Emit values at an explicit severity, space-joined, as one line.
///
/// # Examples
///
/// ```
/// # use level_logger::prelude::*;
/// # let logger = Logger::new("myapp", true, std::io::sink());
/// use level_logger::logln;
/// logln!(logger, Severity::Info, "Simple message");
/// logln!(logger, Severity::Error, "Error code:", 500);
/// ```
#[macro_export]
macro_rules! logln {
    ($logger:expr, $level:expr, $($value:expr),+ $(,)?) => {
        $logger.println($level, &[$(&$value),+])
    };
}

/// Emit an info-level line.
///
/// # Examples
///
/// ```
/// # use level_logger::prelude::*;
/// # let logger = Logger::new("myapp", true, std::io::sink());
/// use level_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing", 100, "items");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::logln!($logger, $crate::Severity::Info, $($value),+)
    };
}

/// Emit a warning-level line.
///
/// # Examples
///
/// ```
/// # use level_logger::prelude::*;
/// # let logger = Logger::new("myapp", true, std::io::sink());
/// use level_logger::warning;
/// warning!(logger, "Low disk space");
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::logln!($logger, $crate::Severity::Warning, $($value),+)
    };
}

/// Emit an error-level line.
///
/// # Examples
///
/// ```
/// # use level_logger::prelude::*;
/// # let logger = Logger::new("myapp", true, std::io::sink());
/// use level_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code:", 500);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::logln!($logger, $crate::Severity::Error, $($value),+)
    };
}

/// Emit a debug-level line. Discarded when the logger was constructed with
/// debug output disabled.
///
/// # Examples
///
/// ```
/// # use level_logger::prelude::*;
/// # let logger = Logger::new("myapp", true, std::io::sink());
/// use level_logger::debug;
/// debug!(logger, "Counter value:", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::logln!($logger, $crate::Severity::Debug, $($value),+)
    };
}
