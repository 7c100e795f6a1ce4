//! # Level Logger
//!
//! A leveled logging shim that tags each line with a severity and an
//! application name, and routes output to a configurable destination.
//!
//! ## Features
//!
//! - **Level Filtering**: Debug output is suppressed unless enabled
//! - **Tagged Lines**: Every line carries a `"<SEVERITY> <name>"` prefix
//! - **Thread Safe**: Writes to a shared destination never interleave
//! - **Easy to Use**: Simple and intuitive API
//!
//! ## Example
//!
//! ```
//! use level_logger::{Logger, Severity};
//!
//! let logger = Logger::new("myapp", true, std::io::stdout());
//! logger.print(Severity::Info, &[&"Hello, Info!"]);
//! ```

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        LineSink, Logger, LoggerError, LoggerMetrics, Result, Severity, SinkTarget,
    };
}

pub use crate::core::{LineSink, Logger, LoggerError, LoggerMetrics, Result, Severity, SinkTarget};
