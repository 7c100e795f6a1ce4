//! Core logger types

pub mod error;
pub mod logger;
pub mod metrics;
pub mod severity;
pub mod sink;

pub use error::{LoggerError, Result};
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use severity::Severity;
pub use sink::{LineSink, SinkTarget};
