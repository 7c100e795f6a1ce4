//! Severity level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    #[default]
    Info = 0,
    Warning = 1,
    Error = 2,
    Debug = 3,
}

impl Severity {
    /// All severities, in declaration order.
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Debug,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Debug => "DEBUG",
        }
    }

    /// Convert a raw discriminant into a severity.
    ///
    /// Callers still holding the old integer-level protocol get `None` for
    /// unknown values, which lets them drop the message silently instead of
    /// dispatching to a wrong sink.
    pub fn from_repr(repr: u8) -> Option<Self> {
        match repr {
            0 => Some(Severity::Info),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Error),
            3 => Some(Severity::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "DEBUG" => Ok(Severity::Debug),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_str() {
        assert_eq!(Severity::Info.to_str(), "INFO");
        assert_eq!(Severity::Warning.to_str(), "WARNING");
        assert_eq!(Severity::Error.to_str(), "ERROR");
        assert_eq!(Severity::Debug.to_str(), "DEBUG");
    }

    #[test]
    fn test_from_repr() {
        for level in Severity::ALL {
            assert_eq!(Severity::from_repr(level as u8), Some(level));
        }
        assert_eq!(Severity::from_repr(4), None);
        assert_eq!(Severity::from_repr(255), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("info".parse::<Severity>(), Ok(Severity::Info));
        assert_eq!("WARN".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Warning));
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn test_display_matches_to_str() {
        for level in Severity::ALL {
            assert_eq!(format!("{}", level), level.to_str());
        }
    }
}
