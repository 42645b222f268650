//! Error types for admission decisions and their configuration

use std::fmt;
use thiserror::Error;

/// Block-list input contained no usable hosts
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Empty block list input: supply at least one host to block")]
pub struct EmptyBlockListInput;

/// A single window boundary failed to parse as a kitchen time like `9:00AM`
#[derive(Debug, Error)]
#[error("Invalid {field} time {value:?} (expected a time like 9:00AM): {source}")]
pub struct TimeFormatError {
    /// Which boundary was rejected, `start` or `end`
    pub field: &'static str,
    /// The rejected input
    pub value: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Window configuration failed; every rejected boundary is reported
#[derive(Debug)]
pub struct WindowConfigError {
    pub errors: Vec<TimeFormatError>,
}

impl fmt::Display for WindowConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid block window: ")?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for WindowConfigError {}

/// An admin request that could not be understood
#[derive(Debug, Error)]
pub enum AdminError {
    /// Path did not have the `/admin/<action>/<host>` shape
    #[error("Malformed admin path {path:?}: expected /admin/<action>/<host>")]
    MalformedPath { path: String },

    /// Host segment was not a valid host
    #[error("Invalid host segment {segment:?}: {source}")]
    HostParse {
        segment: String,
        #[source]
        source: url::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_config_error_joins_all_failures() {
        let first = chrono::NaiveTime::parse_from_str("nonsense", "%I:%M%p").unwrap_err();
        let second = chrono::NaiveTime::parse_from_str("25:99", "%I:%M%p").unwrap_err();
        let err = WindowConfigError {
            errors: vec![
                TimeFormatError {
                    field: "start",
                    value: "nonsense".to_string(),
                    source: first,
                },
                TimeFormatError {
                    field: "end",
                    value: "25:99".to_string(),
                    source: second,
                },
            ],
        };

        let rendered = err.to_string();
        assert!(rendered.contains("Invalid start time \"nonsense\""));
        assert!(rendered.contains("Invalid end time \"25:99\""));
        assert!(rendered.contains("; "));
    }

    #[test]
    fn test_admin_error_messages_name_the_input() {
        let err = AdminError::MalformedPath {
            path: "/bad".to_string(),
        };
        assert!(err.to_string().contains("/bad"));
    }
}
