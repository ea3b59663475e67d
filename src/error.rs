//! Crate-level error types.

use std::fmt;

/// Errors produced by the orthoglobe crate.
///
/// The geometry itself is total; these only cover the fallible edges
/// (files, parsing, container sizing, report encoding).
#[derive(Debug)]
pub enum GlobeError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Marker record file could not be parsed.
    MarkersParse(String),
    /// Container width that cannot size a projection.
    InvalidWidth(f64),
    /// Fraction of the half-width that cannot size a sphere.
    InvalidFitRatio(f64),
    /// JSON output could not be encoded.
    Encode(String),
}

impl fmt::Display for GlobeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::MarkersParse(msg) => {
                write!(f, "marker parse error: {msg}")
            }
            Self::InvalidWidth(width) => {
                write!(f, "invalid container width: {width}")
            }
            Self::InvalidFitRatio(ratio) => {
                write!(f, "invalid fit ratio: {ratio}")
            }
            Self::Encode(msg) => write!(f, "JSON encode error: {msg}"),
        }
    }
}

impl std::error::Error for GlobeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GlobeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_edge() {
        let encode = GlobeError::Encode("key must be a string".into());
        assert_eq!(
            encode.to_string(),
            "JSON encode error: key must be a string"
        );
        assert!(std::error::Error::source(&encode).is_none());

        let ratio = GlobeError::InvalidFitRatio(-0.9);
        assert_eq!(ratio.to_string(), "invalid fit ratio: -0.9");

        let io = GlobeError::from(std::io::Error::other("disk"));
        assert!(io.to_string().starts_with("I/O error"));
        assert!(std::error::Error::source(&io).is_some());
    }
}
