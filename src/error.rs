//! Error types for best-effort URL parsing and schema lookups.
//!
//! None of these escape [`extract`](crate::extract): parse failures are
//! collapsed to the feature's default value at the call site.

use thiserror::Error;

/// Errors raised while parsing a URL for host or port detection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// URL parsing failed using the url crate.
    #[error("URL parsing error: {0}")]
    UrlParse(String),

    /// The URL parsed but carries no host, or the host is empty.
    #[error("URL has no host")]
    MissingHost,

    /// The URL carries no explicit, non-default, non-zero port.
    #[error("URL has no explicit port")]
    MissingPort,
}

impl From<url::ParseError> for ExtractError {
    fn from(err: url::ParseError) -> Self {
        ExtractError::UrlParse(err.to_string())
    }
}

/// A feature name that is not part of the schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown feature name: {0}")]
pub struct UnknownFeature(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ExtractError::MissingHost.to_string(), "URL has no host");
        assert_eq!(
            UnknownFeature("num!".to_string()).to_string(),
            "Unknown feature name: num!"
        );
    }

    #[test]
    fn test_url_parse_error_conversion() {
        let url_error = url::ParseError::EmptyHost;
        let err: ExtractError = url_error.into();

        match err {
            ExtractError::UrlParse(msg) => assert_eq!(msg, "empty host"),
            _ => panic!("Expected UrlParse variant"),
        }
    }
}
