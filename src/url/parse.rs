//! Fallible host and port lookups on top of [`url::Url`].

use url::Url;
use crate::error::ExtractError;

/// Parse a raw string as an absolute URL.
///
/// No normalization happens before parsing: the input is handed to the
/// `url` crate exactly as given.
///
/// # Examples
///
/// ```
/// use urlfeat::url::parse_url;
///
/// assert!(parse_url("https://example.com/").is_ok());
/// assert!(parse_url("example.com/no-scheme").is_err());
/// ```
pub fn parse_url(url: &str) -> Result<Url, ExtractError> {
    Ok(Url::parse(url)?)
}

/// Return the explicit port of a URL.
///
/// The `url` crate elides a port equal to the scheme default, so
/// `http://host:80/` has no explicit port. Port `0` is treated as absent.
///
/// # Examples
///
/// ```
/// use urlfeat::url::explicit_port;
///
/// assert_eq!(explicit_port("http://192.168.1.1:8080/").unwrap(), 8080);
/// assert!(explicit_port("http://example.com/").is_err());
/// ```
pub fn explicit_port(url: &str) -> Result<u16, ExtractError> {
    let parsed = parse_url(url)?;
    parsed
        .port()
        .filter(|&port| port != 0)
        .ok_or(ExtractError::MissingPort)
}

/// Return the hostname of a URL as the parser serializes it.
///
/// IPv6 literals are returned without their surrounding brackets.
pub fn hostname(url: &str) -> Result<String, ExtractError> {
    let parsed = parse_url(url)?;
    let host = parsed.host_str().ok_or(ExtractError::MissingHost)?;
    let host = host.trim_start_matches('[').trim_end_matches(']');

    if host.is_empty() {
        return Err(ExtractError::MissingHost);
    }

    Ok(host.to_string())
}
