//! Regex detectors for IP literals and percent-encoded bytes.
//!
//! Patterns are compiled once on first use and shared across threads.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Dotted-quad IPv4 literal with 0-255 octets, bounded by word boundaries.
const IPV4_PATTERN: &str =
    r"\b((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\b";

/// IPv6 literal in full, `::`-compressed, link-local zone-id, and
/// IPv4-mapped/embedded forms.
const IPV6_PATTERN: &str = concat!(
    r"\b(([0-9a-fA-F]{1,4}:){7,7}[0-9a-fA-F]{1,4}|",
    r"([0-9a-fA-F]{1,4}:){1,7}:|",
    r"([0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4}|",
    r"([0-9a-fA-F]{1,4}:){1,5}(:[0-9a-fA-F]{1,4}){1,2}|",
    r"([0-9a-fA-F]{1,4}:){1,4}(:[0-9a-fA-F]{1,4}){1,3}|",
    r"([0-9a-fA-F]{1,4}:){1,3}(:[0-9a-fA-F]{1,4}){1,4}|",
    r"([0-9a-fA-F]{1,4}:){1,2}(:[0-9a-fA-F]{1,4}){1,5}|",
    r"[0-9a-fA-F]{1,4}:((:[0-9a-fA-F]{1,4}){1,6})|",
    r":((:[0-9a-fA-F]{1,4}){1,7}|:)|",
    r"fe80:(:[0-9a-fA-F]{0,4}){0,4}%[0-9a-zA-Z]{1,}|",
    r"::(ffff(:0{1,4}){0,1}:){0,1}",
    r"((25[0-5]|(2[0-4]|1{0,1}[0-9]|[1-9]?)[0-9])\.){3,3}",
    r"(25[0-5]|(2[0-4]|1{0,1}[0-9]|[1-9]?)[0-9])|",
    r"([0-9a-fA-F]{1,4}:){1,4}:",
    r"((25[0-5]|(2[0-4]|1{0,1}[0-9]|[1-9]?)[0-9])\.){3,3}",
    r"(25[0-5]|(2[0-4]|1{0,1}[0-9]|[1-9]?)[0-9]))\b",
);

/// `%` followed by two hex digits.
const HEX_ESCAPE_PATTERN: &str = r"%[0-9A-Fa-f]{2}";

static IPV4_REGEX: Lazy<Regex> = Lazy::new(|| compile("ipv4", IPV4_PATTERN));
static IPV6_REGEX: Lazy<Regex> = Lazy::new(|| compile("ipv6", IPV6_PATTERN));
static HEX_ESCAPE_REGEX: Lazy<Regex> = Lazy::new(|| compile("hex_escape", HEX_ESCAPE_PATTERN));

fn compile(label: &str, pattern: &str) -> Regex {
    trace!(pattern = label, "compiling detector");
    Regex::new(pattern).expect("built-in detector pattern must compile")
}

/// Whether an IPv4 literal appears anywhere in the input.
pub fn contains_ipv4(url: &str) -> bool {
    IPV4_REGEX.is_match(url)
}

/// Whether an IPv6 literal appears anywhere in the input.
pub fn contains_ipv6(url: &str) -> bool {
    IPV6_REGEX.is_match(url)
}

/// Whether the input contains an IPv4 or IPv6 literal.
pub fn contains_ip_address(url: &str) -> bool {
    contains_ipv4(url) || contains_ipv6(url)
}

/// Whether the input contains a percent-encoded byte such as `%2e`.
pub fn contains_hexadecimal(url: &str) -> bool {
    HEX_ESCAPE_REGEX.is_match(url)
}
