//! Best-effort URL parsing.
//!
//! This module wraps the `url` crate for the two features that need a real
//! parser (`is_port` and `is_host`). Every function here is fallible; the
//! extractor collapses failures to a default value.

pub mod parse;

pub use parse::{explicit_port, hostname, parse_url};
