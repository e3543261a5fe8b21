//! Feature extraction pipeline.
//!
//! This module provides the main API for turning a raw URL string into a
//! [`FeatureVector`].

use tracing::trace;

use crate::core::entropy::shannon_entropy;
use crate::core::lexical;
use crate::core::patterns::{contains_hexadecimal, contains_ip_address};
use crate::core::tokens::{token_counts, token_presence};
use crate::types::{Feature, FeatureVector};
use crate::url::parse::{explicit_port, hostname};

/// Whether the URL parses with an explicit, non-default port.
///
/// Parse failures map to `false`.
fn has_port(url: &str) -> bool {
    match explicit_port(url) {
        Ok(_) => true,
        Err(err) => {
            trace!(%err, "no explicit port");
            false
        }
    }
}

/// Whether the parsed hostname reappears literally in the raw input.
///
/// Parse failures and missing hosts map to `false`.
fn host_exists(url: &str) -> bool {
    match hostname(url) {
        Ok(host) => url.contains(host.as_str()),
        Err(err) => {
            trace!(%err, "no hostname");
            false
        }
    }
}

/// Extract the full feature vector from a URL string.
///
/// This is a total function: every input, including the empty string and
/// arbitrary non-URL text, yields a vector with every column populated.
/// No decoding or normalization is applied to the input.
///
/// # Examples
///
/// ```
/// use urlfeat::extract;
///
/// let features = extract("http://www.example.com/path?x=1&y=2");
/// assert!(features.is_host);
/// assert!(features.is_www);
/// assert_eq!(features.num_params, 1);
/// assert_eq!(features.num_equals, 2);
///
/// let empty = extract("");
/// assert_eq!(empty.url_length, 0);
/// assert_eq!(empty.count_num_domain_extension, -1);
/// ```
pub fn extract(url: &str) -> FeatureVector {
    let [
        num_hyphen,
        num_equals,
        num_dot,
        num_percent,
        num_double_slash,
        num_underscore,
        num_slash,
    ] = token_counts(url);
    let [
        is_at,
        is_question_mark,
        is_hash,
        is_plus,
        is_http,
        is_https,
        is_dot_com,
        is_www,
        is_dot_org,
        is_ampersand,
        is_semicolon,
        is_tilde,
    ] = token_presence(url);

    FeatureVector {
        url_length: lexical::url_length(url),
        domain_length: lexical::domain_length(url),
        path_length: lexical::path_length(url),
        is_ip: contains_ip_address(url),
        num_sub_domains: lexical::num_sub_domains(url),
        contains_hexadecimal: contains_hexadecimal(url),
        entropy: shannon_entropy(url),
        count_num_domain_extension: lexical::count_domain_extension(url),
        is_port: has_port(url),
        digits_count: lexical::digits_count(url),
        alpha_count: lexical::alpha_count(url),
        special_chars_count: lexical::special_chars_count(url),
        is_host: host_exists(url),
        num_params: lexical::num_params(url),
        num_subdomains: lexical::num_subdomains(url),
        num_hyphen,
        num_equals,
        num_dot,
        num_percent,
        num_double_slash,
        num_underscore,
        num_slash,
        is_at,
        is_question_mark,
        is_hash,
        is_plus,
        is_http,
        is_https,
        is_dot_com,
        is_www,
        is_dot_org,
        is_ampersand,
        is_semicolon,
        is_tilde,
    }
}

/// Extract the feature vector as a numeric row in output order.
pub fn extract_row(url: &str) -> [f64; Feature::COUNT] {
    extract(url).to_row()
}

/// URL feature extractor.
///
/// Stateless handle over [`extract`]; it can be shared freely between
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract the full feature vector from a URL string.
    pub fn extract(&self, url: &str) -> FeatureVector {
        extract(url)
    }

    /// Extract the feature vector as a numeric row in output order.
    pub fn extract_row(&self, url: &str) -> [f64; Feature::COUNT] {
        extract_row(url)
    }

    /// Column names matching [`FeatureExtractor::extract_row`].
    pub fn columns(&self) -> [&'static str; Feature::COUNT] {
        crate::schema::feature_names()
    }
}
