//! Column schema shared with downstream consumers.
//!
//! The column order and the non-binary registry below are part of the
//! contract with any model trained on these features.

use std::str::FromStr;

use crate::error::UnknownFeature;
use crate::types::Feature;

/// Features whose values are counts or continuous scores rather than 0/1
/// indicators, in output order.
///
/// Kept as a hand-written list; it must stay in sync with
/// [`Feature::is_binary`].
pub static NON_BINARY_COLUMNS: [&str; 18] = [
    "url_length",
    "domain_length",
    "path_length",
    "num_sub_domains",
    "entropy",
    "count_num_domain_extension",
    "digits_count",
    "alpha_count",
    "special_chars_count",
    "num_params",
    "num_subdomains",
    "num-",
    "num=",
    "num.",
    "num%",
    "num//",
    "num_",
    "num/",
];

/// Return the non-binary column names.
///
/// The slice is immutable shared data, so no caller can alter what later
/// callers see.
///
/// # Examples
///
/// ```
/// use urlfeat::non_binary_columns;
///
/// let columns = non_binary_columns();
/// assert_eq!(columns.first(), Some(&"url_length"));
/// assert_eq!(columns.last(), Some(&"num/"));
/// ```
pub fn non_binary_columns() -> &'static [&'static str] {
    &NON_BINARY_COLUMNS
}

/// Return every column name in output order.
pub fn feature_names() -> [&'static str; Feature::COUNT] {
    Feature::ALL.map(Feature::name)
}

impl Feature {
    /// Look up a feature by its column name.
    pub fn from_name(name: &str) -> Option<Feature> {
        Feature::ALL.iter().copied().find(|f| f.name() == name)
    }
}

impl FromStr for Feature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::from_name(s).ok_or_else(|| UnknownFeature(s.to_string()))
    }
}
