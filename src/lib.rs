//! urlfeat - Lexical and structural feature vectors for URL classifiers
//!
//! This crate turns a raw URL string into a fixed, ordered set of numeric
//! features (lengths, character-class counts, entropy, token counts, IP and
//! percent-escape detection) meant to feed a downstream classifier such as a
//! phishing or malicious-URL model.
//!
//! # Features
//!
//! - **Total**: every input string, including `""`, yields a complete vector
//! - **Deterministic**: same input always produces bit-identical output
//! - **Stable schema**: column names and order never depend on the input
//! - **Stateless**: safe to call from any number of threads without locking
//!
//! # Quick Start
//!
//! ```
//! use urlfeat::{extract, non_binary_columns, Feature, FeatureValue};
//!
//! let features = extract("http://192.168.1.1:8080/");
//! assert!(features.is_ip);
//! assert!(features.is_port);
//! assert_eq!(features.get(Feature::IsIp), FeatureValue::Indicator(true));
//!
//! // Walk columns in output order
//! for (feature, value) in features.iter() {
//!     println!("{} = {}", feature, value.as_f64());
//! }
//!
//! // Columns that need scaling downstream
//! assert!(non_binary_columns().contains(&"entropy"));
//! ```
//!
//! # Schema
//!
//! | Group | Columns |
//! |-------|---------|
//! | lengths | `url_length`, `domain_length`, `path_length` |
//! | structure | `num_sub_domains`, `count_num_domain_extension`, `num_params`, `num_subdomains` |
//! | detectors | `is_IP`, `contains_hexadecimal`, `is_port`, `is_host` |
//! | character classes | `digits_count`, `alpha_count`, `special_chars_count` |
//! | randomness | `entropy` |
//! | token counts | `num-`, `num=`, `num.`, `num%`, `num//`, `num_`, `num/` |
//! | token presence | `is@`, `is?`, `is#`, `is+`, `ishttp`, `ishttps`, `is.com`, `iswww.`, `is.org`, `is&`, `is;`, `is~` |
//!
//! Any change to names, order, or computation is a breaking change for models
//! trained on these vectors.
//!
//! # Error Handling
//!
//! [`extract`] never fails. Host and port detection parse the input with the
//! `url` crate; a parse failure sets the corresponding indicator to 0.

// Re-export main extraction functions
pub use crate::core::{extract, extract_row, FeatureExtractor};

// Re-export schema accessors
pub use schema::{feature_names, non_binary_columns, NON_BINARY_COLUMNS};

// Re-export public types
pub use error::{ExtractError, UnknownFeature};
pub use types::{Feature, FeatureKind, FeatureValue, FeatureVector};

// Module declarations
pub mod core;
pub mod error;
pub mod schema;
pub mod types;
pub mod url;
