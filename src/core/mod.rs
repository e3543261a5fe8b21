//! Core feature measurements.
//!
//! This module contains the measurement functions behind each column:
//! - Length, split, and character-class counts
//! - Unicode general-category character classes
//! - IP literal and percent-escape detectors
//! - Shannon entropy
//! - Literal substring count and presence families

pub mod charclass;
pub mod entropy;
pub mod extractor;
pub mod lexical;
pub mod patterns;
pub mod tokens;

// Re-export main functionality
pub use entropy::shannon_entropy;
pub use extractor::{extract, extract_row, FeatureExtractor};
pub use patterns::{contains_hexadecimal, contains_ip_address, contains_ipv4, contains_ipv6};
pub use tokens::{count_occurrences, contains_token};
