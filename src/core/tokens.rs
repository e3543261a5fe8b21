//! Literal substring count and presence families.

use crate::types::Feature;

/// Features counting occurrences of a literal substring, in output order.
pub const COUNTED_TOKENS: [Feature; 7] = [
    Feature::NumHyphen,
    Feature::NumEquals,
    Feature::NumDot,
    Feature::NumPercent,
    Feature::NumDoubleSlash,
    Feature::NumUnderscore,
    Feature::NumSlash,
];

/// Features flagging presence of a literal substring, in output order.
pub const PRESENCE_TOKENS: [Feature; 12] = [
    Feature::IsAt,
    Feature::IsQuestionMark,
    Feature::IsHash,
    Feature::IsPlus,
    Feature::IsHttp,
    Feature::IsHttps,
    Feature::IsDotCom,
    Feature::IsWww,
    Feature::IsDotOrg,
    Feature::IsAmpersand,
    Feature::IsSemicolon,
    Feature::IsTilde,
];

/// Non-overlapping occurrences of `token`, scanning left to right.
///
/// Each token is counted independently, so every `/` inside a `//` is also
/// counted as a `/`.
pub fn count_occurrences(url: &str, token: &str) -> usize {
    if token.is_empty() {
        return 0;
    }
    url.matches(token).count()
}

/// Whether `token` occurs anywhere in `url`.
pub fn contains_token(url: &str, token: &str) -> bool {
    !token.is_empty() && url.contains(token)
}

/// Occurrence counts for every feature in [`COUNTED_TOKENS`].
pub fn token_counts(url: &str) -> [usize; 7] {
    COUNTED_TOKENS.map(|feature| count_occurrences(url, feature.token().unwrap_or_default()))
}

/// Presence flags for every feature in [`PRESENCE_TOKENS`].
pub fn token_presence(url: &str) -> [bool; 12] {
    PRESENCE_TOKENS.map(|feature| contains_token(url, feature.token().unwrap_or_default()))
}
