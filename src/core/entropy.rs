//! Shannon entropy of a URL's character distribution.

use std::collections::BTreeMap;
use std::f64::consts::LN_2;

/// Trim leading and trailing whitespace.
///
/// The information separators U+001C..=U+001F count as whitespace here, on
/// top of everything [`char::is_whitespace`] accepts.
fn trim_whitespace(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Shannon entropy in bits of the trimmed input.
///
/// Characters are Unicode scalar values. Frequencies are accumulated in
/// character order so the floating-point sum is identical on every call.
/// Returns `0.0` for an empty or whitespace-only input.
///
/// # Examples
///
/// ```
/// use urlfeat::core::entropy::shannon_entropy;
///
/// assert_eq!(shannon_entropy("aaaa"), 0.0);
/// assert_eq!(shannon_entropy("ab"), 1.0);
/// assert_eq!(shannon_entropy("   "), 0.0);
/// ```
pub fn shannon_entropy(text: &str) -> f64 {
    let text = trim_whitespace(text);
    if text.is_empty() {
        return 0.0;
    }

    let mut frequency: BTreeMap<char, usize> = BTreeMap::new();
    let mut length = 0usize;
    for c in text.chars() {
        *frequency.entry(c).or_insert(0) += 1;
        length += 1;
    }

    let length = length as f64;
    let sum: f64 = frequency
        .values()
        .map(|&count| {
            let p = count as f64 / length;
            p * (p.ln() / LN_2)
        })
        .sum();

    if sum == 0.0 {
        0.0
    } else {
        -sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(shannon_entropy(""), 0.0);
        assert_eq!(shannon_entropy(" \t\n"), 0.0);
        assert_eq!(shannon_entropy("\u{1f}\u{1c}"), 0.0);
    }

    #[test]
    fn test_single_repeated_character() {
        let entropy = shannon_entropy("zzzzzzzz");
        assert_eq!(entropy, 0.0);
        assert!(entropy.is_sign_positive());
    }

    #[test]
    fn test_uniform_distribution() {
        assert!(approx_eq(shannon_entropy("abcd"), 2.0));
        assert!(approx_eq(shannon_entropy("abcdefgh"), 3.0));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(shannon_entropy("  ab  "), shannon_entropy("ab"));
        assert!(shannon_entropy("a b") > shannon_entropy("ab"));
    }

    #[test]
    fn test_skewed_distribution() {
        // p = 3/4, 1/4
        let expected = -(0.75f64 * 0.75f64.log2() + 0.25f64 * 0.25f64.log2());
        assert!(approx_eq(shannon_entropy("aaab"), expected));
    }

    #[test]
    fn test_unicode_counts_scalar_values() {
        assert!(approx_eq(shannon_entropy("éé"), 0.0));
        assert!(approx_eq(shannon_entropy("é!"), 1.0));
    }
}
