//! Length, split, and character-class measurements.
//!
//! The split-based measures here are string heuristics over raw text, not
//! RFC 3986 parsing. They must stay that way: a real parser would change the
//! values any trained model has learned from.

use crate::core::charclass;

/// Total number of characters in the input.
pub fn url_length(url: &str) -> usize {
    url.chars().count()
}

/// Length of the third `/`-delimited token, or 0 when there are at most two.
///
/// For `scheme://host/...` this is the length of `host`.
pub fn domain_length(url: &str) -> usize {
    url.split('/').nth(2).map(|token| token.chars().count()).unwrap_or(0)
}

/// Length of everything after the first three `/`-delimited segments.
///
/// Returns 0 unless the input has more than three segments.
pub fn path_length(url: &str) -> usize {
    if url.split('/').count() <= 3 {
        return 0;
    }

    url.splitn(4, '/')
        .last()
        .map(|rest| rest.chars().count())
        .unwrap_or(0)
}

/// Number of `/`-delimited segments after the last `http` and the last `//`,
/// minus one.
pub fn num_sub_domains(url: &str) -> usize {
    let after_scheme = url.rsplit("http").next().unwrap_or(url);
    let after_slashes = after_scheme.rsplit("//").next().unwrap_or(after_scheme);
    after_slashes.split('/').count() - 1
}

/// Length of the domain extension, capped at 4.
///
/// The extension is the text after the last `.` of the first `/` segment
/// following the last `//`. Returns -1 when there is no dot, or when the
/// extension is empty or not purely alphabetic.
pub fn count_domain_extension(url: &str) -> i64 {
    let after_slashes = url.rsplit("//").next().unwrap_or(url);
    let domain = after_slashes.split('/').next().unwrap_or(after_slashes);

    let Some(dot) = domain.rfind('.') else {
        return -1;
    };

    let extension = &domain[dot + 1..];
    if extension.is_empty() || !extension.chars().all(charclass::is_letter) {
        return -1;
    }

    extension.chars().count().min(4) as i64
}

/// Number of digit characters (see [`charclass::is_digit`]).
pub fn digits_count(url: &str) -> usize {
    url.chars().filter(|&c| charclass::is_digit(c)).count()
}

/// Number of letters (general category `L*`).
pub fn alpha_count(url: &str) -> usize {
    url.chars().filter(|&c| charclass::is_letter(c)).count()
}

/// Number of characters that are neither letters nor numbers.
///
/// Combining marks count here, and numbers that are not digits (`½`)
/// count in none of the three character classes.
pub fn special_chars_count(url: &str) -> usize {
    url.chars().filter(|&c| !charclass::is_alphanumeric(c)).count()
}

/// Number of `&` separators.
pub fn num_params(url: &str) -> usize {
    url.matches('&').count()
}

/// Dot-separated labels beyond the last two in the leading host-like token.
///
/// A leading `http://` or `https://` is stripped (case-sensitive), the rest is
/// cut at the first `/` and split on `.`.
pub fn num_subdomains(url: &str) -> usize {
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let domain = stripped.split('/').next().unwrap_or(stripped);
    domain.split('.').count().saturating_sub(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_length_counts_chars() {
        assert_eq!(url_length(""), 0);
        assert_eq!(url_length("http://a.b"), 10);
        assert_eq!(url_length("http://café.fr"), 14);
    }

    #[test]
    fn test_domain_length() {
        assert_eq!(domain_length("http://www.example.com/path"), 15);
        assert_eq!(domain_length("http://example.com"), 11);
        assert_eq!(domain_length("noscheme"), 0);
        assert_eq!(domain_length("a/b"), 0);
        assert_eq!(domain_length("a/b/"), 0);
    }

    #[test]
    fn test_path_length() {
        assert_eq!(path_length("http://example.com/path/to?x=1"), 11);
        assert_eq!(path_length("http://example.com/"), 0);
        assert_eq!(path_length("http://example.com"), 0);
        assert_eq!(path_length("a/b/c/d/e"), 3);
        assert_eq!(path_length(""), 0);
    }

    #[test]
    fn test_num_sub_domains() {
        assert_eq!(num_sub_domains("http://example.com/a/b"), 2);
        assert_eq!(num_sub_domains("https://example.com"), 0);
        assert_eq!(num_sub_domains("noscheme"), 0);
        assert_eq!(num_sub_domains("a/b/c"), 2);
        assert_eq!(num_sub_domains(""), 0);
        // Text after the last `http` wins.
        assert_eq!(num_sub_domains("http://a.com/x?u=http/y"), 1);
    }

    #[test]
    fn test_count_domain_extension() {
        assert_eq!(count_domain_extension("http://example.com/x"), 3);
        assert_eq!(count_domain_extension("http://example.museum"), 4);
        assert_eq!(count_domain_extension("http://example.io:8080/"), -1);
        assert_eq!(count_domain_extension("http://192.168.1.1/"), -1);
        assert_eq!(count_domain_extension("http://localhost/"), -1);
        assert_eq!(count_domain_extension("example."), -1);
        assert_eq!(count_domain_extension(""), -1);
        assert_eq!(count_domain_extension("www.example.org"), 3);
        assert_eq!(count_domain_extension("http://пример.рф/"), 2);
        // Trailing combining mark makes the extension non-alphabetic.
        assert_eq!(count_domain_extension("http://a.\u{939}\u{93f}/"), -1);
    }

    #[test]
    fn test_character_classes() {
        let url = "http://a1.b2/ ?";
        assert_eq!(digits_count(url), 2);
        assert_eq!(alpha_count(url), 6);
        assert_eq!(special_chars_count(url), 7);
        assert_eq!(digits_count(url) + alpha_count(url) + special_chars_count(url), url_length(url));
    }

    #[test]
    fn test_character_classes_non_ascii() {
        let cases = [
            // (input, digits, alpha, special)
            ("½", 0, 0, 0),
            ("Ⅻ", 0, 0, 0),
            ("²", 1, 0, 0),
            ("हिन्दी", 0, 3, 3),
            ("٣", 1, 0, 0),
            ("一", 0, 1, 0),
        ];

        for (input, digits, alpha, special) in cases {
            assert_eq!(digits_count(input), digits, "digits for {:?}", input);
            assert_eq!(alpha_count(input), alpha, "alpha for {:?}", input);
            assert_eq!(special_chars_count(input), special, "special for {:?}", input);
        }
    }

    #[test]
    fn test_num_params() {
        assert_eq!(num_params("http://x.com/?a=1&b=2&c=3"), 2);
        assert_eq!(num_params("http://x.com/"), 0);
        assert_eq!(num_params("&&"), 2);
    }

    #[test]
    fn test_num_subdomains() {
        assert_eq!(num_subdomains("http://a.b.example.com/x.y.z"), 2);
        assert_eq!(num_subdomains("https://www.example.com"), 1);
        assert_eq!(num_subdomains("http://example.com"), 0);
        assert_eq!(num_subdomains("ftp://a.b.c.d"), 0);
        assert_eq!(num_subdomains("HTTP://a.b.c.d"), 0);
        assert_eq!(num_subdomains("a.b.c.d"), 2);
        assert_eq!(num_subdomains(""), 0);
    }
}
