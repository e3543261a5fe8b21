//! Tests for the regex detectors and best-effort URL parsing.

use urlfeat::core::{contains_hexadecimal, contains_ip_address, contains_ipv4, contains_ipv6};
use urlfeat::url::{explicit_port, hostname};
use urlfeat::{extract, ExtractError};

#[test]
fn test_ipv4_octet_bounds() {
    let valid = ["0.0.0.0", "255.255.255.255", "http://8.8.8.8/", "x 10.1.2.3 y"];
    for input in valid {
        assert!(contains_ipv4(input), "should match: {}", input);
    }

    let invalid = ["256.0.0.1", "1.2.3", "http://1.2.3.x/", "version1.2.3.4"];
    for input in invalid {
        assert!(!contains_ipv4(input), "should not match: {}", input);
    }
}

#[test]
fn test_ipv6_forms() {
    let inputs = [
        "1:2:3:4:5:6:7:8",
        "2001:db8::abcd",
        "2001:db8::1",
        "2001:db8:0:0:1::1",
        "fe80::7:8%eth0",
        "http://[2001:db8::ff00:42:8329]:8080/",
    ];
    for input in inputs {
        assert!(contains_ipv6(input), "should match: {}", input);
        assert!(extract(input).is_ip, "is_IP should be set for {}", input);
    }

    assert!(!contains_ipv6("https://example.com/a:b"));
    assert!(!contains_ip_address("https://example.com/a:b"));
}

#[test]
fn test_hex_escape_is_raw_text_only() {
    assert!(contains_hexadecimal("a%20b"));
    assert!(contains_hexadecimal("%e2%82%ac"));
    assert!(!contains_hexadecimal("a b"));
    assert!(!contains_hexadecimal("%%"));
}

#[test]
fn test_port_parsing_failures_collapse() {
    assert_eq!(explicit_port("http://example.com:8080"), Ok(8080));
    assert_eq!(explicit_port("http://example.com"), Err(ExtractError::MissingPort));
    assert!(matches!(explicit_port("http://example.com:65536/"), Err(ExtractError::UrlParse(_))));
    assert!(!extract("http://example.com:65536/").is_port);
}

#[test]
fn test_hostname_must_reappear_literally() {
    assert_eq!(hostname("http://Example.COM/").unwrap(), "example.com");
    assert!(!extract("http://Example.COM/").is_host);
    assert!(extract("https://example.com/").is_host);
    // IPv4 shorthand is rewritten by the parser and no longer appears verbatim.
    assert!(!extract("http://127.1/").is_host);
}

#[test]
fn test_empty_authority_promotes_path_to_host() {
    // The parser skips the extra slash and reads `path` as the host.
    assert_eq!(hostname("http:///path").unwrap(), "path");
    assert!(extract("http:///path").is_host);
}

#[test]
fn test_unicode_host_is_compared_in_ascii_form() {
    assert_eq!(hostname("http://пример.рф/").unwrap(), "xn--e1afmkfd.xn--p1ai");
    assert!(!extract("http://пример.рф/").is_host);
}
