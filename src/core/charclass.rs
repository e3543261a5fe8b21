//! Unicode character classes used by the character-count features.
//!
//! Classes follow the Unicode general category rather than the derived
//! `Alphabetic` / `Numeric` properties behind [`char::is_alphabetic`] and
//! [`char::is_numeric`]:
//! - letters are `L*` (Lu, Ll, Lt, Lm, Lo)
//! - numbers are `N*` (Nd, Nl, No)
//! - digits are Nd plus the `No` characters whose Numeric_Type is Digit
//!   (superscripts, subscripts, circled digits, ...)

use unicode_general_category::{get_general_category, GeneralCategory};

/// `No` characters with Numeric_Type=Digit, as inclusive ranges.
const NON_DECIMAL_DIGITS: [(char, char); 20] = [
    ('\u{b2}', '\u{b3}'),
    ('\u{b9}', '\u{b9}'),
    ('\u{1369}', '\u{1371}'),
    ('\u{19da}', '\u{19da}'),
    ('\u{2070}', '\u{2070}'),
    ('\u{2074}', '\u{2079}'),
    ('\u{2080}', '\u{2089}'),
    ('\u{2460}', '\u{2468}'),
    ('\u{2474}', '\u{247c}'),
    ('\u{2488}', '\u{2490}'),
    ('\u{24ea}', '\u{24ea}'),
    ('\u{24f5}', '\u{24fd}'),
    ('\u{24ff}', '\u{24ff}'),
    ('\u{2776}', '\u{277e}'),
    ('\u{2780}', '\u{2788}'),
    ('\u{278a}', '\u{2792}'),
    ('\u{10a40}', '\u{10a43}'),
    ('\u{10e60}', '\u{10e68}'),
    ('\u{11052}', '\u{1105a}'),
    ('\u{1f100}', '\u{1f10a}'),
];

/// Whether `c` is a letter (general category `L*`).
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Whether `c` is a number of any kind (general category `N*`).
pub fn is_number(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::DecimalNumber | GeneralCategory::LetterNumber | GeneralCategory::OtherNumber
    )
}

/// Whether `c` is a digit: a decimal digit in any script, or a
/// superscript/subscript/enclosed form of one.
///
/// Fractions (`½`) and letter numbers (`Ⅻ`) are not digits.
pub fn is_digit(c: char) -> bool {
    match get_general_category(c) {
        GeneralCategory::DecimalNumber => true,
        GeneralCategory::OtherNumber => NON_DECIMAL_DIGITS
            .iter()
            .any(|&(start, end)| (start..=end).contains(&c)),
        _ => false,
    }
}

/// Whether `c` is a letter or a number.
pub fn is_alphanumeric(c: char) -> bool {
    is_letter(c) || is_number(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_classes() {
        assert!(is_letter('a') && is_letter('Z'));
        assert!(is_digit('0') && is_digit('9'));
        assert!(!is_letter('1') && !is_digit('x'));
        for c in ['/', ':', '.', ' ', '%', '_', '-'] {
            assert!(!is_alphanumeric(c), "{:?} should be special", c);
        }
    }

    #[test]
    fn test_non_decimal_digits() {
        assert!(is_digit('²'));
        assert!(is_digit('①'));
        assert!(is_digit('₉'));
        assert!(is_digit('٣'));
        assert!(!is_digit('½'));
        assert!(!is_digit('Ⅻ'));
    }

    #[test]
    fn test_numbers_that_are_not_digits() {
        assert!(is_number('½'));
        assert!(is_number('Ⅻ'));
        assert!(!is_letter('Ⅻ'));
        assert!(is_alphanumeric('½'));
    }

    #[test]
    fn test_combining_marks_are_not_letters() {
        // DEVANAGARI VOWEL SIGN I (Mc) and SIGN VIRAMA (Mn)
        assert!(!is_letter('\u{93f}'));
        assert!(!is_letter('\u{94d}'));
        assert!(!is_alphanumeric('\u{93f}'));
        assert!(is_letter('ह'));
    }

    #[test]
    fn test_digit_table_is_sorted_and_other_number() {
        for pair in NON_DECIMAL_DIGITS.windows(2) {
            assert!(pair[0].1 < pair[1].0);
        }
        for &(start, end) in NON_DECIMAL_DIGITS.iter() {
            assert!(start <= end);
            assert!(matches!(get_general_category(start), GeneralCategory::OtherNumber));
            assert!(matches!(get_general_category(end), GeneralCategory::OtherNumber));
        }
    }
}
