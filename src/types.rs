//! Core data structures for URL feature vectors.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Identifier of a single feature column.
///
/// Variants are declared in output order. Reordering them is a breaking
/// schema change for any model trained on the resulting vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    UrlLength,
    DomainLength,
    PathLength,
    IsIp,
    NumSubDomains,
    ContainsHexadecimal,
    Entropy,
    CountNumDomainExtension,
    IsPort,
    DigitsCount,
    AlphaCount,
    SpecialCharsCount,
    IsHost,
    NumParams,
    NumSubdomains,
    NumHyphen,
    NumEquals,
    NumDot,
    NumPercent,
    NumDoubleSlash,
    NumUnderscore,
    NumSlash,
    IsAt,
    IsQuestionMark,
    IsHash,
    IsPlus,
    IsHttp,
    IsHttps,
    IsDotCom,
    IsWww,
    IsDotOrg,
    IsAmpersand,
    IsSemicolon,
    IsTilde,
}

/// How a feature's value should be interpreted downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    /// Integer count or length (may be -1 for `count_num_domain_extension`)
    Count,
    /// 0/1 presence indicator
    Indicator,
    /// Continuous score (entropy)
    Score,
}

impl Feature {
    /// Number of features in the schema.
    pub const COUNT: usize = 34;

    /// Every feature in output order.
    pub const ALL: [Feature; Feature::COUNT] = [
        Feature::UrlLength,
        Feature::DomainLength,
        Feature::PathLength,
        Feature::IsIp,
        Feature::NumSubDomains,
        Feature::ContainsHexadecimal,
        Feature::Entropy,
        Feature::CountNumDomainExtension,
        Feature::IsPort,
        Feature::DigitsCount,
        Feature::AlphaCount,
        Feature::SpecialCharsCount,
        Feature::IsHost,
        Feature::NumParams,
        Feature::NumSubdomains,
        Feature::NumHyphen,
        Feature::NumEquals,
        Feature::NumDot,
        Feature::NumPercent,
        Feature::NumDoubleSlash,
        Feature::NumUnderscore,
        Feature::NumSlash,
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

    /// Column name of this feature, exactly as downstream consumers expect it.
    pub fn name(self) -> &'static str {
        match self {
            Feature::UrlLength => "url_length",
            Feature::DomainLength => "domain_length",
            Feature::PathLength => "path_length",
            Feature::IsIp => "is_IP",
            Feature::NumSubDomains => "num_sub_domains",
            Feature::ContainsHexadecimal => "contains_hexadecimal",
            Feature::Entropy => "entropy",
            Feature::CountNumDomainExtension => "count_num_domain_extension",
            Feature::IsPort => "is_port",
            Feature::DigitsCount => "digits_count",
            Feature::AlphaCount => "alpha_count",
            Feature::SpecialCharsCount => "special_chars_count",
            Feature::IsHost => "is_host",
            Feature::NumParams => "num_params",
            Feature::NumSubdomains => "num_subdomains",
            Feature::NumHyphen => "num-",
            Feature::NumEquals => "num=",
            Feature::NumDot => "num.",
            Feature::NumPercent => "num%",
            Feature::NumDoubleSlash => "num//",
            Feature::NumUnderscore => "num_",
            Feature::NumSlash => "num/",
            Feature::IsAt => "is@",
            Feature::IsQuestionMark => "is?",
            Feature::IsHash => "is#",
            Feature::IsPlus => "is+",
            Feature::IsHttp => "ishttp",
            Feature::IsHttps => "ishttps",
            Feature::IsDotCom => "is.com",
            Feature::IsWww => "iswww.",
            Feature::IsDotOrg => "is.org",
            Feature::IsAmpersand => "is&",
            Feature::IsSemicolon => "is;",
            Feature::IsTilde => "is~",
        }
    }

    /// Value kind of this feature.
    pub fn kind(self) -> FeatureKind {
        match self {
            Feature::IsIp
            | Feature::ContainsHexadecimal
            | Feature::IsPort
            | Feature::IsHost
            | Feature::IsAt
            | Feature::IsQuestionMark
            | Feature::IsHash
            | Feature::IsPlus
            | Feature::IsHttp
            | Feature::IsHttps
            | Feature::IsDotCom
            | Feature::IsWww
            | Feature::IsDotOrg
            | Feature::IsAmpersand
            | Feature::IsSemicolon
            | Feature::IsTilde => FeatureKind::Indicator,
            Feature::Entropy => FeatureKind::Score,
            _ => FeatureKind::Count,
        }
    }

    /// Whether this feature only ever takes the values 0 and 1.
    pub fn is_binary(self) -> bool {
        self.kind() == FeatureKind::Indicator
    }

    /// The literal substring measured by the `num*` and `is*` token families.
    ///
    /// Returns `None` for features that are not a plain substring count or
    /// presence test.
    pub fn token(self) -> Option<&'static str> {
        let name = self.name();
        match self {
            Feature::NumHyphen
            | Feature::NumEquals
            | Feature::NumDot
            | Feature::NumPercent
            | Feature::NumDoubleSlash
            | Feature::NumUnderscore
            | Feature::NumSlash => name.strip_prefix("num"),
            Feature::IsAt
            | Feature::IsQuestionMark
            | Feature::IsHash
            | Feature::IsPlus
            | Feature::IsHttp
            | Feature::IsHttps
            | Feature::IsDotCom
            | Feature::IsWww
            | Feature::IsDotOrg
            | Feature::IsAmpersand
            | Feature::IsSemicolon
            | Feature::IsTilde => name.strip_prefix("is"),
            _ => None,
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single feature value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Count(i64),
    Indicator(bool),
    Score(f64),
}

impl FeatureValue {
    /// Numeric value, with indicators mapped to 0.0 / 1.0.
    pub fn as_f64(self) -> f64 {
        match self {
            FeatureValue::Count(n) => n as f64,
            FeatureValue::Indicator(flag) => {
                if flag {
                    1.0
                } else {
                    0.0
                }
            }
            FeatureValue::Score(score) => score,
        }
    }
}

impl Serialize for FeatureValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            FeatureValue::Count(n) => serializer.serialize_i64(n),
            FeatureValue::Indicator(flag) => serializer.serialize_u8(flag as u8),
            FeatureValue::Score(score) => serializer.serialize_f64(score),
        }
    }
}

/// The full set of features computed for one URL.
///
/// One field per schema column. Use [`FeatureVector::iter`] to walk the
/// columns in output order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureVector {
    pub url_length: usize,
    pub domain_length: usize,
    pub path_length: usize,
    pub is_ip: bool,
    pub num_sub_domains: usize,
    pub contains_hexadecimal: bool,
    pub entropy: f64,
    /// Length of the domain extension capped at 4, or -1
    pub count_num_domain_extension: i64,
    pub is_port: bool,
    pub digits_count: usize,
    pub alpha_count: usize,
    pub special_chars_count: usize,
    pub is_host: bool,
    pub num_params: usize,
    pub num_subdomains: usize,
    pub num_hyphen: usize,
    pub num_equals: usize,
    pub num_dot: usize,
    pub num_percent: usize,
    pub num_double_slash: usize,
    pub num_underscore: usize,
    pub num_slash: usize,
    pub is_at: bool,
    pub is_question_mark: bool,
    pub is_hash: bool,
    pub is_plus: bool,
    pub is_http: bool,
    pub is_https: bool,
    pub is_dot_com: bool,
    pub is_www: bool,
    pub is_dot_org: bool,
    pub is_ampersand: bool,
    pub is_semicolon: bool,
    pub is_tilde: bool,
}

impl FeatureVector {
    /// Look up the value of one feature.
    pub fn get(&self, feature: Feature) -> FeatureValue {
        use FeatureValue::{Count, Indicator, Score};

        match feature {
            Feature::UrlLength => Count(self.url_length as i64),
            Feature::DomainLength => Count(self.domain_length as i64),
            Feature::PathLength => Count(self.path_length as i64),
            Feature::IsIp => Indicator(self.is_ip),
            Feature::NumSubDomains => Count(self.num_sub_domains as i64),
            Feature::ContainsHexadecimal => Indicator(self.contains_hexadecimal),
            Feature::Entropy => Score(self.entropy),
            Feature::CountNumDomainExtension => Count(self.count_num_domain_extension),
            Feature::IsPort => Indicator(self.is_port),
            Feature::DigitsCount => Count(self.digits_count as i64),
            Feature::AlphaCount => Count(self.alpha_count as i64),
            Feature::SpecialCharsCount => Count(self.special_chars_count as i64),
            Feature::IsHost => Indicator(self.is_host),
            Feature::NumParams => Count(self.num_params as i64),
            Feature::NumSubdomains => Count(self.num_subdomains as i64),
            Feature::NumHyphen => Count(self.num_hyphen as i64),
            Feature::NumEquals => Count(self.num_equals as i64),
            Feature::NumDot => Count(self.num_dot as i64),
            Feature::NumPercent => Count(self.num_percent as i64),
            Feature::NumDoubleSlash => Count(self.num_double_slash as i64),
            Feature::NumUnderscore => Count(self.num_underscore as i64),
            Feature::NumSlash => Count(self.num_slash as i64),
            Feature::IsAt => Indicator(self.is_at),
            Feature::IsQuestionMark => Indicator(self.is_question_mark),
            Feature::IsHash => Indicator(self.is_hash),
            Feature::IsPlus => Indicator(self.is_plus),
            Feature::IsHttp => Indicator(self.is_http),
            Feature::IsHttps => Indicator(self.is_https),
            Feature::IsDotCom => Indicator(self.is_dot_com),
            Feature::IsWww => Indicator(self.is_www),
            Feature::IsDotOrg => Indicator(self.is_dot_org),
            Feature::IsAmpersand => Indicator(self.is_ampersand),
            Feature::IsSemicolon => Indicator(self.is_semicolon),
            Feature::IsTilde => Indicator(self.is_tilde),
        }
    }

    /// Iterate over `(feature, value)` pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, FeatureValue)> + '_ {
        Feature::ALL
            .into_iter()
            .map(move |feature| (feature, self.get(feature)))
    }

    /// Numeric row in output order, ready to be stacked into a table.
    pub fn to_row(&self) -> [f64; Feature::COUNT] {
        let mut row = [0.0; Feature::COUNT];
        for (slot, (_, value)) in row.iter_mut().zip(self.iter()) {
            *slot = value.as_f64();
        }
        row
    }

    /// Number of columns; always [`Feature::COUNT`].
    pub fn len(&self) -> usize {
        Feature::COUNT
    }

    /// Always `false`: a vector carries every column.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Feature::COUNT))?;
        for (feature, value) in self.iter() {
            map.serialize_entry(feature.name(), &value)?;
        }
        map.end()
    }
}
