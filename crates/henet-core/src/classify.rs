//! Pattern-based bucketing of search results.
//!
//! The patterns are unanchored and the IPv6 one is deliberately loose: any
//! decimal digit, any of `a`-`d`, a comma or `::` anywhere in the text counts.
//! Plain numbers and many words therefore classify as IPv6. Downstream
//! consumers depend on this exact behaviour, so it is not tightened here.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::RecordKind;

#[allow(clippy::expect_used)]
static ASN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"AS\d{1,12}").expect("valid ASN regex"));

#[allow(clippy::expect_used)]
static IPV4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").expect("valid IPv4 regex")
});

#[allow(clippy::expect_used)]
static IPV6_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9,a-d]|::)").expect("valid IPv6 regex"));

pub fn is_asn(text: &str) -> bool {
    ASN_PATTERN.is_match(text)
}

pub fn is_ipv4(text: &str) -> bool {
    IPV4_PATTERN.is_match(text)
}

pub fn is_ipv6(text: &str) -> bool {
    IPV6_PATTERN.is_match(text)
}

/// Classify a raw result string.
///
/// Precedence is fixed: ASN, then IPv4, then IPv6. Returns `None` when the
/// text matches none of the three.
pub fn classify(text: &str) -> Option<RecordKind> {
    if is_asn(text) {
        Some(RecordKind::Asn)
    } else if is_ipv4(text) {
        Some(RecordKind::Ipv4)
    } else if is_ipv6(text) {
        Some(RecordKind::Ipv6)
    } else {
        None
    }
}
