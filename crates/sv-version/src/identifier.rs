//! Pre-release and build metadata identifiers.

use std::cmp::Ordering;

use tracing::trace;

/// Reduce a raw token to a valid identifier.
///
/// Only ASCII letters, digits and hyphens are kept, anything else is dropped.
/// When `numeric` is set and the remaining token is made of digits only, its
/// leading zeros are stripped, leaving at least a single `0`.
///
/// The result may be empty if the token had no permitted characters.
pub fn sanitize(token: &str, numeric: bool) -> String {
    let mut out = String::with_capacity(token.len());
    let mut letter = false;
    let mut digit = false;
    let mut hyphen = false;

    for ch in token.chars() {
        match ch {
            'a'..='z' | 'A'..='Z' => letter = true,
            '0'..='9' => digit = true,
            '-' => hyphen = true,
            _ => continue,
        }
        out.push(ch);
    }

    if out.len() != token.len() {
        trace!("Dropped invalid characters from identifier {token:?}, kept {out:?}");
    }

    if numeric && digit && !letter && !hyphen {
        let stripped = out.trim_start_matches('0');
        if stripped.is_empty() {
            return "0".to_string();
        }
        if stripped.len() != out.len() {
            return stripped.to_string();
        }
    }

    out
}

/// The integer value of an identifier, if it parses as a signed 64-bit integer.
pub fn numeric_value(identifier: &str) -> Option<i64> {
    identifier.parse().ok()
}

/// Precedence of two pre-release identifiers.
///
/// Two integers compare by value, anything else compares byte-wise as text.
pub fn compare(a: &str, b: &str) -> Ordering {
    match (numeric_value(a), numeric_value(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

/// Precedence of two pre-release identifier lists.
///
/// The first differing position decides. If one list is a prefix of the other,
/// the longer list has the lower precedence, so `alpha.1` sorts before `alpha`
/// and any pre-release sorts before no pre-release at all.
pub fn compare_lists(a: &[String], b: &[String]) -> Ordering {
    for (a, b) in a.iter().zip(b) {
        match compare(a, b) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    b.len().cmp(&a.len())
}
