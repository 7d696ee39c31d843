//! Canonical plaintext construction.
//!
//! Two schemes exist. The SHA1 scheme concatenates the values of a fixed,
//! pre-declared field list with no delimiter, so field order carries all of
//! the structure. The SHA256 scheme sorts the participating field names,
//! escapes every token, and joins all keys followed by all values with `:`.
//! The keys-then-values layout (`k1:k2:..:kn:v1:v2:..:vn`) is what the
//! gateway computes; it must not be rewritten as interleaved pairs.

use std::collections::BTreeMap;

use crate::hpp::fields;

/// Concatenates the named fields' values in the given order.
///
/// Absent fields contribute the empty string, keeping the positions of the
/// documented field order intact. Present-but-empty values behave the same
/// way, with no special casing.
#[must_use]
pub fn concatenated(data: &BTreeMap<String, String>, field_order: &[&str]) -> String {
    let mut plaintext = String::new();
    for field in field_order {
        if let Some(value) = data.get(*field) {
            plaintext.push_str(value);
        }
    }
    plaintext
}

/// Builds the sorted escaped `k1:..:kn:v1:..:vn` plaintext.
///
/// With an include list, only listed fields actually present in `data`
/// participate; absent listed fields are dropped rather than signed as
/// empty. Without one, every field participates except `sig`,
/// `merchantSig`, and the `ignore.` namespace.
#[must_use]
pub fn sorted_escaped(data: &BTreeMap<String, String>, include: Option<&[&str]>) -> String {
    let mut keys: Vec<&str> = match include {
        Some(listed) => listed.iter().copied().filter(|f| data.contains_key(*f)).collect(),
        None => data
            .keys()
            .map(String::as_str)
            .filter(|name| !fields::is_excluded_from_signing(name))
            .collect(),
    };
    keys.sort_unstable();

    let values = keys.iter().map(|k| data.get(*k).map(String::as_str).unwrap_or_default());
    keys.iter()
        .copied()
        .map(escape)
        .chain(values.map(escape))
        .collect::<Vec<_>>()
        .join(":")
}

/// Doubles backslashes, then escapes colons with a backslash. The order
/// matters: escaping colons first would corrupt their new backslashes.
fn escape(token: &str) -> String {
    token.replace('\\', "\\\\").replace(':', "\\:")
}
