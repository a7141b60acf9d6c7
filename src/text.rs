//! Small string helpers for config values and record ids.

use std::collections::BTreeMap;
use std::hash::Hash;

use rustc_hash::FxHashSet;

/// Interpret a config string as a boolean.
///
/// Accepts `true`/`yes`/`1` and `false`/`no`/`0` in any case; anything else
/// yields `default`.
///
/// # Examples
/// ```
/// use ssg_util::text::bool_from_string;
/// assert_eq!(bool_from_string("Yes", None), Some(true));
/// assert_eq!(bool_from_string("0", None), Some(false));
/// assert_eq!(bool_from_string("maybe", Some(true)), Some(true));
/// ```
pub fn bool_from_string(value: &str, default: Option<bool>) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => default,
    }
}

/// Split a comma-delimited string into trimmed, non-empty pieces.
pub fn comma_delimited(s: &str) -> impl Iterator<Item = &str> {
    s.split(',').map(str::trim).filter(|part| !part.is_empty())
}

/// Turn `key:value` flags into a map; a bare `flag` maps to itself.
///
/// # Examples
/// ```
/// use ssg_util::text::process_extra_flags;
/// let flags = process_extra_flags(["draft", "lang:de", "url:http://x"]);
/// assert_eq!(flags["draft"], "draft");
/// assert_eq!(flags["lang"], "de");
/// assert_eq!(flags["url"], "http://x");
/// ```
pub fn process_extra_flags<I, S>(flags: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    flags
        .into_iter()
        .map(|flag| {
            let flag = flag.as_ref();
            match flag.split_once(':') {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => (flag.to_string(), flag.to_string()),
            }
        })
        .collect()
}

/// Yield each distinct item once, in first-seen order.
pub fn unique_everseen<I>(items: I) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    I::Item: Hash + Eq + Clone,
{
    let mut seen = FxHashSet::default();
    items.into_iter().filter(move |item| seen.insert(item.clone()))
}

/// Check whether `value` can be used as a record id.
///
/// The empty id (the root) is valid. Otherwise an id must not contain `/`
/// or whitespace and must not start with `.`.
pub fn is_valid_id(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    !value.contains('/') && !value.chars().any(char::is_whitespace) && !value.starts_with('.')
}
