//! JSON helpers.
//!
//! - `htmlsafe_json_dump` - JSON that can be embedded in `<script>` tags
//! - `resolve_dotted_value` / `iter_dotted_path_prefixes` - `a.b.0` lookups
//! - `decode_flat_data` - rebuild nested data from dotted keys
//! - `merge` - recursive merge where `null` means absent

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

/// Serialize `value` as JSON safe to embed in HTML.
///
/// `<`, `>`, `&` and `'` are emitted as `\u` escapes, so the output can be
/// placed inside `<script>` elements and single-quoted attributes.
///
/// # Examples
/// ```
/// use ssg_util::json::htmlsafe_json_dump;
/// let s = htmlsafe_json_dump(&"</script>").unwrap();
/// assert_eq!(s, r#""\u003c/script\u003e""#);
/// ```
pub fn htmlsafe_json_dump<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace('\'', "\\u0027"))
}

/// Every split of a dotted path into a head and a remainder.
///
/// # Examples
/// ```
/// use ssg_util::json::iter_dotted_path_prefixes;
/// let prefixes: Vec<_> = iter_dotted_path_prefixes("a.b.c").collect();
/// assert_eq!(prefixes, [("a", Some("b.c")), ("a.b", Some("c"))]);
/// let single: Vec<_> = iter_dotted_path_prefixes("a").collect();
/// assert_eq!(single, [("a", None)]);
/// ```
pub fn iter_dotted_path_prefixes(dotted_path: &str) -> impl Iterator<Item = (&str, Option<&str>)> {
    let dots: Vec<usize> = dotted_path.match_indices('.').map(|(i, _)| i).collect();
    let single = dots.is_empty().then_some((dotted_path, None));
    let splits = dots
        .into_iter()
        .map(move |i| (&dotted_path[..i], Some(&dotted_path[i + 1..])));
    single.into_iter().chain(splits)
}

/// Follow a dotted path through objects (by key) and arrays (by index).
///
/// A missing step or a `null` value yields `None`.
pub fn resolve_dotted_value<'a>(value: &'a JsonValue, dotted_path: &str) -> Option<&'a JsonValue> {
    let mut node = value;
    for key in dotted_path.split('.') {
        node = match node {
            JsonValue::Object(map) => map.get(key)?,
            JsonValue::Array(items) => items.get(key.parse::<usize>().ok()?)?,
            _ => return None,
        };
        if node.is_null() {
            return None;
        }
    }
    Some(node)
}

// ============================================================================
// Flat data decoding
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum FlatKey {
    Index(u64),
    Name(String),
}

impl FlatKey {
    fn parse(part: &str) -> Self {
        if !part.is_empty()
            && part.bytes().all(|b| b.is_ascii_digit())
            && let Ok(i) = part.parse()
        {
            return Self::Index(i);
        }
        Self::Name(part.to_string())
    }

    fn into_string(self) -> String {
        match self {
            Self::Index(i) => i.to_string(),
            Self::Name(name) => name,
        }
    }
}

#[derive(Debug, Default)]
struct FlatNode {
    value: Option<JsonValue>,
    /// Whether the most recently entered child key was numeric.
    is_list: bool,
    /// Children in insertion order.
    children: Vec<(FlatKey, FlatNode)>,
}

impl FlatNode {
    fn child(&mut self, key: FlatKey) -> &mut FlatNode {
        self.is_list = matches!(key, FlatKey::Index(_));
        let idx = match self.children.iter().position(|(k, _)| *k == key) {
            Some(idx) => idx,
            None => {
                self.children.push((key, FlatNode::default()));
                self.children.len() - 1
            }
        };
        &mut self.children[idx].1
    }

    fn into_value(self) -> JsonValue {
        if let Some(value) = self.value {
            if self.children.is_empty() {
                return value;
            }
            // Children win over a value stored at the same key
            return Self::into_object(self.children);
        }
        if self.is_list {
            let mut children = self.children;
            children.sort_by(|a, b| a.0.cmp(&b.0));
            JsonValue::Array(children.into_iter().map(|(_, n)| n.into_value()).collect())
        } else {
            Self::into_object(self.children)
        }
    }

    fn into_object(children: Vec<(FlatKey, FlatNode)>) -> JsonValue {
        let map: Map<String, JsonValue> = children
            .into_iter()
            .map(|(k, n)| (k.into_string(), n.into_value()))
            .collect();
        JsonValue::Object(map)
    }
}

/// Rebuild nested data from `(dotted.key, value)` pairs.
///
/// Numeric segments produce arrays ordered by index (gaps are closed).
/// Later pairs for the same key win.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use ssg_util::json::decode_flat_data;
/// let data = decode_flat_data([
///     ("title", json!("Home")),
///     ("tags.1", json!("rust")),
///     ("tags.0", json!("ssg")),
///     ("author.name", json!("Ada")),
/// ]);
/// assert_eq!(data, json!({
///     "title": "Home",
///     "tags": ["ssg", "rust"],
///     "author": {"name": "Ada"},
/// }));
/// ```
pub fn decode_flat_data<I, K>(items: I) -> JsonValue
where
    I: IntoIterator<Item = (K, JsonValue)>,
    K: AsRef<str>,
{
    let mut root = FlatNode::default();
    for (key, value) in items {
        let mut node = &mut root;
        for part in key.as_ref().split('.') {
            node = node.child(FlatKey::parse(part));
        }
        node.value = Some(value);
    }

    if root.children.is_empty() {
        return JsonValue::Object(Map::new());
    }
    root.into_value()
}

/// Merge `b` into `a`.
///
/// `null` counts as absent on either side. Objects merge recursively, arrays
/// merge element-wise over their common length (keeping `a`'s length), and
/// any other combination keeps `a`.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use ssg_util::json::merge;
/// let merged = merge(json!({"a": 1, "b": {"c": null}}), json!({"b": {"c": 2}, "d": 3}));
/// assert_eq!(merged, json!({"a": 1, "b": {"c": 2}, "d": 3}));
/// ```
pub fn merge(a: JsonValue, b: JsonValue) -> JsonValue {
    match (a, b) {
        (JsonValue::Null, b) => b,
        (a, JsonValue::Null) => a,
        (JsonValue::Array(a_items), JsonValue::Array(b_items)) => {
            let mut b_iter = b_items.into_iter();
            let merged = a_items
                .into_iter()
                .map(|item| match b_iter.next() {
                    Some(other) => merge(item, other),
                    None => item,
                })
                .collect();
            JsonValue::Array(merged)
        }
        (JsonValue::Object(mut a_map), JsonValue::Object(b_map)) => {
            for (key, value) in b_map {
                match a_map.get_mut(&key) {
                    Some(slot) => *slot = merge(slot.take(), value),
                    None => {
                        a_map.insert(key, value);
                    }
                }
            }
            JsonValue::Object(a_map)
        }
        (a, _) => a,
    }
}
