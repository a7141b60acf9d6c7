//! Virtual path algebra.
//!
//! A site path may carry a virtual suffix after `@` that addresses a
//! synthetic sub-resource of the record named by the real part, e.g.
//! `/blog@2` for the second page of the blog listing.
//!
//! ```text
//! /blog/post@assets/thumb
//! └───┬────┘ └────┬─────┘
//!    real      virtual
//! ```

use std::fmt;

use super::normalize::{norm_join, parse_path};

/// Separator between the real and the virtual part.
pub const VIRTUAL_SEPARATOR: char = '@';

/// A path split into its real part and optional virtual part.
///
/// Invariants:
/// - `real` never contains `@`
/// - `virtual_path` is `Some` iff the source string contained `@`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VirtualPath<'a> {
    pub real: &'a str,
    pub virtual_path: Option<&'a str>,
}

impl<'a> VirtualPath<'a> {
    /// Split on the first `@`. No normalization is performed.
    ///
    /// # Examples
    /// ```
    /// use ssg_util::VirtualPath;
    /// let p = VirtualPath::split("/blog@2");
    /// assert_eq!(p.real, "/blog");
    /// assert_eq!(p.virtual_path, Some("2"));
    /// assert_eq!(VirtualPath::split("/blog").virtual_path, None);
    /// ```
    pub fn split(path: &'a str) -> Self {
        match path.split_once(VIRTUAL_SEPARATOR) {
            Some((real, virtual_path)) => Self {
                real,
                virtual_path: Some(virtual_path),
            },
            None => Self {
                real: path,
                virtual_path: None,
            },
        }
    }

    /// The virtual part, with an empty one treated as absent.
    #[inline]
    fn virtual_part(&self) -> Option<&'a str> {
        self.virtual_path.filter(|v| !v.is_empty())
    }

    /// Whether the virtual part is a pagination index (`@1`, `@23`).
    #[inline]
    pub fn is_paginated(&self) -> bool {
        self.virtual_part()
            .is_some_and(|v| v.chars().all(is_digit))
    }

    /// Whether this path refers to itself (`""` or `"."`) when used as the
    /// right-hand side of a join.
    #[inline]
    fn is_current(&self) -> bool {
        matches!(self.real, "" | ".")
    }

    /// Canonical string form: `real` or `real@virtual`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VirtualPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.virtual_path {
            Some(v) => write!(f, "{}{}{}", self.real, VIRTUAL_SEPARATOR, v),
            None => f.write_str(self.real),
        }
    }
}

/// Unicode digit test: decimal digits of any script plus digit-valued
/// forms such as superscripts. Fractions and letter numbers (`½`, `Ⅻ`)
/// are numeric but not digits.
fn is_digit(c: char) -> bool {
    if c.is_ascii_digit() {
        return true;
    }
    if !c.is_numeric() || c.is_alphabetic() {
        return false;
    }
    !matches!(c, '\u{00BC}'..='\u{00BE}' | '\u{2150}'..='\u{215F}' | '\u{2189}')
}

/// Split a path into `(real, virtual)`.
#[inline]
pub fn split_virtual_path(path: &str) -> (&str, Option<&str>) {
    let p = VirtualPath::split(path);
    (p.real, p.virtual_path)
}

/// Join `b` onto `a`, both possibly carrying a virtual suffix.
///
/// - a virtual part on `b` always wins and is appended to the joined real path
/// - otherwise a virtual part on `a` is joined into, staying virtual
/// - a pagination index on `a` is dropped unless `b` is `""` or `"."`,
///   so joining past `/blog@2` lands in `/blog`'s real hierarchy
/// - an empty virtual path (`@.`) collapses to the real path
///
/// Never fails; malformed input yields some path.
///
/// # Examples
/// ```
/// use ssg_util::join_path;
/// assert_eq!(join_path("/blog", "post"), "/blog/post");
/// assert_eq!(join_path("/blog@2", "post"), "/blog/post");
/// assert_eq!(join_path("/blog@2", "."), "/blog@2");
/// assert_eq!(join_path("/gallery@assets", "thumb"), "/gallery@assets/thumb");
/// assert_eq!(join_path("/gallery@assets", ".."), "/gallery");
/// ```
pub fn join_path(a: &str, b: &str) -> String {
    let a = VirtualPath::split(a);
    let b = VirtualPath::split(b);

    let a_virtual = if !b.is_current() && a.is_paginated() {
        None
    } else {
        a.virtual_part()
    };

    let joined = if let Some(b_virtual) = b.virtual_part() {
        format!("{}{}{}", norm_join(a.real, b.real), VIRTUAL_SEPARATOR, b_virtual)
    } else if let Some(a_virtual) = a_virtual {
        format!("{}{}{}", a.real, VIRTUAL_SEPARATOR, norm_join(a_virtual, b.real))
    } else {
        norm_join(a.real, b.real)
    };

    match joined.strip_suffix("@.") {
        Some(stripped) => stripped.to_string(),
        None => joined,
    }
}

/// Check whether `a` is nested under `b`, accounting for virtual paths.
///
/// With `strict`, a path is not a child of itself.
///
/// # Examples
/// ```
/// use ssg_util::is_path_child_of;
/// assert!(is_path_child_of("a/b", "a", true));
/// assert!(!is_path_child_of("a", "a", true));
/// assert!(is_path_child_of("a", "a", false));
/// assert!(is_path_child_of("a@1/2", "a@1", true));
/// assert!(!is_path_child_of("a", "a@1", true));
/// ```
pub fn is_path_child_of(a: &str, b: &str, strict: bool) -> bool {
    let a = Segments::of(a);
    let b = Segments::of(b);

    if !strict && a == b {
        return true;
    }
    if a.virtual_path.is_empty() && !b.virtual_path.is_empty() {
        return false;
    }
    if a.real == b.real && is_strict_prefix(&b.virtual_path, &a.virtual_path) {
        return true;
    }
    is_strict_prefix(&b.real, &a.real)
}

/// Cleaned-up segments of both parts of a virtual path.
#[derive(Debug, PartialEq, Eq)]
struct Segments {
    real: Vec<String>,
    virtual_path: Vec<String>,
}

impl Segments {
    fn of(path: &str) -> Self {
        let p = VirtualPath::split(path);
        Self {
            real: parse_path(p.real),
            virtual_path: parse_path(p.virtual_path.unwrap_or_default()),
        }
    }
}

/// `prefix` is a proper prefix of `full`.
#[inline]
fn is_strict_prefix(prefix: &[String], full: &[String]) -> bool {
    full.len() > prefix.len() && full.starts_with(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::normpath;

    #[test]
    fn test_split() {
        assert_eq!(split_virtual_path("a/b"), ("a/b", None));
        assert_eq!(split_virtual_path("a@b"), ("a", Some("b")));
        assert_eq!(split_virtual_path("a@b@c"), ("a", Some("b@c")));
        assert_eq!(split_virtual_path("a@"), ("a", Some("")));
        assert_eq!(split_virtual_path("@x"), ("", Some("x")));
        assert_eq!(split_virtual_path(""), ("", None));
    }

    #[test]
    fn test_render_round_trips() {
        for path in ["a", "a@b", "a@", "/x/y@1/z", ""] {
            assert_eq!(VirtualPath::split(path).render(), path);
        }
    }

    #[test]
    fn test_is_paginated() {
        assert!(VirtualPath::split("/blog@2").is_paginated());
        assert!(VirtualPath::split("/blog@10").is_paginated());
        assert!(!VirtualPath::split("/blog@2x").is_paginated());
        assert!(!VirtualPath::split("/blog@").is_paginated());
        assert!(!VirtualPath::split("/blog").is_paginated());
        assert!(VirtualPath::split("/blog@\u{0663}").is_paginated());
        assert!(VirtualPath::split("/blog@\u{FF13}").is_paginated());
        assert!(VirtualPath::split("/blog@\u{00B2}").is_paginated());
        assert!(!VirtualPath::split("/blog@\u{00BD}").is_paginated());
        assert!(!VirtualPath::split("/blog@\u{216B}").is_paginated());
    }

    #[test]
    fn test_join_plain() {
        assert_eq!(join_path("a", "b"), "a/b");
        assert_eq!(join_path("/a/b", "../c"), "/a/c");
        assert_eq!(join_path("/a", "/b"), "/b");
        assert_eq!(join_path("a", ".."), ".");
        assert_eq!(join_path("", ".."), "..");
    }

    #[test]
    fn test_join_drops_unicode_page_index() {
        assert_eq!(join_path("a@\u{0663}", "b"), "a/b");
        assert_eq!(join_path("a@\u{FF13}", "b"), "a/b");
        assert_eq!(join_path("a@\u{0663}", "."), "a@\u{0663}");
    }

    #[test]
    fn test_join_dot_is_normalize() {
        for a in ["a", "/a/b/", "a/./b", "a/../b", "/", ""] {
            assert_eq!(join_path(a, "."), normpath(a), "join({a:?}, \".\")");
        }
    }

    #[test]
    fn test_join_keeps_virtual_of_b() {
        assert_eq!(join_path("/a", "b@x/y"), "/a/b@x/y");
        assert_eq!(join_path("/a@sub", "b@v"), "/a/b@v");
        assert_eq!(join_path("/a@2", "b@v"), "/a/b@v");
        let joined = join_path("/a/./c", "../b@page");
        assert_eq!(split_virtual_path(&joined).1, Some("page"));
    }

    #[test]
    fn test_join_pagination_discarded() {
        assert_eq!(join_path("a@2", "sibling"), join_path("a", "sibling"));
        assert_eq!(join_path("/blog@3", "../about"), "/about");
    }

    #[test]
    fn test_join_pagination_kept_for_current() {
        assert_eq!(join_path("a@2", "."), "a@2");
        assert_eq!(join_path("a@2", ""), "a@2");
    }

    #[test]
    fn test_join_inside_virtual() {
        assert_eq!(join_path("a@sub", "b"), format!("a@{}", normpath("sub/b")));
        assert_eq!(join_path("a@sub/x", "../y"), "a@sub/y");
        // Real part is carried over untouched
        assert_eq!(join_path("a/./b@sub", "c"), "a/./b@sub/c");
    }

    #[test]
    fn test_join_strips_empty_virtual() {
        assert_eq!(join_path("a@sub", ".."), "a");
        assert_eq!(join_path("a@sub", "."), "a@sub");
        // Empty virtual parts behave as absent
        assert_eq!(join_path("a@", "b"), "a/b");
        assert_eq!(join_path("a", "b@"), "a/b");
    }

    #[test]
    fn test_child_of_real() {
        assert!(is_path_child_of("a/b", "a", true));
        assert!(is_path_child_of("/a/b/c", "/a", true));
        assert!(!is_path_child_of("a", "a", true));
        assert!(is_path_child_of("a", "a", false));
        assert!(!is_path_child_of("a", "a/b", true));
        assert!(!is_path_child_of("ab", "a", true));
        assert!(is_path_child_of("a", "", true));
        assert!(is_path_child_of("a/./b/", "/a", true));
    }

    #[test]
    fn test_child_of_virtual() {
        assert!(is_path_child_of("a@1/2", "a@1", true));
        assert!(is_path_child_of("a@1", "a", true));
        assert!(!is_path_child_of("a", "a@1", true));
        assert!(!is_path_child_of("a", "a@1", false));
        assert!(!is_path_child_of("a@1", "a@1", true));
        assert!(is_path_child_of("a@1", "a@1", false));
        assert!(!is_path_child_of("a@2", "a@1", true));
        // Nested real path under a virtual parent
        assert!(is_path_child_of("a/b@x", "a@y", true));
    }

    #[test]
    fn test_child_of_empty_inputs() {
        assert!(!is_path_child_of("", "", true));
        assert!(is_path_child_of("", "", false));
        assert!(is_path_child_of("/", ".", false));
        assert!(!is_path_child_of("", "/", true));
    }
}
