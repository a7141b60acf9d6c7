//! POSIX path normalization.
//!
//! Lexical only: `..` is resolved against the preceding segment, never
//! against the filesystem, so symlinks are not taken into account.

use std::path::PathBuf;

/// Normalize a slash-separated path the way POSIX `normpath` does.
///
/// - empty input becomes `"."`
/// - empty and `.` segments are dropped
/// - `..` removes the preceding segment, is dropped directly under a root,
///   and is kept when it leads a relative path
/// - exactly two leading slashes are preserved, three or more collapse to one
///
/// # Examples
/// ```
/// use ssg_util::path::normpath;
/// assert_eq!(normpath("a/./b/../c/"), "a/c");
/// assert_eq!(normpath("../a"), "../a");
/// assert_eq!(normpath("/../a"), "/a");
/// assert_eq!(normpath(""), ".");
/// ```
pub fn normpath(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let leading = if path.starts_with("//") && !path.starts_with("///") {
        2
    } else if path.starts_with('/') {
        1
    } else {
        0
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." if leading == 0 && segments.last().is_none_or(|last| *last == "..") => {
                segments.push(segment);
            }
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    let joined = format!("{}{}", "/".repeat(leading), segments.join("/"));
    if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Join two slash-separated paths the way POSIX `join` does.
///
/// An absolute `b` replaces `a` entirely; no normalization happens.
#[inline]
pub fn posix_join(a: &str, b: &str) -> String {
    if b.starts_with('/') {
        b.to_string()
    } else if a.is_empty() || a.ends_with('/') {
        format!("{a}{b}")
    } else {
        format!("{a}/{b}")
    }
}

/// Join then normalize.
#[inline]
pub(crate) fn norm_join(a: &str, b: &str) -> String {
    normpath(&posix_join(a, b))
}

/// Normalize a path as absolute, collapsing any run of leading slashes.
///
/// # Examples
/// ```
/// use ssg_util::path::cleanup_path;
/// assert_eq!(cleanup_path("blog/../about/"), "/about");
/// assert_eq!(cleanup_path("//x"), "/x");
/// assert_eq!(cleanup_path(".."), "/");
/// ```
#[inline]
pub fn cleanup_path(path: &str) -> String {
    normpath(&format!("/{}", path.trim_start_matches('/')))
}

/// Split a path into its cleaned-up segments.
///
/// `""`, `"/"`, `"."` and `".."` all yield no segments.
pub fn parse_path(path: &str) -> Vec<String> {
    let cleaned = cleanup_path(path);
    let trimmed = cleaned.trim_matches('/');
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('/').map(str::to_string).collect()
}

/// Turn a site path from untrusted input into a relative OS path.
///
/// Surrounding slashes are stripped and `/` becomes the platform separator.
/// Segments are not validated.
pub fn untrusted_to_os_path(path: &str) -> PathBuf {
    path.trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whether `name` contains a path separator of this platform.
pub fn is_path(name: &str) -> bool {
    name.chars().any(std::path::is_separator)
}
