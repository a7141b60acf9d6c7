//! Relative URLs between site paths.
//!
//! Everything here is lexical: a trailing slash is the only hint whether a
//! path names a directory.

use super::error::PathError;
use super::normalize::normpath;

/// Lexical POSIX path: root flag plus segments, without `.` segments.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PosixPath {
    absolute: bool,
    parts: Vec<String>,
}

impl PosixPath {
    fn parse(path: &str) -> Self {
        Self {
            absolute: path.starts_with('/'),
            parts: path
                .split('/')
                .filter(|s| !s.is_empty() && *s != ".")
                .map(str::to_string)
                .collect(),
        }
    }

    fn parent(mut self) -> Self {
        self.parts.pop();
        self
    }

    fn render(&self) -> String {
        let joined = self.parts.join("/");
        match (self.absolute, joined.is_empty()) {
            (true, _) => format!("/{joined}"),
            (false, true) => ".".to_string(),
            (false, false) => joined,
        }
    }
}

/// Relative path from directory `source` to `target`.
///
/// Both sides are interpreted lexically. An absolute source with a relative
/// target returns the target unchanged.
///
/// # Errors
///
/// [`PathError::RelativeToAbsolute`] if `source` is relative and `target`
/// is absolute.
///
/// # Examples
/// ```
/// use ssg_util::path::get_relative_path;
/// assert_eq!(get_relative_path("/a/b", "/a/b/c").unwrap(), "c");
/// assert_eq!(get_relative_path("/a/b", "/a/c").unwrap(), "../c");
/// assert_eq!(get_relative_path("/a", "/a").unwrap(), ".");
/// ```
pub fn get_relative_path(source: &str, target: &str) -> Result<String, PathError> {
    relative_between(&PosixPath::parse(source), &PosixPath::parse(target))
}

fn relative_between(source: &PosixPath, target: &PosixPath) -> Result<String, PathError> {
    match (source.absolute, target.absolute) {
        (false, true) => {
            return Err(PathError::RelativeToAbsolute {
                from: source.render(),
                to: target.render(),
            });
        }
        (true, false) => return Ok(target.render()),
        _ => {}
    }

    // Walk up from source until target lives under the ancestor. The empty
    // ancestor matches every target, so this always returns.
    let mut parts: Vec<&str> = Vec::new();
    for depth in (0..=source.parts.len()).rev() {
        let ancestor = &source.parts[..depth];
        if target.parts.starts_with(ancestor) {
            parts.extend(target.parts[depth..].iter().map(String::as_str));
            break;
        }
        parts.push("..");
    }

    Ok(if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    })
}

/// Relative URL to navigate from `source` to `target`.
///
/// A trailing slash marks a directory. A non-directory source is replaced
/// by its parent, and a directory target keeps its trailing slash.
///
/// # Examples
/// ```
/// use ssg_util::path::make_relative_url;
/// assert_eq!(make_relative_url("/", "/").unwrap(), "./");
/// assert_eq!(make_relative_url("/blog/", "/blog/post/").unwrap(), "post/");
/// assert_eq!(make_relative_url("/blog/index.html", "/about/").unwrap(), "../about/");
/// assert_eq!(make_relative_url("/a/", "/a/style.css").unwrap(), "style.css");
/// ```
pub fn make_relative_url(source: &str, target: &str) -> Result<String, PathError> {
    let source_is_dir = source.ends_with('/');
    let target_is_dir = target.ends_with('/');

    let mut source_path = PosixPath::parse(&normpath(source));
    let target_path = PosixPath::parse(&normpath(target));

    if !source_is_dir {
        source_path = source_path.parent();
    }

    let mut relpath = relative_between(&source_path, &target_path)?;
    if target_is_dir {
        relpath.push('/');
    }
    Ok(relpath)
}
