//! `split` and `relative` output.

use anyhow::Result;

use crate::path::{VirtualPath, get_relative_path, make_relative_url};

/// Real part on the first line, `@virtual` on the second if present.
pub fn split(path: &str) -> String {
    let vpath = VirtualPath::split(path);
    match vpath.virtual_path {
        Some(virtual_path) => format!("{}\n@{virtual_path}", vpath.real),
        None => vpath.real.to_string(),
    }
}

pub fn relative(source: &str, target: &str, url: bool) -> Result<String> {
    let rel = if url {
        make_relative_url(source, target)?
    } else {
        get_relative_path(source, target)?
    };
    Ok(rel)
}
