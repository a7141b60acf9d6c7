//! Path utilities.
//!
//! Pure functions over slash-separated paths. No filesystem access.
//!
//! - [`normalize`]: POSIX `normpath`/`join` semantics (`normpath`, `posix_join`, `cleanup_path`)
//! - [`vpath`]: virtual path algebra (`join_path`, `is_path_child_of`)
//! - [`relative`]: relative URLs between site paths (`make_relative_url`)
//! - [`ext`]: extension splitting (`magic_split_ext`)

mod error;
pub mod ext;
pub mod normalize;
pub mod relative;
pub mod vpath;

pub use error::PathError;
pub use ext::magic_split_ext;
pub use normalize::{cleanup_path, is_path, normpath, parse_path, posix_join, untrusted_to_os_path};
pub use relative::{get_relative_path, make_relative_url};
pub use vpath::{VirtualPath, is_path_child_of, join_path, split_virtual_path};
