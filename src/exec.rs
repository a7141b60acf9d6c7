//! Executable lookup with an explicit cache.
//!
//! Lookups go through [`ExecutableLocator`], which memoizes results per
//! `(name, cwd)` until [`clear`](ExecutableLocator::clear) is called. Create
//! one per build (or per test) instead of relying on process-wide state.
//!
//! # Example
//!
//! ```ignore
//! let locator = ExecutableLocator::from_env();
//! let mut cmd = locator.command(&["tailwindcss", "-i", "input.css"], Some(root))?;
//! let status = cmd.status()?;
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::debug;

/// Errors from building a command for an external program.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("no executable specified")]
    NoExecutable,

    #[error("could not locate executable `{0}`")]
    NotFound(String),
}

type CacheKey = (String, Option<PathBuf>);

/// Resolves program names against a search path, caching every answer.
#[derive(Debug, Default)]
pub struct ExecutableLocator {
    search_path: Option<OsString>,
    cache: Mutex<FxHashMap<CacheKey, Option<PathBuf>>>,
}

impl ExecutableLocator {
    /// Search the directories of the `PATH` environment variable.
    pub fn from_env() -> Self {
        Self {
            search_path: std::env::var_os("PATH"),
            ..Default::default()
        }
    }

    /// Search exactly the given `PATH`-style list.
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
            ..Default::default()
        }
    }

    /// Search `dirs` first, then `PATH`.
    pub fn with_extra_dirs(dirs: &[PathBuf]) -> Self {
        let env_dirs = std::env::var_os("PATH")
            .map(|p| std::env::split_paths(&p).collect::<Vec<_>>())
            .unwrap_or_default();

        let search_path = std::env::join_paths(dirs.iter().cloned().chain(env_dirs))
            .ok()
            .or_else(|| std::env::var_os("PATH"));

        Self {
            search_path,
            ..Default::default()
        }
    }

    /// Resolve `name` to an executable path.
    ///
    /// Bare names are searched in the search path. Names containing a path
    /// separator are resolved against `cwd` (default: the process working
    /// directory) only. Misses are cached too.
    pub fn locate(&self, name: &str, cwd: Option<&Path>) -> Option<PathBuf> {
        let key = (name.to_string(), cwd.map(Path::to_path_buf));
        if let Some(hit) = self.cache.lock().get(&key) {
            return hit.clone();
        }

        let resolved = self.resolve(name, cwd);
        debug!("exec"; "{} -> {:?}", name, resolved);
        self.cache.lock().insert(key, resolved.clone());
        resolved
    }

    fn resolve(&self, name: &str, cwd: Option<&Path>) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }
        let cwd = match cwd {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };
        which::which_in(name, self.search_path.as_ref(), cwd).ok()
    }

    /// Build a [`Command`] for `argv`, resolving `argv[0]` first.
    ///
    /// # Errors
    ///
    /// [`ExecError::NoExecutable`] for an empty `argv`, [`ExecError::NotFound`]
    /// if the program cannot be located.
    pub fn command<S: AsRef<str>>(&self, argv: &[S], cwd: Option<&Path>) -> Result<Command, ExecError> {
        let (program, args) = argv.split_first().ok_or(ExecError::NoExecutable)?;
        let program = program.as_ref();
        let exe = self
            .locate(program, cwd)
            .ok_or_else(|| ExecError::NotFound(program.to_string()))?;

        let mut cmd = Command::new(exe);
        cmd.args(args.iter().map(AsRef::as_ref));
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        Ok(cmd)
    }

    /// Number of cached lookups (hits and misses).
    pub fn cached(&self) -> usize {
        self.cache.lock().len()
    }

    /// Forget every cached lookup.
    pub fn clear(&self) {
        self.cache.lock().clear();
    }
}
