//! Atomic file replacement.
//!
//! Content is written to a temp file next to the target, then renamed over
//! it. Readers see either the old file or the complete new one, never a
//! partial write. Concurrent writers to the same target race only at the
//! rename: the last rename wins.
//!
//! # Example
//!
//! ```no_run
//! use std::io::Write;
//! use ssg_util::{OpenMode, with_atomic_open};
//!
//! with_atomic_open("public/index.html", OpenMode::Write, |f| {
//!     f.write_all(b"<!doctype html>")
//! })?;
//! # Ok::<(), std::io::Error>(())
//! ```

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::debug;

/// Prefix of temp files created next to the target.
pub const TEMP_PREFIX: &str = ".__atomic-write";

/// Permission bits of every atomically written file, independent of umask.
#[cfg(unix)]
pub const FILE_MODE: u32 = 0o644;

/// How [`open_atomic`] should open a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Plain read-only open; no temp file involved.
    Read,
    /// Write to a temp file that replaces the target on finish.
    Write,
}

// ============================================================================
// AtomicFile
// ============================================================================

/// A pending replacement of `target`.
///
/// Writes go to a temp file in the target's directory. [`commit`](Self::commit)
/// renames it over the target; dropping the value without committing removes
/// the temp file and leaves the target untouched.
#[derive(Debug)]
pub struct AtomicFile {
    target: PathBuf,
    temp: NamedTempFile,
}

impl AtomicFile {
    /// Create the temp file for a pending write to `path`.
    ///
    /// # Errors
    ///
    /// Fails if the temp file cannot be created (missing directory, no
    /// permission) or its mode cannot be set. Nothing is left behind.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let target = path.as_ref().to_path_buf();
        let temp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .tempfile_in(temp_dir_for(&target))?;
        set_file_mode(temp.path())?;

        debug!("atomic"; "{} -> {}", temp.path().display(), target.display());
        Ok(Self { target, temp })
    }

    /// Final path this write replaces.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Current location of the pending content.
    pub fn temp_path(&self) -> &Path {
        self.temp.path()
    }

    /// Flush and rename the temp file over the target.
    ///
    /// On failure the temp file is removed and the target is untouched.
    pub fn commit(self) -> io::Result<()> {
        let Self { target, mut temp } = self;
        temp.flush()?;
        temp.persist(&target).map_err(|e| e.error)?;
        debug!("atomic"; "committed {}", target.display());
        Ok(())
    }

    /// Remove the temp file without touching the target.
    ///
    /// Removal errors are logged and otherwise ignored.
    pub fn discard(self) {
        let path = self.temp.path().to_path_buf();
        if let Err(e) = self.temp.close() {
            debug!("atomic"; "failed to remove {}: {}", path.display(), e);
        }
    }
}

impl Write for AtomicFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.temp.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.temp.flush()
    }
}

/// Directory the temp file for `target` is created in.
fn temp_dir_for(target: &Path) -> &Path {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(unix)]
fn set_file_mode(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(FILE_MODE))
}

#[cfg(not(unix))]
fn set_file_mode(_path: &Path) -> io::Result<()> {
    Ok(())
}

// ============================================================================
// Mode-dispatching handle
// ============================================================================

/// Handle returned by [`open_atomic`].
#[derive(Debug)]
pub enum AtomicHandle {
    Read(File),
    Write(AtomicFile),
}

impl AtomicHandle {
    /// Close the handle, committing a pending write.
    pub fn finish(self) -> io::Result<()> {
        match self {
            Self::Read(_) => Ok(()),
            Self::Write(file) => file.commit(),
        }
    }

    /// Close the handle, dropping a pending write.
    pub fn abort(self) {
        if let Self::Write(file) = self {
            file.discard();
        }
    }
}

impl Read for AtomicHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Read(file) => file.read(buf),
            Self::Write(_) => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "handle opened for writing",
            )),
        }
    }
}

impl Write for AtomicHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Read(_) => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "handle opened for reading",
            )),
            Self::Write(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Read(_) => Ok(()),
            Self::Write(file) => file.flush(),
        }
    }
}

/// Open `path` for reading, or for atomic replacement.
pub fn open_atomic(path: impl AsRef<Path>, mode: OpenMode) -> io::Result<AtomicHandle> {
    match mode {
        OpenMode::Read => File::open(path).map(AtomicHandle::Read),
        OpenMode::Write => AtomicFile::create(path).map(AtomicHandle::Write),
    }
}

/// Run `f` against a handle opened with [`open_atomic`].
///
/// On `Ok` the handle is finished (the write committed); on `Err` the temp
/// file is removed and `f`'s error is returned unchanged. Open and commit
/// failures are converted through `From<io::Error>`.
pub fn with_atomic_open<T, E, F>(path: impl AsRef<Path>, mode: OpenMode, f: F) -> Result<T, E>
where
    F: FnOnce(&mut AtomicHandle) -> Result<T, E>,
    E: From<io::Error>,
{
    let mut handle = open_atomic(path, mode)?;
    match f(&mut handle) {
        Ok(value) => {
            handle.finish()?;
            Ok(value)
        }
        Err(e) => {
            handle.abort();
            Err(e)
        }
    }
}

/// Atomically replace `path` with `contents`.
pub fn write_atomic(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> io::Result<()> {
    let mut file = AtomicFile::create(path)?;
    file.write_all(contents.as_ref())?;
    file.commit()
}

// ============================================================================
// Tests
// ============================================================================
