//! Deprecation warnings for library entry points.
//!
//! A deprecated function calls [`Deprecation::call`] with its body. The
//! warning is logged once per outermost deprecated call: any deprecated
//! function reached from inside another one on the same thread stays quiet.
//!
//! # Example
//!
//! ```ignore
//! const OLD_JOIN: Deprecation = Deprecation::new("old_join")
//!     .reason("use join_path")
//!     .version("0.4");
//!
//! pub fn old_join(a: &str, b: &str) -> String {
//!     OLD_JOIN.call(|| join_path(a, b))
//! }
//! ```

use std::cell::Cell;
use std::fmt;
use std::panic::Location;

use crate::log;

thread_local! {
    /// How many deprecated calls are active on this thread.
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Decrements [`DEPTH`] on drop, including while unwinding.
struct DepthGuard;

impl DepthGuard {
    fn enter() -> Self {
        DEPTH.with(|depth| depth.set(depth.get() + 1));
        Self
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// Whether the current thread is inside a deprecated call.
pub fn is_suppressed() -> bool {
    DEPTH.with(|depth| depth.get() > 0)
}

/// Describes a deprecated name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deprecation {
    pub name: &'static str,
    pub reason: Option<&'static str>,
    pub version: Option<&'static str>,
}

impl Deprecation {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            reason: None,
            version: None,
        }
    }

    pub const fn reason(mut self, reason: &'static str) -> Self {
        self.reason = Some(reason);
        self
    }

    pub const fn version(mut self, version: &'static str) -> Self {
        self.version = Some(version);
        self
    }

    /// Log the warning, pointing at the caller.
    ///
    /// Returns `false` without logging when called from inside another
    /// deprecated call on this thread.
    #[track_caller]
    pub fn warn(&self) -> bool {
        self.warn_at(Location::caller())
    }

    fn warn_at(&self, location: &Location<'_>) -> bool {
        if is_suppressed() {
            return false;
        }
        log!("warning"; "{} ({}:{})", self, location.file(), location.line());
        true
    }

    /// Warn, then run `f` with nested deprecation warnings suppressed.
    #[track_caller]
    pub fn call<T>(&self, f: impl FnOnce() -> T) -> T {
        self.call_at(Location::caller(), f)
    }

    fn call_at<T>(&self, location: &Location<'_>, f: impl FnOnce() -> T) -> T {
        self.warn_at(location);
        let _guard = DepthGuard::enter();
        f()
    }

    /// Wrap `f` so every invocation behaves like [`call`](Self::call).
    ///
    /// Warnings point at the place `wrap` was called.
    #[track_caller]
    pub fn wrap<A, T>(self, f: impl Fn(A) -> T) -> impl Fn(A) -> T {
        let location = Location::caller();
        move |arg| self.call_at(location, || f(arg))
    }
}

impl fmt::Display for Deprecation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is deprecated", self.name)?;
        if let Some(reason) = self.reason {
            write!(f, " ({reason})")?;
        }
        if let Some(version) = self.version {
            write!(f, " since version {version}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OLD: Deprecation = Deprecation::new("old_fn").reason("use new_fn").version("0.4");
    const INNER: Deprecation = Deprecation::new("inner_fn");

    #[test]
    fn test_display() {
        assert_eq!(
            OLD.to_string(),
            "'old_fn' is deprecated (use new_fn) since version 0.4"
        );
        assert_eq!(INNER.to_string(), "'inner_fn' is deprecated");
        assert_eq!(
            Deprecation::new("x").version("1.0").to_string(),
            "'x' is deprecated since version 1.0"
        );
    }

    #[test]
    fn test_warn_outside_call() {
        assert!(!is_suppressed());
        assert!(OLD.warn());
    }

    #[test]
    fn test_nested_warnings_suppressed() {
        let (value, nested) = OLD.call(|| (42, INNER.warn()));
        assert_eq!(value, 42);
        assert!(!nested);
        assert!(!is_suppressed());
    }

    #[test]
    fn test_wrap_suppresses_each_call() {
        let wrapped = OLD.wrap(|n: i32| (n * 2, is_suppressed()));
        assert_eq!(wrapped(2), (4, true));
        assert_eq!(wrapped(5), (10, true));
        assert!(!is_suppressed());
    }

    #[test]
    fn test_panic_restores_depth() {
        let result = std::panic::catch_unwind(|| OLD.call(|| -> i32 { panic!("boom") }));
        assert!(result.is_err());
        assert!(!is_suppressed());
    }

    #[test]
    fn test_suppression_is_per_thread() {
        OLD.call(|| {
            let other = std::thread::spawn(|| INNER.warn()).join().unwrap();
            assert!(other);
        });
    }
}
