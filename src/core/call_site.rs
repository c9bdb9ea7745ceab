//! Call-site attribution
//!
//! Every leveled entry point on [`Logger`](crate::Logger) is
//! `#[track_caller]`, so the location handed to a resolver is the user code
//! that called the entry point (or expanded one of the logging macros), not
//! a frame inside the logger.

use std::fmt;
use std::panic::Location;

/// Placeholder used when no function name is known.
pub const ANONYMOUS: &str = "anonymous";

/// Placeholder file name when call-site information is unavailable.
pub const UNKNOWN_FILE: &str = "unknown";

/// Source location of a log call. Recomputed for every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
    pub function: String,
}

impl CallSite {
    pub fn unknown() -> Self {
        Self {
            file: UNKNOWN_FILE.to_string(),
            line: 0,
            function: ANONYMOUS.to_string(),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Turns a captured caller location into a [`CallSite`].
pub trait CallSiteResolver: Send + Sync {
    /// `strip` is removed (first occurrence) from the resolved basename.
    fn resolve(&self, caller: &Location<'_>, strip: Option<&str>) -> CallSite;
}

/// Resolver backed by the compiler-tracked caller location.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationResolver;

impl CallSiteResolver for LocationResolver {
    fn resolve(&self, caller: &Location<'_>, strip: Option<&str>) -> CallSite {
        CallSite {
            file: display_file(caller.file(), strip),
            line: caller.line(),
            function: ANONYMOUS.to_string(),
        }
    }
}

/// Resolver that always reports an unknown call site. Handy for
/// deterministic output in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownResolver;

impl CallSiteResolver for UnknownResolver {
    fn resolve(&self, _caller: &Location<'_>, _strip: Option<&str>) -> CallSite {
        CallSite::unknown()
    }
}

/// Portion of `path` after its last `/` or `\`.
pub fn basename(path: &str) -> &str {
    match path.rfind(|c: char| c == '/' || c == '\\') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// Basename with the first occurrence of `strip` removed.
pub fn display_file(path: &str, strip: Option<&str>) -> String {
    let name = basename(path);
    match strip {
        Some(s) if !s.is_empty() => name.replacen(s, "", 1),
        _ => name.to_string(),
    }
}
