/*!
 * Process Names
 * Inline-optimized process identifiers with resumption marker support
 */

use serde::{Deserialize, Serialize};
use smartstring::alias::String as SmartString;
use std::fmt;

/// Suffix appended to the name of a process re-injected after blocking
pub const RESUMED_MARKER: char = '*';

/// Process name stored inline when short (≤23 bytes on 64-bit)
///
/// Names are user-typed labels like `P1` or `editor`, so nearly all of
/// them stay off the heap even after several resumption markers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct ProcessName {
    inner: SmartString,
}

impl ProcessName {
    /// Get string slice
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Check if name is stored inline (no heap allocation)
    #[inline]
    pub fn is_inline(&self) -> bool {
        self.inner.is_inline()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Name of the instance created when this process resumes from the blocked queue
    #[must_use]
    pub fn resumed(&self) -> Self {
        let mut inner = self.inner.clone();
        inner.push(RESUMED_MARKER);
        Self { inner }
    }

    /// Number of times this name went through the blocking path
    pub fn resumptions(&self) -> usize {
        self.inner
            .chars()
            .rev()
            .take_while(|&c| c == RESUMED_MARKER)
            .count()
    }
}

impl From<&str> for ProcessName {
    #[inline]
    fn from(s: &str) -> Self {
        Self {
            inner: SmartString::from(s),
        }
    }
}

impl From<String> for ProcessName {
    #[inline]
    fn from(s: String) -> Self {
        Self {
            inner: SmartString::from(s),
        }
    }
}

impl AsRef<str> for ProcessName {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for ProcessName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ProcessName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for ProcessName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
