// crates/rewire-binary/src/version.rs

//! Three-part format version governing decode behavior.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered (major, minor, patch) triple.
///
/// Comparison is lexicographic, so `Version::new(1, 2, 0) > Version::new(1, 1, 9)`.
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Version {
    /// Major component.
    pub major: u16,
    /// Minor component.
    pub minor: u16,
    /// Patch component.
    pub patch: u16,
}

impl Version {
    /// The newest version this crate emits.
    pub const CURRENT: Self = Self::new(1, 2, 0);

    /// First version carrying the header size field (and thus streamable).
    pub const SIZED: Self = Self::new(1, 2, 0);

    /// First version with string-literal nodes and the raw-term convention.
    pub const STRING_LITERALS: Self = Self::new(1, 1, 0);

    /// Construct a version triple.
    #[inline]
    #[must_use]
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Whether buffers at this version carry the optional size field.
    #[inline]
    #[must_use]
    pub fn has_size_field(self) -> bool {
        self >= Self::SIZED
    }

    /// Whether this version's tag table includes string literals.
    #[inline]
    #[must_use]
    pub fn has_string_literals(self) -> bool {
        self >= Self::STRING_LITERALS
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Version::new(1, 2, 0) > Version::new(1, 1, 9));
        assert!(Version::new(2, 0, 0) > Version::new(1, 9, 9));
        assert!(Version::new(1, 2, 1) > Version::new(1, 2, 0));
    }

    #[test]
    fn feature_gates() {
        assert!(!Version::new(1, 0, 0).has_string_literals());
        assert!(Version::new(1, 1, 0).has_string_literals());
        assert!(!Version::new(1, 1, 0).has_size_field());
        assert!(Version::CURRENT.has_size_field());
    }

    #[test]
    fn display() {
        assert_eq!(Version::CURRENT.to_string(), "1.2.0");
    }
}
