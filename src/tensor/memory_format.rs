//! Memory format tags

use std::fmt;

/// Declared physical layout of a tensor's elements
///
/// This wraps the raw tag an operator receives, so values outside the known
/// enumeration stay representable and can be rejected explicitly instead of
/// being silently mapped to a known format.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct MemoryFormat(i8);

impl MemoryFormat {
    /// Row-major, densely packed
    pub const CONTIGUOUS: Self = Self(0);
    /// Keep whatever layout the input has
    pub const PRESERVE: Self = Self(1);

    /// Wrap a raw tag, known or not
    #[inline]
    pub const fn from_raw(raw: i8) -> Self {
        Self(raw)
    }

    /// Raw tag value
    #[inline]
    pub const fn raw(self) -> i8 {
        self.0
    }

    /// Whether the tag names a format in the enumeration
    #[inline]
    pub const fn is_known(self) -> bool {
        matches!(self.0, 0 | 1)
    }

    /// Short name, or `None` for an unknown tag
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("contiguous"),
            1 => Some("preserve"),
            _ => None,
        }
    }
}

impl Default for MemoryFormat {
    fn default() -> Self {
        Self::CONTIGUOUS
    }
}

impl fmt::Display for MemoryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "unknown({})", self.0),
        }
    }
}
