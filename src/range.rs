//! Byte-range type for source assignments.

/// A byte range [start, end) (half-open) assigned to one source.
///
/// Which ranges a file is split into is decided by the pipeline; this core
/// only executes the read of one assigned range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    /// Start offset (inclusive).
    pub start: u64,
    /// End offset (exclusive).
    pub end: u64,
}

impl ByteRange {
    /// Range starting at `offset` spanning `length` bytes.
    pub fn at(offset: u64, length: u64) -> Self {
        ByteRange {
            start: offset,
            end: offset.saturating_add(length),
        }
    }

    /// Length of this range in bytes.
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// True if the range covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}
