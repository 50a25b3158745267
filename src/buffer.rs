//! Per-worker reusable read buffer.
//!
//! Each worker thread owns one `ChunkBuffer` and lends it (`&mut`) to every
//! byte source it drives, one source at a time. Reuse across thousands of
//! sequential sources is what bounds allocation overhead on the hot path;
//! exclusive borrows are what make the single-active-user rule a
//! compile-time fact instead of a convention.

/// Grow-only scratch region for chunk reads.
///
/// Capacity is monotonically non-decreasing: `acquire` replaces the region
/// with a larger one when asked, and never shrinks it. Contents are
/// unspecified between reads; every read fully overwrites the prefix it
/// returns.
#[derive(Debug, Default)]
pub struct ChunkBuffer {
    storage: Vec<u8>,
}

impl ChunkBuffer {
    /// Empty buffer. No allocation happens until the first `acquire`.
    pub fn new() -> Self {
        ChunkBuffer::default()
    }

    /// Ensure the region holds at least `requested` bytes.
    ///
    /// If the current region is smaller, it is replaced by a fresh region of
    /// exactly `requested` bytes; old contents are discarded, not copied
    /// (they are dead by contract once a new source activates the buffer).
    pub fn acquire(&mut self, requested: usize) {
        if self.storage.len() < requested {
            self.storage = vec![0u8; requested];
        }
    }

    /// Current region size in bytes (0 before the first `acquire`).
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.storage
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_starts_unallocated() {
        let b = ChunkBuffer::new();
        assert_eq!(b.capacity(), 0);
    }

    #[test]
    fn acquire_allocates_exact_size() {
        let mut b = ChunkBuffer::new();
        b.acquire(4096);
        assert_eq!(b.capacity(), 4096);
    }

    #[test]
    fn acquire_never_shrinks() {
        let mut b = ChunkBuffer::new();
        b.acquire(4096);
        b.acquire(1024);
        assert_eq!(b.capacity(), 4096);
    }

    #[test]
    fn acquire_grows_past_previous() {
        let mut b = ChunkBuffer::new();
        b.acquire(4096);
        b.acquire(8192);
        assert_eq!(b.capacity(), 8192);
    }

    #[test]
    fn acquire_same_size_keeps_region() {
        let mut b = ChunkBuffer::new();
        b.acquire(16);
        b.as_mut_slice()[0] = 0xAB;
        b.acquire(16);
        // No reallocation on equal size; the region is simply reused.
        assert_eq!(b.as_slice()[0], 0xAB);
    }
}
