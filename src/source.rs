//! File-backed byte source: open/read/close lifecycle for one range assignment.
//!
//! The pipeline constructs one `FileByteSource` per (file, offset, length)
//! work item, calls `open()`, then `read()` until it returns `None`, then
//! discards the source. Chunks are read into the worker's shared
//! `ChunkBuffer`; the returned slice borrows that buffer, so it cannot be
//! retained across the next `read()` or `open()` on the same worker.

use crate::buffer::ChunkBuffer;
use crate::metadata::FileMetadata;
use crate::range::ByteRange;
use crate::stats::{ErrorCode, TransferStats};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::PathBuf;
use thiserror::Error;

/// I/O failure while opening, seeking, or reading a source.
///
/// One kind covers all three: the pipeline's recovery action (retry the
/// assignment via a fresh `open()` or abandon it) is identical, so the
/// failing operation is only distinguished in the log record.
#[derive(Debug, Error)]
#[error("read error on {}: {}", .path.display(), .source)]
pub struct ReadError {
    /// Path that failed to open/seek/read.
    pub path: PathBuf,
    /// Underlying system error.
    pub source: std::io::Error,
}

/// Byte source over one assigned range of a regular file.
///
/// Driven synchronously by exactly one worker thread. The borrow of
/// `FileMetadata` pins the descriptor's lifetime; the `&mut ChunkBuffer`
/// arguments pin the single-active-source rule.
#[derive(Debug)]
pub struct FileByteSource<'m> {
    meta: &'m FileMetadata,
    /// Total bytes assigned to this source.
    length: u64,
    /// Start offset of the assignment within the file.
    offset: u64,
    /// Upper bound on bytes delivered per `read()`.
    chunk_capacity: usize,
    file: Option<File>,
    bytes_read: u64,
    stats: TransferStats,
}

impl<'m> FileByteSource<'m> {
    /// New source for `length` bytes starting at `offset` of `meta`'s file.
    pub fn new(meta: &'m FileMetadata, length: u64, offset: u64, chunk_capacity: usize) -> Self {
        FileByteSource {
            meta,
            length,
            offset,
            chunk_capacity,
            file: None,
            bytes_read: 0,
            stats: TransferStats::new(meta.identifier()),
        }
    }

    /// New source covering `range` of `meta`'s file.
    pub fn for_range(meta: &'m FileMetadata, range: ByteRange, chunk_capacity: usize) -> Self {
        FileByteSource::new(meta, range.len(), range.start, chunk_capacity)
    }

    /// Reset-and-open: every call restarts the assignment from scratch.
    ///
    /// Resets read progress to zero, closes any open handle, grows the
    /// worker's buffer to this source's chunk capacity, opens the file
    /// read-only and seeks to the assigned offset. On failure the error is
    /// stamped on the stats record and returned; the source stays unusable
    /// until a later `open()` succeeds. On success a previously recorded
    /// error is cleared. Safe to call repeatedly; opens never accumulate
    /// state.
    pub fn open(&mut self, buf: &mut ChunkBuffer) -> Result<(), ReadError> {
        self.bytes_read = 0;
        self.close();
        buf.acquire(self.chunk_capacity);

        let path = self.meta.full_path();
        let mut file = match File::open(path) {
            Ok(f) => f,
            Err(e) => return Err(self.fail("open", e)),
        };
        if self.offset > 0 {
            if let Err(e) = file.seek(SeekFrom::Start(self.offset)) {
                // `file` is dropped here, so no handle leaks past the error.
                return Err(self.fail("seek", e));
            }
        }
        self.file = Some(file);
        self.stats.set_error_code(ErrorCode::Ok);
        Ok(())
    }

    /// Read the next chunk of the assignment into `buf`.
    ///
    /// Returns `None` without touching the file once the source has failed
    /// or delivered its full length. A short file (physical EOF before
    /// `length` bytes) also yields `None` but is *not* an error: concurrent
    /// truncation is tolerated silently at this layer, and callers that care
    /// check `finished()`.
    ///
    /// The returned slice is valid only until the next `read()` or `open()`
    /// on any source sharing `buf`; the borrow checker enforces this.
    pub fn read<'b>(&mut self, buf: &'b mut ChunkBuffer) -> Option<&'b [u8]> {
        if self.has_error() || self.finished() {
            return None;
        }
        let remaining = self.length - self.bytes_read;
        let to_read = (self.chunk_capacity as u64).min(remaining) as usize;
        buf.acquire(self.chunk_capacity);

        let result = match self.file.as_mut() {
            Some(file) => file.read(&mut buf.as_mut_slice()[..to_read]),
            // read() before a successful open(); same failure as a bad fd.
            None => Err(std::io::Error::from(std::io::ErrorKind::NotConnected)),
        };
        match result {
            Err(e) => {
                self.close();
                self.fail("read", e);
                None
            }
            Ok(0) => {
                // Physical EOF before the assigned length; exhausted, not failed.
                self.close();
                None
            }
            Ok(n) => {
                self.bytes_read += n as u64;
                self.stats.add_data_bytes(n as u64);
                Some(&buf.as_slice()[..n])
            }
        }
    }

    /// Release the file handle. Idempotent; does not reset read progress or
    /// error state (only `open()` does).
    pub fn close(&mut self) {
        self.file = None;
    }

    /// True once the full assigned length has been delivered.
    pub fn finished(&self) -> bool {
        self.bytes_read == self.length
    }

    /// True while the stats record carries a failure from the last open/read.
    pub fn has_error(&self) -> bool {
        !self.stats.error_code().is_ok()
    }

    /// Bytes delivered so far for the current open cycle.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Total bytes assigned to this source.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Start offset of the assignment.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Bookkeeping record for this source (id, outcome, delivered bytes).
    pub fn stats(&self) -> &TransferStats {
        &self.stats
    }

    fn fail(&mut self, op: &str, err: std::io::Error) -> ReadError {
        tracing::error!(
            path = %self.meta.full_path().display(),
            op,
            error = %err,
            "byte source I/O failure"
        );
        self.stats.set_error_code(ErrorCode::ReadError);
        ReadError {
            path: self.meta.full_path().to_path_buf(),
            source: err,
        }
    }
}
