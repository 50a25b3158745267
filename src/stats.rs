//! Per-source transfer bookkeeping (identity, terminal error code, byte counts).
//!
//! One record is embedded in each byte source; the pipeline snapshots and
//! aggregates these for reporting. Aggregation itself lives upstream.

/// Terminal outcome code for a source.
///
/// A single failure code covers open, seek and read failures: the pipeline's
/// recovery action (retry the assignment or abandon it) is the same for all
/// three, so they are distinguished only by log context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCode {
    /// No failure recorded.
    #[default]
    Ok,
    /// File open, seek, or read failed.
    ReadError,
}

impl ErrorCode {
    /// True if no failure has been recorded.
    pub fn is_ok(self) -> bool {
        self == ErrorCode::Ok
    }
}

/// Bookkeeping record for one source.
#[derive(Debug, Clone, Default)]
pub struct TransferStats {
    id: String,
    error_code: ErrorCode,
    data_bytes: u64,
}

impl TransferStats {
    /// New record tagged with the source's identifier.
    pub fn new(id: impl Into<String>) -> Self {
        TransferStats {
            id: id.into(),
            error_code: ErrorCode::Ok,
            data_bytes: 0,
        }
    }

    /// Identifier of the file this record belongs to.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn error_code(&self) -> ErrorCode {
        self.error_code
    }

    /// Stamp the outcome of an open/read operation. Called with `Ok` on every
    /// successful open, so a reopen after failure clears the error.
    pub fn set_error_code(&mut self, code: ErrorCode) {
        self.error_code = code;
    }

    /// Cumulative payload bytes delivered by `read()` across the record's lifetime.
    pub fn data_bytes(&self) -> u64 {
        self.data_bytes
    }

    pub fn add_data_bytes(&mut self, n: u64) {
        self.data_bytes += n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_new_is_ok() {
        let s = TransferStats::new("a/b.bin");
        assert_eq!(s.id(), "a/b.bin");
        assert!(s.error_code().is_ok());
        assert_eq!(s.data_bytes(), 0);
    }

    #[test]
    fn stats_error_set_and_clear() {
        let mut s = TransferStats::new("x");
        s.set_error_code(ErrorCode::ReadError);
        assert!(!s.error_code().is_ok());
        s.set_error_code(ErrorCode::Ok);
        assert!(s.error_code().is_ok());
    }

    #[test]
    fn stats_data_bytes_accumulate() {
        let mut s = TransferStats::new("x");
        s.add_data_bytes(10);
        s.add_data_bytes(5);
        assert_eq!(s.data_bytes(), 15);
    }
}
