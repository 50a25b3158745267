//! Read-only file descriptor produced by the enumeration layer.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Immutable descriptor for one file under transfer.
///
/// Produced elsewhere (directory enumeration / job setup) and consumed
/// read-only by byte sources. A source borrows this and so cannot outlive it.
#[derive(Debug, Clone)]
pub struct FileMetadata {
    identifier: String,
    full_path: PathBuf,
    size: u64,
    modified: Option<SystemTime>,
}

impl FileMetadata {
    pub fn new(
        identifier: impl Into<String>,
        full_path: impl Into<PathBuf>,
        size: u64,
        modified: Option<SystemTime>,
    ) -> Self {
        FileMetadata {
            identifier: identifier.into(),
            full_path: full_path.into(),
            size,
            modified,
        }
    }

    /// Pipeline-level identifier (typically the path relative to the transfer root).
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Absolute (or working-dir-relative) path used to open the file.
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Size in bytes as seen at enumeration time. Advisory: the file may have
    /// changed since; sources tolerate that (see `FileByteSource::read`).
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Modification time at enumeration, if the filesystem reported one.
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_accessors() {
        let meta = FileMetadata::new("dir/a.bin", "/srv/data/dir/a.bin", 1024, None);
        assert_eq!(meta.identifier(), "dir/a.bin");
        assert_eq!(meta.full_path(), Path::new("/srv/data/dir/a.bin"));
        assert_eq!(meta.size(), 1024);
        assert!(meta.modified().is_none());
    }
}
