pub mod config;
pub mod logging;

// Read-side core: one ByteSource per (file, range) work item, one
// reusable ChunkBuffer per worker thread.
pub mod buffer;
pub mod metadata;
pub mod range;
pub mod source;
pub mod stats;
