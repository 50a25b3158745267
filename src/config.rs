use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default read-chunk capacity: 256 KiB per read() keeps syscall count low
/// without retaining much memory per worker.
pub const DEFAULT_CHUNK_CAPACITY_BYTES: usize = 256 * 1024;

/// Configuration consumed by the read-side core, loaded from
/// `~/.config/xfer/config.toml`.
///
/// Chunk capacity is the only tunable this core recognizes: larger values
/// reduce syscalls per byte transferred at the cost of per-worker memory,
/// which is retained (never released) until the worker shuts down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Upper bound on bytes delivered per read() call, and the size the
    /// worker's buffer grows to.
    #[serde(default = "default_chunk_capacity")]
    pub chunk_capacity_bytes: usize,
}

fn default_chunk_capacity() -> usize {
    DEFAULT_CHUNK_CAPACITY_BYTES
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            chunk_capacity_bytes: DEFAULT_CHUNK_CAPACITY_BYTES,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("xfer")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SourceConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SourceConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SourceConfig = toml::from_str(&data)?;
    Ok(cfg)
}
