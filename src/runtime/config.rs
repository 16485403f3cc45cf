//! Client configuration

use tracing::warn;

/// Environment variable overriding the number of rows evaluated per parallel chunk
pub const ENV_CHUNK_ROWS: &str = "ECHOLECT_CHUNK_ROWS";

/// Environment variable overriding the batch size below which parallel mapping runs sequentially
pub const ENV_MIN_PARALLEL_ROWS: &str = "ECHOLECT_MIN_PARALLEL_ROWS";

/// Default number of rows evaluated per parallel chunk
pub const DEFAULT_CHUNK_ROWS: usize = 64;

/// Default batch size below which parallel mapping runs sequentially
pub const DEFAULT_MIN_PARALLEL_ROWS: usize = 16;

/// Execution settings for a [`CpuClient`](super::CpuClient)
///
/// Only parallel batch mapping consults the configuration; the shape,
/// resampling and alignment operations behave identically under every setting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Rows evaluated per parallel chunk before they are written out.
    ///
    /// Bounds how many row results are held in memory at once.
    pub chunk_rows: usize,
    /// Batches with fewer rows than this are mapped on the calling thread.
    pub min_parallel_rows: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            chunk_rows: DEFAULT_CHUNK_ROWS,
            min_parallel_rows: DEFAULT_MIN_PARALLEL_ROWS,
        }
    }
}

impl ClientConfig {
    /// Set the number of rows per parallel chunk (clamped to at least 1)
    pub fn with_chunk_rows(mut self, chunk_rows: usize) -> Self {
        self.chunk_rows = chunk_rows.max(1);
        self
    }

    /// Set the batch size below which parallel mapping runs sequentially
    pub fn with_min_parallel_rows(mut self, min_parallel_rows: usize) -> Self {
        self.min_parallel_rows = min_parallel_rows;
        self
    }

    /// Read configuration from the environment, falling back to defaults
    ///
    /// - `ECHOLECT_CHUNK_ROWS`: positive integer
    /// - `ECHOLECT_MIN_PARALLEL_ROWS`: non-negative integer
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_CHUNK_ROWS) {
            match value.trim().parse::<usize>() {
                Ok(rows) if rows > 0 => config.chunk_rows = rows,
                _ => warn!(
                    value = %value,
                    default = DEFAULT_CHUNK_ROWS,
                    "ignoring invalid {}",
                    ENV_CHUNK_ROWS
                ),
            }
        }

        if let Some(value) = lookup(ENV_MIN_PARALLEL_ROWS) {
            match value.trim().parse::<usize>() {
                Ok(rows) => config.min_parallel_rows = rows,
                Err(_) => warn!(
                    value = %value,
                    default = DEFAULT_MIN_PARALLEL_ROWS,
                    "ignoring invalid {}",
                    ENV_MIN_PARALLEL_ROWS
                ),
            }
        }

        config
    }
}
