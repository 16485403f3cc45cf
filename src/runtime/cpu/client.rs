//! CPU client implementation

use crate::runtime::ClientConfig;

/// CPU client for operation dispatch
///
/// The client is cheap to clone and holds no tensors; every call is
/// independent and reentrant.
#[derive(Clone, Debug, Default)]
pub struct CpuClient {
    config: ClientConfig,
}

impl CpuClient {
    /// Create a new CPU client with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a CPU client with an explicit configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Create a CPU client configured from the environment
    ///
    /// See [`ClientConfig::from_env`].
    pub fn from_env() -> Self {
        Self::with_config(ClientConfig::from_env())
    }

    /// Get the client configuration
    #[inline]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
