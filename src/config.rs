//! Configuration for hzip

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    /// Upper bound on input size; the whole buffer is held in memory.
    pub max_input_size: usize,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            max_input_size: 100 * 1024 * 1024, // 100 MB
        }
    }
}
