//! Mixer configuration.
//!
//! Every field has a default, so an empty JSON object (`{}`) is a valid
//! configuration file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MixError, MixResult};

/// Default maximum character count for edit-distance matrix inputs.
///
/// The matrix holds `(m + 1) * (n + 1)` `usize` cells, so 2,048 chars per
/// side is about 4.2M cells, roughly 34 MB on 64-bit targets. Cached
/// matrices stay resident until the cache is cleared.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 2_048;

/// Configuration for a [`TextMixer`](crate::TextMixer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MixerConfig {
    /// Keep computed matrices for the lifetime of the mixer.
    pub cache_matrices: bool,
    /// Reject matrix inputs longer than this many chars.
    pub max_input_chars: usize,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            cache_matrices: true,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

impl MixerConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file(path: &Path) -> MixResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| MixError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(raw: &str) -> MixResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
