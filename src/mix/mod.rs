//! Text blending engine.
//!
//! Two independent entry points:
//!
//! - [`TextMixer::traverse`] morphs `text2` toward `text1` one edit at a
//!   time along a Levenshtein backtracking path.
//! - [`TextMixer::text_mix`] blends word by word, interpolating numbers and
//!   mixing other words positionally.
//!
//! # Architecture
//!
//! ```text
//! traverse: MatrixCache → EditMatrix → EditPath (walker::step) → EditBuffer
//! text_mix: words::text_mix → number_mix | chars::string_mix
//! ```

pub mod buffer;
pub mod chars;
pub mod matrix;
pub mod traverse;
pub mod walker;
pub mod words;

use std::sync::Arc;

use tracing::debug;

use crate::config::MixerConfig;
use crate::error::{MixError, MixResult};

use self::matrix::{EditMatrix, MatrixCache};

/// Mixer owning its configuration and matrix cache.
#[derive(Debug, Default)]
pub struct TextMixer {
    config: MixerConfig,
    cache: MatrixCache,
}

impl TextMixer {
    pub fn new(config: MixerConfig) -> Self {
        Self {
            config,
            cache: MatrixCache::new(),
        }
    }

    pub const fn config(&self) -> &MixerConfig {
        &self.config
    }

    pub const fn cache(&self) -> &MatrixCache {
        &self.cache
    }

    /// Drop every cached matrix.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Edit-distance matrix for `text1` (columns) against `text2` (rows).
    ///
    /// Served from the cache when caching is enabled.
    pub fn matrix_for(&self, text1: &str, text2: &str) -> MixResult<Arc<EditMatrix>> {
        let max = self.config.max_input_chars;
        for text in [text1, text2] {
            let len = text.chars().count();
            if len > max {
                return Err(MixError::InputTooLong { len, max });
            }
        }

        if self.config.cache_matrices {
            return Ok(self.cache.get_or_compute(text1, text2));
        }

        debug!("matrix cache disabled, building fresh");
        let a: Vec<char> = text1.chars().collect();
        let b: Vec<char> = text2.chars().collect();
        Ok(Arc::new(EditMatrix::build(&a, &b)))
    }

    /// Levenshtein distance between `text1` and `text2`.
    pub fn distance(&self, text1: &str, text2: &str) -> MixResult<usize> {
        Ok(self.matrix_for(text1, text2)?.distance())
    }

    /// Morph `text2` toward `text1` by applying up to `iterations` edits.
    ///
    /// `0` returns `text2` unchanged. Once the path is exhausted, larger
    /// values return the same string.
    pub fn traverse(&self, text1: &str, text2: &str, iterations: usize) -> MixResult<String> {
        let matrix = self.matrix_for(text1, text2)?;
        let a: Vec<char> = text1.chars().collect();
        let b: Vec<char> = text2.chars().collect();
        Ok(traverse::traverse(&matrix, &a, &b, iterations))
    }

    /// Blend `text1` and `text2` word by word; `ratio` 0 leans to `text1`,
    /// 1 to `text2`.
    #[allow(clippy::unused_self)]
    pub fn text_mix(&self, text1: &str, text2: &str, ratio: f64) -> String {
        words::text_mix(text1, text2, ratio)
    }
}
