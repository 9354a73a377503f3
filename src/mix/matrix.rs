//! Levenshtein edit-distance matrix and its cache.
//!
//! Rows index positions in `text2`, columns index positions in `text1`:
//! `get(y, x)` is the edit distance between the first `y` chars of
//! `text2` and the first `x` chars of `text1`.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

/// Full dynamic-programming matrix for one ordered string pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditMatrix {
    cells: Vec<usize>,
    cols: usize,
}

impl EditMatrix {
    /// Build the matrix for `text1` (columns) against `text2` (rows).
    pub fn build(text1: &[char], text2: &[char]) -> Self {
        let cols = text1.len() + 1;
        let rows = text2.len() + 1;
        let mut cells = vec![0usize; rows * cols];

        for (x, cell) in cells.iter_mut().take(cols).enumerate() {
            *cell = x;
        }
        for y in 1..rows {
            cells[y * cols] = y;
            for x in 1..cols {
                let cost = usize::from(text1[x - 1] != text2[y - 1]);
                cells[y * cols + x] = (cells[(y - 1) * cols + x] + 1) // up
                    .min(cells[y * cols + x - 1] + 1) // left
                    .min(cells[(y - 1) * cols + x - 1] + cost); // diagonal
            }
        }

        Self { cells, cols }
    }

    /// Number of rows (`len(text2) + 1`).
    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    /// Number of columns (`len(text1) + 1`).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at row `y`, column `x`.
    ///
    /// # Panics
    ///
    /// Panics if `(y, x)` lies outside the matrix.
    pub fn get(&self, y: usize, x: usize) -> usize {
        assert!(x < self.cols, "column {x} out of range ({} cols)", self.cols);
        self.cells[y * self.cols + x]
    }

    /// Edit distance between the full strings (bottom-right cell).
    pub fn distance(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }
}

/// Levenshtein distance between `text1` and `text2`, via an uncached matrix.
pub fn distance(text1: &str, text2: &str) -> usize {
    let a: Vec<char> = text1.chars().collect();
    let b: Vec<char> = text2.chars().collect();
    EditMatrix::build(&a, &b).distance()
}

/// Matrices keyed by the ordered pair `(text1, text2)`.
///
/// Unbounded: entries live until [`MatrixCache::clear`] is called.
#[derive(Debug, Default)]
pub struct MatrixCache {
    entries: RwLock<HashMap<(String, String), Arc<EditMatrix>>>,
}

impl MatrixCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached matrix for `(text1, text2)`, building it on a miss.
    ///
    /// Two threads missing on the same key may both build; the first
    /// insert wins and both get that matrix back.
    pub fn get_or_compute(&self, text1: &str, text2: &str) -> Arc<EditMatrix> {
        let key = (text1.to_owned(), text2.to_owned());

        if let Some(hit) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            debug!(text1, text2, "matrix cache hit");
            return Arc::clone(hit);
        }

        debug!(text1, text2, "matrix cache miss");
        let a: Vec<char> = text1.chars().collect();
        let b: Vec<char> = text2.chars().collect();
        let built = Arc::new(EditMatrix::build(&a, &b));

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(entries.entry(key).or_insert(built))
    }

    /// Number of cached matrices.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the cache holds no matrices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached matrix.
    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        debug!(evicted = entries.len(), "clearing matrix cache");
        entries.clear();
    }
}
