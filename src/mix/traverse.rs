//! Stepwise morphing of `text2` toward `text1`.
//!
//! Walks the backtracking path from the bottom-right corner and applies
//! each edit to a working copy of `text2`. Only real edits count against
//! the iteration budget; matching-char moves are passed through.
//!
//! Insert and delete positions come from different coordinates (`next_y`
//! into the buffer for inserts and substitutions, `next_x` for deletes)
//! and are not adjusted for earlier shifts. Paths with several adjacent
//! inserts and deletes can therefore end somewhere other than `text1`.

use tracing::{debug, trace};

use super::buffer::EditBuffer;
use super::matrix::EditMatrix;
use super::walker::{EditOp, EditPath};

/// Apply up to `iterations` edits from `matrix` to a copy of `text2`.
///
/// `matrix` must have been built from `text1` (columns) and `text2` (rows).
pub fn traverse(matrix: &EditMatrix, text1: &[char], text2: &[char], iterations: usize) -> String {
    let mut buffer = EditBuffer::from_chars(text2);
    let mut remaining = iterations;
    let mut path = EditPath::new(matrix);

    while remaining > 0 {
        let Some(step) = path.next() else {
            break;
        };
        trace!(
            op = ?step.op,
            value = step.value,
            x = step.next_x,
            y = step.next_y,
            "edit step"
        );
        match step.op {
            EditOp::NoOp => continue,
            EditOp::Substitute => buffer.set(step.next_y, text1[step.next_x]),
            EditOp::Insert => buffer.insert(step.next_y, text1[step.next_x]),
            EditOp::Delete => buffer.remove(step.next_x),
        }
        remaining -= 1;
    }

    debug!(
        iterations,
        applied = iterations - remaining,
        "traversal finished"
    );
    buffer.to_string()
}
