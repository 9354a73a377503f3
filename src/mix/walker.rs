//! Backtracking over an [`EditMatrix`].
//!
//! Starting from a cell, [`step`] picks the next cell on a minimum-cost
//! path toward the top-left corner and classifies the move as an edit.
//! Ties prefer the diagonal, then left, then up, so a given matrix always
//! yields the same path.

use super::matrix::EditMatrix;

/// One edit along the backtracking path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Diagonal move over matching chars.
    NoOp,
    /// Diagonal move replacing one char.
    Substitute,
    /// Left move: a `text1` char is inserted into the buffer.
    Insert,
    /// Up move: a buffer char is removed.
    Delete,
}

/// Result of a single backtracking step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Matrix value at the cell the step started from.
    pub value: usize,
    pub op: EditOp,
    pub next_x: usize,
    pub next_y: usize,
}

/// Take one step back from cell `(x, y)`.
///
/// # Panics
///
/// Panics if `x == 0` or `y == 0`; the cursor has already reached the
/// matrix edge and has no up/left/diagonal neighbours.
pub fn step(matrix: &EditMatrix, x: usize, y: usize) -> Step {
    assert!(
        x > 0 && y > 0,
        "backtracking step requires an interior cell, got ({x}, {y})"
    );

    let value = matrix.get(y, x);
    let up = matrix.get(y - 1, x);
    let left = matrix.get(y, x - 1);
    let diag = matrix.get(y - 1, x - 1);
    let min = up.min(left).min(diag);

    if diag == 0 || diag <= min {
        // diag <= min <= left + 1, so diag can never exceed value here.
        let op = if diag < value {
            EditOp::Substitute
        } else {
            EditOp::NoOp
        };
        Step {
            value,
            op,
            next_x: x - 1,
            next_y: y - 1,
        }
    } else if left == 0 || left <= min {
        Step {
            value,
            op: EditOp::Insert,
            next_x: x - 1,
            next_y: y,
        }
    } else {
        Step {
            value,
            op: EditOp::Delete,
            next_x: x,
            next_y: y - 1,
        }
    }
}

/// Iterator over the full backtracking path from the bottom-right corner.
///
/// Interior cells use [`step`]. Once the cursor reaches the top row the
/// remaining moves are inserts; on the left column they are deletes. The
/// path ends at `(0, 0)`.
#[derive(Debug, Clone)]
pub struct EditPath<'a> {
    matrix: &'a EditMatrix,
    x: usize,
    y: usize,
}

impl<'a> EditPath<'a> {
    pub fn new(matrix: &'a EditMatrix) -> Self {
        Self {
            matrix,
            x: matrix.cols() - 1,
            y: matrix.rows() - 1,
        }
    }

    /// Current cursor as `(x, y)`.
    pub const fn cursor(&self) -> (usize, usize) {
        (self.x, self.y)
    }
}

impl Iterator for EditPath<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let (x, y) = (self.x, self.y);
        let next = match (x, y) {
            (0, 0) => return None,
            (_, 0) => Step {
                value: self.matrix.get(y, x),
                op: EditOp::Insert,
                next_x: x - 1,
                next_y: 0,
            },
            (0, _) => Step {
                value: self.matrix.get(y, x),
                op: EditOp::Delete,
                next_x: 0,
                next_y: y - 1,
            },
            _ => step(self.matrix, x, y),
        };
        self.x = next.next_x;
        self.y = next.next_y;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(text1: &str, text2: &str) -> EditMatrix {
        let a: Vec<char> = text1.chars().collect();
        let b: Vec<char> = text2.chars().collect();
        EditMatrix::build(&a, &b)
    }

    #[test]
    fn test_first_step_kitten_sitting() {
        let m = matrix("kitten", "sitting");
        let s = step(&m, 6, 7);
        assert_eq!(
            s,
            Step {
                value: 3,
                op: EditOp::Delete,
                next_x: 6,
                next_y: 6,
            }
        );
    }

    #[test]
    fn test_noop_on_matching_chars() {
        let m = matrix("abc", "abc");
        let s = step(&m, 3, 3);
        assert_eq!(s.op, EditOp::NoOp);
        assert_eq!((s.next_x, s.next_y), (2, 2));
    }

    #[test]
    fn test_substitute() {
        let m = matrix("a", "b");
        let s = step(&m, 1, 1);
        assert_eq!(s.op, EditOp::Substitute);
        assert_eq!((s.next_x, s.next_y), (0, 0));
    }

    #[test]
    fn test_insert_moves_left() {
        // "cats" (columns) vs "cat" (rows): bottom-right must move left.
        let m = matrix("cats", "cat");
        let s = step(&m, 4, 3);
        assert_eq!(s.op, EditOp::Insert);
        assert_eq!((s.next_x, s.next_y), (3, 3));
    }

    #[test]
    fn test_diagonal_wins_ties() {
        // All three neighbours equal: diagonal must be chosen.
        let m = matrix("ab", "ba");
        let s = step(&m, 2, 2);
        assert_eq!((s.next_x, s.next_y), (1, 1));
    }

    #[test]
    fn test_left_wins_tie_over_up() {
        // up = 1, left = 1, diag = 2: neither shortcut applies.
        let m = matrix("aba", "bab");
        assert_eq!((m.get(2, 3), m.get(3, 2), m.get(2, 2)), (1, 1, 2));
        let s = step(&m, 3, 3);
        assert_eq!(s.op, EditOp::Insert);
        assert_eq!((s.next_x, s.next_y), (2, 3));
    }

    #[test]
    #[should_panic(expected = "interior cell")]
    fn test_step_at_edge_panics() {
        let m = matrix("abc", "abc");
        let _ = step(&m, 0, 2);
    }

    #[test]
    fn test_path_ends_at_origin() {
        let m = matrix("washington", "elvis");
        let mut path = EditPath::new(&m);
        assert_eq!(path.cursor(), (10, 5));
        let steps: Vec<Step> = path.by_ref().collect();
        assert_eq!(path.cursor(), (0, 0));
        let edits = steps.iter().filter(|s| s.op != EditOp::NoOp).count();
        assert_eq!(edits, m.distance());
    }

    #[test]
    fn test_path_along_edges() {
        let m = matrix("", "ab");
        let ops: Vec<EditOp> = EditPath::new(&m).map(|s| s.op).collect();
        assert_eq!(ops, vec![EditOp::Delete, EditOp::Delete]);

        let m = matrix("ab", "");
        let ops: Vec<EditOp> = EditPath::new(&m).map(|s| s.op).collect();
        assert_eq!(ops, vec![EditOp::Insert, EditOp::Insert]);

        assert_eq!(EditPath::new(&matrix("", "")).count(), 0);
    }
}
