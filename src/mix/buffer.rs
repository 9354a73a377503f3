//! Index-addressable working buffer for stepwise morphing.
//!
//! Positions written past the current end leave empty slots, which are
//! skipped when the buffer is joined back into a string.

/// Mutable char sequence with explicit insert-at/remove-at operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    slots: Vec<Option<char>>,
}

impl EditBuffer {
    pub fn from_chars(chars: &[char]) -> Self {
        Self {
            slots: chars.iter().copied().map(Some).collect(),
        }
    }

    /// Number of slots, empty ones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Overwrite slot `index`, growing the buffer with empty slots if needed.
    pub fn set(&mut self, index: usize, ch: char) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        self.slots[index] = Some(ch);
    }

    /// Insert before slot `index`; an index past the end appends.
    pub fn insert(&mut self, index: usize, ch: char) {
        let index = index.min(self.slots.len());
        self.slots.insert(index, Some(ch));
    }

    /// Remove slot `index`; an index past the end is ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.slots.len() {
            self.slots.remove(index);
        }
    }
}

impl std::fmt::Display for EditBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.slots.iter().flatten().try_for_each(|ch| write!(f, "{ch}"))
    }
}
