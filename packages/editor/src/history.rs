//! # History
//!
//! Linear snapshot history for undo/redo.
//!
//! ## Design
//!
//! - `present` is the current value; `past` holds older values (most recent
//!   last) and `future` holds undone values (next redo first)
//! - Committing a value equal to `present` records nothing
//! - A new commit discards the redo branch
//! - History is unbounded
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new(document);
//! history.commit(edited);
//! history.undo();
//! history.redo();
//! ```

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub struct History<T> {
    past: Vec<T>,
    present: T,
    future: VecDeque<T>,
}

impl<T: Clone + PartialEq> History<T> {
    pub fn new(present: T) -> Self {
        Self {
            past: Vec::new(),
            present,
            future: VecDeque::new(),
        }
    }

    pub fn present(&self) -> &T {
        &self.present
    }

    /// Record `next` as the present value.
    ///
    /// Returns `false` (and records nothing) when `next` equals the present.
    pub fn commit(&mut self, next: T) -> bool {
        if next == self.present {
            return false;
        }
        let previous = std::mem::replace(&mut self.present, next);
        self.past.push(previous);
        self.future.clear();
        true
    }

    /// Step back one commit; returns `false` when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let undone = std::mem::replace(&mut self.present, previous);
        self.future.push_front(undone);
        true
    }

    /// Step forward one undone commit; returns `false` when there is nothing to redo
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let previous = std::mem::replace(&mut self.present, next);
        self.past.push(previous);
        true
    }

    /// Replace the present and forget all history
    pub fn reset(&mut self, present: T) {
        self.past.clear();
        self.future.clear();
        self.present = present;
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }
}

impl<T: Clone + PartialEq + Default> Default for History<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
