//! # Comment thread
//!
//! The mutable list of comment texts owned by a single post unit.

use tracing::debug;

use crate::traits::CommentSink;

/// Placeholder comment every fresh thread starts with.
pub const SEED_COMMENT: &str = "Post muito bacana, hein?!";

/// Insertion-ordered comment texts. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentThread {
    entries: Vec<String>,
}

impl CommentThread {
    /// A thread holding exactly one entry, `seed`.
    pub fn new(seed: impl Into<String>) -> Self {
        Self { entries: vec![seed.into()] }
    }

    pub fn add(&mut self, text: impl Into<String>) {
        let text = text.into();
        debug!(len = self.entries.len() + 1, "comment added");
        self.entries.push(text);
    }

    /// Drops every entry equal to `text` and returns how many went.
    /// A miss is a no-op.
    pub fn remove(&mut self, text: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry != text);
        let removed = before - self.entries.len();
        if removed > 0 {
            debug!(removed, len = self.entries.len(), "comments removed");
        }
        removed
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommentThread {
    fn default() -> Self {
        Self::new(SEED_COMMENT)
    }
}

impl CommentSink for CommentThread {
    fn add(&mut self, text: String) {
        CommentThread::add(self, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_thread_holds_only_the_seed() {
        let thread = CommentThread::default();
        assert_eq!(thread.entries(), &[SEED_COMMENT.to_string()]);
        assert_eq!(thread.len(), 1);
    }

    #[test]
    fn adds_keep_insertion_order() {
        let mut thread = CommentThread::new("seed");
        for text in ["b", "", "a", "b"] {
            thread.add(text);
        }
        assert_eq!(thread.entries(), &["seed", "b", "", "a", "b"]);
    }

    #[test]
    fn remove_drops_every_equal_entry() {
        let mut thread = CommentThread::new("seed");
        thread.add("x");
        thread.add("y");
        thread.add("x");

        assert_eq!(thread.remove("x"), 2);
        assert_eq!(thread.entries(), &["seed", "y"]);
    }

    #[test]
    fn remove_without_match_is_noop() {
        let mut thread = CommentThread::new("seed");
        thread.add("x");

        assert_eq!(thread.remove("X"), 0);
        assert_eq!(thread.entries(), &["seed", "x"]);
    }

    #[test]
    fn seed_can_be_removed_like_any_entry() {
        let mut thread = CommentThread::new("seed");
        assert_eq!(thread.remove("seed"), 1);
        assert!(thread.is_empty());
    }
}
