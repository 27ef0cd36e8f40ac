//! The in-memory log of fetched facts and the cursor into it.

use crate::fact::Fact;

/// An append-only log of facts with a cursor marking the displayed one.
///
/// The cursor is `None` exactly when the log is empty; otherwise it is a
/// valid index. Entries are kept in fetch order and never reordered or
/// deduplicated.
#[derive(Debug, Clone, Default)]
pub struct History {
  entries: Vec<Fact>,
  cursor:  Option<usize>,
}

impl History {
  pub fn new() -> Self { Self::default() }

  /// Append `fact` and move the cursor onto it.
  pub fn push(&mut self, fact: Fact) {
    self.entries.push(fact);
    self.cursor = Some(self.entries.len() - 1);
  }

  /// Move one entry back. Returns whether the cursor moved.
  pub fn back(&mut self) -> bool {
    match self.cursor {
      Some(c) if c > 0 => {
        self.cursor = Some(c - 1);
        true
      }
      _ => false,
    }
  }

  /// Move one entry forward. Returns whether the cursor moved.
  pub fn forward(&mut self) -> bool {
    match self.cursor {
      Some(c) if c + 1 < self.entries.len() => {
        self.cursor = Some(c + 1);
        true
      }
      _ => false,
    }
  }

  pub fn clear(&mut self) {
    self.entries.clear();
    self.cursor = None;
  }

  pub fn current(&self) -> Option<&Fact> {
    self.cursor.and_then(|c| self.entries.get(c))
  }

  pub fn cursor(&self) -> Option<usize> { self.cursor }

  pub fn can_go_back(&self) -> bool { matches!(self.cursor, Some(c) if c > 0) }

  pub fn can_go_forward(&self) -> bool {
    matches!(self.cursor, Some(c) if c + 1 < self.entries.len())
  }

  pub fn entries(&self) -> &[Fact] { &self.entries }

  pub fn len(&self) -> usize { self.entries.len() }

  pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
