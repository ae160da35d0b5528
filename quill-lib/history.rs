//! Snapshot based undo history.
//!
//! Every undoable edit saves the complete buffer and selection as they were
//! before the edit. Undo hands back the newest snapshot and keeps the state it
//! replaces for redo; redo does the same in the other direction. Recording a
//! new edit drops the redo transcript, so the history never branches.
//!
//! ```text
//!   undo: [s0 s1 s2]        redo: []
//!   undo() with current s3
//!   undo: [s0 s1]           redo: [s3]     returns s2
//!   push(s2')
//!   undo: [s0 s1 s2']       redo: []
//! ```
//!
//! The undo side is bounded. Once full, the oldest snapshot is discarded for
//! each new one.

use std::collections::VecDeque;

use crate::editor::Selection;

/// Number of undo steps kept when no capacity is configured.
pub const DEFAULT_UNDO_CAPACITY: usize = 10;

/// Buffer and selection at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
  pub selection: Selection,
  pub text:      String,
}

#[derive(Debug, Clone)]
pub struct History {
  undo:     VecDeque<Snapshot>,
  redo:     Vec<Snapshot>,
  capacity: usize,
}

impl Default for History {
  fn default() -> Self {
    Self::with_capacity(DEFAULT_UNDO_CAPACITY)
  }
}

impl History {
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      undo: VecDeque::with_capacity(capacity),
      redo: Vec::new(),
      capacity,
    }
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Records the state before an edit and forgets everything that could be
  /// redone.
  pub fn push(&mut self, snapshot: Snapshot) {
    self.redo.clear();
    self.push_undo(snapshot);
  }

  /// Swaps `current` for the newest undo snapshot.
  pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
    let previous = self.undo.pop_back()?;
    self.redo.push(current);
    Some(previous)
  }

  /// Swaps `current` for the newest redo snapshot.
  pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
    let next = self.redo.pop()?;
    self.push_undo(current);
    Some(next)
  }

  pub fn can_undo(&self) -> bool {
    !self.undo.is_empty()
  }

  pub fn can_redo(&self) -> bool {
    !self.redo.is_empty()
  }

  pub fn undo_len(&self) -> usize {
    self.undo.len()
  }

  pub fn redo_len(&self) -> usize {
    self.redo.len()
  }

  pub fn clear(&mut self) {
    self.undo.clear();
    self.redo.clear();
  }

  fn push_undo(&mut self, snapshot: Snapshot) {
    self.undo.push_back(snapshot);
    while self.undo.len() > self.capacity {
      self.undo.pop_front();
      tracing::debug!(capacity = self.capacity, "dropped oldest undo snapshot");
    }
  }
}
