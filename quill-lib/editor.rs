//! Single buffer text editor.
//!
//! The editor owns its text and a selection given as two byte offsets,
//! `anchor` and `head`. Equal offsets are a caret. Offsets are not trusted:
//! the buffer can be replaced underneath them with [`Editor::set_text`], so
//! every read goes through [`Editor::sorted_selection`], which clamps both ends
//! into the buffer and snaps them back onto codepoint boundaries.
//!
//! Every [`Command`] except `None`, `Undo` and `Redo` records a snapshot of
//! the buffer and selection before it runs, so any command can be undone as a
//! single step.
//!
//! # Usage
//!
//! ```
//! use quill_lib::{
//!   Command,
//!   Editor,
//! };
//!
//! let mut editor = Editor::new();
//! editor.begin("hello");
//! editor.input_chars(" world".chars());
//! editor.perform_command(Command::WordLeft).unwrap();
//! editor.perform_command(Command::SelectEnd).unwrap();
//! assert_eq!(editor.selected_text(), "world");
//!
//! editor.perform_command(Command::Undo).unwrap();
//! editor.perform_command(Command::Undo).unwrap();
//! editor.perform_command(Command::Undo).unwrap();
//! assert_eq!(editor.text(), "hello");
//! ```

use std::sync::Arc;

use quill_core::{
  navigation::NavigationIndices,
  utf8::floor_boundary,
};
use thiserror::Error;

use crate::{
  clipboard::{
    ClipboardError,
    ClipboardProvider,
  },
  config::EditorConfig,
  history::{
    History,
    Snapshot,
  },
  movement::{
    Translation,
    translate_position,
  },
};

#[derive(Debug, Error)]
pub enum EditError {
  #[error(transparent)]
  Clipboard(#[from] ClipboardError),
}

pub type Result<T> = std::result::Result<T, EditError>;

/// Byte offsets of the selection ends. `head` is the end that moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Selection {
  pub anchor: usize,
  pub head:   usize,
}

impl Selection {
  pub const fn new(anchor: usize, head: usize) -> Self {
    Self { anchor, head }
  }

  pub const fn point(pos: usize) -> Self {
    Self::new(pos, pos)
  }

  pub fn is_caret(&self) -> bool {
    self.anchor == self.head
  }

  /// Lower end.
  pub fn from(&self) -> usize {
    self.anchor.min(self.head)
  }

  /// Upper end.
  pub fn to(&self) -> usize {
    self.anchor.max(self.head)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
  None,
  Undo,
  Redo,
  NewLine,
  Cut,
  Copy,
  Paste,
  SelectAll,
  Backspace,
  Delete,
  DeleteWordLeft,
  DeleteWordRight,
  Left,
  Right,
  Up,
  Down,
  WordLeft,
  WordRight,
  Start,
  End,
  LineStart,
  LineEnd,
  SelectLeft,
  SelectRight,
  SelectUp,
  SelectDown,
  SelectWordLeft,
  SelectWordRight,
  SelectStart,
  SelectEnd,
  SelectLineStart,
  SelectLineEnd,
}

impl Command {
  /// Whether running the command records an undo snapshot.
  pub fn is_undoable(self) -> bool {
    !matches!(self, Self::None | Self::Undo | Self::Redo)
  }
}

pub struct Editor {
  text:       String,
  selection:  Selection,
  history:    History,
  navigation: NavigationIndices,
  clipboard:  Option<Arc<dyn ClipboardProvider>>,
}

impl Default for Editor {
  fn default() -> Self {
    Self::new()
  }
}

impl std::fmt::Debug for Editor {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Editor")
      .field("text", &self.text)
      .field("selection", &self.selection)
      .field("undo", &self.history.undo_len())
      .field("redo", &self.history.redo_len())
      .field(
        "clipboard",
        &self.clipboard.as_ref().map(|clipboard| clipboard.name()),
      )
      .finish()
  }
}

impl Editor {
  pub fn new() -> Self {
    Self::with_config(&EditorConfig::default())
  }

  pub fn with_config(config: &EditorConfig) -> Self {
    Self {
      text:       String::new(),
      selection:  Selection::default(),
      history:    History::with_capacity(config.undo_capacity),
      navigation: NavigationIndices::default(),
      clipboard:  None,
    }
  }

  /// Starts a fresh session over `text`: caret at the end, no history.
  pub fn begin(&mut self, text: impl Into<String>) {
    self.text = text.into();
    self.selection = Selection::point(self.text.len());
    self.history.clear();
  }

  /// Ends the session and hands the buffer back.
  pub fn take_text(&mut self) -> String {
    self.selection = Selection::default();
    self.history.clear();
    std::mem::take(&mut self.text)
  }

  /// Replaces the buffer without recording history. The selection is kept
  /// and repaired on its next read.
  pub fn set_text(&mut self, text: impl Into<String>) {
    self.text = text.into();
  }

  pub fn text(&self) -> &str {
    &self.text
  }

  pub fn len(&self) -> usize {
    self.text.len()
  }

  pub fn is_empty(&self) -> bool {
    self.text.is_empty()
  }

  pub fn set_clipboard(&mut self, clipboard: Arc<dyn ClipboardProvider>) {
    self.clipboard = Some(clipboard);
  }

  pub fn clear_clipboard(&mut self) {
    self.clipboard = None;
  }

  /// Geometry targets for `Up`, `Down`, `LineStart` and `LineEnd`. Callers
  /// refresh these from the layout before running those commands.
  pub fn set_navigation(&mut self, navigation: NavigationIndices) {
    self.navigation = navigation;
  }

  pub fn navigation(&self) -> &NavigationIndices {
    &self.navigation
  }

  /// The selection as last stored, possibly stale.
  pub fn selection(&self) -> Selection {
    self.selection
  }

  pub fn set_selection(&mut self, anchor: usize, head: usize) {
    self.selection = Selection::new(anchor, head);
  }

  /// Repairs the selection against the current buffer and returns its
  /// `(low, high)` ends.
  pub fn sorted_selection(&mut self) -> (usize, usize) {
    self.selection = self.clamped_selection();
    (self.selection.from(), self.selection.to())
  }

  pub fn has_selection(&self) -> bool {
    !self.clamped_selection().is_caret()
  }

  pub fn selected_text(&self) -> &str {
    let selection = self.clamped_selection();
    &self.text[selection.from()..selection.to()]
  }

  pub fn translate_position(&self, pos: usize, translation: Translation) -> usize {
    translate_position(&self.text, pos, translation, &self.navigation)
  }

  /// Selects the word around `pos`.
  pub fn select_word_at(&mut self, pos: usize) {
    let anchor = self.translate_position(pos, Translation::WordStart);
    let head = self.translate_position(pos, Translation::WordEnd);
    self.selection = Selection::new(anchor, head);
  }

  /// Inserts `text` at the caret, replacing any selection. Records no
  /// history.
  pub fn input_text(&mut self, text: &str) {
    if self.has_selection() {
      self.selection_delete();
    }
    let (pos, _) = self.sorted_selection();
    self.text.insert_str(pos, text);
    self.selection = Selection::point(pos + text.len());
  }

  /// Undoable variant of [`Editor::input_text`] for typed characters.
  pub fn input_chars(&mut self, chars: impl IntoIterator<Item = char>) {
    let text: String = chars.into_iter().collect();
    self.push_undo();
    self.input_text(&text);
  }

  /// Removes the selected text and leaves a caret at its start.
  pub fn selection_delete(&mut self) {
    let (from, to) = self.sorted_selection();
    self.text.replace_range(from..to, "");
    self.selection = Selection::point(from);
  }

  pub fn perform_command(&mut self, command: Command) -> Result<()> {
    tracing::trace!(?command, "perform command");
    if command.is_undoable() {
      self.push_undo();
    }

    match command {
      Command::None => {},
      Command::Undo => {
        self.undo();
      },
      Command::Redo => {
        self.redo();
      },
      Command::NewLine => self.input_text("\n"),
      Command::Cut => {
        self.copy()?;
        self.selection_delete();
      },
      Command::Copy => self.copy()?,
      Command::Paste => self.paste()?,
      Command::SelectAll => self.selection = Selection::new(0, self.text.len()),
      Command::Backspace => self.delete_to(Translation::Left),
      Command::Delete => self.delete_to(Translation::Right),
      Command::DeleteWordLeft => self.delete_to(Translation::WordLeft),
      Command::DeleteWordRight => self.delete_to(Translation::WordRight),
      Command::Left => {
        if self.has_selection() {
          let (from, _) = self.sorted_selection();
          self.selection = Selection::point(from);
        } else {
          self.move_to(Translation::Left);
        }
      },
      Command::Right => {
        if self.has_selection() {
          let (_, to) = self.sorted_selection();
          self.selection = Selection::point(to);
        } else {
          self.move_to(Translation::Right);
        }
      },
      Command::Up => self.move_to(Translation::Up),
      Command::Down => self.move_to(Translation::Down),
      Command::WordLeft => self.move_to(Translation::WordLeft),
      Command::WordRight => self.move_to(Translation::WordRight),
      Command::Start => self.move_to(Translation::Start),
      Command::End => self.move_to(Translation::End),
      Command::LineStart => self.move_to(Translation::SoftLineStart),
      Command::LineEnd => self.move_to(Translation::SoftLineEnd),
      Command::SelectLeft => self.select_to(Translation::Left),
      Command::SelectRight => self.select_to(Translation::Right),
      Command::SelectUp => self.select_to(Translation::Up),
      Command::SelectDown => self.select_to(Translation::Down),
      Command::SelectWordLeft => self.select_to(Translation::WordLeft),
      Command::SelectWordRight => self.select_to(Translation::WordRight),
      Command::SelectStart => self.select_to(Translation::Start),
      Command::SelectEnd => self.select_to(Translation::End),
      Command::SelectLineStart => self.select_to(Translation::SoftLineStart),
      Command::SelectLineEnd => self.select_to(Translation::SoftLineEnd),
    }
    Ok(())
  }

  /// Restores the state before the last undoable change. Returns `false` when
  /// there is nothing to undo.
  pub fn undo(&mut self) -> bool {
    if !self.history.can_undo() {
      return false;
    }
    let current = self.snapshot();
    match self.history.undo(current) {
      Some(previous) => {
        self.restore(previous);
        true
      },
      None => false,
    }
  }

  /// Reapplies the last undone change. Returns `false` when there is nothing
  /// to redo.
  pub fn redo(&mut self) -> bool {
    if !self.history.can_redo() {
      return false;
    }
    let current = self.snapshot();
    match self.history.redo(current) {
      Some(next) => {
        self.restore(next);
        true
      },
      None => false,
    }
  }

  pub fn can_undo(&self) -> bool {
    self.history.can_undo()
  }

  pub fn can_redo(&self) -> bool {
    self.history.can_redo()
  }

  pub fn clear_history(&mut self) {
    self.history.clear();
  }

  pub fn history(&self) -> &History {
    &self.history
  }

  fn clamped_selection(&self) -> Selection {
    Selection::new(
      floor_boundary(&self.text, self.selection.anchor),
      floor_boundary(&self.text, self.selection.head),
    )
  }

  fn snapshot(&self) -> Snapshot {
    Snapshot {
      selection: self.selection,
      text:      self.text.clone(),
    }
  }

  fn restore(&mut self, snapshot: Snapshot) {
    self.text = snapshot.text;
    self.selection = snapshot.selection;
  }

  fn push_undo(&mut self) {
    let snapshot = self.snapshot();
    self.history.push(snapshot);
  }

  fn head(&mut self) -> usize {
    self.sorted_selection();
    self.selection.head
  }

  fn move_to(&mut self, translation: Translation) {
    let head = self.head();
    self.selection = Selection::point(self.translate_position(head, translation));
  }

  fn select_to(&mut self, translation: Translation) {
    let head = self.head();
    self.selection.head = self.translate_position(head, translation);
  }

  /// Deletes the selection, or the text between the caret and `translation`
  /// when there is none.
  fn delete_to(&mut self, translation: Translation) {
    if !self.has_selection() {
      let head = self.head();
      self.selection.anchor = self.translate_position(head, translation);
    }
    self.selection_delete();
  }

  fn clipboard(&self) -> Result<&Arc<dyn ClipboardProvider>> {
    self
      .clipboard
      .as_ref()
      .ok_or(EditError::Clipboard(ClipboardError::Unavailable))
  }

  fn copy(&self) -> Result<()> {
    let clipboard = self.clipboard()?;
    let text = self.selected_text();
    if text.is_empty() {
      return Ok(());
    }
    clipboard.set_contents(text).map_err(|err| {
      tracing::warn!("failed to write clipboard: {err}");
      EditError::from(err)
    })
  }

  fn paste(&mut self) -> Result<()> {
    let contents = self.clipboard()?.get_contents().map_err(|err| {
      tracing::warn!("failed to read clipboard: {err}");
      EditError::from(err)
    })?;
    self.input_text(&contents);
    Ok(())
  }
}
