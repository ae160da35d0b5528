//! Caret translations over a UTF-8 buffer.
//!
//! This module maps a byte offset and a [`Translation`] to a new byte offset.
//! Horizontal and word movement is computed from the text alone. Vertical and
//! line-edge movement needs layout geometry and is read from the
//! [`NavigationIndices`] the renderer computed for the current caret.
//!
//! # Usage
//!
//! ```
//! use quill_core::navigation::NavigationIndices;
//! use quill_lib::movement::{
//!   Translation,
//!   translate_position,
//! };
//!
//! let nav = NavigationIndices::default();
//! assert_eq!(translate_position("hello world", 11, Translation::WordLeft, &nav), 6);
//! assert_eq!(translate_position("héllo", 1, Translation::Right, &nav), 3);
//! ```

use quill_core::{
  chars::byte_is_separator,
  navigation::NavigationIndices,
  utf8::{
    floor_boundary,
    next_boundary,
    prev_boundary,
  },
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Translation {
  Start,
  End,
  Left,
  Right,
  Up,
  Down,
  WordLeft,
  WordRight,
  /// Start of the word under the offset
  WordStart,
  /// End of the word under the offset
  WordEnd,
  SoftLineStart,
  SoftLineEnd,
}

/// Applies `translation` to `pos`. The result is always a codepoint boundary
/// inside `text`, whatever `pos` and `nav` contain.
pub fn translate_position(
  text: &str,
  pos: usize,
  translation: Translation,
  nav: &NavigationIndices,
) -> usize {
  let pos = floor_boundary(text, pos);
  let target = match translation {
    Translation::Start => 0,
    Translation::End => text.len(),
    Translation::Left => prev_boundary(text, pos),
    Translation::Right => next_boundary(text, pos),
    Translation::Up => nav.up,
    Translation::Down => nav.down,
    Translation::WordLeft => word_left(text, pos),
    Translation::WordRight => word_right(text, pos),
    Translation::WordStart => word_start(text, pos),
    Translation::WordEnd => word_end(text, pos),
    Translation::SoftLineStart => nav.line_start,
    Translation::SoftLineEnd => nav.line_end,
  };
  floor_boundary(text, target)
}

// Separators are ASCII, so stopping next to one always lands on a codepoint
// boundary and the scans below can work on bytes.

fn word_left(text: &str, pos: usize) -> usize {
  let bytes = text.as_bytes();
  let mut pos = pos;
  while pos > 0 && byte_is_separator(bytes[pos - 1]) {
    pos -= 1;
  }
  word_start(text, pos)
}

fn word_right(text: &str, pos: usize) -> usize {
  let bytes = text.as_bytes();
  let mut pos = pos;
  while pos < bytes.len() && byte_is_separator(bytes[pos]) {
    pos += 1;
  }
  word_end(text, pos)
}

fn word_start(text: &str, pos: usize) -> usize {
  let bytes = text.as_bytes();
  let mut pos = pos;
  while pos > 0 && !byte_is_separator(bytes[pos - 1]) {
    pos -= 1;
  }
  pos
}

fn word_end(text: &str, pos: usize) -> usize {
  let bytes = text.as_bytes();
  let mut pos = pos;
  while pos < bytes.len() && !byte_is_separator(bytes[pos]) {
    pos += 1;
  }
  pos
}

#[cfg(test)]
mod tests {
  use quickcheck::{
    Arbitrary,
    Gen,
  };

  use super::*;

  fn translate(text: &str, pos: usize, translation: Translation) -> usize {
    translate_position(text, pos, translation, &NavigationIndices::default())
  }

  #[test]
  fn steps_by_codepoint() {
    let text = "aé世🦀";
    assert_eq!(translate(text, 0, Translation::Right), 1);
    assert_eq!(translate(text, 1, Translation::Right), 3);
    assert_eq!(translate(text, 3, Translation::Right), 6);
    assert_eq!(translate(text, 6, Translation::Right), 10);
    assert_eq!(translate(text, 10, Translation::Right), 10);
    assert_eq!(translate(text, 10, Translation::Left), 6);
    assert_eq!(translate(text, 0, Translation::Left), 0);
  }

  #[test]
  fn word_jumps() {
    let text = "foo  bar\tbaz\n qux";
    assert_eq!(translate(text, 0, Translation::WordRight), 3);
    assert_eq!(translate(text, 3, Translation::WordRight), 8);
    assert_eq!(translate(text, 8, Translation::WordRight), 12);
    assert_eq!(translate(text, 12, Translation::WordRight), 17);

    assert_eq!(translate(text, 17, Translation::WordLeft), 14);
    assert_eq!(translate(text, 14, Translation::WordLeft), 9);
    assert_eq!(translate(text, 5, Translation::WordLeft), 0);
    assert_eq!(translate(text, 6, Translation::WordLeft), 5);
  }

  #[test]
  fn word_bounds() {
    let text = "héllo wörld";
    assert_eq!(translate(text, 2, Translation::WordStart), 0);
    assert_eq!(translate(text, 2, Translation::WordEnd), 6);
    assert_eq!(translate(text, 8, Translation::WordStart), 7);
    assert_eq!(translate(text, 8, Translation::WordEnd), 13);
  }

  #[test]
  fn layout_targets_are_clamped() {
    let nav = NavigationIndices {
      up:         2,
      down:       99,
      line_start: 1,
      line_end:   4,
    };
    let text = "a世b";
    assert_eq!(translate_position(text, 0, Translation::Up, &nav), 1);
    assert_eq!(translate_position(text, 0, Translation::Down, &nav), 5);
    assert_eq!(translate_position(text, 0, Translation::SoftLineStart, &nav), 1);
    assert_eq!(translate_position(text, 0, Translation::SoftLineEnd, &nav), 4);
  }

  #[test]
  fn out_of_range_start_is_repaired() {
    assert_eq!(translate("ab", 40, Translation::Left), 1);
    assert_eq!(translate("a世", 2, Translation::Right), 4);
  }

  #[derive(Debug, Clone, Copy)]
  struct Move(Translation);

  impl Arbitrary for Move {
    fn arbitrary(g: &mut Gen) -> Self {
      const MOVES: [Translation; 4] = [
        Translation::Left,
        Translation::Right,
        Translation::WordLeft,
        Translation::WordRight,
      ];
      Move(*g.choose(&MOVES).unwrap())
    }
  }

  quickcheck::quickcheck! {
      fn moves_stay_on_boundaries(text: String, start: usize, moves: Vec<Move>) -> bool {
          let mut pos = start;
          moves.iter().all(|Move(translation)| {
              pos = translate(&text, pos, *translation);
              pos <= text.len() && text.is_char_boundary(pos)
          })
      }
  }
}
