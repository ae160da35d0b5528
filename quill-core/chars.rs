//! Character classification shared by layout and editing.
//!
//! Word movement and word-wrap lookahead both split text on the same small
//! ASCII separator set so that a word the layout keeps together is also the
//! unit the editor jumps over.

#[inline]
pub fn char_is_line_ending(ch: char) -> bool {
  ch == '\n'
}

/// Returns true for the ASCII word separators: space, tab and newline.
#[inline]
pub fn char_is_separator(ch: char) -> bool {
  matches!(ch, ' ' | '\t' | '\n')
}

/// Byte level variant of [`char_is_separator`].
///
/// Safe to call on any byte of a UTF-8 buffer: the separators are ASCII and
/// never occur inside a multi-byte sequence.
#[inline]
pub fn byte_is_separator(byte: u8) -> bool {
  matches!(byte, b' ' | b'\t' | b'\n')
}
