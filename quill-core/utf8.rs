//! Byte offset helpers for UTF-8 text.
//!
//! Every position handled by the layout and editing layers is a byte offset
//! into a `str`. These helpers step between codepoint boundaries and repair
//! offsets that were supplied from outside (mouse hits, stale selections) so
//! they can be used to slice the text without panicking.

/// Returns true for UTF-8 continuation bytes (`10xxxxxx`).
#[inline]
pub const fn is_continuation_byte(byte: u8) -> bool {
  byte & 0xC0 == 0x80
}

/// Clamps `pos` to `[0, text.len()]` and moves it back onto the nearest
/// codepoint boundary at or before it.
#[must_use]
pub fn floor_boundary(text: &str, pos: usize) -> usize {
  let mut pos = pos.min(text.len());
  while !text.is_char_boundary(pos) {
    pos -= 1;
  }
  pos
}

/// Returns the boundary one codepoint after `pos`, or `text.len()` at the end.
#[must_use]
pub fn next_boundary(text: &str, pos: usize) -> usize {
  let bytes = text.as_bytes();
  let len = bytes.len();
  if pos >= len {
    return len;
  }
  let mut pos = pos + 1;
  while pos < len && is_continuation_byte(bytes[pos]) {
    pos += 1;
  }
  pos
}

/// Returns the boundary one codepoint before `pos`, or `0` at the start.
#[must_use]
pub fn prev_boundary(text: &str, pos: usize) -> usize {
  let bytes = text.as_bytes();
  let mut pos = pos.min(bytes.len());
  if pos == 0 {
    return 0;
  }
  pos -= 1;
  while pos > 0 && is_continuation_byte(bytes[pos]) {
    pos -= 1;
  }
  pos
}

/// Decodes the codepoint starting at `pos` and returns it with its encoded
/// width. Returns `None` at the end of the text or off a boundary.
#[inline]
pub fn decode_at(text: &str, pos: usize) -> Option<(char, usize)> {
  let ch = text.get(pos..)?.chars().next()?;
  Some((ch, ch.len_utf8()))
}
