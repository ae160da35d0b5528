//! Caret targets computed by the layout pass.

/// Byte offsets the caret moves to for vertical and line-edge movement.
///
/// Only the layout knows where lines wrap, so these are produced by the
/// renderer for the current caret and handed to the editor before it runs a
/// movement command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationIndices {
  /// Closest offset on the line above, `0` on the first line
  pub up:         usize,
  /// Closest offset on the line below, the text length on the last line
  pub down:       usize,
  pub line_start: usize,
  /// Offset before the line's newline, or before the last glyph of a line
  /// that wraps
  pub line_end:   usize,
}
