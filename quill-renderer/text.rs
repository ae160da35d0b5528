//! Text layout options
//!
//! This module provides the per-call configuration consumed by the layout
//! iterator. Options are plain values: the same options over the same text
//! always produce the same placement.

use crate::font::FontId;

/// Codepoint drawn in place of every glyph when [`TextOptions::hidden`] is
/// set.
pub const BULLET: char = '\u{2022}';

/// Policy for lines wider than [`TextOptions::max_width`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
  /// Truncate at the width limit and stop
  #[default]
  None,
  /// Break before any glyph that would overflow
  Normal,
  /// Break only between words
  Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
  #[default]
  Left,
  Middle,
  Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
  #[default]
  Top,
  Middle,
  Bottom,
}

/// Options for one layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOptions {
  pub font:      FontId,
  /// Requested pixel size, rounded to whole pixels by the glyph cache
  pub size:      f32,
  /// Extra horizontal space after every glyph
  pub spacing:   f32,
  pub max_width: Option<f32>,
  pub max_lines: Option<usize>,
  pub wrap:      WrapMode,
  /// Horizontal alignment. With a `max_width` lines align inside
  /// `[0, max_width]`, otherwise around the origin.
  pub align:     HorizontalAlign,
  /// Vertical alignment of the whole block around the origin
  pub valign:    VerticalAlign,
  /// Render every glyph as [`BULLET`]
  pub hidden:    bool,
}

impl TextOptions {
  /// Create options with default wrapping and alignment
  pub fn new(font: FontId, size: f32) -> Self {
    Self {
      font,
      size,
      spacing: 0.0,
      max_width: None,
      max_lines: None,
      wrap: WrapMode::None,
      align: HorizontalAlign::Left,
      valign: VerticalAlign::Top,
      hidden: false,
    }
  }

  pub fn with_spacing(mut self, spacing: f32) -> Self {
    self.spacing = spacing;
    self
  }

  pub fn with_max_width(mut self, max_width: f32) -> Self {
    self.max_width = Some(max_width);
    self
  }

  pub fn with_max_lines(mut self, max_lines: usize) -> Self {
    self.max_lines = Some(max_lines);
    self
  }

  pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
    self.wrap = wrap;
    self
  }

  pub fn with_align(mut self, align: HorizontalAlign) -> Self {
    self.align = align;
    self
  }

  pub fn with_valign(mut self, valign: VerticalAlign) -> Self {
    self.valign = valign;
    self
  }

  /// Set password-style rendering
  pub fn hidden(mut self, hidden: bool) -> Self {
    self.hidden = hidden;
    self
  }
}
