//! Line layout over UTF-8 text.
//!
//! [`TextLayout`] walks a string one codepoint at a time and decides, for each
//! codepoint, which glyph to draw, where its pen position is, and whether it
//! starts a new line. The walk is deterministic: the same text and
//! [`TextOptions`] always produce the same placements, which lets callers
//! measure a block of text and then draw it with identical line breaks.
//!
//! # Usage
//!
//! ```no_run
//! use quill_renderer::{
//!   FontRegistry,
//!   FontdueRasterizer,
//!   MemoryTextures,
//!   layout::TextLayout,
//!   text::{TextOptions, WrapMode},
//! };
//!
//! let mut fonts = FontRegistry::new(FontdueRasterizer, MemoryTextures::new());
//! let font = fonts.load_font("Inter.ttf").unwrap();
//! let options = TextOptions::new(font, 16.0)
//!   .with_max_width(200.0)
//!   .with_wrap(WrapMode::Word);
//!
//! if let Some(layout) = TextLayout::new(&mut fonts, "hello world", options) {
//!   for placed in layout {
//!     // draw placed.glyph at placed.offset...
//!   }
//! }
//! ```
//!
//! # Line breaking
//!
//! A line break is forced after every `\n`. With a `max_width`, a glyph that
//! would push the running line width past the limit either truncates the
//! text ([`WrapMode::None`]) or starts a new line. In [`WrapMode::Word`] the
//! decision is taken once per word, at its first glyph, against the width of
//! the whole word; separators never start a line and hang past the limit.
//! Words wider than the limit fall back to per-glyph breaking.

use quill_core::{
  chars::{
    char_is_line_ending,
    char_is_separator,
  },
  utf8::decode_at,
};

use crate::{
  font::FontId,
  glyph_cache::{
    FontMetrics,
    Glyph,
  },
  text::{
    BULLET,
    HorizontalAlign,
    TextOptions,
    VerticalAlign,
    WrapMode,
  },
};

/// Provider of font metrics and glyphs for a layout pass.
pub trait GlyphSource {
  /// Metrics for `font` at `size`, `None` if the font or size is unusable.
  fn font_metrics(&mut self, font: FontId, size: f32) -> Option<FontMetrics>;

  /// Glyph for `codepoint`, `None` when there is nothing to draw.
  fn glyph(&mut self, font: FontId, metrics: &FontMetrics, codepoint: char) -> Option<Glyph>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutState {
  /// Advancing through codepoints on the current line
  Scanning,
  /// The current codepoint is the first of a new line
  AtLineBreak,
  /// No more input, or the text was truncated
  Done,
}

/// One placed codepoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
  pub codepoint:   char,
  /// Glyph to draw, `None` for newlines and empty font handles
  pub glyph:       Option<Glyph>,
  /// Pen position at the top of the line. Add [`Glyph::offset`] to get the
  /// bitmap's top-left corner.
  pub offset:      (f32, f32),
  pub is_new_line: bool,
  pub byte_index:  usize,
  pub line:        usize,
}

#[derive(Debug, Clone, Copy)]
struct Cursor {
  index:         usize,
  next_index:    usize,
  codepoint:     char,
  glyph:         Option<Glyph>,
  state:         LayoutState,
  started:       bool,
  /// The last placed codepoint was a newline
  pending_break: bool,
  truncated:     bool,
  line:          usize,
  pen_x:         f32,
  line_width:    f32,
  /// End of the word measured by the last lookahead
  word_end:      usize,
  word_width:    f32,
}

impl Cursor {
  fn new() -> Self {
    Self {
      index:         0,
      next_index:    0,
      codepoint:     '\0',
      glyph:         None,
      state:         LayoutState::Scanning,
      started:       false,
      pending_break: false,
      truncated:     false,
      line:          0,
      pen_x:         0.0,
      line_width:    0.0,
      word_end:      0,
      word_width:    0.0,
    }
  }
}

/// Stateful layout pass over one string.
pub struct TextLayout<'a, S: GlyphSource + ?Sized> {
  source:  &'a mut S,
  text:    &'a str,
  options: TextOptions,
  metrics: FontMetrics,
  cursor:  Cursor,
  x_bias:  f32,
  y_bias:  f32,
}

impl<'a, S: GlyphSource + ?Sized> TextLayout<'a, S> {
  /// Starts a layout pass. Returns `None` when the font handle is empty or
  /// the size rounds below one pixel.
  pub fn new(source: &'a mut S, text: &'a str, options: TextOptions) -> Option<Self> {
    let metrics = source.font_metrics(options.font, options.size)?;
    let mut layout = Self {
      source,
      text,
      options,
      metrics,
      cursor: Cursor::new(),
      x_bias: 0.0,
      y_bias: 0.0,
    };

    if options.valign != VerticalAlign::Top {
      let mut replay = Cursor::new();
      while layout.step(&mut replay) {}
      let height = layout.lines_of(&replay) as f32 * metrics.line_height();
      layout.y_bias = match options.valign {
        VerticalAlign::Top => 0.0,
        VerticalAlign::Middle => -height / 2.0,
        VerticalAlign::Bottom => -height,
      };
    }

    if options.align != HorizontalAlign::Left {
      let width = layout.measure_line(Cursor::new());
      layout.x_bias = layout.align_offset(width);
    }

    Some(layout)
  }

  /// Moves to the next codepoint. Returns `false` once the text is exhausted
  /// or truncated.
  pub fn advance(&mut self) -> bool {
    let mut cursor = self.cursor;
    let placed = self.step(&mut cursor);
    self.cursor = cursor;

    let aligned = self.options.align != HorizontalAlign::Left;
    if placed && aligned && cursor.state == LayoutState::AtLineBreak {
      let width = self.measure_line(cursor);
      self.x_bias = self.align_offset(width);
    }
    placed
  }

  pub fn state(&self) -> LayoutState {
    self.cursor.state
  }

  pub fn codepoint(&self) -> char {
    self.cursor.codepoint
  }

  pub fn glyph(&self) -> Option<Glyph> {
    self.cursor.glyph
  }

  /// Byte index of the current codepoint.
  pub fn byte_index(&self) -> usize {
    self.cursor.index
  }

  /// Byte index just past the current codepoint.
  pub fn next_index(&self) -> usize {
    self.cursor.next_index
  }

  pub fn is_new_line(&self) -> bool {
    self.cursor.state == LayoutState::AtLineBreak
  }

  /// Zero-based line of the current codepoint.
  pub fn line(&self) -> usize {
    self.cursor.line
  }

  /// Width of the current line up to and including the current codepoint.
  pub fn line_width(&self) -> f32 {
    self.cursor.line_width
  }

  pub fn offset(&self) -> (f32, f32) {
    (
      self.x_bias + self.cursor.pen_x,
      self.y_bias + self.cursor.line as f32 * self.metrics.line_height(),
    )
  }

  pub fn metrics(&self) -> &FontMetrics {
    &self.metrics
  }

  pub fn options(&self) -> &TextOptions {
    &self.options
  }

  /// Lines visited so far. Once the pass is done this is the total, including
  /// the empty line after a trailing newline.
  pub fn line_count(&self) -> usize {
    self.lines_of(&self.cursor)
  }

  /// Snapshot of the current codepoint's placement.
  pub fn placed(&self) -> PlacedGlyph {
    PlacedGlyph {
      codepoint:   self.cursor.codepoint,
      glyph:       self.cursor.glyph,
      offset:      self.offset(),
      is_new_line: self.is_new_line(),
      byte_index:  self.cursor.index,
      line:        self.cursor.line,
    }
  }

  /// Horizontal start of a line `width` pixels wide.
  pub(crate) fn align_offset(&self, width: f32) -> f32 {
    let room = self.options.max_width.unwrap_or(0.0);
    match self.options.align {
      HorizontalAlign::Left => 0.0,
      HorizontalAlign::Middle => (room - width) / 2.0,
      HorizontalAlign::Right => room - width,
    }
  }

  /// Vertical offset applied to the whole block.
  pub(crate) fn block_offset(&self) -> f32 {
    self.y_bias
  }

  fn lines_of(&self, cursor: &Cursor) -> usize {
    if !cursor.started {
      return 0;
    }
    let trailing =
      cursor.state == LayoutState::Done && cursor.pending_break && !cursor.truncated;
    let lines = cursor.line + 1 + usize::from(trailing);
    self
      .options
      .max_lines
      .map_or(lines, |max| lines.min(max))
  }

  /// Width of the line that `start` begins, found by replaying the layout on
  /// a copy of the cursor.
  fn measure_line(&mut self, start: Cursor) -> f32 {
    let mut replay = start;
    if replay.started {
      // Re-place the line's first codepoint from a fresh line.
      replay.next_index = replay.index;
      replay.line_width = 0.0;
    }
    replay.pending_break = false;

    let line = replay.line;
    loop {
      let width = replay.line_width;
      if !self.step(&mut replay) || replay.line != line {
        return width;
      }
    }
  }

  fn glyph_for(&mut self, codepoint: char) -> (Option<Glyph>, f32) {
    if char_is_line_ending(codepoint) {
      return (None, 0.0);
    }
    let codepoint = if self.options.hidden { BULLET } else { codepoint };
    let glyph = self
      .source
      .glyph(self.options.font, &self.metrics, codepoint);
    let advance = glyph.map_or(0.0, |glyph| glyph.advance) + self.options.spacing;
    (glyph, advance)
  }

  /// Whether `ch` ends a word. Hidden text is one word per line, so only
  /// line endings separate it.
  fn is_separator(&self, ch: char) -> bool {
    if self.options.hidden {
      char_is_line_ending(ch)
    } else {
      char_is_separator(ch)
    }
  }

  /// Sums advances from `start` to the next separator or the end of text.
  fn measure_word(&mut self, start: usize) -> (usize, f32) {
    let mut pos = start;
    let mut width = 0.0;
    while let Some((ch, len)) = decode_at(self.text, pos) {
      if self.is_separator(ch) {
        break;
      }
      width += self.glyph_for(ch).1;
      pos += len;
    }
    (pos, width)
  }

  fn step(&mut self, cursor: &mut Cursor) -> bool {
    if cursor.state == LayoutState::Done {
      return false;
    }
    if !cursor.started && self.options.max_lines == Some(0) {
      cursor.state = LayoutState::Done;
      cursor.truncated = true;
      return false;
    }
    let Some((ch, len)) = decode_at(self.text, cursor.next_index) else {
      cursor.state = LayoutState::Done;
      return false;
    };
    let index = cursor.next_index;
    let (glyph, advance) = self.glyph_for(ch);
    let max_width = self.options.max_width;

    let (can_break, space) = match self.options.wrap {
      WrapMode::None | WrapMode::Normal => (true, advance),
      WrapMode::Word if self.is_separator(ch) => (false, advance),
      WrapMode::Word if index >= cursor.word_end => {
        let (end, width) = self.measure_word(index);
        cursor.word_end = end;
        cursor.word_width = width;
        (true, width)
      },
      WrapMode::Word => (max_width.is_some_and(|max| cursor.word_width > max), advance),
    };
    let overflows =
      |width: f32| can_break && max_width.is_some_and(|max| width + space > max);

    let new_line = cursor.pending_break
      || (self.options.wrap != WrapMode::None
        && cursor.line_width > 0.0
        && overflows(cursor.line_width));
    let line_width = if new_line { 0.0 } else { cursor.line_width };

    if self.options.wrap == WrapMode::None && overflows(line_width) {
      cursor.index = self.text.len();
      cursor.next_index = self.text.len();
      cursor.state = LayoutState::Done;
      cursor.truncated = true;
      return false;
    }

    if new_line {
      if self
        .options
        .max_lines
        .is_some_and(|max| cursor.line + 1 >= max)
      {
        cursor.state = LayoutState::Done;
        cursor.truncated = true;
        return false;
      }
      cursor.line += 1;
      cursor.state = LayoutState::AtLineBreak;
    } else {
      cursor.state = LayoutState::Scanning;
    }

    cursor.started = true;
    cursor.index = index;
    cursor.next_index = index + len;
    cursor.codepoint = ch;
    cursor.glyph = glyph;
    cursor.pen_x = line_width;
    cursor.line_width = line_width + advance;
    cursor.pending_break = char_is_line_ending(ch);
    true
  }
}

impl<S: GlyphSource + ?Sized> Iterator for TextLayout<'_, S> {
  type Item = PlacedGlyph;

  fn next(&mut self) -> Option<PlacedGlyph> {
    self.advance().then(|| self.placed())
  }
}

/// Bounding size of `text` laid out with `options`, as `(width, height)`.
///
/// Runs the same pass drawing uses, so the extents match what is drawn.
/// Alignment does not change the extents and is ignored.
pub fn measure_text<S: GlyphSource + ?Sized>(
  source: &mut S,
  text: &str,
  options: TextOptions,
) -> (f32, f32) {
  let options = TextOptions {
    align: HorizontalAlign::Left,
    valign: VerticalAlign::Top,
    ..options
  };
  let Some(mut layout) = TextLayout::new(source, text, options) else {
    return (0.0, 0.0);
  };

  let mut width = 0.0f32;
  while layout.advance() {
    width = width.max(layout.line_width());
  }
  let height = layout.line_count() as f32 * layout.metrics().line_height();
  (width, height)
}

pub fn measure_width<S: GlyphSource + ?Sized>(
  source: &mut S,
  text: &str,
  options: TextOptions,
) -> f32 {
  measure_text(source, text, options).0
}

pub fn line_count<S: GlyphSource + ?Sized>(
  source: &mut S,
  text: &str,
  options: TextOptions,
) -> usize {
  let options = TextOptions {
    align: HorizontalAlign::Left,
    valign: VerticalAlign::Top,
    ..options
  };
  let Some(mut layout) = TextLayout::new(source, text, options) else {
    return 0;
  };
  while layout.advance() {}
  layout.line_count()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::{
    TestRegistry,
    registry,
  };

  // At 16px the fake font advances 8px per glyph, 4px per space or tab, and
  // has a 16px line height.
  fn setup() -> (TestRegistry, TextOptions) {
    let mut fonts = registry();
    let font = fonts.load_font_bytes("fake", b"font").unwrap();
    (fonts, TextOptions::new(font, 16.0))
  }

  fn lines(fonts: &mut TestRegistry, text: &str, options: TextOptions) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for placed in TextLayout::new(fonts, text, options).unwrap() {
      if placed.is_new_line || lines.is_empty() {
        lines.push(String::new());
      }
      if let Some(line) = lines.last_mut() {
        line.push(placed.codepoint);
      }
    }
    lines
  }

  #[test]
  fn single_line_placement() {
    let (mut fonts, options) = setup();
    let placed: Vec<_> = TextLayout::new(&mut fonts, "ab c", options)
      .unwrap()
      .collect();

    let offsets: Vec<_> = placed.iter().map(|p| p.offset).collect();
    assert_eq!(offsets, vec![(0.0, 0.0), (8.0, 0.0), (16.0, 0.0), (20.0, 0.0)]);
    assert!(placed.iter().all(|p| !p.is_new_line));
    assert_eq!(measure_text(&mut fonts, "ab c", options), (28.0, 16.0));
  }

  #[test]
  fn byte_indices_follow_multibyte_codepoints() {
    let (mut fonts, options) = setup();
    let indices: Vec<_> = TextLayout::new(&mut fonts, "é世a", options)
      .unwrap()
      .map(|p| p.byte_index)
      .collect();
    assert_eq!(indices, vec![0, 2, 5]);
  }

  #[test]
  fn word_wrap_breaks_before_whole_words() {
    let (mut fonts, options) = setup();
    // "hello world" is 84px, the whole string 116px.
    let options = options.with_max_width(100.0).with_wrap(WrapMode::Word);

    assert_eq!(lines(&mut fonts, "hello world foo", options), vec![
      "hello world ",
      "foo"
    ]);
    assert_eq!(line_count(&mut fonts, "hello world foo", options), 2);
  }

  #[test]
  fn normal_wrap_breaks_anywhere() {
    let (mut fonts, options) = setup();
    let options = options.with_max_width(100.0).with_wrap(WrapMode::Normal);

    assert_eq!(lines(&mut fonts, "hello world foo", options), vec![
      "hello world f",
      "oo"
    ]);
  }

  #[test]
  fn overlong_word_falls_back_to_glyph_breaks() {
    let (mut fonts, options) = setup();
    let options = options.with_max_width(50.0).with_wrap(WrapMode::Word);

    assert_eq!(lines(&mut fonts, "abcdefghij", options), vec!["abcdef", "ghij"]);
  }

  #[test]
  fn no_wrap_truncates() {
    let (mut fonts, options) = setup();
    let options = options.with_max_width(100.0);

    let mut layout = TextLayout::new(&mut fonts, "hello world foo", options).unwrap();
    let mut last = 0;
    while layout.advance() {
      last = layout.byte_index();
    }
    assert_eq!(last, 12);
    assert_eq!(layout.state(), LayoutState::Done);
    assert_eq!(layout.byte_index(), "hello world foo".len());
    assert_eq!(layout.line_count(), 1);
    assert_eq!(measure_text(&mut fonts, "hello world foo", options), (96.0, 16.0));
  }

  #[test]
  fn explicit_newlines_break_lines() {
    let (mut fonts, options) = setup();
    assert_eq!(lines(&mut fonts, "ab\ncd", options), vec!["ab\n", "cd"]);
    assert_eq!(measure_text(&mut fonts, "ab\ncd", options), (16.0, 32.0));
  }

  #[test]
  fn trailing_newline_adds_an_empty_line() {
    let (mut fonts, options) = setup();
    assert_eq!(measure_text(&mut fonts, "ab\n", options), (16.0, 32.0));
    assert_eq!(measure_text(&mut fonts, "\n", options), (0.0, 32.0));
    assert_eq!(measure_text(&mut fonts, "", options), (0.0, 0.0));
  }

  #[test]
  fn max_lines_stops_the_pass() {
    let (mut fonts, options) = setup();
    let options = options.with_max_lines(2);
    assert_eq!(lines(&mut fonts, "a\nb\nc", options), vec!["a\n", "b\n"]);
    assert_eq!(line_count(&mut fonts, "a\nb\nc", options), 2);
    assert_eq!(line_count(&mut fonts, "a\nb\n", options), 2);
  }

  #[test]
  fn max_lines_zero_draws_nothing() {
    let (mut fonts, options) = setup();
    let options = options.with_max_lines(0);
    for valign in [VerticalAlign::Top, VerticalAlign::Bottom] {
      let options = options
        .with_valign(valign)
        .with_align(HorizontalAlign::Right);
      let mut layout = TextLayout::new(&mut fonts, "ab\ncd", options).unwrap();
      assert!(!layout.advance());
      assert_eq!(layout.state(), LayoutState::Done);
      assert_eq!(layout.line_count(), 0);
    }
    assert_eq!(measure_text(&mut fonts, "ab\ncd", options), (0.0, 0.0));
    assert_eq!(line_count(&mut fonts, "ab\ncd", options), 0);
  }

  #[test]
  fn non_positive_size_yields_nothing() {
    let (mut fonts, options) = setup();
    for size in [0.0, -4.0, 0.3] {
      let options = TextOptions { size, ..options };
      assert!(TextLayout::new(&mut fonts, "abc", options).is_none());
      assert_eq!(measure_text(&mut fonts, "abc", options), (0.0, 0.0));
    }
  }

  #[test]
  fn empty_font_handle_yields_nothing() {
    let (mut fonts, options) = setup();
    fonts.unload_font(options.font);
    assert!(TextLayout::new(&mut fonts, "abc", options).is_none());
  }

  #[test]
  fn tabs_advance_by_their_glyph() {
    let (mut fonts, options) = setup();
    assert_eq!(measure_width(&mut fonts, "a\tb", options), 20.0);
  }

  #[test]
  fn spacing_follows_every_glyph() {
    let (mut fonts, options) = setup();
    let options = options.with_spacing(2.0);
    assert_eq!(measure_width(&mut fonts, "ab", options), 20.0);
  }

  #[test]
  fn hidden_text_uses_bullets() {
    let (mut fonts, options) = setup();
    // 'j' has a narrower advance than the bullet.
    assert_eq!(measure_width(&mut fonts, "jj", options), 14.0);

    let options = options.hidden(true);
    let placed: Vec<_> = TextLayout::new(&mut fonts, "jj", options)
      .unwrap()
      .collect();
    assert_eq!(placed[0].codepoint, 'j');
    assert_eq!(placed[1].offset.0, 8.0);
    assert_eq!(measure_width(&mut fonts, "jj", options), 16.0);
  }

  #[test]
  fn hidden_text_wraps_as_one_word() {
    let (mut fonts, options) = setup();
    let options = options.with_max_width(20.0).with_wrap(WrapMode::Word);
    assert_eq!(lines(&mut fonts, "ab cd", options), vec!["ab ", "cd"]);

    // Every bullet is 8px, so the 40px run breaks per glyph and the space
    // lands mid-line.
    let hidden = options.hidden(true);
    assert_eq!(lines(&mut fonts, "ab cd", hidden), vec!["ab", " c", "d"]);
    assert_eq!(lines(&mut fonts, "ab\ncd", hidden), vec!["ab\n", "cd"]);
    assert_eq!(line_count(&mut fonts, "ab cd", hidden), 3);
  }

  #[test]
  fn unavailable_glyphs_leave_a_zero_width_gap() {
    let (mut fonts, options) = setup();
    assert_eq!(measure_width(&mut fonts, "a\u{FFFD}b", options), 16.0);
  }

  #[test]
  fn right_alignment_is_resolved_per_line() {
    let (mut fonts, options) = setup();
    let options = options
      .with_max_width(40.0)
      .with_align(HorizontalAlign::Right);

    let starts: Vec<_> = TextLayout::new(&mut fonts, "ab\nabcd", options)
      .unwrap()
      .filter(|p| p.byte_index == 0 || p.is_new_line)
      .map(|p| p.offset)
      .collect();
    assert_eq!(starts, vec![(24.0, 0.0), (8.0, 16.0)]);
  }

  #[test]
  fn middle_alignment_without_width_centers_on_origin() {
    let (mut fonts, options) = setup();
    let options = options.with_align(HorizontalAlign::Middle);
    let first = TextLayout::new(&mut fonts, "ab", options)
      .unwrap()
      .next()
      .unwrap();
    assert_eq!(first.offset, (-8.0, 0.0));
  }

  #[test]
  fn alignment_follows_wrapped_lines() {
    let (mut fonts, options) = setup();
    let options = options
      .with_max_width(100.0)
      .with_wrap(WrapMode::Word)
      .with_align(HorizontalAlign::Right);

    let starts: Vec<_> = TextLayout::new(&mut fonts, "hello world foo", options)
      .unwrap()
      .filter(|p| p.byte_index == 0 || p.is_new_line)
      .map(|p| p.offset.0)
      .collect();
    // Line widths are 88 ("hello world ") and 24 ("foo").
    assert_eq!(starts, vec![12.0, 76.0]);
  }

  #[test]
  fn vertical_alignment_offsets_the_block() {
    let (mut fonts, options) = setup();
    let options = options.with_valign(VerticalAlign::Bottom);
    let ys: Vec<_> = TextLayout::new(&mut fonts, "a\nb", options)
      .unwrap()
      .map(|p| p.offset.1)
      .collect();
    assert_eq!(ys, vec![-32.0, -32.0, -16.0]);

    let options = options.with_valign(VerticalAlign::Middle);
    let first = TextLayout::new(&mut fonts, "a\nb", options)
      .unwrap()
      .next()
      .unwrap();
    assert_eq!(first.offset.1, -16.0);
  }

  #[test]
  fn measuring_and_drawing_agree() {
    let (mut fonts, options) = setup();
    let text = "The quick brown fox\njumps over the lazy dog, twice.\n";
    for wrap in [WrapMode::None, WrapMode::Normal, WrapMode::Word] {
      let options = options.with_max_width(90.0).with_wrap(wrap);

      let breaks = |fonts: &mut TestRegistry| {
        TextLayout::new(fonts, text, options)
          .unwrap()
          .filter(|p| p.is_new_line)
          .map(|p| p.byte_index)
          .collect::<Vec<_>>()
      };
      let first = breaks(&mut fonts);
      let second = breaks(&mut fonts);
      assert_eq!(first, second);

      let mut layout = TextLayout::new(&mut fonts, text, options).unwrap();
      let mut width = 0.0f32;
      while layout.advance() {
        width = width.max(layout.line_width());
      }
      let drawn = (
        width,
        layout.line_count() as f32 * layout.metrics().line_height(),
      );
      assert_eq!(measure_text(&mut fonts, text, options), drawn);
    }
  }

  #[test]
  fn rerunning_does_not_rasterize_again() {
    let (mut fonts, options) = setup();
    measure_text(&mut fonts, "abcabc", options);
    let calls = fonts.rasterizer().rasterize_calls();
    measure_text(&mut fonts, "cab", options);
    assert_eq!(fonts.rasterizer().rasterize_calls(), calls);
  }
}
