//! Caret geometry over laid-out text.
//!
//! [`TextLines`] records where every line of a layout pass starts and ends
//! and the pen position of each glyph, so that byte offsets can be turned
//! into caret positions and mouse positions back into byte offsets. All
//! positions use the same origin and alignment as the layout itself.

use quill_core::navigation::NavigationIndices;
use smallvec::SmallVec;

use crate::{
  layout::{
    GlyphSource,
    TextLayout,
  },
  text::TextOptions,
};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Stop {
  byte:    usize,
  x:       f32,
  advance: f32,
}

/// One visual line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSpan {
  /// Byte offset of the first codepoint
  pub start:  usize,
  /// Byte offset of the terminating newline, or one past the last codepoint
  pub end:    usize,
  /// Top of the line
  pub y:      f32,
  /// Pen position after the last visible glyph
  pub end_x:  f32,
  hard_break: bool,
  stops:      SmallVec<[Stop; 32]>,
}

impl LineSpan {
  fn empty(start: usize, x: f32, y: f32) -> Self {
    Self {
      start,
      end: start,
      y,
      end_x: x,
      hard_break: false,
      stops: SmallVec::new(),
    }
  }

  /// True when the line ends in a newline rather than a wrap.
  pub fn ends_with_newline(&self) -> bool {
    self.hard_break
  }
}

/// Lines of one layout pass. Always holds at least one line.
#[derive(Debug, Clone)]
pub struct TextLines {
  lines:       Vec<LineSpan>,
  line_height: f32,
  len:         usize,
}

impl TextLines {
  /// Lays out `text` and records its lines. `None` when the layout cannot
  /// start.
  pub fn new<S: GlyphSource + ?Sized>(
    source: &mut S,
    text: &str,
    options: TextOptions,
  ) -> Option<Self> {
    let mut layout = TextLayout::new(source, text, options)?;
    let line_height = layout.metrics().line_height();
    let mut lines: Vec<LineSpan> = Vec::new();

    while layout.advance() {
      let (x, y) = layout.offset();
      let byte = layout.byte_index();
      if layout.is_new_line() || lines.is_empty() {
        lines.push(LineSpan::empty(byte, x, y));
      }
      let Some(line) = lines.last_mut() else {
        continue;
      };

      if layout.codepoint() == '\n' {
        line.end = byte;
        line.end_x = x;
        line.hard_break = true;
      } else {
        let advance = layout.glyph().map_or(0.0, |glyph| glyph.advance) + options.spacing;
        line.stops.push(Stop { byte, x, advance });
        line.end = layout.next_index();
        line.end_x = x + advance;
      }
    }

    // The empty line after a trailing newline, or the only line of empty text.
    let trailing = lines.last().is_some_and(LineSpan::ends_with_newline)
      && layout.line_count() > lines.len();
    if lines.is_empty() || trailing {
      let start = lines.last().map_or(0, |line| line.end + 1);
      let y = lines
        .last()
        .map_or(layout.block_offset(), |line| line.y + line_height);
      lines.push(LineSpan::empty(start, layout.align_offset(0.0), y));
    }

    Some(Self {
      lines,
      line_height,
      len: text.len(),
    })
  }

  pub fn lines(&self) -> &[LineSpan] {
    &self.lines
  }

  pub fn line_height(&self) -> f32 {
    self.line_height
  }

  /// Line holding `byte`. An offset where a wrapped line begins belongs to
  /// that line rather than the end of the previous one.
  pub fn line_at(&self, byte: usize) -> usize {
    self
      .lines
      .partition_point(|line| line.start <= byte)
      .saturating_sub(1)
  }

  /// Top-left of a caret placed before `byte`.
  pub fn caret_position(&self, byte: usize) -> (f32, f32) {
    let line = &self.lines[self.line_at(byte)];
    let x = line
      .stops
      .iter()
      .find(|stop| stop.byte >= byte)
      .map_or(line.end_x, |stop| stop.x);
    (x, line.y)
  }

  /// Byte offset closest to `point`. Points above or below the text snap to
  /// the first or last line.
  pub fn hit_test(&self, (x, y): (f32, f32)) -> usize {
    let top = self.lines[0].y;
    let row = ((y - top) / self.line_height).floor().max(0.0) as usize;
    self.hit_in_line(row.min(self.lines.len() - 1), x)
  }

  /// Caret targets for vertical and line-edge movement from `caret`.
  pub fn navigation(&self, caret: usize) -> NavigationIndices {
    let row = self.line_at(caret);
    let (x, _) = self.caret_position(caret);

    NavigationIndices {
      up:         if row == 0 {
        0
      } else {
        self.hit_in_line(row - 1, x)
      },
      down:       if row + 1 >= self.lines.len() {
        self.len
      } else {
        self.hit_in_line(row + 1, x)
      },
      line_start: self.lines[row].start,
      line_end:   self.line_tail(row),
    }
  }

  fn hit_in_line(&self, row: usize, x: f32) -> usize {
    self.lines[row]
      .stops
      .iter()
      .find(|stop| x < stop.x + stop.advance / 2.0)
      .map_or_else(|| self.line_tail(row), |stop| stop.byte)
  }

  /// Last caret offset that still draws on `row`.
  fn line_tail(&self, row: usize) -> usize {
    let line = &self.lines[row];
    let wraps = !line.hard_break && row + 1 < self.lines.len();
    match line.stops.last() {
      Some(last) if wraps => last.byte,
      _ => line.end,
    }
  }
}

/// Caret position before `byte` in `text` laid out with `options`.
pub fn caret_position<S: GlyphSource + ?Sized>(
  source: &mut S,
  text: &str,
  options: TextOptions,
  byte: usize,
) -> Option<(f32, f32)> {
  TextLines::new(source, text, options).map(|lines| lines.caret_position(byte))
}

/// Byte offset under `point` in `text` laid out with `options`.
pub fn hit_test<S: GlyphSource + ?Sized>(
  source: &mut S,
  text: &str,
  options: TextOptions,
  point: (f32, f32),
) -> Option<usize> {
  TextLines::new(source, text, options).map(|lines| lines.hit_test(point))
}

/// Navigation targets for `caret` in `text` laid out with `options`.
pub fn navigation_indices<S: GlyphSource + ?Sized>(
  source: &mut S,
  text: &str,
  options: TextOptions,
  caret: usize,
) -> Option<NavigationIndices> {
  TextLines::new(source, text, options).map(|lines| lines.navigation(caret))
}
