//! Boundary contracts between the glyph cache and the outside world.
//!
//! The cache never parses font tables or touches GPU memory itself. It asks a
//! [`Rasterizer`] for outline data and coverage bitmaps, and hands those
//! bitmaps to a [`TextureBackend`] which returns an opaque [`TextureId`].

use crate::error::{
  RasterError,
  TextureError,
};

/// Opaque handle to a texture owned by the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Horizontal glyph metrics in unscaled font units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HorizontalMetrics {
  pub advance:      f32,
  pub left_bearing: f32,
}

/// Vertical font metrics in unscaled font units. `descent` is negative for
/// fonts that extend below the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VerticalMetrics {
  pub ascent:   f32,
  pub descent:  f32,
  pub line_gap: f32,
}

/// An 8-bit coverage bitmap for one glyph.
///
/// `offset_x`/`offset_y` locate the bitmap's top-left corner relative to the
/// pen position on the baseline, with y growing downwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitmap {
  pub data:     Vec<u8>,
  pub width:    u32,
  pub height:   u32,
  pub offset_x: i32,
  pub offset_y: i32,
}

impl Bitmap {
  pub fn is_empty(&self) -> bool {
    self.width == 0 || self.height == 0
  }
}

/// Outline font parsing and glyph rasterization.
pub trait Rasterizer {
  /// Parsed outline data for one font.
  type Outline;

  fn parse_font(&self, bytes: &[u8]) -> Result<Self::Outline, RasterError>;

  /// Returns the glyph index for `codepoint`, `0` (the notdef glyph) when the
  /// font has no mapping for it.
  fn glyph_index(&self, outline: &Self::Outline, codepoint: char) -> u16;

  fn horizontal_metrics(&self, outline: &Self::Outline, index: u16) -> HorizontalMetrics;

  fn vertical_metrics(&self, outline: &Self::Outline) -> VerticalMetrics;

  /// Scale factor mapping font units to pixels so that `ascent - descent`
  /// spans `pixels`.
  fn scale_for_pixel_height(&self, outline: &Self::Outline, pixels: f32) -> f32 {
    let VerticalMetrics {
      ascent, descent, ..
    } = self.vertical_metrics(outline);
    let height = ascent - descent;
    if height > 0.0 { pixels / height } else { 0.0 }
  }

  fn rasterize(&self, outline: &Self::Outline, index: u16, scale: f32)
  -> Result<Bitmap, RasterError>;
}

/// Destination for rasterized glyph bitmaps.
pub trait TextureBackend {
  fn upload_bitmap(
    &mut self,
    bitmap: &[u8],
    width: u32,
    height: u32,
    channels: u8,
  ) -> Result<TextureId, TextureError>;
}
