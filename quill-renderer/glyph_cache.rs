//! Per-font, per-pixel-size glyph storage.
//!
//! Requested sizes are rounded to whole pixels before lookup, so `17.6` and
//! `18.0` share one [`FontSize`]. Each `FontSize` keeps derived metrics and a
//! codepoint map that only ever grows; entries are dropped together with the
//! owning font.

use std::collections::{
  BTreeMap,
  HashMap,
};

use log::{
  debug,
  trace,
  warn,
};

use crate::{
  backend::{
    Rasterizer,
    TextureBackend,
    TextureId,
  },
  error::FontError,
};

/// Placement data for one rasterized codepoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
  /// Bitmap handle, `None` for blank glyphs such as spaces
  pub texture: Option<TextureId>,
  /// Bitmap dimensions in pixels
  pub size:    (u32, u32),
  /// Bitmap top-left relative to the pen position at the top of the line.
  /// The ascent is already folded into `y`.
  pub offset:  (f32, f32),
  /// Horizontal pen advance in pixels
  pub advance: f32,
}

impl Glyph {
  /// Zero-width stand-in for a glyph that could not be produced.
  pub const MISSING: Glyph = Glyph {
    texture: None,
    size:    (0, 0),
    offset:  (0.0, 0.0),
    advance: 0.0,
  };
}

/// Scaled vertical metrics for one (font, pixel size) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
  pub pixel_size: u32,
  pub scale:      f32,
  pub ascent:     f32,
  /// Negative below the baseline
  pub descent:    f32,
  pub line_gap:   f32,
}

impl FontMetrics {
  pub fn line_height(&self) -> f32 {
    self.ascent - self.descent + self.line_gap
  }
}

/// Rounds a requested size to the pixel size used as cache key. Returns `None`
/// for sizes that round to zero or below.
pub fn round_pixel_size(size: f32) -> Option<u32> {
  let rounded = size.round();
  (rounded.is_finite() && rounded >= 1.0).then_some(rounded as u32)
}

/// Metrics and glyphs for one rounded pixel size.
#[derive(Debug)]
pub struct FontSize {
  pub metrics: FontMetrics,
  glyphs:      HashMap<char, Glyph>,
}

impl FontSize {
  pub fn get(&self, codepoint: char) -> Option<&Glyph> {
    self.glyphs.get(&codepoint)
  }

  pub fn len(&self) -> usize {
    self.glyphs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.glyphs.is_empty()
  }
}

/// Arena of [`FontSize`] records for a single font, keyed by pixel size.
#[derive(Debug, Default)]
pub struct GlyphCache {
  sizes:      BTreeMap<u32, FontSize>,
  /// Number of glyph lookups served from the cache
  pub hits:   u64,
  /// Number of glyph lookups that had to rasterize
  pub misses: u64,
}

impl GlyphCache {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn size(&self, pixel_size: u32) -> Option<&FontSize> {
    self.sizes.get(&pixel_size)
  }

  /// Pixel sizes that have been materialised so far.
  pub fn pixel_sizes(&self) -> impl Iterator<Item = u32> + '_ {
    self.sizes.keys().copied()
  }

  /// Returns the metrics for `pixel_size`, computing and memoizing them on
  /// first request.
  pub fn metrics<R: Rasterizer>(
    &mut self,
    rasterizer: &R,
    outline: &R::Outline,
    pixel_size: u32,
  ) -> FontMetrics {
    size_entry(&mut self.sizes, rasterizer, outline, pixel_size).metrics
  }

  /// Looks up the glyph for `codepoint`, rasterizing and uploading it on a
  /// miss. A glyph that cannot be produced is cached as [`Glyph::MISSING`].
  pub fn glyph<R: Rasterizer, T: TextureBackend>(
    &mut self,
    rasterizer: &R,
    textures: &mut T,
    outline: &R::Outline,
    pixel_size: u32,
    codepoint: char,
  ) -> Glyph {
    let entry = size_entry(&mut self.sizes, rasterizer, outline, pixel_size);
    if let Some(glyph) = entry.glyphs.get(&codepoint) {
      self.hits += 1;
      return *glyph;
    }

    self.misses += 1;
    let glyph = match rasterize_glyph(rasterizer, textures, outline, &entry.metrics, codepoint) {
      Ok(glyph) => glyph,
      Err(err) => {
        warn!("{err}");
        Glyph::MISSING
      },
    };
    entry.glyphs.insert(codepoint, glyph);
    glyph
  }

  /// Drops every size and glyph, keeping statistics.
  pub fn clear(&mut self) {
    self.sizes.clear();
  }
}

/// The record for `pixel_size`, created with freshly scaled metrics when
/// missing.
fn size_entry<'a, R: Rasterizer>(
  sizes: &'a mut BTreeMap<u32, FontSize>,
  rasterizer: &R,
  outline: &R::Outline,
  pixel_size: u32,
) -> &'a mut FontSize {
  sizes.entry(pixel_size).or_insert_with(|| {
    let scale = rasterizer.scale_for_pixel_height(outline, pixel_size as f32);
    let vertical = rasterizer.vertical_metrics(outline);
    let metrics = FontMetrics {
      pixel_size,
      scale,
      ascent: vertical.ascent * scale,
      descent: vertical.descent * scale,
      line_gap: vertical.line_gap * scale,
    };
    debug!("created font size {pixel_size}px: {metrics:?}");
    FontSize {
      metrics,
      glyphs: HashMap::new(),
    }
  })
}

fn rasterize_glyph<R: Rasterizer, T: TextureBackend>(
  rasterizer: &R,
  textures: &mut T,
  outline: &R::Outline,
  metrics: &FontMetrics,
  codepoint: char,
) -> Result<Glyph, FontError> {
  let unavailable = |reason: String| FontError::GlyphUnavailable { codepoint, reason };

  let index = rasterizer.glyph_index(outline, codepoint);
  let horizontal = rasterizer.horizontal_metrics(outline, index);
  let bitmap = rasterizer
    .rasterize(outline, index, metrics.scale)
    .map_err(|err| unavailable(err.to_string()))?;

  let texture = if bitmap.is_empty() {
    None
  } else {
    let texture = textures
      .upload_bitmap(&bitmap.data, bitmap.width, bitmap.height, 1)
      .map_err(|err| unavailable(err.to_string()))?;
    Some(texture)
  };

  trace!(
    "rasterized {codepoint:?} (index {index}) at {}px: {}x{}",
    metrics.pixel_size, bitmap.width, bitmap.height
  );

  Ok(Glyph {
    texture,
    size: (bitmap.width, bitmap.height),
    offset: (
      bitmap.offset_x as f32,
      bitmap.offset_y as f32 + metrics.ascent,
    ),
    advance: (horizontal.advance - horizontal.left_bearing) * metrics.scale,
  })
}
