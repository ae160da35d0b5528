//! Rasterization backend backed by `fontdue`.

use fontdue::{
  Font,
  FontSettings,
};

use crate::{
  backend::{
    Bitmap,
    HorizontalMetrics,
    Rasterizer,
    VerticalMetrics,
  },
  error::RasterError,
};

/// [`Rasterizer`] over TrueType/OpenType outlines parsed by `fontdue`.
///
/// `fontdue` reports metrics already scaled to a pixel size, so unscaled
/// font-unit values are obtained by asking for metrics at `units_per_em`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontdueRasterizer;

impl Rasterizer for FontdueRasterizer {
  type Outline = Font;

  fn parse_font(&self, bytes: &[u8]) -> Result<Font, RasterError> {
    Font::from_bytes(bytes, FontSettings::default())
      .map_err(|err| RasterError::Malformed(err.to_string()))
  }

  fn glyph_index(&self, outline: &Font, codepoint: char) -> u16 {
    outline.lookup_glyph_index(codepoint)
  }

  fn horizontal_metrics(&self, outline: &Font, index: u16) -> HorizontalMetrics {
    let metrics = outline.metrics_indexed(index, outline.units_per_em());
    HorizontalMetrics {
      advance:      metrics.advance_width,
      left_bearing: metrics.bounds.xmin,
    }
  }

  fn vertical_metrics(&self, outline: &Font) -> VerticalMetrics {
    let units = outline.units_per_em();
    match outline.horizontal_line_metrics(units) {
      Some(line) => {
        VerticalMetrics {
          ascent:   line.ascent,
          descent:  line.descent,
          line_gap: line.line_gap,
        }
      },
      // Fonts without a horizontal header: fall back to a conventional split
      // of the em square.
      None => {
        VerticalMetrics {
          ascent:   units * 0.8,
          descent:  -units * 0.2,
          line_gap: 0.0,
        }
      },
    }
  }

  fn rasterize(&self, outline: &Font, index: u16, scale: f32) -> Result<Bitmap, RasterError> {
    let px = scale * outline.units_per_em();
    if !px.is_finite() || px <= 0.0 {
      return Err(RasterError::Glyph {
        index,
        reason: format!("invalid pixel size {px}"),
      });
    }

    let (metrics, data) = outline.rasterize_indexed(index, px);
    let height = metrics.height as i32;
    Ok(Bitmap {
      data,
      width: metrics.width as u32,
      height: metrics.height as u32,
      offset_x: metrics.xmin,
      // fontdue measures `ymin` upwards from the baseline to the bitmap's
      // bottom edge; flip it to a top-left offset in y-down space.
      offset_y: -(metrics.ymin + height),
    })
  }
}
