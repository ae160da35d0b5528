//! Backend fakes shared by the unit tests.

use std::cell::Cell;

use crate::{
  backend::{
    Bitmap,
    HorizontalMetrics,
    Rasterizer,
    TextureBackend,
    TextureId,
    VerticalMetrics,
  },
  error::{
    RasterError,
    TextureError,
  },
  font::FontRegistry,
  texture::MemoryTextures,
};

/// A 1024 unit font where every glyph is 512 units wide, spaces are 256, and
/// `j` carries a 64 unit left bearing. At 16px one unit is 1/64 pixel, so
/// glyphs advance 8px and spaces 4px.
#[derive(Debug, Default)]
pub struct CountingRasterizer {
  rasterize_calls: Cell<usize>,
  parse_calls:     Cell<usize>,
}

impl CountingRasterizer {
  pub fn rasterize_calls(&self) -> usize {
    self.rasterize_calls.get()
  }

  pub fn parse_calls(&self) -> usize {
    self.parse_calls.get()
  }
}

const SPACE: u16 = 1;
const NEWLINE: u16 = 2;
const J: u16 = 3;
const BROKEN: u16 = 4;
const OTHER: u16 = 5;

impl Rasterizer for CountingRasterizer {
  type Outline = ();

  fn parse_font(&self, bytes: &[u8]) -> Result<(), RasterError> {
    self.parse_calls.set(self.parse_calls.get() + 1);
    if bytes.starts_with(b"font") {
      Ok(())
    } else {
      Err(RasterError::Malformed("missing magic".into()))
    }
  }

  fn glyph_index(&self, _outline: &(), codepoint: char) -> u16 {
    match codepoint {
      ' ' | '\t' => SPACE,
      '\n' => NEWLINE,
      'j' => J,
      '\u{FFFD}' => BROKEN,
      _ => OTHER,
    }
  }

  fn horizontal_metrics(&self, _outline: &(), index: u16) -> HorizontalMetrics {
    match index {
      SPACE => {
        HorizontalMetrics {
          advance:      256.0,
          left_bearing: 0.0,
        }
      },
      NEWLINE => HorizontalMetrics::default(),
      J => {
        HorizontalMetrics {
          advance:      512.0,
          left_bearing: 64.0,
        }
      },
      _ => {
        HorizontalMetrics {
          advance:      512.0,
          left_bearing: 0.0,
        }
      },
    }
  }

  fn vertical_metrics(&self, _outline: &()) -> VerticalMetrics {
    VerticalMetrics {
      ascent:   768.0,
      descent:  -256.0,
      line_gap: 0.0,
    }
  }

  fn rasterize(&self, _outline: &(), index: u16, _scale: f32) -> Result<Bitmap, RasterError> {
    self.rasterize_calls.set(self.rasterize_calls.get() + 1);
    match index {
      SPACE | NEWLINE => Ok(Bitmap::default()),
      BROKEN => {
        Err(RasterError::Glyph {
          index,
          reason: "no outline".into(),
        })
      },
      _ => {
        Ok(Bitmap {
          data:     vec![0xFF; 24],
          width:    4,
          height:   6,
          offset_x: 1,
          offset_y: -10,
        })
      },
    }
  }
}

/// Texture backend that refuses every upload.
#[derive(Debug, Default)]
pub struct FailingTextures;

impl TextureBackend for FailingTextures {
  fn upload_bitmap(
    &mut self,
    _bitmap: &[u8],
    _width: u32,
    _height: u32,
    _channels: u8,
  ) -> Result<TextureId, TextureError> {
    Err(TextureError::Upload("device lost".into()))
  }
}

pub type TestRegistry = FontRegistry<CountingRasterizer, MemoryTextures>;

pub fn registry() -> TestRegistry {
  FontRegistry::new(CountingRasterizer::default(), MemoryTextures::new())
}
