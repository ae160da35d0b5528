//! CPU-side texture backend.
//!
//! Stores uploaded glyph bitmaps as `image` buffers. Useful for headless
//! measurement, tests, and as a staging area before a GPU atlas upload.

use image::{
  GrayImage,
  RgbaImage,
};

use crate::{
  backend::{
    TextureBackend,
    TextureId,
  },
  error::TextureError,
};

/// A stored bitmap.
#[derive(Debug, Clone)]
pub enum TextureImage {
  Gray(GrayImage),
  Rgba(RgbaImage),
}

impl TextureImage {
  pub fn dimensions(&self) -> (u32, u32) {
    match self {
      Self::Gray(image) => image.dimensions(),
      Self::Rgba(image) => image.dimensions(),
    }
  }
}

/// [`TextureBackend`] that keeps every upload in memory.
#[derive(Debug, Default)]
pub struct MemoryTextures {
  textures: Vec<TextureImage>,
}

impl MemoryTextures {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, id: TextureId) -> Option<&TextureImage> {
    self.textures.get(id.0 as usize)
  }

  pub fn len(&self) -> usize {
    self.textures.len()
  }

  pub fn is_empty(&self) -> bool {
    self.textures.is_empty()
  }
}

impl TextureBackend for MemoryTextures {
  fn upload_bitmap(
    &mut self,
    bitmap: &[u8],
    width: u32,
    height: u32,
    channels: u8,
  ) -> Result<TextureId, TextureError> {
    let invalid = || {
      TextureError::InvalidBitmap {
        len: bitmap.len(),
        width,
        height,
        channels,
      }
    };

    let image = match channels {
      1 => {
        let image = GrayImage::from_raw(width, height, bitmap.to_vec()).ok_or_else(invalid)?;
        TextureImage::Gray(image)
      },
      4 => {
        let image = RgbaImage::from_raw(width, height, bitmap.to_vec()).ok_or_else(invalid)?;
        TextureImage::Rgba(image)
      },
      _ => return Err(invalid()),
    };

    let id = u32::try_from(self.textures.len())
      .map_err(|_| TextureError::Upload("texture id space exhausted".into()))?;
    self.textures.push(image);
    Ok(TextureId(id))
  }
}
