use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by a rasterization backend.
#[derive(Error, Debug, Clone)]
pub enum RasterError {
  /// The font bytes could not be parsed as an outline font
  #[error("malformed font data: {0}")]
  Malformed(String),

  /// A single glyph could not be rendered
  #[error("glyph {index} could not be rasterized: {reason}")]
  Glyph { index: u16, reason: String },
}

/// Errors reported by a texture backend.
#[derive(Error, Debug, Clone)]
pub enum TextureError {
  /// The backend refused or failed the upload
  #[error("texture upload failed: {0}")]
  Upload(String),

  /// Bitmap length does not match its dimensions
  #[error("bitmap of {len} bytes does not match {width}x{height}x{channels}")]
  InvalidBitmap {
    len:      usize,
    width:    u32,
    height:   u32,
    channels: u8,
  },
}

/// Why a font could not be loaded.
#[derive(Error, Debug)]
pub enum LoadError {
  #[error("failed to read {path}: {source}")]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error(transparent)]
  Parse(#[from] RasterError),
}

/// Errors that can occur in the font registry
#[derive(Error, Debug)]
pub enum FontError {
  /// Font file unreadable or unparseable. The registry is left untouched.
  #[error("failed to load font {name}: {source}")]
  LoadFailed {
    name:   String,
    #[source]
    source: LoadError,
  },

  /// Every registry slot is occupied
  #[error("font registry is full ({capacity} slots)")]
  SlotExhausted { capacity: usize },

  /// No installed font matches the requested family
  #[error("no system font matches family {0:?}")]
  FamilyNotFound(String),

  /// Rasterization or upload failed for one codepoint
  #[error("glyph for {codepoint:?} unavailable: {reason}")]
  GlyphUnavailable { codepoint: char, reason: String },
}

pub type Result<T> = std::result::Result<T, FontError>;
