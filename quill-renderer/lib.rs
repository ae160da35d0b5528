//! Font loading, glyph caching and text layout for immediate-mode UIs.
//!
//! Fonts live in a fixed number of [`FontRegistry`] slots addressed by
//! [`FontId`]. Glyphs are rasterized through a [`Rasterizer`] and uploaded
//! through a [`TextureBackend`] the first time they are requested at a given
//! pixel size, then served from the cache. [`layout::TextLayout`] walks text
//! against any [`layout::GlyphSource`] to place glyphs, and
//! [`navigation::TextLines`] maps between byte offsets and caret positions.

pub mod backend;
pub mod config;
pub mod error;
pub mod font;
pub mod glyph_cache;
pub mod layout;
pub mod navigation;
pub mod raster;
pub mod text;
pub mod texture;

#[cfg(test)]
mod testing;

pub use backend::{
  Rasterizer,
  TextureBackend,
  TextureId,
};
pub use config::RegistryConfig;
pub use error::{
  FontError,
  Result,
};
pub use font::{
  FontId,
  FontRegistry,
};
pub use glyph_cache::{
  FontMetrics,
  Glyph,
};
pub use raster::FontdueRasterizer;
pub use text::TextOptions;
pub use texture::MemoryTextures;
