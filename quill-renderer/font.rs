//! Font registry.
//!
//! Fonts live in a fixed number of slots and are referenced from the outside
//! only through a [`FontId`]. Unloading a font empties its slot; a stale id
//! then resolves to nothing and every lookup through it becomes a no-op, so
//! callers never hold a dangling reference to font or glyph storage.

use std::path::{
  Path,
  PathBuf,
};

use log::{
  debug,
  warn,
};

use crate::{
  backend::{
    Rasterizer,
    TextureBackend,
  },
  config::RegistryConfig,
  error::{
    FontError,
    LoadError,
    Result,
  },
  glyph_cache::{
    FontMetrics,
    Glyph,
    GlyphCache,
    round_pixel_size,
  },
  layout::GlyphSource,
};

/// Stable handle to a registry slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontId(usize);

impl FontId {
  pub const fn from_index(index: usize) -> Self {
    Self(index)
  }

  pub const fn index(self) -> usize {
    self.0
  }
}

/// A loaded font and its per-size glyph caches.
pub struct Font<O> {
  pub name:    String,
  pub path:    Option<PathBuf>,
  pub outline: O,
  pub cache:   GlyphCache,
}

pub struct FontRegistry<R: Rasterizer, T: TextureBackend> {
  rasterizer:   R,
  textures:     T,
  slots:        Vec<Option<Font<R::Outline>>>,
  system_fonts: Option<fontdb::Database>,
}

impl<R: Rasterizer, T: TextureBackend> FontRegistry<R, T> {
  pub fn new(rasterizer: R, textures: T) -> Self {
    Self::with_config(rasterizer, textures, &RegistryConfig::default())
  }

  pub fn with_config(rasterizer: R, textures: T, config: &RegistryConfig) -> Self {
    let mut slots = Vec::with_capacity(config.max_fonts);
    slots.resize_with(config.max_fonts, || None);
    Self {
      rasterizer,
      textures,
      slots,
      system_fonts: None,
    }
  }

  pub fn capacity(&self) -> usize {
    self.slots.len()
  }

  pub fn rasterizer(&self) -> &R {
    &self.rasterizer
  }

  pub fn textures(&self) -> &T {
    &self.textures
  }

  pub fn textures_mut(&mut self) -> &mut T {
    &mut self.textures
  }

  /// Reads and parses the font file at `path`.
  pub fn load_font(&mut self, path: impl AsRef<Path>) -> Result<FontId> {
    let path = path.as_ref();
    let name = path
      .file_stem()
      .map(|stem| stem.to_string_lossy().into_owned())
      .unwrap_or_else(|| path.display().to_string());

    let slot = self.free_slot()?;
    let bytes = std::fs::read(path).map_err(|source| {
      FontError::LoadFailed {
        name:   name.clone(),
        source: LoadError::Io {
          path: path.to_path_buf(),
          source,
        },
      }
    })?;
    let name = resolve_family_name(&bytes).unwrap_or(name);
    self.install(slot, name, Some(path.to_path_buf()), &bytes)
  }

  /// Parses an in-memory font under `name`.
  pub fn load_font_bytes(&mut self, name: impl Into<String>, bytes: &[u8]) -> Result<FontId> {
    let slot = self.free_slot()?;
    self.install(slot, name.into(), None, bytes)
  }

  /// Loads the best installed match for `family`.
  pub fn load_system_font(&mut self, family: &str) -> Result<FontId> {
    let slot = self.free_slot()?;
    let db = self.system_fonts.get_or_insert_with(|| {
      let mut db = fontdb::Database::new();
      db.load_system_fonts();
      debug!("indexed {} system font faces", db.faces().len());
      db
    });

    let query = fontdb::Query {
      families: &[fontdb::Family::Name(family)],
      ..fontdb::Query::default()
    };
    let id = db
      .query(&query)
      .ok_or_else(|| FontError::FamilyNotFound(family.to_string()))?;
    let path = db.face(id).and_then(|face| {
      match &face.source {
        fontdb::Source::File(path) => Some(path.clone()),
        _ => None,
      }
    });
    let bytes = db
      .with_face_data(id, |data, _index| data.to_vec())
      .ok_or_else(|| FontError::FamilyNotFound(family.to_string()))?;

    self.install(slot, family.to_string(), path, &bytes)
  }

  fn free_slot(&self) -> Result<usize> {
    self
      .slots
      .iter()
      .position(Option::is_none)
      .ok_or(FontError::SlotExhausted {
        capacity: self.slots.len(),
      })
  }

  fn install(
    &mut self,
    slot: usize,
    name: String,
    path: Option<PathBuf>,
    bytes: &[u8],
  ) -> Result<FontId> {
    let outline = match self.rasterizer.parse_font(bytes) {
      Ok(outline) => outline,
      Err(err) => {
        warn!("failed to parse font {name}: {err}");
        return Err(FontError::LoadFailed {
          name,
          source: err.into(),
        });
      },
    };

    debug!("loaded font {name} into slot {slot}");
    self.slots[slot] = Some(Font {
      name,
      path,
      outline,
      cache: GlyphCache::new(),
    });
    Ok(FontId(slot))
  }

  /// Releases the font and all of its glyph caches. No-op for empty slots.
  pub fn unload_font(&mut self, id: FontId) {
    if let Some(font) = self.slots.get_mut(id.0).and_then(Option::take) {
      debug!("unloaded font {} from slot {}", font.name, id.0);
    }
  }

  pub fn is_loaded(&self, id: FontId) -> bool {
    self.font(id).is_some()
  }

  pub fn font(&self, id: FontId) -> Option<&Font<R::Outline>> {
    self.slots.get(id.0)?.as_ref()
  }

  pub fn font_name(&self, id: FontId) -> Option<&str> {
    self.font(id).map(|font| font.name.as_str())
  }

  pub fn font_path(&self, id: FontId) -> Option<&Path> {
    self.font(id)?.path.as_deref()
  }

  /// Ids of every occupied slot, in slot order.
  pub fn loaded_fonts(&self) -> impl Iterator<Item = FontId> + '_ {
    self
      .slots
      .iter()
      .enumerate()
      .filter(|(_, slot)| slot.is_some())
      .map(|(index, _)| FontId(index))
  }

  /// Metrics for `font` at `size` rounded to whole pixels. `None` for an empty
  /// handle or a size that rounds below one pixel.
  pub fn font_size(&mut self, id: FontId, size: f32) -> Option<FontMetrics> {
    let pixel_size = round_pixel_size(size)?;
    let font = self.slots.get_mut(id.0)?.as_mut()?;
    Some(font.cache.metrics(&self.rasterizer, &font.outline, pixel_size))
  }

  /// Glyph for `codepoint` at an already rounded `pixel_size`, rasterized on
  /// first use. `None` for an empty handle.
  pub fn glyph(&mut self, id: FontId, pixel_size: u32, codepoint: char) -> Option<Glyph> {
    let font = self.slots.get_mut(id.0)?.as_mut()?;
    Some(font.cache.glyph(
      &self.rasterizer,
      &mut self.textures,
      &font.outline,
      pixel_size,
      codepoint,
    ))
  }

  /// Cache hit and miss totals across all loaded fonts.
  pub fn stats(&self) -> (u64, u64) {
    self
      .slots
      .iter()
      .flatten()
      .fold((0, 0), |(hits, misses), font| {
        (hits + font.cache.hits, misses + font.cache.misses)
      })
  }
}

impl<R: Rasterizer, T: TextureBackend> GlyphSource for FontRegistry<R, T> {
  fn font_metrics(&mut self, font: FontId, size: f32) -> Option<FontMetrics> {
    self.font_size(font, size)
  }

  fn glyph(&mut self, font: FontId, metrics: &FontMetrics, codepoint: char) -> Option<Glyph> {
    FontRegistry::glyph(self, font, metrics.pixel_size, codepoint)
  }
}

/// Try to resolve a readable family name from raw font bytes using fontdb.
fn resolve_family_name(bytes: &[u8]) -> Option<String> {
  let mut db = fontdb::Database::new();
  db.load_font_data(bytes.to_vec());
  let face = db.faces().first()?;

  if let Some((name, _lang)) = face.families.first() {
    return Some(name.clone());
  }

  if !face.post_script_name.is_empty() {
    return Some(face.post_script_name.clone());
  }

  None
}
