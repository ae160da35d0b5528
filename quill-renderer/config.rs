use serde::{
  Deserialize,
  Serialize,
};

/// Default number of font slots in a registry.
pub const DEFAULT_MAX_FONTS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct RegistryConfig {
  /// Fixed number of font slots. Loading into a full registry fails.
  pub max_fonts: usize,
}

impl Default for RegistryConfig {
  fn default() -> Self {
    Self {
      max_fonts: DEFAULT_MAX_FONTS,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    assert_eq!(RegistryConfig::default().max_fonts, 32);
  }

  #[test]
  fn parses_kebab_case() {
    let config: RegistryConfig = toml::from_str("max-fonts = 4").unwrap();
    assert_eq!(config.max_fonts, 4);

    let config: RegistryConfig = toml::from_str("").unwrap();
    assert_eq!(config, RegistryConfig::default());
  }

  #[test]
  fn rejects_unknown_fields() {
    assert!(toml::from_str::<RegistryConfig>("max-font = 4").is_err());
  }
}
