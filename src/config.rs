/// User configuration: the preferred palette plus any custom palettes.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::color::Color;
use crate::generator::{ColorGenerator, InvalidPaletteError};

pub const DEFAULT_PALETTE: &str = "default";
pub const MATERIAL_PALETTE: &str = "material";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("unknown palette '{0}'")]
    UnknownPalette(String),
    #[error("palette '{name}' is invalid")]
    InvalidPalette {
        name: String,
        #[source]
        source: InvalidPaletteError,
    },
}

/// Contents of `config.toml`.
///
/// ```toml
/// palette = "team"
///
/// [palettes]
/// team = ["#1E88E5", "#43A047", "#FB8C00"]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub palette: String,
    pub palettes: BTreeMap<String, Vec<Color>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.to_string(),
            palettes: BTreeMap::new(),
        }
    }
}

/// A resolved palette: either one of the shared built-ins or an owned custom one.
#[derive(Debug)]
pub enum Palette {
    Builtin(&'static ColorGenerator),
    Custom(ColorGenerator),
}

impl std::ops::Deref for Palette {
    type Target = ColorGenerator;

    fn deref(&self) -> &ColorGenerator {
        match self {
            Palette::Builtin(generator) => *generator,
            Palette::Custom(generator) => generator,
        }
    }
}

impl Settings {
    pub fn from_toml(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => {
                debug!(path = %path.display(), "loading config");
                Self::from_toml(&raw, path)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Every selectable palette name, built-ins first.
    pub fn palette_names(&self) -> Vec<String> {
        let mut names = vec![DEFAULT_PALETTE.to_string(), MATERIAL_PALETTE.to_string()];
        for name in self.palettes.keys() {
            if name == DEFAULT_PALETTE || name == MATERIAL_PALETTE {
                warn!(name = %name, "custom palette shadows a built-in palette");
                continue;
            }
            names.push(name.clone());
        }
        names
    }

    /// Resolves `name`, or the configured default palette when `None`.
    pub fn generator(&self, name: Option<&str>) -> Result<Palette, ConfigError> {
        let name = name.unwrap_or(&self.palette);
        match name {
            DEFAULT_PALETTE => Ok(Palette::Builtin(ColorGenerator::default_palette())),
            MATERIAL_PALETTE => Ok(Palette::Builtin(ColorGenerator::material())),
            custom => {
                let colors = self
                    .palettes
                    .get(custom)
                    .ok_or_else(|| ConfigError::UnknownPalette(custom.to_string()))?;
                ColorGenerator::create(colors.iter().copied())
                    .map(Palette::Custom)
                    .map_err(|source| ConfigError::InvalidPalette {
                        name: custom.to_string(),
                        source,
                    })
            }
        }
    }
}

/// Returns the default config path inside the user's config directory.
/// Falls back to `./keyhue.toml` when no config dir is found.
pub fn default_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("keyhue").join("config.toml")
    } else {
        PathBuf::from("keyhue.toml")
    }
}
