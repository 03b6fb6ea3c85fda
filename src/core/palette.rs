//! Palette data provider: the ANSI index map and the color name map.
//!
//! Both maps are flat JSON objects whose values are 6 hex digits, with or
//! without a leading `#`. Values are normalized to lowercase bare digits on
//! load. The process-wide palette is loaded on first use and kept for the
//! lifetime of the process.

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use indexmap::IndexMap;
use tracing::debug;

use crate::core::{
    constants::{ANSI_MAP, HEX_DIGITS, NAMES_MAP},
    error::{ColorError, ConfigError, Result},
};

const BUNDLED_ANSI: &str = include_str!("../../data/color/ansi.json");
const BUNDLED_NAMES: &str = include_str!("../../data/color/strings.json");

static SOURCE: OnceLock<PaletteSource> = OnceLock::new();
static GLOBAL: OnceLock<Palette> = OnceLock::new();

/// Where palette maps are read from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PaletteSource {
    /// Maps compiled into the binary.
    #[default]
    Bundled,
    /// `<dir>/ansi.json` and `<dir>/strings.json`.
    Directory(PathBuf),
}

/// Choose the source of the process-wide palette.
///
/// # Errors
/// [`ConfigError::SourceAlreadySet`] if a source was already chosen or the
/// palette has already been loaded.
pub fn set_source(source: PaletteSource) -> std::result::Result<(), ConfigError> {
    if GLOBAL.get().is_some() {
        return Err(ConfigError::SourceAlreadySet);
    }
    SOURCE.set(source).map_err(|_| ConfigError::SourceAlreadySet)
}

/// Read-only lookup tables plus their reverse indexes.
#[derive(Debug, Clone)]
pub struct Palette {
    ansi: BTreeMap<u8, String>,
    names: BTreeMap<String, String>,
    index_by_hex: HashMap<String, u8>,
    name_by_hex: HashMap<String, String>,
}

impl Palette {
    /// The process-wide palette, loaded from the configured source on first
    /// access. A failed load is not cached: every caller sees the error.
    ///
    /// # Errors
    /// See [`Palette::load`].
    pub fn global() -> Result<&'static Palette> {
        if let Some(p) = GLOBAL.get() {
            return Ok(p);
        }
        let source = SOURCE.get_or_init(PaletteSource::default);
        let loaded = Self::load(source)?;
        Ok(GLOBAL.get_or_init(|| loaded))
    }

    /// Load both maps from `source`.
    ///
    /// # Errors
    /// [`ColorError::DataUnavailable`] if a map file cannot be read,
    /// [`ColorError::DataCorrupt`] if one cannot be parsed.
    pub fn load(source: &PaletteSource) -> Result<Self> {
        match source {
            PaletteSource::Bundled => Self::from_json(BUNDLED_ANSI, BUNDLED_NAMES),
            PaletteSource::Directory(dir) => {
                let ansi = read_map(dir, ANSI_MAP)?;
                let names = read_map(dir, NAMES_MAP)?;
                Self::from_json(&ansi, &names)
            }
        }
    }

    /// Build a palette from the two JSON documents.
    ///
    /// # Errors
    /// [`ColorError::DataCorrupt`] on malformed JSON, non-numeric or
    /// out-of-range ANSI keys, or values that are not 6 hex digits.
    pub fn from_json(ansi_json: &str, names_json: &str) -> Result<Self> {
        let mut ansi = BTreeMap::new();
        for (key, value) in parse_map(ANSI_MAP, ansi_json)? {
            let index = key.parse::<u8>().map_err(|_| ColorError::DataCorrupt {
                map: ANSI_MAP.into(),
                reason: format!("key `{key}` is not an index in 0..=255"),
            })?;
            ansi.insert(index, normalize_hex(ANSI_MAP, &value)?);
        }

        let mut names = BTreeMap::new();
        let mut name_by_hex = HashMap::new();
        // File order: the last name wins for shared hex values.
        for (name, value) in parse_map(NAMES_MAP, names_json)? {
            let hex = normalize_hex(NAMES_MAP, &value)?;
            name_by_hex.insert(hex.clone(), name.clone());
            names.insert(name, hex);
        }

        // Ascending iteration: the highest index wins for shared hex values.
        let index_by_hex = ansi.iter().map(|(i, h)| (h.clone(), *i)).collect();

        debug!(
            ansi = ansi.len(),
            names = names.len(),
            "palette maps loaded"
        );
        Ok(Self {
            ansi,
            names,
            index_by_hex,
            name_by_hex,
        })
    }

    /// Bare hex stored for ANSI `index`.
    pub fn ansi_hex(&self, index: u8) -> Option<&str> {
        self.ansi.get(&index).map(String::as_str)
    }

    /// Bare hex stored for `name`, matched as given first, then lowercased.
    pub fn name_hex(&self, name: &str) -> Option<&str> {
        self.names
            .get(name)
            .or_else(|| self.names.get(&name.to_ascii_lowercase()))
            .map(String::as_str)
    }

    /// ANSI index whose color is exactly `hex` (with or without `#`).
    pub fn index_of(&self, hex: &str) -> Option<u8> {
        self.index_by_hex.get(&lookup_key(hex)).copied()
    }

    /// Color name whose value is exactly `hex` (with or without `#`).
    pub fn name_of(&self, hex: &str) -> Option<&str> {
        self.name_by_hex.get(&lookup_key(hex)).map(String::as_str)
    }

    pub fn ansi_entries(&self) -> impl Iterator<Item = (u8, &str)> {
        self.ansi.iter().map(|(i, h)| (*i, h.as_str()))
    }

    pub fn name_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(n, h)| (n.as_str(), h.as_str()))
    }
}

// --- Helpers ---
fn read_map(dir: &Path, map: &str) -> Result<String> {
    let path = dir.join(format!("{map}.json"));
    debug!(path = %path.display(), "reading palette map");
    fs::read_to_string(&path).map_err(|source| ColorError::DataUnavailable { path, source })
}

fn parse_map(map: &str, json: &str) -> Result<IndexMap<String, String>> {
    serde_json::from_str(json).map_err(|e| ColorError::DataCorrupt {
        map: map.into(),
        reason: e.to_string(),
    })
}

fn normalize_hex(map: &str, value: &str) -> Result<String> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() == HEX_DIGITS && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(digits.to_ascii_lowercase())
    } else {
        Err(ColorError::DataCorrupt {
            map: map.into(),
            reason: format!("value `{value}` is not a 6-digit hex color"),
        })
    }
}

fn lookup_key(hex: &str) -> String {
    hex.strip_prefix('#').unwrap_or(hex).to_ascii_lowercase()
}
