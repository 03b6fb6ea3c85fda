//! Run-time configuration object + fluent builder.

use std::path::PathBuf;

use crate::core::{error::ConfigError, palette::PaletteSource};

/// Immutable parameters handed to the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub palette: PaletteSource,
    pub debug: bool,
}

impl Config {
    #[inline]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Log filter used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "warn" }
    }
}

/// Fluent builder; validation happens in `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    debug: bool,
}

impl ConfigBuilder {
    #[inline]
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }
    #[inline]
    pub fn data_dir_opt(mut self, dir: Option<&PathBuf>) -> Self {
        if let Some(d) = dir {
            self.data_dir = Some(d.clone());
        }
        self
    }
    #[inline]
    pub fn debug(mut self, on: bool) -> Self {
        self.debug = on;
        self
    }

    /// # Errors
    /// [`ConfigError::NotADirectory`] if a data dir was given but does not
    /// exist as a directory.
    pub fn build(self) -> Result<Config, ConfigError> {
        let palette = match self.data_dir {
            Some(dir) if !dir.is_dir() => return Err(ConfigError::NotADirectory(dir)),
            Some(dir) => PaletteSource::Directory(dir),
            None => PaletteSource::Bundled,
        };
        Ok(Config {
            palette,
            debug: self.debug,
        })
    }
}
