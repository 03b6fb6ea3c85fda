//! Centralised error types used across the crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Faults raised while detecting, normalizing or converting a color.
#[derive(Debug, Error)]
pub enum ColorError {
    /// No notation matched the input.
    #[error("color format ->{0}<- not recognized")]
    FormatNotRecognized(String),

    /// The notation matched but its contents are unusable (bad RGB arity,
    /// unknown color name, missing palette entry).
    #[error("{0}")]
    InvalidArgument(String),

    /// A palette resource could not be read.
    #[error("palette data unavailable at {}: {source}", .path.display())]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A palette resource was read but is not a valid color map.
    #[error("palette map `{map}` is corrupt: {reason}")]
    DataCorrupt { map: String, reason: String },
}

/// Precise configuration faults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("palette data dir {} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("palette source must be chosen before the palette is first used")]
    SourceAlreadySet,
}

/// Top-level error type bubbled up by the command-line front end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result alias for conversion operations.
pub type Result<T> = std::result::Result<T, ColorError>;
