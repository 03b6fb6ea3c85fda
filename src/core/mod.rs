//! Aggregates the “business logic” layer.

pub mod config;
pub mod constants;
pub mod converter;
pub mod error;
pub mod format;
pub mod palette;
pub mod quantize;

// re-export frequently-used items for convenience
pub use config::{Config, ConfigBuilder};
pub use constants::{CUBE_STEPS, DEFAULT_COLOR};
pub use converter::ColorConverter;
pub use error::{AppError, ColorError, ConfigError};
pub use format::Format;
pub use palette::{Palette, PaletteSource};
