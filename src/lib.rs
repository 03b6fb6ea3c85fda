//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;

pub use crate::core::{
    config::{Config, ConfigBuilder},
    converter::ColorConverter,
    error::{AppError, ColorError, ConfigError},
    format::Format,
    palette::{Palette, PaletteSource, set_source},
};

/// Every notation of one color, as produced by [`convert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notations {
    pub format: Format,
    pub hex: String,
    pub rgb: String,
    pub ansi: String,
    /// Empty when the color has no palette name.
    pub name: String,
}

/// Convert `input` into every supported notation using the process-wide
/// palette.
///
/// # Errors
/// Detection, validation and palette failures from [`ColorConverter`].
pub fn convert(input: &str) -> Result<Notations, ColorError> {
    let color = ColorConverter::new(input)?;
    Ok(Notations {
        format: color.detected_format(),
        hex: color.to_hex().to_owned(),
        rgb: color.to_rgb(),
        ansi: color.to_ansi()?,
        name: color.to_name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn converts_named_color_end_to_end() {
        let n = convert("  teal ").unwrap();
        assert_eq!(
            n,
            Notations {
                format: Format::String,
                hex: "#008080".into(),
                rgb: "rgb(0,128,128)".into(),
                ansi: "6".into(),
                name: "teal".into(),
            }
        );
    }

    #[test]
    fn reports_unrecognized_input() {
        let err = convert("999").unwrap_err();
        assert_eq!(err.to_string(), "color format ->999<- not recognized");
    }
}
