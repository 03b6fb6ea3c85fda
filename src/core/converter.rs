//! Notation detection and conversion.
//!
//! Every input is normalized to canonical `#RRGGBB` at construction; all
//! other notations are derived from that on demand.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use tracing::{debug, warn};

use crate::core::{
    constants::{ANSI_INPUT_LIMIT, HEX_DIGITS},
    error::{ColorError, Result},
    format::Format,
    palette::Palette,
    quantize::snap_to_cube,
};

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]+$").unwrap());
static RGB_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^rgb\(([^()]*)\)$").unwrap());
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());
static INT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?[0-9]+$").unwrap());
static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// A color parsed from any supported notation.
///
/// Immutable once built; every accessor is a pure function of the canonical
/// hex, the original input and the palette it was built against.
#[derive(Debug, Clone)]
pub struct ColorConverter<'p> {
    hex: String,
    rgb: [u8; 3],
    original: String,
    format: Format,
    palette: &'p Palette,
}

impl ColorConverter<'static> {
    /// Detect and normalize `input` against the process-wide palette.
    ///
    /// # Errors
    /// Palette load failures, plus everything [`ColorConverter::with_palette`]
    /// reports.
    pub fn new(input: &str) -> Result<Self> {
        Self::with_palette(input, Palette::global()?)
    }
}

impl<'p> ColorConverter<'p> {
    /// Detect and normalize `input` against `palette`.
    ///
    /// # Errors
    /// [`ColorError::FormatNotRecognized`] if no notation matches,
    /// [`ColorError::InvalidArgument`] for a malformed `rgb(...)`, an unknown
    /// color name or an ANSI index with no palette entry.
    pub fn with_palette(input: &str, palette: &'p Palette) -> Result<Self> {
        let original = input.trim().to_owned();
        let (format, hex) = normalize(&original, palette)?;
        let rgb = decode(&hex)?;
        debug!(input = %original, %format, %hex, "color detected");
        Ok(Self {
            hex,
            rgb,
            original,
            format,
            palette,
        })
    }

    #[inline]
    pub fn detected_format(&self) -> Format {
        self.format
    }

    /// The trimmed input as given.
    #[inline]
    pub fn original_value(&self) -> &str {
        &self.original
    }

    /// Canonical `#RRGGBB`.
    #[inline]
    pub fn to_hex(&self) -> &str {
        &self.hex
    }

    /// Decoded red, green and blue bytes of the canonical hex.
    #[inline]
    pub fn channels(&self) -> [u8; 3] {
        self.rgb
    }

    /// `rgb(r,g,b)`; RGB inputs are returned verbatim.
    pub fn to_rgb(&self) -> String {
        if self.format == Format::Rgb {
            return self.original.clone();
        }
        let [r, g, b] = self.rgb;
        format!("rgb({r},{g},{b})")
    }

    /// Palette name of this color, or an empty string when it has none.
    /// Named inputs are returned verbatim.
    pub fn to_name(&self) -> String {
        if self.format == Format::String {
            return self.original.clone();
        }
        self.palette
            .name_of(&self.hex)
            .map(str::to_owned)
            .unwrap_or_default()
    }

    /// ANSI-256 index: exact palette match first, cube approximation second.
    /// ANSI inputs are returned verbatim.
    ///
    /// # Errors
    /// [`ColorError::InvalidArgument`] if the approximated color is missing
    /// from the ANSI palette.
    pub fn to_ansi(&self) -> Result<String> {
        if self.format == Format::Ansi {
            return Ok(self.original.clone());
        }
        if let Some(index) = self.palette.index_of(&self.hex) {
            return Ok(index.to_string());
        }
        let snapped = snap_to_cube(self.rgb);
        debug!(hex = %self.hex, %snapped, "no exact ANSI match, approximating");
        self.palette
            .index_of(&snapped)
            .map(|i| i.to_string())
            .ok_or_else(|| {
                ColorError::InvalidArgument(format!("no ANSI palette entry for #{snapped}"))
            })
    }
}

impl fmt::Display for ColorConverter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl FromStr for ColorConverter<'static> {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

// --- Detection ---
fn normalize(s: &str, palette: &Palette) -> Result<(Format, String)> {
    if HEX_RE.is_match(s) {
        return Ok((Format::Hex, expand_hex(&s[1..])));
    }

    if let Some(caps) = RGB_RE.captures(s) {
        return rgb_to_hex(&caps[1]).map(|hex| (Format::Rgb, hex));
    }

    if NAME_RE.is_match(s) {
        return palette
            .name_hex(s)
            .map(|hex| (Format::String, format!("#{hex}")))
            .ok_or_else(|| ColorError::InvalidArgument(format!("color ->{s}<- not found")));
    }

    if let Some(n) = parse_ansi_input(s).filter(|n| *n < ANSI_INPUT_LIMIT) {
        return u8::try_from(n)
            .ok()
            .and_then(|i| palette.ansi_hex(i))
            .map(|hex| (Format::Ansi, format!("#{hex}")))
            .ok_or_else(|| ColorError::InvalidArgument(format!("no ANSI palette entry ->{s}<-")));
    }

    Err(ColorError::FormatNotRecognized(s.to_owned()))
}

/// Six digits are kept as given; any other length repeats the last digit.
fn expand_hex(digits: &str) -> String {
    if digits.len() == HEX_DIGITS {
        return format!("#{digits}");
    }
    let last = &digits[digits.len() - 1..];
    format!("#{}", last.repeat(HEX_DIGITS))
}

fn rgb_to_hex(body: &str) -> Result<String> {
    let parts: Vec<&str> = body.split(',').collect();
    if parts.len() != 3 {
        return Err(ColorError::InvalidArgument(format!(
            "invalid RGB string ->{body}<-"
        )));
    }
    let mut bytes = [0u8; 3];
    for (slot, part) in bytes.iter_mut().zip(parts) {
        if !DIGITS_RE.is_match(part) {
            return Err(ColorError::InvalidArgument(format!(
                "invalid RGB component ->{part}<- in ->{body}<-"
            )));
        }
        // Digits only, so a parse failure is overflow.
        let byte = lexical_core::parse::<u32>(part.as_bytes())
            .ok()
            .and_then(|v| u8::try_from(v).ok());
        *slot = byte.unwrap_or_else(|| {
            warn!(component = part, "RGB component above 255, clamping");
            u8::MAX
        });
    }
    let [r, g, b] = bytes;
    Ok(format!("#{r:02x}{g:02x}{b:02x}"))
}

fn parse_ansi_input(s: &str) -> Option<i64> {
    if !INT_RE.is_match(s) {
        return None;
    }
    lexical_core::parse::<i64>(s.as_bytes()).ok()
}

fn decode(hex: &str) -> Result<[u8; 3]> {
    let digits = &hex[1..];
    let byte = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| ColorError::InvalidArgument(format!("invalid hex color ->{hex}<-")))
    };
    Ok([byte(0)?, byte(2)?, byte(4)?])
}
