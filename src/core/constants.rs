//! A collection of constants.

/// Levels of the 6x6x6 ANSI-256 color cube, per channel.
pub const CUBE_STEPS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

/// Numeric inputs must be strictly below this to be read as an ANSI index.
///
/// 255 itself is never matched.
pub const ANSI_INPUT_LIMIT: i64 = 255;

/// Number of hex digits in a canonical color, without the `#`.
pub const HEX_DIGITS: usize = 6;

/// Name of the ANSI index map resource (`ansi.json`).
pub const ANSI_MAP: &str = "ansi";
/// Name of the color name map resource (`strings.json`).
pub const NAMES_MAP: &str = "strings";

/// Color converted by the CLI when none is given.
pub const DEFAULT_COLOR: &str = "#c390d4";

/// Environment variable pointing at an on-disk palette directory.
pub const DATA_DIR_ENV: &str = "COLORCONV_DATA_DIR";
