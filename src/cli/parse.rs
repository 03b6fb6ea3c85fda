use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::core::constants::{DATA_DIR_ENV, DEFAULT_COLOR};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "colorconv",
    about = "Convert colors between hex, rgb(), ANSI-256 and named notations"
)]
pub struct Cli {
    /// Directory holding `ansi.json` and `strings.json` (bundled maps if omitted)
    #[arg(long, global = true, value_name = "DIR", env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    /// Emit debug logs on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Detect a color's notation and print it in every other notation
    Convert(ConvertArgs),
    /// List the ANSI-256 palette
    Palette,
    /// List named colors
    Names,
}

/// `colorconv convert …`
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Color in hex (`#c390d4`), rgb (`rgb(195,144,212)`), name (`navy`) or ANSI index (`140`)
    #[arg(value_name = "COLOR", default_value = DEFAULT_COLOR)]
    pub color: String,

    /// Print only this notation
    #[arg(long, value_enum)]
    pub to: Option<Target>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Hex,
    Rgb,
    Ansi,
    Name,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn convert_defaults_to_reference_color() {
        let cli = Cli::try_parse_from(["colorconv", "convert"]).unwrap();
        match cli.cmd {
            Command::Convert(a) => {
                assert_eq!(a.color, DEFAULT_COLOR);
                assert_eq!(a.to, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_target_and_global_flags() {
        let cli = Cli::try_parse_from([
            "colorconv",
            "convert",
            "rgb(1,2,3)",
            "--to",
            "ansi",
            "--debug",
            "--data-dir",
            "/tmp/colors",
        ])
        .unwrap();
        assert!(cli.debug);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/colors")));
        match cli.cmd {
            Command::Convert(a) => {
                assert_eq!(a.color, "rgb(1,2,3)");
                assert_eq!(a.to, Some(Target::Ansi));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_target() {
        assert!(Cli::try_parse_from(["colorconv", "convert", "red", "--to", "hsl"]).is_err());
    }
}
