use std::io::Write;

use crate::core::{converter::ColorConverter, error::AppError, palette::Palette};

use super::parse::{ConvertArgs, Target};

/// Output sink plus whether swatch escapes may be written to it.
#[derive(Debug)]
pub struct Output<W> {
    pub out: W,
    /// Only set when writing to a terminal.
    pub swatches: bool,
}

impl<W: Write> Output<W> {
    /// `text` painted on a true-colour background `ESC[48;2;R;G;Bm`, then
    /// reset; plain `text` when swatches are off.
    fn swatch(&self, [r, g, b]: [u8; 3], text: &str) -> String {
        if self.swatches {
            format!("\x1b[48;2;{r};{g};{b}m{text}\x1b[0m")
        } else {
            text.to_owned()
        }
    }
}

pub fn convert<W: Write>(
    o: &mut Output<W>,
    palette: &Palette,
    a: &ConvertArgs,
) -> Result<(), AppError> {
    let color = ColorConverter::with_palette(&a.color, palette)?;

    if let Some(target) = a.to {
        let value = match target {
            Target::Hex => color.to_hex().to_owned(),
            Target::Rgb => color.to_rgb(),
            Target::Ansi => color.to_ansi()?,
            Target::Name => color.to_name(),
        };
        writeln!(o.out, "{value}")?;
        return Ok(());
    }

    let input = color.original_value();
    writeln!(o.out, "Detected format is: {}\n", color.detected_format())?;
    writeln!(o.out, "Convert {input} to HEX: {}", color.to_hex())?;
    writeln!(o.out, "Convert {input} to RGB: {}", color.to_rgb())?;
    writeln!(o.out, "Convert {input} to ANSI: {}", color.to_ansi()?)?;
    writeln!(o.out, "Convert {input} to NAME: {}", color.to_name())?;
    if o.swatches {
        let sample = o.swatch(color.channels(), "        ");
        writeln!(o.out, "{sample}")?;
    }
    Ok(())
}

/// Every ANSI entry with a swatch, eight per row.
pub fn palette<W: Write>(o: &mut Output<W>, palette: &Palette) -> Result<(), AppError> {
    for (n, (index, hex)) in palette.ansi_entries().enumerate() {
        let color = ColorConverter::with_palette(&format!("#{hex}"), palette)?;
        let sample = o.swatch(color.channels(), "  ");
        write!(o.out, "{sample} {index:>3} #{hex}  ")?;
        if n % 8 == 7 {
            writeln!(o.out)?;
        }
    }
    writeln!(o.out)?;
    Ok(())
}

pub fn names<W: Write>(o: &mut Output<W>, palette: &Palette) -> Result<(), AppError> {
    for (name, hex) in palette.name_entries() {
        let color = ColorConverter::with_palette(&format!("#{hex}"), palette)?;
        let sample = o.swatch(color.channels(), "  ");
        writeln!(o.out, "{sample} #{hex}  {name}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{error::ColorError, palette::PaletteSource};
    use pretty_assertions::assert_eq;

    fn sink(swatches: bool) -> Output<Vec<u8>> {
        Output {
            out: Vec::new(),
            swatches,
        }
    }

    fn run_convert_to(
        color: &str,
        to: Option<Target>,
        swatches: bool,
    ) -> Result<String, AppError> {
        let p = Palette::load(&PaletteSource::Bundled).unwrap();
        let mut o = sink(swatches);
        let args = ConvertArgs {
            color: color.into(),
            to,
        };
        convert(&mut o, &p, &args)?;
        Ok(String::from_utf8(o.out).unwrap())
    }

    fn run_convert(color: &str, to: Option<Target>) -> Result<String, AppError> {
        run_convert_to(color, to, true)
    }

    #[test]
    fn single_target_prints_one_line() {
        assert_eq!(run_convert("#c390d4", Some(Target::Rgb)).unwrap(), "rgb(195,144,212)\n");
        assert_eq!(run_convert("red", Some(Target::Ansi)).unwrap(), "196\n");
        assert_eq!(run_convert("#c390d4", Some(Target::Name)).unwrap(), "\n");
    }

    #[test]
    fn full_report_lists_every_notation() {
        let text = run_convert("#c390d4", None).unwrap();
        let lines: Vec<&str> = text.lines().take(6).collect();
        assert_eq!(
            lines,
            [
                "Detected format is: HEX",
                "",
                "Convert #c390d4 to HEX: #c390d4",
                "Convert #c390d4 to RGB: rgb(195,144,212)",
                "Convert #c390d4 to ANSI: 140",
                "Convert #c390d4 to NAME: ",
            ]
        );
        assert!(text.contains("\x1b[48;2;195;144;212m"));
    }

    #[test]
    fn non_terminal_output_has_no_escapes() {
        let text = run_convert_to("#c390d4", None, false).unwrap();
        assert!(!text.contains('\x1b'));
        assert_eq!(text.lines().count(), 6);

        let p = Palette::load(&PaletteSource::Bundled).unwrap();
        let mut o = sink(false);
        palette(&mut o, &p).unwrap();
        names(&mut o, &p).unwrap();
        assert!(!o.out.contains(&0x1b));
    }

    #[test]
    fn bad_color_surfaces_color_error() {
        let err = run_convert("rgb(1,2)", None).unwrap_err();
        assert!(matches!(err, AppError::Color(ColorError::InvalidArgument(_))));
    }

    #[test]
    fn palette_listing_covers_all_entries() {
        let p = Palette::load(&PaletteSource::Bundled).unwrap();
        let mut o = sink(true);
        palette(&mut o, &p).unwrap();
        let text = String::from_utf8(o.out).unwrap();
        assert_eq!(text.matches('#').count(), 256);
        assert!(text.contains("140 #af87d7"));
    }

    #[test]
    fn names_listing_has_one_line_per_name() {
        let p = Palette::load(&PaletteSource::Bundled).unwrap();
        let mut o = sink(true);
        names(&mut o, &p).unwrap();
        let text = String::from_utf8(o.out).unwrap();
        assert_eq!(text.lines().count(), p.name_entries().count());
        assert!(text.lines().any(|l| l.ends_with("#000080  navy")));
    }
}
