//! Process-wide palette state; each file under `tests/` is its own process,
//! so the steps below run in order inside a single test.

use std::fs;

use colorconv::{ColorConverter, ColorError, ConfigError, Palette, PaletteSource, set_source};
use pretty_assertions::assert_eq;

#[test]
fn failed_load_is_reported_every_time_until_data_is_fixed() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ansi.json"), r#"{"0":"000000"}"#).unwrap();
    fs::write(dir.path().join("strings.json"), "{ broken").unwrap();

    set_source(PaletteSource::Directory(dir.path().into())).unwrap();

    // Source can only be chosen once.
    assert!(matches!(
        set_source(PaletteSource::Bundled),
        Err(ConfigError::SourceAlreadySet)
    ));

    for _ in 0..2 {
        let err = Palette::global().unwrap_err();
        assert!(matches!(err, ColorError::DataCorrupt { ref map, .. } if map == "strings"));
    }
    let err = ColorConverter::new("black").unwrap_err();
    assert!(matches!(err, ColorError::DataCorrupt { .. }));

    fs::remove_file(dir.path().join("strings.json")).unwrap();
    let err = "black".parse::<ColorConverter<'static>>().unwrap_err();
    assert!(matches!(err, ColorError::DataUnavailable { .. }));

    // Nothing was cached, so repaired data loads on the next call.
    fs::write(dir.path().join("strings.json"), r##"{"black":"#000000"}"##).unwrap();
    let c = ColorConverter::new("black").unwrap();
    assert_eq!(c.to_hex(), "#000000");
    assert_eq!(c.to_ansi().unwrap(), "0");

    // Loaded palette is kept even after the files go away.
    drop(dir);
    assert!(Palette::global().is_ok());
    assert!(matches!(
        set_source(PaletteSource::Bundled),
        Err(ConfigError::SourceAlreadySet)
    ));
}
