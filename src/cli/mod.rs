mod handlers;
pub mod parse;

use std::io::IsTerminal;

use clap::Parser;
pub use parse::Cli;
use tracing_subscriber::EnvFilter;

use crate::core::{
    config::Config,
    error::AppError,
    palette::{self, Palette},
};

pub fn run() -> Result<(), AppError> {
    let cli = parse::Cli::parse();
    let cfg = Config::builder()
        .data_dir_opt(cli.data_dir.as_ref())
        .debug(cli.debug)
        .build()?;
    init_logging(&cfg);

    palette::set_source(cfg.palette.clone())?;
    let palette = Palette::global()?;

    let stdout = std::io::stdout();
    let mut out = handlers::Output {
        swatches: stdout.is_terminal(),
        out: stdout.lock(),
    };
    match cli.cmd {
        parse::Command::Convert(a) => handlers::convert(&mut out, palette, &a),
        parse::Command::Palette => handlers::palette(&mut out, palette),
        parse::Command::Names => handlers::names(&mut out, palette),
    }
}

/// Logs go to stderr so converted values on stdout stay pipeable.
fn init_logging(cfg: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.default_log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
