//! Log setup: normal output goes through `log::info!`, so `--quiet` hides it.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Writes every record to stdout and, when set, to a logfile without ANSI codes.
struct Tee {
    file: Option<strip_ansi_escapes::Writer<File>>,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        if let Some(file) = &mut self.file {
            file.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        if let Some(file) = &mut self.file {
            file.flush()?;
        }
        Ok(())
    }
}

pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> io::Result<()> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Library crates stay at warn unless verbose.
    let library_level = if verbose { level } else { LevelFilter::Warn };

    let file = match logfile {
        Some(path) => Some(strip_ansi_escapes::Writer::new(File::create(path)?)),
        None => None,
    };

    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module("nookdex", level)
        .filter_module("nookdex_core", library_level)
        .filter_module("nookdex_data", library_level)
        .filter_module("nookdex_query", library_level)
        .filter_module("nookdex_lib", library_level)
        .parse_env("NOOKDEX_LOG")
        .target(Target::Pipe(Box::new(Tee { file })))
        .format(move |buf, record| {
            if verbose {
                return writeln!(
                    buf,
                    "[{} {:<5} {}] {}",
                    buf.timestamp_millis(),
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
            match record.level() {
                Level::Error => writeln!(
                    buf,
                    "{} {}",
                    "error:".if_supports_color(Stdout, |t| t.red()),
                    record.args()
                ),
                Level::Warn => writeln!(
                    buf,
                    "{} {}",
                    "warning:".if_supports_color(Stdout, |t| t.yellow()),
                    record.args()
                ),
                _ => writeln!(buf, "{}", record.args()),
            }
        });
    builder.try_init().map_err(io::Error::other)
}
