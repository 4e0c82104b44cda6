//! Logger setup: user-facing output goes through `log::info!`, with
//! `--quiet`, `--verbose` and `--logfile` controlling what ends up where.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Target};
use log::{Level, LevelFilter};

/// Writes log lines to stdout and, if configured, to a file without ANSI codes.
struct Tee {
    file: Option<File>,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        if let Some(ref mut file) = self.file {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        if let Some(ref mut file) = self.file {
            file.flush()?;
        }
        Ok(())
    }
}

/// Install the global logger. `RUST_LOG`, when set, refines the level chosen
/// by the flags.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> io::Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    let file = logfile.map(File::create).transpose()?;

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(Target::Pipe(Box::new(Tee { file })))
        .format(move |buf, record| {
            if verbose {
                writeln!(
                    buf,
                    "[{} {:<5} {}] {}",
                    buf.timestamp(),
                    record.level(),
                    record.target(),
                    record.args()
                )
            } else {
                match record.level() {
                    Level::Error => writeln!(buf, "error: {}", record.args()),
                    Level::Warn => writeln!(buf, "warning: {}", record.args()),
                    _ => writeln!(buf, "{}", record.args()),
                }
            }
        });
    builder.try_init().map_err(io::Error::other)
}
