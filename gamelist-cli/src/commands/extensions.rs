use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_lib::scan_extensions;

use crate::error::CliError;

/// Scan a ROM folder and list the extensions found in it.
pub(crate) fn run_extensions(rom_dir: &Path) -> Result<(), CliError> {
    let scan = scan_extensions(rom_dir)?;

    log::info!(
        "Found {} file extensions in {}",
        scan.extensions.len(),
        rom_dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    for ext in &scan.extensions {
        log::info!("  {}", ext.if_supports_color(Stdout, |t| t.bold()));
    }

    if scan.is_partial() {
        log::warn!(
            "{} {} directories could not be read; the list may be incomplete",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            scan.warnings.len(),
        );
    }
    Ok(())
}
