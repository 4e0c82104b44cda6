use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_lib::normalize_extension;
use gamelist_lib::settings::{self, load_settings, save_settings, settings_path};

use crate::error::CliError;

/// Show the settings file location and its contents.
pub(crate) fn run_config_show() {
    let path = settings_path();
    log::info!(
        "{}",
        "gamelist-gen settings".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    match settings::load_settings_string() {
        Some(contents) => {
            log::info!(
                "  Settings file: {} {}",
                path.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
            log::info!("");
            for line in contents.lines() {
                log::info!("  {}", line);
            }
        }
        None => {
            log::info!(
                "  Settings file: {} {}",
                path.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
            );
            let defaults = load_settings();
            log::info!("  Output name: {}", defaults.generate.output_name);
        }
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

/// Update the saved defaults and write them back.
pub(crate) fn run_config_set(
    ext: Option<Vec<String>>,
    images: Option<PathBuf>,
    no_images: bool,
    output_name: Option<String>,
) -> Result<(), CliError> {
    let mut settings = load_settings();

    if let Some(exts) = ext {
        let normalized: Vec<String> = exts.iter().filter_map(|e| normalize_extension(e)).collect();
        if normalized.is_empty() {
            return Err(CliError::config("no usable extensions given"));
        }
        settings.generate.extensions = normalized;
    }
    if no_images {
        settings.generate.image_dir = None;
    } else if let Some(dir) = images {
        settings.generate.image_dir = Some(dir);
    }
    if let Some(name) = output_name {
        if name.trim().is_empty() || name.contains(['/', '\\']) {
            return Err(CliError::config(format!("invalid output name: {name:?}")));
        }
        settings.generate.output_name = name;
    }

    save_settings(&settings)?;
    log::info!(
        "{} Saved {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        settings_path().display(),
    );
    Ok(())
}
