use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_lib::settings::{self, Settings};
use gamelist_lib::{ExtensionSelection, GamelistError, GenerateRequest, Pipeline};

use crate::cli_types::ExtensionArgs;
use crate::error::CliError;
use crate::progress::BarReporter;

/// Run the full pipeline for one ROM folder.
pub(crate) fn run_generate(
    rom_dir: PathBuf,
    images: Option<PathBuf>,
    extensions: ExtensionArgs,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    let settings = settings::load_settings();
    let selection = resolve_selection(&extensions, &settings);
    let image_dir = images.or_else(|| settings.generate.image_dir.clone());
    let output = output.unwrap_or_else(|| rom_dir.join(&settings.generate.output_name));

    log::info!(
        "Generating {} from {}",
        output.display().if_supports_color(Stdout, |t| t.cyan()),
        rom_dir.display(),
    );
    if let Some(ref dir) = image_dir {
        log::info!("Images: {}", dir.display());
    }

    let request = GenerateRequest::new(&rom_dir, selection, &output).with_image_dir(image_dir);
    let reporter = BarReporter::new(quiet);
    let result = Pipeline::new().run(&request, &reporter);
    reporter.finish();

    match result {
        Ok(summary) => {
            if !summary.warnings.is_empty() {
                log::warn!(
                    "{} {} directories could not be read and were skipped",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    summary.warnings.len(),
                );
            }
            log::info!(
                "{} Generated {} with {} games ({} with images)",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                summary.output.display(),
                summary.records,
                summary.with_images,
            );
            log::info!("Extensions: {}", summary.extensions.join(", "));
            Ok(())
        }
        Err(e @ GamelistError::NoMatches { .. }) => {
            log::warn!(
                "{} {}; nothing was written",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                e,
            );
            Ok(())
        }
        Err(e @ GamelistError::InvalidInput(_)) => {
            log::info!(
                "Pass --ext or --all, or save defaults with `gamelist-gen config set --ext ...`"
            );
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Command-line flags win over saved defaults.
fn resolve_selection(args: &ExtensionArgs, settings: &Settings) -> ExtensionSelection {
    if args.all {
        return ExtensionSelection::All;
    }
    match args.ext {
        Some(ref exts) => ExtensionSelection::only(exts),
        None => ExtensionSelection::Only(settings.extension_set()),
    }
}
