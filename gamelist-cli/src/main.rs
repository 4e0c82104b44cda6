//! gamelist-gen CLI
//!
//! Command-line interface for generating ES-DE game lists from ROM folders.

mod cli_types;
mod commands;
mod error;
mod logging;
mod progress;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Could not set up logging: {e}");
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Extensions { rom_dir } => commands::extensions::run_extensions(&rom_dir),
        Commands::Generate {
            rom_dir,
            images,
            extensions,
            output,
        } => commands::generate::run_generate(rom_dir, images, extensions, output, cli.quiet),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show();
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::Set {
                ext,
                images,
                no_images,
                output_name,
            } => commands::config::run_config_set(ext, images, no_images, output_name),
        },
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
