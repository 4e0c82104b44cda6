//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gamelist-gen")]
#[command(about = "Generate ES-DE gamelist.xml files for ROM folders", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which file extensions become game entries.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct ExtensionArgs {
    /// Extensions to include (e.g., zip,7z,.sfc); case and leading dot don't matter
    #[arg(short, long, value_delimiter = ',', conflicts_with = "all")]
    pub ext: Option<Vec<String>>,

    /// Include every extension found in the ROM folder
    #[arg(short, long)]
    pub all: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the file extensions present in a ROM folder
    Extensions {
        /// ROM folder to scan (recursively)
        rom_dir: PathBuf,
    },

    /// Write a gamelist.xml for a ROM folder
    Generate {
        /// ROM folder; paths in the game list are relative to it
        rom_dir: PathBuf,

        /// Folder with images named after the ROMs (e.g., Sonic.png for Sonic.zip)
        #[arg(short, long)]
        images: Option<PathBuf>,

        #[command(flatten)]
        extensions: ExtensionArgs,

        /// Output file (default: <rom_dir>/gamelist.xml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or change saved defaults
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the current settings
    Show,

    /// Print the settings file path
    Path,

    /// Update saved defaults
    Set {
        /// Default extensions for `generate`
        #[arg(long, value_delimiter = ',')]
        ext: Option<Vec<String>>,

        /// Default image folder for `generate`
        #[arg(long, conflicts_with = "no_images")]
        images: Option<PathBuf>,

        /// Clear the default image folder
        #[arg(long)]
        no_images: bool,

        /// File name written into the ROM folder
        #[arg(long)]
        output_name: Option<String>,
    },
}
