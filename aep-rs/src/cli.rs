//! Root CLI structure for aep-rs

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "aep-rs")]
#[command(about = "Command-line tools for After Effects project containers", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display information about a project container
    Info {
        /// Path to the .aep (or any RIFF/RIFX) file
        file: PathBuf,
    },

    /// Show the chunk tree of a project container
    Tree {
        /// Path to the .aep (or any RIFF/RIFX) file
        file: PathBuf,

        /// Maximum depth to display
        #[arg(long)]
        depth: Option<usize>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Hide payload previews for leaf chunks
        #[arg(long)]
        no_preview: bool,
    },

    /// List chunks with a given identifier
    Find {
        /// Path to the .aep (or any RIFF/RIFX) file
        file: PathBuf,

        /// Chunk identifier, 1-4 characters (short names are space-padded)
        name: String,

        /// Search the whole tree instead of the root's direct children
        #[arg(short, long)]
        recursive: bool,
    },

    /// Write a leaf chunk's payload to a file or stdout
    Extract {
        /// Path to the .aep (or any RIFF/RIFX) file
        file: PathBuf,

        /// Chunk identifier, 1-4 characters (short names are space-padded)
        name: String,

        /// Output path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Which match to extract when several chunks share the name
        #[arg(long, default_value_t = 0)]
        index: usize,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
