use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// doe - sort machine exports into a dated DOE folder
#[derive(Parser, Debug)]
#[command(name = "doe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events and a final JSON summary
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v shows skipped files and phases)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./doe.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build DOE_<date> from a folder of machine exports
    Build {
        /// Folder holding one sub-folder per machine
        #[arg(short, long)]
        source: PathBuf,

        /// Folder receiving DOE_<date>
        #[arg(short, long)]
        dest: PathBuf,

        /// Project name; enables the summary documents
        #[arg(long)]
        project_name: Option<String>,

        /// DOE version written in the summary documents
        #[arg(long)]
        doe_version: Option<String>,

        /// DOE date written in the summary documents (defaults to --date)
        #[arg(long)]
        doe_date: Option<String>,

        /// Date of the DOE folder, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Exit non-zero when the run logged warnings or errors
        #[arg(long)]
        strict: bool,
    },

    /// Print the folder tree of a directory
    Tree {
        /// Directory to list
        dir: PathBuf,
    },

    /// Print the classification rule table
    Rules,
}
