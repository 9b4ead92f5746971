use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use bugtrack_core::SortKey;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Code Everest bug tracker")]
pub struct Cli {
    /// Path to the config file (defaults to BUGTRACK_CONFIG or ~/.bugtrack.config)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[clap(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[clap(long, short = 'v', global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

/// Output format for the list command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List bugs, optionally filtered and sorted
    List {
        /// Only show bugs whose title or tags contain this text
        #[clap(long, short = 's')]
        search: Option<String>,

        /// Sort order (severity, status, title)
        #[clap(long)]
        sort: Option<SortKey>,

        /// Output format
        #[clap(long, short = 'f', value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show details for a specific bug
    Show {
        /// The ID of the bug to show
        id: u32,

        /// Include the AI summary and suggestions panels
        #[clap(long)]
        ai: bool,

        /// Print the full record as JSON
        #[clap(long, conflicts_with = "ai")]
        json: bool,
    },

    /// Show dashboard statistics
    Stats,

    /// List the team members bugs can be assigned to
    Assignees,

    /// Start an interactive session that keeps search and sort state
    Shell,
}
