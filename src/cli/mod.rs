//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod confirm;
pub mod delete;
pub mod list;

/// CLI for listing and cleaning up GitHub repositories
#[derive(Parser, Debug)]
#[command(name = "ghclean")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List repositories for the authenticated user
    List {
        /// Include archived and forked repositories
        #[arg(long)]
        all: bool,

        /// Output as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Delete a repository
    Delete {
        /// Repository in 'owner/repo' format
        repo: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
