//! ghclean - CLI for listing and cleaning up GitHub repositories

use clap::{CommandFactory, Parser};

mod auth;
mod cli;
mod client;
mod error;
mod output;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { all, json } => cli::list::run(all, json).await,
        Commands::Delete { repo, force } => {
            cli::delete::run(&repo, force, &mut cli::confirm::TerminalPrompt).await
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "ghclean", &mut std::io::stdout());
            Ok(())
        }
    }
}
