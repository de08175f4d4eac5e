use anyhow::Result;
use clap::{Parser, Subcommand};

use gitlabctl::model::GitlabConfig;

use crate::cli_subcommands::{CreateCommands, DeleteCommands, GetCommands, UpdateCommands};

#[derive(Parser)]
#[command(name = "gitlabctl")]
#[command(about = "Control a Gitlab installation from its API", long_about = None)]
pub(crate) struct Cli {
    /// URL directing to Gitlab
    #[arg(long, short = 'u', global = true, env = "GITLABCTL_URL")]
    url: Option<String>,

    /// Private token to access Gitlab
    #[arg(long, short = 't', global = true, env = "GITLABCTL_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Get data from Gitlab projects, branches, tags, users and groups
    Get {
        #[command(subcommand)]
        command: GetCommands,
    },

    /// Create projects, branches, tags, users and groups
    Create {
        #[command(subcommand)]
        command: CreateCommands,
    },

    /// Update values of already existing elements on Gitlab
    Update {
        #[command(subcommand)]
        command: UpdateCommands,
    },

    /// Delete elements from Gitlab
    Delete {
        #[command(subcommand)]
        command: DeleteCommands,
    },
}

/// How a finished command maps onto the process exit code. Benign no-op
/// outcomes (operator declined, nothing to change) are distinguishable
/// from success without being errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CommandStatus {
    Done,
    NoOp,
}

impl CommandStatus {
    pub(crate) fn code(self) -> i32 {
        match self {
            CommandStatus::Done => 0,
            CommandStatus::NoOp => 3,
        }
    }
}

#[cfg(test)]
#[path = "tests/cli_runtime_tests.rs"]
mod tests;

pub(crate) fn run() -> Result<CommandStatus> {
    let cli = Cli::parse();
    let config = GitlabConfig::resolve(cli.url, cli.token)?;

    match cli.command {
        Commands::Get { command } => crate::cli_exec::get::handle(config, command),
        Commands::Create { command } => crate::cli_exec::create::handle(config, command),
        Commands::Update { command } => crate::cli_exec::update::handle(config, command),
        Commands::Delete { command } => crate::cli_exec::delete::handle(config, command),
    }
}
