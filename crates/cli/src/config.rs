//! CLI configuration and argument parsing.

use clap::Parser;

use crate::commands::Command;

/// Inspect trace endpoint identities.
#[derive(Debug, Parser)]
#[command(name = "endpointctl", version, about)]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Runs the parsed command.
    pub fn run(self) -> anyhow::Result<()> {
        println!("{}", self.command.execute()?);
        Ok(())
    }
}
