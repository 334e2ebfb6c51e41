use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod tui;

#[derive(Parser)]
#[command(name = "zeta-intent")]
#[command(about = "Turn natural-language requests into confirmed on-chain transactions")]
#[command(long_about = "Sends a prompt to an intent-parsing agent, shows the structured intent for confirmation, then asks the execution service to submit the transaction")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to <config dir>/zeta-intent/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Agent service base URL, overrides config and ZETA_AGENT_URL
    #[arg(long, global = true)]
    pub agent_url: Option<String>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive panel (default)
    Tui,

    /// Parse a prompt and print the agent's intent
    Parse {
        /// Natural-language request
        prompt: String,
    },

    /// Parse a prompt, confirm, and execute the transaction
    Send {
        /// Natural-language request
        prompt: String,
        /// Skip the confirmation question
        #[arg(short, long)]
        yes: bool,
    },

    /// Show agent service status
    Status,
}

impl Commands {
    pub fn is_tui(&self) -> bool {
        matches!(self, Commands::Tui)
    }
}
