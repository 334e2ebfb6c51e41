use clap::Parser;
use std::process;
use std::sync::{Arc, Mutex};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Args, Commands};
use zeta_intent::config::{AGENT_URL_ENV, AppConfig};
use zeta_intent::HttpAgentService;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let command = args.command.unwrap_or(Commands::Tui);

    let sink = init_tracing(args.verbose, command.is_tui());

    if let Err(e) = run(args.config, args.agent_url, command).await {
        error!("Error: {:#}", e);
        if sink != LogSink::Stderr {
            eprintln!("Error: {:#}", e);
        }
        process::exit(1);
    }
}

/// Where tracing output ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogSink {
    Stderr,
    File,
    Discard,
}

/// The TUI owns the terminal, so its logs go to a file instead of stderr.
fn log_sink(tui: bool, has_log_file: bool) -> LogSink {
    match (tui, has_log_file) {
        (false, _) => LogSink::Stderr,
        (true, true) => LogSink::File,
        (true, false) => LogSink::Discard,
    }
}

fn init_tracing(verbose: bool, tui: bool) -> LogSink {
    let default_level = if verbose { "debug" } else if tui { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let log_file = if tui { open_log_file() } else { None };
    let sink = log_sink(tui, log_file.is_some());
    match log_file {
        Some(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        None if tui => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
    sink
}

fn open_log_file() -> Option<std::fs::File> {
    let dir = dirs::data_local_dir()?.join("zeta-intent");
    std::fs::create_dir_all(&dir).ok()?;
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("zeta-intent.log"))
        .ok()
}

async fn run(
    config_path: Option<std::path::PathBuf>,
    agent_url: Option<String>,
    command: Commands,
) -> anyhow::Result<()> {
    info!("⚡ zeta-intent v{}", zeta_intent::VERSION);

    let config = AppConfig::load(config_path.as_deref())?
        .with_overrides(std::env::var(AGENT_URL_ENV).ok(), agent_url)?;
    let service = HttpAgentService::new(&config.agent)?;
    info!("Agent service at {}", service.base_url());

    match command {
        Commands::Tui => {
            cli::tui::run_tui(Arc::new(service), config.network).await?;
        }
        Commands::Parse { prompt } => {
            cli::commands::parse::handle_parse(&service, prompt).await?;
        }
        Commands::Send { prompt, yes } => {
            cli::commands::send::handle_send(&service, config.network, prompt, yes).await?;
        }
        Commands::Status => {
            cli::commands::status::handle_status(&service, service.base_url()).await?;
        }
    }
    Ok(())
}
