use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use zeta_intent::client::{AgentService, ParsedIntent};
use zeta_intent::config::NetworkConfig;
use zeta_intent::error::ZetaResult;
use zeta_intent::panel::{Panel, SendOutcome, parse_and_execute};

use super::print_new_log_entries;

pub async fn handle_send(
    service: &dyn AgentService,
    network: NetworkConfig,
    prompt: String,
    yes: bool,
) -> ZetaResult<()> {
    info!("💸 Send: {}", prompt);

    let explorer_label = network.explorer_label.clone();
    let mut panel = Panel::new(network);
    let outcome = parse_and_execute(&mut panel, service, &prompt, |intent| {
        ask_confirmation(intent, yes)
    })
    .await;
    print_new_log_entries(&panel, 0);

    match outcome? {
        SendOutcome::Executed { result, .. } => {
            println!("✅ Transaction Hash: {}", result.tx_hash);
            if let Some(url) = result.explorer_link() {
                println!("🔗 {}: {}", explorer_label, url);
            }
        }
        SendOutcome::Declined(_) => println!("Aborted."),
    }
    Ok(())
}

async fn ask_confirmation(intent: ParsedIntent, yes: bool) -> ZetaResult<bool> {
    println!("{}", intent.to_pretty_json());
    if yes {
        return Ok(true);
    }

    let mut stdout = tokio::io::stdout();
    stdout.write_all(b"Confirm & Execute Transaction? [y/N] ").await?;
    stdout.flush().await?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
