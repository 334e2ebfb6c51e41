use tracing::info;
use zeta_intent::client::AgentService;
use zeta_intent::error::ZetaResult;

pub async fn handle_parse(service: &dyn AgentService, prompt: String) -> ZetaResult<()> {
    info!("🧠 Parse: {}", prompt);

    let intent = service.parse_intent(&prompt).await?;
    println!("{}", intent.to_pretty_json());

    if let Some(err) = intent.error() {
        println!("⚠️  Agent parse error: {}", err);
    }
    Ok(())
}
