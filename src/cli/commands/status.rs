use zeta_intent::client::AgentService;
use zeta_intent::error::ZetaResult;

pub async fn handle_status(service: &dyn AgentService, base_url: &str) -> ZetaResult<()> {
    println!("🔌 Agent service: {}", base_url);

    let status = service.status().await?;
    println!("✅ Status: {}", status.status);
    match status.address {
        Some(address) => println!("👛 Signing address: {}", address),
        None => println!("👛 Signing address: not configured"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use zeta_intent::client::{ExecutionResult, ParsedIntent, ServiceStatus};
    use zeta_intent::error::ZetaError;

    struct Offline;

    #[async_trait]
    impl AgentService for Offline {
        async fn parse_intent(&self, _prompt: &str) -> ZetaResult<ParsedIntent> {
            Err(ZetaError::invalid_input("offline"))
        }

        async fn execute(&self, _intent: &ParsedIntent) -> ZetaResult<ExecutionResult> {
            Err(ZetaError::invalid_input("offline"))
        }

        async fn status(&self) -> ZetaResult<ServiceStatus> {
            Err(ZetaError::Agent(reqwest::StatusCode::SERVICE_UNAVAILABLE))
        }
    }

    struct Online;

    #[async_trait]
    impl AgentService for Online {
        async fn parse_intent(&self, _prompt: &str) -> ZetaResult<ParsedIntent> {
            Err(ZetaError::invalid_input("unused"))
        }

        async fn execute(&self, _intent: &ParsedIntent) -> ZetaResult<ExecutionResult> {
            Err(ZetaError::invalid_input("unused"))
        }

        async fn status(&self) -> ZetaResult<ServiceStatus> {
            Ok(ServiceStatus { status: "ok".to_string(), address: None })
        }
    }

    #[tokio::test]
    async fn status_accepts_any_service() {
        assert!(handle_status(&Online, "http://localhost:8000").await.is_ok());
    }

    #[tokio::test]
    async fn status_propagates_service_error() {
        let err = handle_status(&Offline, "http://localhost:8000").await.unwrap_err();
        assert!(matches!(err, ZetaError::Agent(_)));
    }
}
