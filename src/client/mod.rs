use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::AgentConfig;
use crate::error::{EXECUTION_FAILED, ZetaError, ZetaResult};

pub mod types;

pub use types::{ChatRequest, ErrorDetail, ExecutionResult, ParsedIntent, ServiceStatus};

/// The remote agent: natural-language parsing plus transaction execution.
#[async_trait]
pub trait AgentService: Send + Sync {
    /// `POST /api/chat`. A `200` carrying an `error` field is still `Ok`.
    async fn parse_intent(&self, prompt: &str) -> ZetaResult<ParsedIntent>;

    /// `POST /api/execute` with the intent forwarded verbatim.
    async fn execute(&self, intent: &ParsedIntent) -> ZetaResult<ExecutionResult>;

    /// `GET /api/status`
    async fn status(&self) -> ZetaResult<ServiceStatus>;
}

pub struct HttpAgentService {
    client: Client,
    base_url: String,
}

impl HttpAgentService {
    pub fn new(config: &AgentConfig) -> ZetaResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AgentService for HttpAgentService {
    async fn parse_intent(&self, prompt: &str) -> ZetaResult<ParsedIntent> {
        let url = self.endpoint("/api/chat");
        debug!("Sending prompt to agent: {}", url);

        let response = self.client
            .post(&url)
            .json(&ChatRequest { prompt: prompt.to_string() })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Agent returned HTTP {}", status);
            return Err(ZetaError::Agent(status));
        }

        let body: serde_json::Value = response.json().await?;
        let intent = ParsedIntent::from_value(body)?;
        if let Some(err) = intent.error() {
            debug!("Agent could not parse prompt: {}", err);
        }
        Ok(intent)
    }

    async fn execute(&self, intent: &ParsedIntent) -> ZetaResult<ExecutionResult> {
        let url = self.endpoint("/api/execute");
        debug!("Submitting intent for execution: {}", url);

        let response = self.client
            .post(&url)
            .json(intent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorDetail>(&body)
                .ok()
                .map(|e| e.detail)
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| EXECUTION_FAILED.to_string());
            warn!("Execution service returned HTTP {}: {}", status, message);
            return Err(ZetaError::execution(message));
        }

        let result: ExecutionResult = response.json().await?;
        debug!("Transaction submitted: {}", result.tx_hash);
        Ok(result)
    }

    async fn status(&self) -> ZetaResult<ServiceStatus> {
        let url = self.endpoint("/api/status");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ZetaError::Agent(status));
        }

        Ok(response.json().await?)
    }
}
