use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ZetaError, ZetaResult};

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
}

/// Structured intent as returned by the agent.
///
/// The object is kept exactly as received (key order included) and sent back
/// unchanged to the execution endpoint. The agent's shape is trusted: fields
/// are read through accessors that tolerate absence or odd types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedIntent(Map<String, Value>);

impl ParsedIntent {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn from_value(value: Value) -> ZetaResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(ZetaError::invalid_input(format!(
                "agent returned a non-object intent: {}",
                other
            ))),
        }
    }

    /// The `type` tag, e.g. `"transfer"`.
    pub fn kind(&self) -> Option<&str> {
        self.str_field("type")
    }

    pub fn recipient(&self) -> Option<&str> {
        self.str_field("recipient")
    }

    pub fn amount(&self) -> Option<f64> {
        self.0.get("amount").and_then(Value::as_f64)
    }

    pub fn token(&self) -> Option<&str> {
        self.str_field("token")
    }

    /// Content-level failure reported by the agent.
    pub fn error(&self) -> Option<&str> {
        self.str_field("error")
    }

    /// Unparsed agent output echoed back alongside `error`.
    pub fn raw(&self) -> Option<&str> {
        self.str_field("raw")
    }

    /// True when the agent flagged the prompt as not understood. Any present,
    /// non-null `error` counts, whatever its type.
    pub fn is_parse_error(&self) -> bool {
        matches!(self.0.get("error"), Some(v) if !v.is_null())
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Two-space indented JSON, the way the confirm card shows it.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| format!("{:?}", self.0))
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

/// Successful `POST /api/execute` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub tx_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
}

impl ExecutionResult {
    /// Explorer link, treating an empty string as absent.
    pub fn explorer_link(&self) -> Option<&str> {
        self.explorer_url.as_deref().filter(|u| !u.is_empty())
    }
}

/// Error body of a rejected execute call.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// `GET /api/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    /// Signing account of the execution service, if it has one configured.
    #[serde(default)]
    pub address: Option<String>,
}
