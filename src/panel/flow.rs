use std::future::Future;

use crate::client::{AgentService, ExecutionResult, ParsedIntent};
use crate::error::{ZetaError, ZetaResult};

use super::Panel;

#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    Executed {
        intent: ParsedIntent,
        result: ExecutionResult,
    },
    /// The confirmation step said no; nothing was submitted.
    Declined(ParsedIntent),
}

/// Runs the whole prompt → confirm → execute flow on `panel` without a UI.
///
/// `confirm` sees the parsed intent and decides whether to execute it. The
/// error of whichever step failed is returned as-is.
pub async fn parse_and_execute<S, F, Fut>(
    panel: &mut Panel,
    service: &S,
    prompt: &str,
    confirm: F,
) -> ZetaResult<SendOutcome>
where
    S: AgentService + ?Sized,
    F: FnOnce(ParsedIntent) -> Fut,
    Fut: Future<Output = ZetaResult<bool>>,
{
    panel.set_prompt(prompt);
    if !panel.submit(service).await {
        return Err(ZetaError::invalid_input("prompt must not be empty"));
    }
    if let Some(e) = panel.take_error() {
        return Err(e);
    }

    let intent = panel
        .phase()
        .intent()
        .cloned()
        .ok_or_else(|| ZetaError::invalid_input("agent returned no intent"))?;
    if intent.is_parse_error() {
        let reason = intent.error().unwrap_or("unrecognized prompt").to_string();
        return Err(ZetaError::ParseRejected(reason));
    }

    if !confirm(intent.clone()).await? {
        return Ok(SendOutcome::Declined(intent));
    }

    panel.confirm(service).await;
    if let Some(e) = panel.take_error() {
        return Err(e);
    }
    match panel.phase().result() {
        Some(result) => Ok(SendOutcome::Executed {
            intent,
            result: result.clone(),
        }),
        None => Err(ZetaError::execution("no transaction result")),
    }
}
