//! The Prompt-to-Transaction panel.
//!
//! State changes are synchronous: `begin_*` claims the request slot and hands
//! back a [`Ticket`], the caller performs the network call however it likes,
//! and [`Panel::complete`] applies the outcome. [`Panel::submit`] and
//! [`Panel::confirm`] bundle the three steps for callers that can simply await.

use tracing::debug;

use crate::client::{AgentService, ExecutionResult, ParsedIntent};
use crate::config::NetworkConfig;
use crate::error::ZetaError;

pub mod flow;
pub mod log;
pub mod slot;
pub mod view;

pub use flow::{SendOutcome, parse_and_execute};
pub use log::{ActivityLog, LogEntry};
pub use slot::{Request, RequestKind, RequestSlot, Response, Ticket};
pub use view::{ConfirmControl, PanelView, TransactionView};

/// Where the user is in the prompt → confirm → success flow.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    AwaitingPrompt,
    PendingConfirmation(ParsedIntent),
    /// The intent stays around so the confirm card keeps rendering.
    Completed {
        intent: ParsedIntent,
        result: ExecutionResult,
    },
}

impl Phase {
    pub fn intent(&self) -> Option<&ParsedIntent> {
        match self {
            Phase::AwaitingPrompt => None,
            Phase::PendingConfirmation(intent) => Some(intent),
            Phase::Completed { intent, .. } => Some(intent),
        }
    }

    pub fn result(&self) -> Option<&ExecutionResult> {
        match self {
            Phase::Completed { result, .. } => Some(result),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct Panel {
    prompt: String,
    phase: Phase,
    slot: RequestSlot,
    log: ActivityLog,
    network: NetworkConfig,
    last_error: Option<ZetaError>,
}

impl Panel {
    pub fn new(network: NetworkConfig) -> Self {
        Self {
            network,
            ..Self::default()
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    /// Error from the most recent failed request, until taken or the next request starts.
    pub fn last_error(&self) -> Option<&ZetaError> {
        self.last_error.as_ref()
    }

    pub fn take_error(&mut self) -> Option<ZetaError> {
        self.last_error.take()
    }

    pub fn is_busy(&self) -> bool {
        self.slot.is_busy()
    }

    pub fn in_flight(&self) -> Option<RequestKind> {
        self.slot.active_kind()
    }

    /// Replaces the prompt. The input is disabled while busy, so this returns false then.
    pub fn set_prompt<T: Into<String>>(&mut self, prompt: T) -> bool {
        if self.is_busy() {
            return false;
        }
        self.prompt = prompt.into();
        true
    }

    pub fn push_char(&mut self, c: char) -> bool {
        if self.is_busy() {
            return false;
        }
        self.prompt.push(c);
        true
    }

    pub fn pop_char(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.prompt.pop().is_some()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_busy() && !self.prompt.is_empty()
    }

    /// True when a parsed intent without an agent error is on screen and nothing is in flight.
    pub fn can_execute(&self) -> bool {
        !self.is_busy()
            && self.phase.intent().is_some_and(|intent| !intent.is_parse_error())
    }

    /// Starts a parse round trip. Clears any previous intent and transaction.
    pub fn begin_submit(&mut self) -> Option<Ticket> {
        if !self.can_submit() {
            return None;
        }
        let ticket = self.slot.acquire(Request::Parse {
            prompt: self.prompt.clone(),
        })?;

        self.phase = Phase::AwaitingPrompt;
        self.last_error = None;
        self.log.push(format!("Sending prompt to Agent: \"{}\"", self.prompt));
        Some(ticket)
    }

    /// Starts executing the current intent. A previous transaction stays visible until replaced.
    pub fn begin_execute(&mut self) -> Option<Ticket> {
        if !self.can_execute() {
            return None;
        }
        let intent = self.phase.intent()?.clone();
        let ticket = self.slot.acquire(Request::Execute { intent })?;
        self.last_error = None;

        self.log.push(format!("Executing transaction on {}...", self.network.name));
        Some(ticket)
    }

    /// Applies the outcome of ticket `id`. Returns false, changing nothing, if
    /// that ticket no longer holds the slot or the response doesn't match its request.
    pub fn complete(&mut self, id: u64, response: Response) -> bool {
        let expected = match &response {
            Response::Parsed(_) => RequestKind::Parse,
            Response::Executed(_) => RequestKind::Execute,
        };
        if self.slot.active_kind() != Some(expected) {
            debug!("Dropping {:?} response for ticket {}", expected, id);
            return false;
        }
        if self.slot.release(id).is_none() {
            debug!("Dropping stale response for ticket {}", id);
            return false;
        }

        match response {
            Response::Parsed(Ok(intent)) => {
                self.log.push("Agent parsed user intent.");
                self.phase = Phase::PendingConfirmation(intent);
            }
            Response::Parsed(Err(e)) => {
                self.log.push(format!("Error: {}", e));
                self.last_error = Some(e);
            }
            Response::Executed(Ok(result)) => {
                self.log.push(format!("Transaction sent! Hash: {}", result.tx_hash));
                if let Some(intent) = self.phase.intent().cloned() {
                    self.phase = Phase::Completed { intent, result };
                }
            }
            Response::Executed(Err(e)) => {
                self.log.push(format!("Execution Error: {}", e));
                self.last_error = Some(e);
            }
        }
        true
    }

    /// Abandons the in-flight request, if any. Its response will be ignored.
    pub fn cancel(&mut self) -> bool {
        match self.slot.cancel() {
            Some(kind) => {
                debug!("Cancelled in-flight {:?} request", kind);
                self.log.push("Request cancelled.");
                true
            }
            None => false,
        }
    }

    /// Analyze Intent: parse the current prompt and wait for the agent.
    /// Returns false when the trigger is disabled.
    pub async fn submit<S: AgentService + ?Sized>(&mut self, service: &S) -> bool {
        let Some(ticket) = self.begin_submit() else {
            return false;
        };
        let response = ticket.request.dispatch(service).await;
        self.complete(ticket.id, response)
    }

    /// Confirm & Execute: forward the current intent for execution and wait.
    pub async fn confirm<S: AgentService + ?Sized>(&mut self, service: &S) -> bool {
        let Some(ticket) = self.begin_execute() else {
            return false;
        };
        let response = ticket.request.dispatch(service).await;
        self.complete(ticket.id, response)
    }

    pub fn view(&self) -> PanelView {
        PanelView::from_panel(self)
    }
}
