use crate::client::{AgentService, ExecutionResult, ParsedIntent};
use crate::error::ZetaResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Parse,
    Execute,
}

/// Work handed to whoever drives the network call.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Parse { prompt: String },
    Execute { intent: ParsedIntent },
}

impl Request {
    pub fn kind(&self) -> RequestKind {
        match self {
            Request::Parse { .. } => RequestKind::Parse,
            Request::Execute { .. } => RequestKind::Execute,
        }
    }

    /// Performs the call against `service`.
    pub async fn dispatch<S: AgentService + ?Sized>(&self, service: &S) -> Response {
        match self {
            Request::Parse { prompt } => Response::Parsed(service.parse_intent(prompt).await),
            Request::Execute { intent } => Response::Executed(service.execute(intent).await),
        }
    }
}

#[derive(Debug)]
pub enum Response {
    Parsed(ZetaResult<ParsedIntent>),
    Executed(ZetaResult<ExecutionResult>),
}

/// Claim on the request slot. Only the ticket currently holding the slot can complete it.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: u64,
    pub request: Request,
}

/// Holds at most one in-flight request.
#[derive(Debug, Default)]
pub struct RequestSlot {
    next_id: u64,
    active: Option<(u64, RequestKind)>,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_kind(&self) -> Option<RequestKind> {
        self.active.map(|(_, kind)| kind)
    }

    /// Returns `None` while another request holds the slot.
    pub fn acquire(&mut self, request: Request) -> Option<Ticket> {
        if self.active.is_some() {
            return None;
        }
        self.next_id += 1;
        self.active = Some((self.next_id, request.kind()));
        Some(Ticket { id: self.next_id, request })
    }

    /// Frees the slot if `id` holds it. Stale or cancelled tickets get `None`.
    pub fn release(&mut self, id: u64) -> Option<RequestKind> {
        match self.active {
            Some((active, kind)) if active == id => {
                self.active = None;
                Some(kind)
            }
            _ => None,
        }
    }

    /// Drops whatever is in flight; its eventual response will be refused.
    pub fn cancel(&mut self) -> Option<RequestKind> {
        self.active.take().map(|(_, kind)| kind)
    }
}
