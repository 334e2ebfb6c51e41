use super::{Panel, RequestKind};

pub const ANALYZE_LABEL: &str = "Analyze Intent";
pub const ANALYZE_BUSY_LABEL: &str = "Thinking...";
pub const EXECUTE_LABEL: &str = "Confirm & Execute Transaction";
pub const EXECUTE_BUSY_LABEL: &str = "Sending...";
pub const PARSE_ERROR_NOTICE: &str = "Agent parse error. Please try again.";

/// What the confirm card shows below the intent.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmControl {
    /// No intent yet.
    Hidden,
    /// The agent returned an `error`; execution is blocked until a new prompt.
    ParseError(&'static str),
    Trigger { label: &'static str, enabled: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionView {
    pub tx_hash: String,
    pub explorer_url: Option<String>,
    pub explorer_label: String,
}

/// Render-ready snapshot of a [`Panel`].
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub prompt: String,
    pub input_enabled: bool,
    pub analyze_label: &'static str,
    pub analyze_enabled: bool,
    /// Pretty JSON of the parsed intent, when there is one.
    pub intent_json: Option<String>,
    pub confirm: ConfirmControl,
    pub transaction: Option<TransactionView>,
    pub log_lines: Vec<String>,
}

impl PanelView {
    pub fn from_panel(panel: &Panel) -> Self {
        let busy = panel.is_busy();
        let in_flight = panel.in_flight();
        let intent = panel.phase().intent();

        let confirm = match intent {
            None => ConfirmControl::Hidden,
            Some(i) if i.is_parse_error() => ConfirmControl::ParseError(PARSE_ERROR_NOTICE),
            Some(_) => ConfirmControl::Trigger {
                label: if in_flight == Some(RequestKind::Execute) {
                    EXECUTE_BUSY_LABEL
                } else {
                    EXECUTE_LABEL
                },
                enabled: !busy,
            },
        };

        let transaction = panel.phase().result().map(|result| TransactionView {
            tx_hash: result.tx_hash.clone(),
            explorer_url: result.explorer_link().map(str::to_string),
            explorer_label: panel.network().explorer_label.clone(),
        });

        Self {
            prompt: panel.prompt().to_string(),
            input_enabled: !busy,
            analyze_label: if busy { ANALYZE_BUSY_LABEL } else { ANALYZE_LABEL },
            analyze_enabled: panel.can_submit(),
            intent_json: intent.map(|i| i.to_pretty_json()),
            confirm,
            transaction,
            log_lines: panel.log().lines(),
        }
    }

    pub fn shows_execute_trigger(&self) -> bool {
        matches!(self.confirm, ConfirmControl::Trigger { .. })
    }
}
