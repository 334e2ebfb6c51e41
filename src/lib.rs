//! # zeta-intent - natural language to on-chain transactions
//!
//! A terminal front end for an intent agent. The user types a request such as
//! "Send 0.001 ZETA to 0x123", the agent service turns it into a structured
//! intent, the user confirms it, and the execution service submits the
//! transaction and returns its hash.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zeta_intent::{AppConfig, HttpAgentService, Panel};
//!
//! #[tokio::main]
//! async fn main() -> zeta_intent::ZetaResult<()> {
//!     let config = AppConfig::default();
//!     let service = HttpAgentService::new(&config.agent)?;
//!     let mut panel = Panel::new(config.network);
//!
//!     panel.set_prompt("Send 0.001 ZETA to 0x123");
//!     panel.submit(&service).await;
//!     panel.confirm(&service).await;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod panel;

pub use client::{AgentService, ExecutionResult, HttpAgentService, ParsedIntent, ServiceStatus};
pub use config::AppConfig;
pub use error::{ZetaError, ZetaResult};
pub use panel::{Panel, PanelView, Phase};

/// The current version of zeta-intent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
