//! Reply generation for the PROJ-BLE chat widget.
//!
//! Two interchangeable strategies sit behind the [`Responder`] trait:
//!
//! - `local` - keyword lookup in the built-in knowledge base, answered after a
//!   simulated typing delay
//! - `remote` - one `POST /chat` round trip to the chat service
//!
//! # Usage
//!
//! ```rust,no_run
//! use projble::responder::{LocalResponder, Responder};
//!
//! # async fn example() {
//! let responder = LocalResponder::default();
//! let reply = responder.respond("What is your mission?").await;
//! println!("{}", reply.content);
//! # }
//! ```

mod local;
mod remote;

use crate::config::{ChatConfig, ResponderMode};
use crate::status::StatusReport;
use crate::types::MessageKind;
use async_trait::async_trait;
use std::sync::Arc;

pub use local::{DelayPolicy, LocalResponder};
pub use remote::{CONNECTION_APOLOGY, ChatReply, RemoteResponder, parse_chat_reply};

/// What a responder hands back for one user message.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    pub content: String,
    pub kind: MessageKind,
    /// New indicator state, if this reply changes it.
    pub status: Option<StatusReport>,
    /// Whether the reply belongs in the conversation history.
    pub record: bool,
}

impl Reply {
    pub fn normal(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: MessageKind::Normal,
            status: None,
            record: true,
        }
    }

    pub fn with_status(mut self, status: StatusReport) -> Self {
        self.status = Some(status);
        self
    }
}

#[async_trait]
pub trait Responder: Send + Sync {
    /// Turn a trimmed, non-empty user message into a reply. Never fails;
    /// problems are reported through the reply's kind and status.
    async fn respond(&self, message: &str) -> Reply;

    /// Availability shown by the status indicator at startup.
    async fn probe(&self) -> StatusReport;
}

pub fn build_responder(config: &ChatConfig) -> Arc<dyn Responder> {
    match config.responder {
        ResponderMode::Local => Arc::new(LocalResponder::new(config.delay)),
        ResponderMode::Remote => Arc::new(RemoteResponder::new(config.endpoint.clone())),
    }
}
