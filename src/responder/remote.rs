use super::{Reply, Responder};
use crate::error::{ChatError, ChatResult};
use crate::status::StatusReport;
use crate::types::MessageKind;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const CONNECTION_APOLOGY: &str = "I apologize, but I'm having trouble connecting right now. Please check your internet connection and try again.";

pub struct RemoteResponder {
    client: Client,
    base_url: String,
}

impl RemoteResponder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// One `POST /chat` round trip. Non-2xx and unparseable bodies are errors.
    pub async fn send(&self, message: &str) -> ChatResult<ChatReply> {
        let response = self
            .client
            .post(self.url("/chat"))
            .json(&ChatRequest { message })
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Status(status));
        }
        let body = response.text().await?;
        Ok(parse_chat_reply(&body)?)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ChatReply {
    pub response: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl ChatReply {
    /// Whether the service flagged a problem while still answering. Follows
    /// JSON truthiness: `false`, `0`, `""` and `null` do not count.
    pub fn signals_error(&self) -> bool {
        use serde_json::Value;
        match &self.error {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    pub fn message_kind(&self) -> MessageKind {
        match self.kind.as_deref() {
            Some("error") => MessageKind::Error,
            _ => MessageKind::Normal,
        }
    }

    fn into_reply(self) -> Reply {
        let status = if self.signals_error() {
            StatusReport::server_error()
        } else {
            StatusReport::ready()
        };
        Reply {
            kind: self.message_kind(),
            content: self.response,
            status: Some(status),
            record: true,
        }
    }
}

pub fn parse_chat_reply(body: &str) -> Result<ChatReply, serde_json::Error> {
    serde_json::from_str(body.trim())
}

fn connection_failure() -> Reply {
    Reply {
        content: CONNECTION_APOLOGY.to_string(),
        kind: MessageKind::Error,
        status: Some(StatusReport::connection_error()),
        record: false,
    }
}

#[async_trait]
impl Responder for RemoteResponder {
    async fn respond(&self, message: &str) -> Reply {
        match self.send(message).await {
            Ok(reply) => {
                if reply.signals_error() {
                    tracing::warn!(endpoint = %self.base_url, "chat service reported an error");
                }
                reply.into_reply()
            }
            Err(err) => {
                tracing::error!(endpoint = %self.base_url, error = %err, "chat request failed");
                connection_failure()
            }
        }
    }

    async fn probe(&self) -> StatusReport {
        match self.client.get(self.url("/health")).send().await {
            Ok(response) if response.status().is_success() => StatusReport::ready(),
            Ok(response) => {
                tracing::warn!(status = %response.status(), "health check degraded");
                StatusReport::issues_detected()
            }
            Err(err) => {
                tracing::warn!(error = %err, "health check failed");
                StatusReport::offline()
            }
        }
    }
}
