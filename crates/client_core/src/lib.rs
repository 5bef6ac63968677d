use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use shared::{
    domain::PhoneNumber,
    protocol::{CallAccepted, RequestCallBody},
};
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

pub mod config;
pub mod form;

pub use config::{load_settings, ClientSettings};
pub use form::{FormController, FormEffect, FormError, FormEvent, FormPhase, FormState};

/// Rejection body was not JSON.
pub const UNREADABLE_REJECTION_MESSAGE: &str = "Failed to request call. Please check the server.";
/// Rejection body was JSON but carried no usable `message`.
pub const REJECTION_WITHOUT_MESSAGE: &str = "Failed to request call";
/// Transport failure without any message of its own.
pub const TRANSPORT_FAILURE_FALLBACK: &str = "Failed to request call. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestCallError {
    #[error("call request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("call request transport failure: {message}")]
    Transport { message: String },
}

impl RequestCallError {
    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::Transport { message } if message.trim().is_empty() => {
                TRANSPORT_FAILURE_FALLBACK.to_string()
            }
            Self::Transport { message } => message.clone(),
        }
    }
}

impl From<reqwest::Error> for RequestCallError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport {
            message: value.to_string(),
        }
    }
}

/// Resolves the message to display for a non-success response body.
///
/// A truthy `message` of any JSON type is shown as text; missing, `null`,
/// `""`, `0` and `false` fall back to [`REJECTION_WITHOUT_MESSAGE`].
pub fn rejection_message(body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => value
            .get("message")
            .filter(|message| is_truthy(message))
            .map(display_text)
            .unwrap_or_else(|| REJECTION_WITHOUT_MESSAGE.to_string()),
        Err(_) => UNREADABLE_REJECTION_MESSAGE.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        // `1.0` renders as `1`, like the browser does.
        Value::Number(number) => match (number.as_i64(), number.as_u64()) {
            (Some(n), _) => n.to_string(),
            (None, Some(n)) => n.to_string(),
            (None, None) => number
                .as_f64()
                .map_or_else(|| number.to_string(), |n| n.to_string()),
        },
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

#[async_trait]
pub trait CallRequestTransport: Send + Sync {
    async fn request_call(&self, phone_number: &PhoneNumber)
        -> Result<CallAccepted, RequestCallError>;
}

pub struct CallRequestClient {
    http: Client,
    endpoint: Url,
}

impl CallRequestClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> anyhow::Result<Self> {
        Ok(Self::new(settings.call_request_endpoint()?))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CallRequestTransport for CallRequestClient {
    async fn request_call(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<CallAccepted, RequestCallError> {
        info!(endpoint = %self.endpoint, "requesting call");
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&RequestCallBody::new(phone_number.clone()))
            .send()
            .await
            .map_err(|err| {
                warn!(endpoint = %self.endpoint, error = %err, "call request transport failure");
                RequestCallError::from(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.bytes().await {
                Ok(body) => rejection_message(&body),
                Err(err) => {
                    debug!(error = %err, "failed to read rejection body");
                    UNREADABLE_REJECTION_MESSAGE.to_string()
                }
            };
            warn!(status = status.as_u16(), %message, "call request rejected");
            return Err(RequestCallError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let accepted = match response.bytes().await {
            Ok(body) if !body.is_empty() => serde_json::from_slice(&body).unwrap_or_else(|err| {
                debug!(error = %err, "ignoring non-JSON success body");
                CallAccepted::default()
            }),
            Ok(_) => CallAccepted::default(),
            Err(err) => {
                debug!(error = %err, "failed to read success body");
                CallAccepted::default()
            }
        };
        info!(
            status = status.as_u16(),
            call_sid = accepted.call_sid.as_deref().unwrap_or("-"),
            "call request accepted"
        );
        Ok(accepted)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
