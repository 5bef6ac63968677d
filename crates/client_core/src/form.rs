//! Call request form: state, events, pure reducer, and the controller that
//! runs the network effect the reducer asks for.

use shared::{domain::PhoneNumber, protocol::CallAccepted};
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::{CallRequestTransport, TRANSPORT_FAILURE_FALLBACK};

pub const INVALID_PHONE_NUMBER_MESSAGE: &str =
    "Please enter a valid phone number (e.g., +1234567890)";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    phone_number: String,
    is_loading: bool,
    error: Option<String>,
    success: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
    Success,
}

impl FormState {
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn phase(&self) -> FormPhase {
        if self.is_loading {
            FormPhase::Submitting
        } else if self.success {
            FormPhase::Success
        } else {
            FormPhase::Idle
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    PhoneNumberChanged(String),
    Submit,
    CallRequestSucceeded,
    CallRequestFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    RequestCall(PhoneNumber),
}

/// Computes the next state for `event`.
///
/// Input edits and submits are dropped while a request is in flight; the
/// form's controls are disabled during that window.
pub fn reduce(state: &FormState, event: FormEvent) -> (FormState, Option<FormEffect>) {
    let mut next = state.clone();
    match event {
        FormEvent::PhoneNumberChanged(text) => {
            if !state.is_loading {
                next.phone_number = text;
            }
            (next, None)
        }
        FormEvent::Submit => {
            if state.is_loading {
                return (next, None);
            }
            next.error = None;
            next.success = false;
            match PhoneNumber::parse(&state.phone_number) {
                Ok(phone_number) => {
                    next.is_loading = true;
                    (next, Some(FormEffect::RequestCall(phone_number)))
                }
                Err(_) => {
                    next.error = Some(INVALID_PHONE_NUMBER_MESSAGE.to_string());
                    (next, None)
                }
            }
        }
        FormEvent::CallRequestSucceeded => {
            if state.is_loading {
                next.is_loading = false;
                next.success = true;
            }
            (next, None)
        }
        FormEvent::CallRequestFailed(message) => {
            if state.is_loading {
                next.is_loading = false;
                next.error = Some(message);
            }
            (next, None)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Request(String),
}

impl FormError {
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message) | Self::Request(message) => message,
        }
    }
}

pub struct FormController<T: CallRequestTransport> {
    state: FormState,
    state_tx: watch::Sender<FormState>,
    transport: T,
}

impl<T: CallRequestTransport> FormController<T> {
    pub fn new(transport: T) -> Self {
        let (state_tx, _) = watch::channel(FormState::default());
        Self {
            state: FormState::default(),
            state_tx,
            transport,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Every state the controller moves through, including the in-flight one.
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state_tx.subscribe()
    }

    pub fn dispatch(&mut self, event: FormEvent) -> Option<FormEffect> {
        let (next, effect) = reduce(&self.state, event);
        if next != self.state {
            self.state_tx.send_replace(next.clone());
        }
        self.state = next;
        effect
    }

    pub fn set_phone_number(&mut self, text: impl Into<String>) {
        self.dispatch(FormEvent::PhoneNumberChanged(text.into()));
    }

    /// Records `raw_input` as the current phone number and submits it.
    pub async fn submit(&mut self, raw_input: &str) -> Result<CallAccepted, FormError> {
        self.set_phone_number(raw_input);
        let Some(FormEffect::RequestCall(phone_number)) = self.dispatch(FormEvent::Submit) else {
            let message = self
                .state
                .error()
                .unwrap_or(INVALID_PHONE_NUMBER_MESSAGE)
                .to_string();
            info!(
                digits = shared::domain::digits_only(raw_input).len(),
                "phone number failed validation"
            );
            return Err(FormError::Validation(message));
        };

        debug!("call request in flight");
        match self.transport.request_call(&phone_number).await {
            Ok(accepted) => {
                self.dispatch(FormEvent::CallRequestSucceeded);
                Ok(accepted)
            }
            Err(err) => {
                self.dispatch(FormEvent::CallRequestFailed(err.user_message()));
                let message = self
                    .state
                    .error()
                    .unwrap_or(TRANSPORT_FAILURE_FALLBACK)
                    .to_string();
                Err(FormError::Request(message))
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
