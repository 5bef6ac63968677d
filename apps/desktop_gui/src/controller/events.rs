//! Backend-to-UI events and their mapping onto form events.

use client_core::FormEvent;
use shared::protocol::CallAccepted;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    CallRequestAccepted(CallAccepted),
    CallRequestFailed(String),
    BackendUnavailable(String),
}

impl UiEvent {
    pub fn to_form_event(&self) -> FormEvent {
        match self {
            UiEvent::CallRequestAccepted(_) => FormEvent::CallRequestSucceeded,
            UiEvent::CallRequestFailed(message) | UiEvent::BackendUnavailable(message) => {
                FormEvent::CallRequestFailed(message.clone())
            }
        }
    }
}
