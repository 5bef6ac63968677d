//! GUI-side model: the form state plus what the window shows around it.

use client_core::{form::reduce, FormEffect, FormEvent, FormState};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

#[derive(Debug, Default)]
pub struct CallFormModel {
    form: FormState,
    backend_status: Option<String>,
}

impl CallFormModel {
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Set once the backend worker reports it cannot serve requests.
    pub fn backend_status(&self) -> Option<&str> {
        self.backend_status.as_deref()
    }

    pub fn on_phone_number_changed(&mut self, text: String) {
        self.apply(FormEvent::PhoneNumberChanged(text));
    }

    pub fn on_submit(&mut self) -> Option<BackendCommand> {
        match self.apply(FormEvent::Submit)? {
            FormEffect::RequestCall(phone_number) => {
                Some(BackendCommand::RequestCall { phone_number })
            }
        }
    }

    /// The queued command never reached the worker; fail the attempt so the
    /// form is usable again.
    pub fn on_dispatch_failed(&mut self, message: String) {
        self.apply(FormEvent::CallRequestFailed(message));
    }

    pub fn on_ui_event(&mut self, event: UiEvent) {
        match &event {
            UiEvent::CallRequestAccepted(accepted) => {
                tracing::info!(
                    call_sid = accepted.call_sid.as_deref().unwrap_or("-"),
                    "call request acknowledged"
                );
            }
            UiEvent::CallRequestFailed(message) => {
                tracing::info!(%message, "call request failed");
            }
            UiEvent::BackendUnavailable(message) => {
                self.backend_status = Some(message.clone());
            }
        }
        self.apply(event.to_form_event());
    }

    fn apply(&mut self, event: FormEvent) -> Option<FormEffect> {
        let (next, effect) = reduce(&self.form, event);
        self.form = next;
        effect
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
