//! Backend commands queued from UI to backend worker.

use shared::domain::PhoneNumber;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    RequestCall { phone_number: PhoneNumber },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::RequestCall { .. } => "request_call",
        }
    }
}
