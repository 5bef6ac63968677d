use serde::{Deserialize, Serialize};

use crate::domain::PhoneNumber;

pub const REQUEST_CALL_PATH: &str = "/request_call";

#[derive(Debug, Clone, Serialize)]
pub struct RequestCallBody {
    pub phone_number: PhoneNumber,
}

impl RequestCallBody {
    pub fn new(phone_number: PhoneNumber) -> Self {
        Self { phone_number }
    }
}

/// Success body. The endpoint is not required to send one, so every field
/// is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CallAccepted {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub call_sid: Option<String>,
}
