use serde::Serialize;
use utoipa::ToSchema;

/// Plain `{"message": ...}` body used for informational responses
#[derive(Debug, Serialize, ToSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

/// `{"error": ...}` body written for every failed request
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorMessage {
    #[schema(example = "method not allowed! PUT")]
    pub error: String,
}

impl ErrorMessage {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_owned(),
        }
    }
}
