// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    // Any JSON shape is accepted; replies never depend on it.
    #[serde(default)]
    pub previous_chat: Value,
}

impl TryFrom<Value> for ChatRequest {
    type Error = AppError;

    /// Only JSON objects are accepted. Serde would otherwise read a
    /// JSON array positionally into the struct fields.
    fn try_from(body: Value) -> Result<Self, Self::Error> {
        if !body.is_object() {
            return Err(AppError::BadRequest(
                "Request body must be a JSON object".to_string(),
            ));
        }
        serde_json::from_value(body).map_err(|e| AppError::BadRequest(e.to_string()))
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub reply: String,
}
