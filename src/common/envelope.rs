// src/common/envelope.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// O envelope JSON usado por todos os endpoints: `{ success, data, message? }`.
///
/// Quem consome converte uma única vez com [`ApiEnvelope::into_result`]
/// e nunca mais olha para `success`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum EnvelopeError {
    #[error("Requisição rejeitada: {0}")]
    Rejected(String),

    #[error("Resposta sem dados")]
    MissingData,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), message: None }
    }

    pub fn into_result(self) -> Result<T, EnvelopeError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(EnvelopeError::MissingData),
            (false, _) => Err(EnvelopeError::Rejected(
                self.message.unwrap_or_else(|| "sem mensagem".to_string()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_unwraps_data() {
        let envelope: ApiEnvelope<Vec<i32>> =
            serde_json::from_value(json!({ "success": true, "data": [1, 2, 3] })).unwrap();
        assert_eq!(envelope.into_result(), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_failed_envelope_carries_message() {
        let envelope: ApiEnvelope<Vec<i32>> =
            serde_json::from_value(json!({ "success": false, "message": "Restaurant not found" })).unwrap();
        assert_eq!(
            envelope.into_result(),
            Err(EnvelopeError::Rejected("Restaurant not found".into()))
        );
    }

    #[test]
    fn test_success_without_data_is_an_error() {
        let envelope: ApiEnvelope<i32> = serde_json::from_value(json!({ "success": true })).unwrap();
        assert_eq!(envelope.into_result(), Err(EnvelopeError::MissingData));
    }

    #[test]
    fn test_ok_serializes_without_message() {
        let body = serde_json::to_value(ApiEnvelope::ok(5)).unwrap();
        assert_eq!(body, json!({ "success": true, "data": 5 }));
    }
}
