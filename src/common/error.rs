// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::{common::envelope::EnvelopeError, middleware::i18n::Locale};

// Erro interno da aplicação. Os handlers convertem para ApiError com o idioma do cliente.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Relatório não encontrado: {0}")]
    ReportNotFound(String),

    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Falha ao chamar a API upstream: {0}")]
    UpstreamError(#[from] reqwest::Error),

    #[error("API upstream recusou a requisição: {0}")]
    UpstreamRejected(#[from] EnvelopeError),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

// O erro que de fato vai para o cliente
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<serde_json::Value>,
}

impl AppError {
    pub fn to_api_error(&self, locale: &Locale) -> ApiError {
        let pt = locale.is_portuguese();

        match self {
            AppError::ValidationError(errors) => {
                let mut details = serde_json::Map::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    details.insert(field.to_string(), json!(messages));
                }
                ApiError {
                    status: StatusCode::BAD_REQUEST,
                    error: if pt { "Um ou mais campos são inválidos." } else { "One or more fields are invalid." }.into(),
                    details: Some(serde_json::Value::Object(details)),
                }
            }
            AppError::ReportNotFound(tab) => ApiError {
                status: StatusCode::NOT_FOUND,
                error: if pt {
                    format!("Relatório '{}' não existe.", tab)
                } else {
                    format!("Report '{}' does not exist.", tab)
                },
                details: None,
            },
            AppError::UpstreamError(_) | AppError::UpstreamRejected(_) => {
                tracing::error!("Erro na API upstream: {}", self);
                ApiError {
                    status: StatusCode::BAD_GATEWAY,
                    error: if pt { "Falha ao obter dados do servidor de origem." } else { "Failed to load data from the upstream service." }.into(),
                    details: None,
                }
            }
            // Banco e erros inesperados viram 500; o detalhe fica só no log.
            e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: if pt { "Ocorreu um erro inesperado." } else { "An unexpected error occurred." }.into(),
                    details: None,
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({ "success": false, "message": self.error });
        if let Some(details) = self.details {
            body["details"] = details;
        }
        (self.status, Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_api_error(&Locale::default()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_not_found_is_404_and_localized() {
        let err = AppError::ReportNotFound("payroll".into());

        let en = err.to_api_error(&Locale("en".into()));
        assert_eq!(en.status, StatusCode::NOT_FOUND);
        assert_eq!(en.error, "Report 'payroll' does not exist.");

        let pt = err.to_api_error(&Locale("pt".into()));
        assert_eq!(pt.error, "Relatório 'payroll' não existe.");
    }

    #[test]
    fn test_upstream_rejection_is_bad_gateway() {
        let err = AppError::from(EnvelopeError::MissingData);
        assert_eq!(err.to_api_error(&Locale::default()).status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = AppError::from(anyhow::anyhow!("connection reset"));
        let api = err.to_api_error(&Locale::default());
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!api.error.contains("connection reset"));
    }
}
