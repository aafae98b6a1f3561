// src/handlers/reports.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::{
        envelope::ApiEnvelope,
        error::{ApiError, AppError},
    },
    config::AppState,
    middleware::i18n::Locale,
    models::{query::RangeQuery, reports::ReportView},
};

// GET /api/reports/{tab}
#[utoipa::path(
    get,
    path = "/api/reports/{tab}",
    tag = "Reports",
    params(
        ("tab" = String, Path, description = "sales, inventory, staff, customers ou menu"),
        RangeQuery
    ),
    responses(
        (status = 200, description = "Relatório pronto para desenhar", body = ReportView),
        (status = 400, description = "Período inválido"),
        (status = 404, description = "Aba desconhecida")
    )
)]
pub async fn get_report(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(tab): Path<String>,
    Query(range): Query<RangeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    range
        .validate()
        .map_err(|e| AppError::from(e).to_api_error(&locale))?;

    let view = app_state.report_service
        .get_report(&tab, &range.resolve(), &app_state.formatter(&locale))
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(view))))
}
