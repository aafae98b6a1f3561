// src/handlers/staff.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    analytics::listing::{ListFilter, StaffSortField},
    common::{
        envelope::ApiEnvelope,
        error::{ApiError, AppError},
    },
    config::AppState,
    middleware::i18n::Locale,
    models::{
        query::{RangeQuery, StaffQuery},
        staff::StaffPerformanceView,
    },
};

// GET /api/staff?search=&role=&sortBy=
#[utoipa::path(
    get,
    path = "/api/staff",
    tag = "Staff",
    params(RangeQuery, StaffQuery),
    responses(
        (status = 200, description = "Equipe filtrada por nome/e-mail e cargo", body = StaffPerformanceView),
        (status = 400, description = "Parâmetros inválidos")
    )
)]
pub async fn list_staff(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(range): Query<RangeQuery>,
    Query(query): Query<StaffQuery>,
) -> Result<impl IntoResponse, ApiError> {
    range
        .validate()
        .map_err(|e| AppError::from(e).to_api_error(&locale))?;
    query
        .validate()
        .map_err(|e| AppError::from(e).to_api_error(&locale))?;

    // Na página de equipe a ordem padrão é alfabética
    let sort_by = query.sort_by.unwrap_or(StaffSortField::Name);
    let filter = ListFilter::new(query.search, query.role);

    let view = app_state.staff_service
        .get_performance(&range.resolve(), &filter, sort_by, &app_state.formatter(&locale))
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(view))))
}
