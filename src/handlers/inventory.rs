// src/handlers/inventory.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    analytics::listing::ListFilter,
    common::{
        envelope::ApiEnvelope,
        error::{ApiError, AppError},
    },
    config::AppState,
    middleware::i18n::Locale,
    models::{inventory::InventoryView, query::InventoryQuery},
};

// GET /api/inventory?search=&category=
#[utoipa::path(
    get,
    path = "/api/inventory",
    tag = "Inventory",
    params(InventoryQuery),
    responses(
        (status = 200, description = "Estoque classificado e filtrado, com totais", body = InventoryView),
        (status = 400, description = "Busca inválida")
    )
)]
pub async fn get_inventory(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<InventoryQuery>,
) -> Result<impl IntoResponse, ApiError> {
    query
        .validate()
        .map_err(|e| AppError::from(e).to_api_error(&locale))?;

    let filter = ListFilter::new(query.search, query.category);
    let view = app_state.inventory_service
        .get_inventory(&filter, &app_state.formatter(&locale))
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(view))))
}
