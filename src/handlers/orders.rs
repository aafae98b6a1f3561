// src/handlers/orders.rs

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
    models::{
        orders::OrdersView,
        query::{OrdersQuery, RangeQuery},
    },
};

// GET /api/orders?search=&status=
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Orders",
    params(RangeQuery, OrdersQuery),
    responses(
        (status = 200, description = "Pedidos do período, filtrados", body = OrdersView),
        (status = 400, description = "Parâmetros inválidos")
    )
)]
pub async fn list_orders(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(range): Query<RangeQuery>,
    Query(query): Query<OrdersQuery>,
) -> Result<impl IntoResponse, ApiError> {
    range
        .validate()
        .map_err(|e| AppError::from(e).to_api_error(&locale))?;
    query
        .validate()
        .map_err(|e| AppError::from(e).to_api_error(&locale))?;

    let filter = ListFilter::new(query.search, query.status);
    let view = app_state.order_service
        .get_orders(&range.resolve(), &filter, &app_state.formatter(&locale))
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(view))))
}
