// src/handlers/dashboard.rs

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
    // Importamos os models para referenciar no Swagger
    models::{
        dashboard::{CustomerAnalyticsView, RevenueAnalyticsView, TopItemsView},
        inventory::InventoryAlertsView,
        query::{RangeQuery, StaffQuery, TopItemsQuery},
        staff::StaffPerformanceView,
    },
};

// GET /api/dashboard/revenue
#[utoipa::path(
    get,
    path = "/api/dashboard/revenue",
    tag = "Dashboard",
    params(RangeQuery),
    responses(
        (status = 200, description = "Receita, pedidos, ticket médio, crescimento e gráficos", body = RevenueAnalyticsView),
        (status = 400, description = "Período inválido")
    )
)]
pub async fn get_revenue(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(range): Query<RangeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    range
        .validate()
        .map_err(|e| AppError::from(e).to_api_error(&locale))?;

    let view = app_state.dashboard_service
        .get_revenue_analytics(&range.resolve(), &app_state.formatter(&locale))
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(view))))
}

// GET /api/dashboard/customers
#[utoipa::path(
    get,
    path = "/api/dashboard/customers",
    tag = "Dashboard",
    params(RangeQuery),
    responses(
        (status = 200, description = "Clientes novos x recorrentes", body = CustomerAnalyticsView),
        (status = 400, description = "Período inválido")
    )
)]
pub async fn get_customers(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(range): Query<RangeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    range
        .validate()
        .map_err(|e| AppError::from(e).to_api_error(&locale))?;

    let view = app_state.dashboard_service
        .get_customer_analytics(&range.resolve(), &app_state.formatter(&locale))
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(view))))
}

// GET /api/dashboard/staff
#[utoipa::path(
    get,
    path = "/api/dashboard/staff",
    tag = "Dashboard",
    params(RangeQuery, StaffQuery),
    responses(
        (status = 200, description = "Desempenho da equipe, ordenado", body = StaffPerformanceView),
        (status = 400, description = "Parâmetros inválidos")
    )
)]
pub async fn get_staff_performance(
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

    let filter = ListFilter::new(query.search, query.role);
    let view = app_state.staff_service
        .get_performance(
            &range.resolve(),
            &filter,
            query.sort_by.unwrap_or_default(),
            &app_state.formatter(&locale),
        )
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(view))))
}

// GET /api/dashboard/top-items
#[utoipa::path(
    get,
    path = "/api/dashboard/top-items",
    tag = "Dashboard",
    params(RangeQuery, TopItemsQuery),
    responses(
        (status = 200, description = "Ranking dos itens mais vendidos", body = TopItemsView),
        (status = 400, description = "Parâmetros inválidos")
    )
)]
pub async fn get_top_items(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(range): Query<RangeQuery>,
    Query(query): Query<TopItemsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    range
        .validate()
        .map_err(|e| AppError::from(e).to_api_error(&locale))?;
    query
        .validate()
        .map_err(|e| AppError::from(e).to_api_error(&locale))?;

    let view = app_state.dashboard_service
        .get_top_items(&range.resolve(), query.limit, &app_state.formatter(&locale))
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(view))))
}

// GET /api/dashboard/inventory-alerts
#[utoipa::path(
    get,
    path = "/api/dashboard/inventory-alerts",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Itens sem estoque, críticos ou baixos", body = InventoryAlertsView)
    )
)]
pub async fn get_inventory_alerts(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let view = app_state.inventory_service
        .get_alerts(&app_state.formatter(&locale))
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(view))))
}
