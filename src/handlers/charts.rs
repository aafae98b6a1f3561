// src/handlers/charts.rs
// Geometria para séries enviadas pelo cliente (gráficos fora do dashboard).

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::{
    analytics::{
        chart::{bar_geometry, pie_geometry, BarSegment, PieChart},
        ratio::{percentage, segment_percentages},
    },
    common::{
        envelope::ApiEnvelope,
        error::{ApiError, AppError},
    },
    middleware::i18n::Locale,
    models::dashboard::MetricPoint,
};

fn validate_values(values: &[f64]) -> Result<(), ValidationError> {
    if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("Os valores devem ser números não negativos.".into());
        return Err(err);
    }
    Ok(())
}

fn validate_points(points: &[MetricPoint]) -> Result<(), ValidationError> {
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    validate_values(&values)
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    #[validate(
        length(max = 100, message = "No máximo 100 pontos por gráfico."),
        custom(function = "validate_points")
    )]
    pub points: Vec<MetricPoint>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatioPayload {
    #[validate(
        length(max = 100, message = "No máximo 100 valores."),
        custom(function = "validate_values")
    )]
    pub parts: Vec<f64>,

    // Sem `whole`, cada parte é comparada com a soma de todas
    #[validate(range(min = 0.0, message = "O total não pode ser negativo."))]
    pub whole: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatioView {
    pub whole: f64,
    pub percentages: Vec<f64>,
}

// POST /api/charts/bar
#[utoipa::path(
    post,
    path = "/api/charts/bar",
    tag = "Charts",
    request_body = ChartPayload,
    responses(
        (status = 200, description = "Altura de cada barra (0 a 100)", body = Vec<BarSegment>),
        (status = 400, description = "Série inválida")
    )
)]
pub async fn bar_chart(
    locale: Locale,
    Json(payload): Json<ChartPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::from(e).to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(bar_geometry(&payload.points)))))
}

// POST /api/charts/pie
#[utoipa::path(
    post,
    path = "/api/charts/pie",
    tag = "Charts",
    request_body = ChartPayload,
    responses(
        (status = 200, description = "Fatias com ângulos e path SVG", body = PieChart),
        (status = 400, description = "Série inválida")
    )
)]
pub async fn pie_chart(
    locale: Locale,
    Json(payload): Json<ChartPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::from(e).to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(pie_geometry(&payload.points)))))
}

// POST /api/charts/ratio
#[utoipa::path(
    post,
    path = "/api/charts/ratio",
    tag = "Charts",
    request_body = RatioPayload,
    responses(
        (status = 200, description = "Percentual de cada parte", body = RatioView),
        (status = 400, description = "Valores inválidos")
    )
)]
pub async fn ratio(
    locale: Locale,
    Json(payload): Json<RatioPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::from(e).to_api_error(&locale))?;

    let view = match payload.whole {
        Some(whole) => RatioView {
            whole,
            percentages: payload.parts.iter().map(|part| percentage(*part, whole)).collect(),
        },
        None => RatioView {
            whole: payload.parts.iter().sum(),
            percentages: segment_percentages(&payload.parts),
        },
    };

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(view))))
}
