// src/handlers/settings.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::{
        envelope::ApiEnvelope,
        error::{ApiError, AppError},
    },
    config::AppState,
    middleware::i18n::Locale,
    models::settings::{RestaurantSettings, UpdateSettingsRequest},
};

// GET /api/settings
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "Settings",
    responses(
        (status = 200, description = "Configurações atuais do restaurante", body = RestaurantSettings)
    )
)]
pub async fn get_settings(State(app_state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(ApiEnvelope::ok(app_state.settings.current())))
}

// PUT /api/settings
#[utoipa::path(
    put,
    path = "/api/settings",
    tag = "Settings",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Configurações salvas e propagadas", body = RestaurantSettings),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn update_settings(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::from(e).to_api_error(&locale))?;

    // Dois PUTs simultâneos não podem mesclar a partir do mesmo snapshot
    let _guard = app_state.settings.lock_for_update().await;
    let updated = payload.apply_to(&app_state.settings.current());

    // Persiste primeiro; o store só muda se o salvamento deu certo
    let saved = app_state.settings_source
        .save_settings(&updated)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    app_state.settings.update(saved.clone());

    Ok((StatusCode::OK, Json(ApiEnvelope::ok(saved))))
}
