// src/db/settings_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::source::SettingsSource,
    models::settings::RestaurantSettings,
};

#[derive(Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsSource for SettingsRepository {
    async fn load_settings(&self) -> Result<Option<RestaurantSettings>, AppError> {
        let settings = sqlx::query_as::<_, RestaurantSettings>(
            r#"
            SELECT restaurant_name, currency_code, currency_symbol, theme,
                   address, phone, email, updated_at
            FROM restaurant_settings
            WHERE id = 1
            "#,
        )
            .fetch_optional(&self.pool)
            .await?;

        Ok(settings)
    }

    async fn save_settings(&self, input: &RestaurantSettings) -> Result<RestaurantSettings, AppError> {
        // UPSERT (Insert or Update) na linha única
        let settings = sqlx::query_as::<_, RestaurantSettings>(
            r#"
            INSERT INTO restaurant_settings
                (id, restaurant_name, currency_code, currency_symbol, theme, address, phone, email)
            VALUES (1, $1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id)
            DO UPDATE SET
                restaurant_name = EXCLUDED.restaurant_name,
                currency_code = EXCLUDED.currency_code,
                currency_symbol = EXCLUDED.currency_symbol,
                theme = EXCLUDED.theme,
                address = EXCLUDED.address,
                phone = EXCLUDED.phone,
                email = EXCLUDED.email,
                updated_at = NOW()
            RETURNING restaurant_name, currency_code, currency_symbol, theme,
                      address, phone, email, updated_at
            "#,
        )
            .bind(&input.restaurant_name)
            .bind(&input.currency_code)
            .bind(&input.currency_symbol)
            .bind(&input.theme)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.email)
            .fetch_one(&self.pool)
            .await?;

        Ok(settings)
    }
}
