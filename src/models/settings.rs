// src/models/settings.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

// Configuração única do restaurante
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSettings {
    #[schema(example = "Cantina da Nona")]
    pub restaurant_name: String,

    #[schema(example = "USD")]
    pub currency_code: String,

    #[schema(example = "$")]
    pub currency_symbol: String,

    #[schema(example = "light")]
    pub theme: String,

    #[schema(example = "Rua das Flores, 123 - Centro")]
    pub address: Option<String>,

    #[schema(example = "(11) 99999-8888")]
    pub phone: Option<String>,

    #[schema(example = "contato@cantina.com")]
    pub email: Option<String>,

    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for RestaurantSettings {
    fn default() -> Self {
        Self {
            restaurant_name: "Restaurant".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            theme: "light".to_string(),
            address: None,
            phone: None,
            email: None,
            updated_at: None,
        }
    }
}

fn validate_theme(theme: &str) -> Result<(), ValidationError> {
    match theme {
        "light" | "dark" => Ok(()),
        _ => {
            let mut err = ValidationError::new("theme");
            err.message = Some("O tema deve ser 'light' ou 'dark'.".into());
            Err(err)
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    #[validate(length(min = 1, max = 120, message = "O nome do restaurante é obrigatório."))]
    #[schema(example = "Cantina da Nona")]
    pub restaurant_name: Option<String>,

    #[validate(length(equal = 3, message = "O código da moeda deve ter 3 letras (ISO 4217)."))]
    #[schema(example = "USD")]
    pub currency_code: Option<String>,

    #[validate(length(min = 1, max = 4, message = "O símbolo da moeda é inválido."))]
    #[schema(example = "$")]
    pub currency_symbol: Option<String>,

    #[validate(custom(function = "validate_theme"))]
    #[schema(example = "dark")]
    pub theme: Option<String>,

    pub address: Option<String>,
    pub phone: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,
}

impl UpdateSettingsRequest {
    // Campos ausentes mantêm o valor atual
    pub fn apply_to(self, current: &RestaurantSettings) -> RestaurantSettings {
        RestaurantSettings {
            restaurant_name: self.restaurant_name.unwrap_or_else(|| current.restaurant_name.clone()),
            currency_code: self
                .currency_code
                .map(|code| code.to_uppercase())
                .unwrap_or_else(|| current.currency_code.clone()),
            currency_symbol: self.currency_symbol.unwrap_or_else(|| current.currency_symbol.clone()),
            theme: self.theme.unwrap_or_else(|| current.theme.clone()),
            address: self.address.or_else(|| current.address.clone()),
            phone: self.phone.or_else(|| current.phone.clone()),
            email: self.email.or_else(|| current.email.clone()),
            updated_at: Some(Utc::now()),
        }
    }
}
