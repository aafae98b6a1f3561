// src/models/orders.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::analytics::listing::Searchable;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: Uuid,
    #[schema(example = "ORD-1024")]
    pub order_number: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    #[schema(example = "Table 7")]
    pub table_label: String,
    #[schema(example = "completed")]
    pub status: String,
    #[serde(default)]
    pub total: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Searchable for OrderSummary {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.order_number.as_str(),
            self.customer_name.as_str(),
            self.table_label.as_str(),
            self.notes.as_deref().unwrap_or_default(),
        ]
    }

    fn category(&self) -> &str {
        &self.status
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    #[serde(flatten)]
    pub order: OrderSummary,
    pub total_label: String,
    pub created_label: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrdersView {
    pub orders: Vec<OrderRow>,
    pub count: usize,
    pub total_label: String,
}
