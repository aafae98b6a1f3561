// src/models/staff.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::analytics::listing::Searchable;

// Desempenho consolidado por funcionário no período
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffRecord {
    pub id: Uuid,
    #[schema(example = "Maria Souza")]
    pub name: String,
    #[schema(example = "maria@restaurant.com")]
    pub email: String,
    #[schema(example = "waiter")]
    pub role: String,
    pub total_orders: i64,
    pub total_revenue: f64,
    pub average_order_value: f64,
}

impl Searchable for StaffRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn category(&self) -> &str {
        &self.role
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffRow {
    #[serde(flatten)]
    pub record: StaffRecord,
    pub total_revenue_label: String,
    pub average_order_value_label: String,
    pub revenue_share: f64, // % da receita da equipe
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffPerformanceView {
    pub staff: Vec<StaffRow>,
    pub total_revenue_label: String,
    pub total_orders_label: String,
}
