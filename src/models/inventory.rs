// src/models/inventory.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::analytics::{listing::Searchable, stock::StatusCounts};

// --- Item de estoque (saldo atual x mínimo) ---
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct StockItem {
    pub id: Uuid,
    #[schema(example = "Mozzarella")]
    pub name: String,
    #[schema(example = "CHS-001")]
    pub sku: String,
    #[schema(example = "Dairy")]
    pub category: String,
    pub supplier: Option<String>,
    #[schema(example = "kg")]
    pub unit: String,
    pub current_stock: f64,
    pub min_stock: f64,
    pub value: f64, // Valor total em estoque
}

impl Searchable for StockItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.sku.as_str(),
            self.supplier.as_deref().unwrap_or_default(),
        ]
    }

    fn category(&self) -> &str {
        &self.category
    }
}

// Ordem = gravidade (OutOfStock é o mais grave)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    Critical,
    Low,
    Normal,
}

// --- Views ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockItemView {
    #[serde(flatten)]
    pub item: StockItem,
    pub status: StockStatus,
    pub stock_percentage: Option<f64>, // None quando não há mínimo
    pub stock_label: String,
    pub value_label: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryView {
    pub items: Vec<StockItemView>,
    pub counts: StatusCounts,
    pub total_value: f64,
    pub total_value_label: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryAlertsView {
    pub alerts: Vec<StockItemView>,
    pub counts: StatusCounts,
}
