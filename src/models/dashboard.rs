// src/models/dashboard.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::analytics::{
    chart::{BarSegment, PieChart},
    ratio::CustomerSplit,
};

// --- Agregados vindos do banco ou da API upstream ---
// Campos numéricos ausentes viram 0 (#[serde(default)]).

// 1. Um ponto de série (bucket de tempo, forma de pagamento, item...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricPoint {
    #[schema(example = "2026-10-19")]
    pub label: String,
    #[schema(example = 1520.75)]
    pub value: f64,
}

// 2. Totais do período (os cards do topo)
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RevenueSummary {
    pub total_revenue: f64,
    pub total_orders: i64,
    pub average_order_value: f64,
    pub previous_revenue: f64, // Mesmo intervalo, período anterior
}

// 3. Clientes novos x recorrentes
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerSegments {
    pub new_count: i64,
    pub returning_count: i64,
}

// 4. Ranking do cardápio
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TopSellingItem {
    #[schema(example = "Margherita Pizza")]
    pub name: String,
    #[schema(example = "Pizzas")]
    pub category: String,
    pub quantity: f64,
    pub revenue: f64,
}

// --- Views (prontas para renderizar) ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevenueAnalyticsView {
    pub total_revenue: String,
    pub total_orders: String,
    pub average_order_value: String,
    pub revenue_change: f64,
    pub revenue_change_label: String,
    pub trend: Vec<BarSegment>,
    pub payment_methods: PieChart,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SegmentShare {
    pub label: String,
    pub count: i64,
    pub percentage: f64,
    pub percentage_label: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAnalyticsView {
    #[serde(flatten)]
    pub split: CustomerSplit,
    pub total_customers_label: String,
    pub segments: Vec<SegmentShare>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopItemRow {
    pub rank: usize,
    pub name: String,
    pub category: String,
    pub quantity_label: String,
    pub revenue_label: String,
    pub share: f64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopItemsView {
    pub items: Vec<TopItemRow>,
    pub bars: Vec<BarSegment>,
    pub pie: PieChart,
}
