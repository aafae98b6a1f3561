// src/db/source.rs

use async_trait::async_trait;

use crate::{
    common::error::AppError,
    models::{
        dashboard::{CustomerSegments, MetricPoint, RevenueSummary, TopSellingItem},
        inventory::StockItem,
        orders::OrderSummary,
        query::DateRange,
        settings::RestaurantSettings,
        staff::StaffRecord,
    },
};

/// De onde vêm os agregados (Postgres ou API upstream).
/// Nada aqui calcula métrica derivada: isso é trabalho do módulo `analytics`.
#[async_trait]
pub trait AnalyticsSource: Send + Sync {
    async fn revenue_summary(&self, range: &DateRange) -> Result<RevenueSummary, AppError>;

    // Receita por dia, em ordem cronológica
    async fn revenue_trend(&self, range: &DateRange) -> Result<Vec<MetricPoint>, AppError>;

    async fn payment_methods(&self, range: &DateRange) -> Result<Vec<MetricPoint>, AppError>;

    async fn customer_segments(&self, range: &DateRange) -> Result<CustomerSegments, AppError>;

    async fn top_items(&self, range: &DateRange, limit: u32) -> Result<Vec<TopSellingItem>, AppError>;

    async fn stock_items(&self) -> Result<Vec<StockItem>, AppError>;

    async fn staff_performance(&self, range: &DateRange) -> Result<Vec<StaffRecord>, AppError>;

    async fn orders(&self, range: &DateRange) -> Result<Vec<OrderSummary>, AppError>;
}

#[async_trait]
pub trait SettingsSource: Send + Sync {
    // None quando o restaurante ainda não salvou nada
    async fn load_settings(&self) -> Result<Option<RestaurantSettings>, AppError>;

    async fn save_settings(&self, settings: &RestaurantSettings) -> Result<RestaurantSettings, AppError>;
}
