// src/db/pg_source.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{
        source::AnalyticsSource, DashboardRepository, InventoryRepository, OrdersRepository,
        StaffRepository,
    },
    models::{
        dashboard::{CustomerSegments, MetricPoint, RevenueSummary, TopSellingItem},
        inventory::StockItem,
        orders::OrderSummary,
        query::DateRange,
        staff::StaffRecord,
    },
};

// Junta os repositórios do Postgres atrás de um único AnalyticsSource
#[derive(Clone)]
pub struct PgAnalyticsSource {
    dashboard_repo: DashboardRepository,
    inventory_repo: InventoryRepository,
    staff_repo: StaffRepository,
    orders_repo: OrdersRepository,
}

impl PgAnalyticsSource {
    pub fn new(pool: PgPool) -> Self {
        Self {
            dashboard_repo: DashboardRepository::new(pool.clone()),
            inventory_repo: InventoryRepository::new(pool.clone()),
            staff_repo: StaffRepository::new(pool.clone()),
            orders_repo: OrdersRepository::new(pool),
        }
    }
}

#[async_trait]
impl AnalyticsSource for PgAnalyticsSource {
    async fn revenue_summary(&self, range: &DateRange) -> Result<RevenueSummary, AppError> {
        self.dashboard_repo.get_revenue_summary(range).await
    }

    async fn revenue_trend(&self, range: &DateRange) -> Result<Vec<MetricPoint>, AppError> {
        self.dashboard_repo.get_revenue_trend(range).await
    }

    async fn payment_methods(&self, range: &DateRange) -> Result<Vec<MetricPoint>, AppError> {
        self.dashboard_repo.get_payment_methods(range).await
    }

    async fn customer_segments(&self, range: &DateRange) -> Result<CustomerSegments, AppError> {
        self.dashboard_repo.get_customer_segments(range).await
    }

    async fn top_items(&self, range: &DateRange, limit: u32) -> Result<Vec<TopSellingItem>, AppError> {
        self.dashboard_repo.get_top_items(range, limit).await
    }

    async fn stock_items(&self) -> Result<Vec<StockItem>, AppError> {
        self.inventory_repo.get_stock_items().await
    }

    async fn staff_performance(&self, range: &DateRange) -> Result<Vec<StaffRecord>, AppError> {
        self.staff_repo.get_performance(range).await
    }

    async fn orders(&self, range: &DateRange) -> Result<Vec<OrderSummary>, AppError> {
        self.orders_repo.get_orders(range).await
    }
}
