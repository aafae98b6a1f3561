// src/db/memory.rs
// Fonte em memória para os testes de services e rotas.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::source::{AnalyticsSource, SettingsSource},
    models::{
        dashboard::{CustomerSegments, MetricPoint, RevenueSummary, TopSellingItem},
        inventory::StockItem,
        orders::OrderSummary,
        query::DateRange,
        settings::RestaurantSettings,
        staff::StaffRecord,
    },
};

pub struct MemoryStore {
    pub summary: RevenueSummary,
    pub trend: Vec<MetricPoint>,
    pub payment_methods: Vec<MetricPoint>,
    pub segments: CustomerSegments,
    pub top_items: Vec<TopSellingItem>,
    pub stock: Vec<StockItem>,
    pub staff: Vec<StaffRecord>,
    pub orders: Vec<OrderSummary>,
    pub settings: Mutex<Option<RestaurantSettings>>,
}

fn point(label: &str, value: f64) -> MetricPoint {
    MetricPoint { label: label.to_string(), value }
}

fn stock(name: &str, sku: &str, category: &str, supplier: &str, current: f64, min: f64, value: f64) -> StockItem {
    StockItem {
        id: Uuid::new_v4(),
        name: name.to_string(),
        sku: sku.to_string(),
        category: category.to_string(),
        supplier: Some(supplier.to_string()),
        unit: "kg".to_string(),
        current_stock: current,
        min_stock: min,
        value,
    }
}

fn staff(name: &str, role: &str, orders: i64, revenue: f64) -> StaffRecord {
    StaffRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@restaurant.com", name.to_lowercase()),
        role: role.to_string(),
        total_orders: orders,
        total_revenue: revenue,
        average_order_value: if orders > 0 { revenue / orders as f64 } else { 0.0 },
    }
}

fn order(number: &str, customer: &str, status: &str, total: f64, notes: Option<&str>) -> OrderSummary {
    OrderSummary {
        id: Uuid::new_v4(),
        order_number: number.to_string(),
        customer_name: customer.to_string(),
        table_label: "Table 1".to_string(),
        status: status.to_string(),
        total,
        notes: notes.map(str::to_string),
        created_at: Utc.with_ymd_and_hms(2026, 10, 18, 19, 30, 0).unwrap(),
    }
}

impl MemoryStore {
    pub fn sample() -> Self {
        Self {
            summary: RevenueSummary {
                total_revenue: 12480.0,
                total_orders: 312,
                average_order_value: 40.0,
                previous_revenue: 10400.0,
            },
            trend: vec![point("2026-10-16", 400.0), point("2026-10-17", 800.0), point("2026-10-18", 200.0)],
            payment_methods: vec![point("card", 750.0), point("cash", 250.0)],
            segments: CustomerSegments { new_count: 30, returning_count: 90 },
            top_items: vec![
                TopSellingItem { name: "Margherita".into(), category: "Pizzas".into(), quantity: 120.0, revenue: 1800.0 },
                TopSellingItem { name: "Lasagna".into(), category: "Pasta".into(), quantity: 60.0, revenue: 1200.0 },
            ],
            stock: vec![
                stock("Tomato", "VEG-001", "Vegetables", "Green Farm", 8.0, 10.0, 16.0),
                stock("Flour", "DRY-002", "Dry goods", "Mill & Co", 0.0, 5.0, 0.0),
                stock("Basil", "HRB-003", "Herbs", "Green Farm", 1.0, 10.0, 3.0),
                stock("Mozzarella", "DAI-004", "Dairy", "Latte Bros", 40.0, 10.0, 200.0),
            ],
            staff: vec![
                staff("Bruno", "waiter", 50, 1500.0),
                staff("Alice", "waiter", 80, 2400.0),
                staff("Carla", "cashier", 20, 2000.0),
            ],
            orders: vec![
                order("ORD-1001", "John Smith", "completed", 58.5, None),
                order("ORD-1002", "Maria Souza", "pending", 22.0, Some("No onions")),
                order("ORD-1003", "Ana Lima", "cancelled", 15.0, Some("Customer left")),
            ],
            settings: Mutex::new(None),
        }
    }
}

#[async_trait]
impl AnalyticsSource for MemoryStore {
    async fn revenue_summary(&self, _range: &DateRange) -> Result<RevenueSummary, AppError> {
        Ok(self.summary.clone())
    }

    async fn revenue_trend(&self, _range: &DateRange) -> Result<Vec<MetricPoint>, AppError> {
        Ok(self.trend.clone())
    }

    async fn payment_methods(&self, _range: &DateRange) -> Result<Vec<MetricPoint>, AppError> {
        Ok(self.payment_methods.clone())
    }

    async fn customer_segments(&self, _range: &DateRange) -> Result<CustomerSegments, AppError> {
        Ok(self.segments.clone())
    }

    async fn top_items(&self, _range: &DateRange, limit: u32) -> Result<Vec<TopSellingItem>, AppError> {
        Ok(self.top_items.iter().take(limit as usize).cloned().collect())
    }

    async fn stock_items(&self) -> Result<Vec<StockItem>, AppError> {
        Ok(self.stock.clone())
    }

    async fn staff_performance(&self, _range: &DateRange) -> Result<Vec<StaffRecord>, AppError> {
        Ok(self.staff.clone())
    }

    async fn orders(&self, _range: &DateRange) -> Result<Vec<OrderSummary>, AppError> {
        Ok(self.orders.clone())
    }
}

#[async_trait]
impl SettingsSource for MemoryStore {
    async fn load_settings(&self) -> Result<Option<RestaurantSettings>, AppError> {
        Ok(self.settings.lock().unwrap().clone())
    }

    async fn save_settings(&self, settings: &RestaurantSettings) -> Result<RestaurantSettings, AppError> {
        *self.settings.lock().unwrap() = Some(settings.clone());
        Ok(settings.clone())
    }
}
