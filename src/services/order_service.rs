// src/services/order_service.rs

use std::sync::Arc;

use crate::{
    analytics::{
        format::MetricFormatter,
        listing::{filter_items, ListFilter},
    },
    common::error::AppError,
    db::AnalyticsSource,
    models::{
        orders::{OrderRow, OrdersView},
        query::DateRange,
    },
};

#[derive(Clone)]
pub struct OrderService {
    source: Arc<dyn AnalyticsSource>,
}

impl OrderService {
    pub fn new(source: Arc<dyn AnalyticsSource>) -> Self {
        Self { source }
    }

    pub async fn get_orders(
        &self,
        range: &DateRange,
        filter: &ListFilter,
        fmt: &MetricFormatter,
    ) -> Result<OrdersView, AppError> {
        let orders = self.source.orders(range).await?;
        let filtered = filter_items(&orders, filter);
        let total: f64 = filtered.iter().map(|order| order.total).sum();

        let rows: Vec<OrderRow> = filtered
            .into_iter()
            .map(|order| OrderRow {
                total_label: fmt.format_currency(order.total),
                created_label: fmt.format_date(order.created_at.date_naive()),
                order,
            })
            .collect();

        Ok(OrdersView {
            count: rows.len(),
            orders: rows,
            total_label: fmt.format_currency(total),
        })
    }
}
