// src/services/inventory_service.rs

use std::sync::Arc;

use crate::{
    analytics::{
        format::MetricFormatter,
        listing::{filter_items, ListFilter},
        stock::{alerts, classify, status_counts, stock_percentage, total_value},
    },
    common::error::AppError,
    db::AnalyticsSource,
    models::inventory::{InventoryAlertsView, InventoryView, StockItem, StockItemView},
};

#[derive(Clone)]
pub struct InventoryService {
    source: Arc<dyn AnalyticsSource>,
}

impl InventoryService {
    pub fn new(source: Arc<dyn AnalyticsSource>) -> Self {
        Self { source }
    }

    // --- LISTA (busca + categoria) ---
    pub async fn get_inventory(
        &self,
        filter: &ListFilter,
        fmt: &MetricFormatter,
    ) -> Result<InventoryView, AppError> {
        let items = self.source.stock_items().await?;
        let filtered = filter_items(&items, filter);

        Ok(render_inventory(filtered, fmt))
    }

    // --- ALERTAS (tudo que não está normal) ---
    pub async fn get_alerts(&self, fmt: &MetricFormatter) -> Result<InventoryAlertsView, AppError> {
        let items = self.source.stock_items().await?;
        Ok(render_alerts(&items, fmt))
    }
}

pub fn stock_view(item: StockItem, fmt: &MetricFormatter) -> StockItemView {
    let status = classify(item.current_stock, item.min_stock);

    StockItemView {
        status,
        stock_percentage: stock_percentage(item.current_stock, item.min_stock),
        stock_label: format!(
            "{} / {} {}",
            fmt.format_number(item.current_stock),
            fmt.format_number(item.min_stock),
            item.unit
        ),
        value_label: fmt.format_currency(item.value),
        item,
    }
}

pub fn render_inventory(items: Vec<StockItem>, fmt: &MetricFormatter) -> InventoryView {
    let counts = status_counts(&items);
    let total = total_value(&items);

    InventoryView {
        items: items.into_iter().map(|item| stock_view(item, fmt)).collect(),
        counts,
        total_value: total,
        total_value_label: fmt.format_currency(total),
    }
}

pub fn render_alerts(items: &[StockItem], fmt: &MetricFormatter) -> InventoryAlertsView {
    InventoryAlertsView {
        alerts: alerts(items)
            .into_iter()
            .map(|(item, _)| stock_view(item.clone(), fmt))
            .collect(),
        counts: status_counts(items),
    }
}
