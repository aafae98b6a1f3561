// src/analytics/stock.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::inventory::{StockItem, StockStatus};

// Abaixo de metade do mínimo o item já é crítico
const CRITICAL_RATIO: f64 = 0.5;

/// Classifica o saldo de um item em relação ao estoque mínimo.
///
/// `current <= 0` é verificado primeiro, então nenhuma divisão acontece.
/// Com `min <= 0` e saldo positivo o item é sempre `Normal`.
pub fn classify(current_stock: f64, min_stock: f64) -> StockStatus {
    if current_stock <= 0.0 {
        StockStatus::OutOfStock
    } else if min_stock <= 0.0 {
        StockStatus::Normal
    } else if current_stock <= CRITICAL_RATIO * min_stock {
        StockStatus::Critical
    } else if current_stock <= min_stock {
        StockStatus::Low
    } else {
        StockStatus::Normal
    }
}

/// Saldo como percentual do mínimo. `None` quando não há mínimo definido.
pub fn stock_percentage(current_stock: f64, min_stock: f64) -> Option<f64> {
    if min_stock > 0.0 {
        Some(current_stock / min_stock * 100.0)
    } else {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub out_of_stock: usize,
    pub critical: usize,
    pub low: usize,
    pub normal: usize,
}

pub fn status_counts(items: &[StockItem]) -> StatusCounts {
    items.iter().fold(StatusCounts::default(), |mut counts, item| {
        match classify(item.current_stock, item.min_stock) {
            StockStatus::OutOfStock => counts.out_of_stock += 1,
            StockStatus::Critical => counts.critical += 1,
            StockStatus::Low => counts.low += 1,
            StockStatus::Normal => counts.normal += 1,
        }
        counts
    })
}

// Itens que precisam de atenção, do mais grave para o menos grave
pub fn alerts(items: &[StockItem]) -> Vec<(&StockItem, StockStatus)> {
    let mut flagged: Vec<_> = items
        .iter()
        .map(|item| (item, classify(item.current_stock, item.min_stock)))
        .filter(|(_, status)| *status != StockStatus::Normal)
        .collect();

    flagged.sort_by(|(a, sa), (b, sb)| sa.cmp(sb).then_with(|| a.name.cmp(&b.name)));
    flagged
}

pub fn total_value(items: &[StockItem]) -> f64 {
    items.iter().map(|item| item.value).sum()
}
