// src/services/staff_service.rs

use std::sync::Arc;

use crate::{
    analytics::{
        format::MetricFormatter,
        listing::{filter_items, sort_staff, ListFilter, StaffSortField},
        ratio::percentage,
    },
    common::error::AppError,
    db::AnalyticsSource,
    models::{
        query::DateRange,
        staff::{StaffPerformanceView, StaffRecord, StaffRow},
    },
};

#[derive(Clone)]
pub struct StaffService {
    source: Arc<dyn AnalyticsSource>,
}

impl StaffService {
    pub fn new(source: Arc<dyn AnalyticsSource>) -> Self {
        Self { source }
    }

    pub async fn get_performance(
        &self,
        range: &DateRange,
        filter: &ListFilter,
        sort_by: StaffSortField,
        fmt: &MetricFormatter,
    ) -> Result<StaffPerformanceView, AppError> {
        let records = self.source.staff_performance(range).await?;
        let mut filtered = filter_items(&records, filter);
        sort_staff(&mut filtered, sort_by);

        Ok(render_staff(filtered, fmt))
    }
}

// A participação é calculada sobre a lista já filtrada
pub fn render_staff(records: Vec<StaffRecord>, fmt: &MetricFormatter) -> StaffPerformanceView {
    let total_revenue: f64 = records.iter().map(|r| r.total_revenue).sum();
    let total_orders: i64 = records.iter().map(|r| r.total_orders).sum();

    let staff = records
        .into_iter()
        .map(|record| StaffRow {
            total_revenue_label: fmt.format_currency(record.total_revenue),
            average_order_value_label: fmt.format_currency(record.average_order_value),
            revenue_share: percentage(record.total_revenue, total_revenue),
            record,
        })
        .collect();

    StaffPerformanceView {
        staff,
        total_revenue_label: fmt.format_currency(total_revenue),
        total_orders_label: fmt.format_count(total_orders),
    }
}
