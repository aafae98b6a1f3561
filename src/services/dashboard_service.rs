// src/services/dashboard_service.rs

use std::sync::Arc;

use crate::{
    analytics::{
        chart::{bar_geometry, pie_geometry},
        format::MetricFormatter,
        ratio::{customer_split, percent_change, percentage},
    },
    common::error::AppError,
    db::AnalyticsSource,
    models::{
        dashboard::{
            CustomerAnalyticsView, CustomerSegments, MetricPoint, RevenueAnalyticsView,
            RevenueSummary, SegmentShare, TopItemRow, TopItemsView, TopSellingItem,
        },
        query::DateRange,
    },
};

// Top 5 por padrão, como no ranking do dashboard
pub const DEFAULT_TOP_ITEMS: u32 = 5;

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn AnalyticsSource>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn AnalyticsSource>) -> Self {
        Self { source }
    }

    pub async fn get_revenue_analytics(
        &self,
        range: &DateRange,
        fmt: &MetricFormatter,
    ) -> Result<RevenueAnalyticsView, AppError> {
        // As três consultas são independentes
        let (summary, trend, methods) = tokio::try_join!(
            self.source.revenue_summary(range),
            self.source.revenue_trend(range),
            self.source.payment_methods(range),
        )?;

        Ok(render_revenue(&summary, &trend, &methods, fmt))
    }

    pub async fn get_customer_analytics(
        &self,
        range: &DateRange,
        fmt: &MetricFormatter,
    ) -> Result<CustomerAnalyticsView, AppError> {
        let segments = self.source.customer_segments(range).await?;
        Ok(render_customers(&segments, fmt))
    }

    pub async fn get_top_items(
        &self,
        range: &DateRange,
        limit: Option<u32>,
        fmt: &MetricFormatter,
    ) -> Result<TopItemsView, AppError> {
        let items = self
            .source
            .top_items(range, limit.unwrap_or(DEFAULT_TOP_ITEMS))
            .await?;
        Ok(render_top_items(&items, fmt))
    }
}

pub fn render_revenue(
    summary: &RevenueSummary,
    trend: &[MetricPoint],
    methods: &[MetricPoint],
    fmt: &MetricFormatter,
) -> RevenueAnalyticsView {
    let change = percent_change(summary.total_revenue, summary.previous_revenue);
    let sign = if change > 0.0 { "+" } else { "" };

    RevenueAnalyticsView {
        total_revenue: fmt.format_currency(summary.total_revenue),
        total_orders: fmt.format_count(summary.total_orders),
        average_order_value: fmt.format_currency(summary.average_order_value),
        revenue_change: change,
        revenue_change_label: format!("{}{}", sign, fmt.format_percent(change)),
        trend: bar_geometry(trend),
        payment_methods: pie_geometry(methods),
    }
}

pub fn render_customers(segments: &CustomerSegments, fmt: &MetricFormatter) -> CustomerAnalyticsView {
    let split = customer_split(segments);

    let segments = vec![
        SegmentShare {
            label: "new".to_string(),
            count: segments.new_count,
            percentage: split.new_percentage,
            percentage_label: fmt.format_percent(split.new_percentage),
        },
        SegmentShare {
            label: "returning".to_string(),
            count: segments.returning_count,
            percentage: split.returning_percentage,
            percentage_label: fmt.format_percent(split.returning_percentage),
        },
    ];

    CustomerAnalyticsView {
        total_customers_label: fmt.format_count(split.total_customers),
        split,
        segments,
    }
}

pub fn revenue_points(items: &[TopSellingItem]) -> Vec<MetricPoint> {
    items
        .iter()
        .map(|item| MetricPoint { label: item.name.clone(), value: item.revenue })
        .collect()
}

pub fn render_top_items(items: &[TopSellingItem], fmt: &MetricFormatter) -> TopItemsView {
    let total_revenue: f64 = items.iter().map(|item| item.revenue).sum();
    let points = revenue_points(items);

    let rows = items
        .iter()
        .enumerate()
        .map(|(index, item)| TopItemRow {
            rank: index + 1,
            name: item.name.clone(),
            category: item.category.clone(),
            quantity_label: fmt.format_number(item.quantity),
            revenue_label: fmt.format_currency(item.revenue),
            share: percentage(item.revenue, total_revenue),
        })
        .collect();

    TopItemsView {
        items: rows,
        bars: bar_geometry(&points),
        pie: pie_geometry(&points),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryStore;

    fn service() -> DashboardService {
        DashboardService::new(Arc::new(MemoryStore::sample()))
    }

    fn range() -> DateRange {
        DateRange::last_days(chrono::NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(), 30)
    }

    #[tokio::test]
    async fn test_revenue_analytics_formats_cards_and_charts() {
        let view = service()
            .get_revenue_analytics(&range(), &MetricFormatter::default())
            .await
            .unwrap();

        assert_eq!(view.total_revenue, "$12,480.00");
        assert_eq!(view.total_orders, "312");
        assert_eq!(view.average_order_value, "$40.00");
        assert!((view.revenue_change - 20.0).abs() < 1e-9);
        assert_eq!(view.revenue_change_label, "+20.0%");
        assert_eq!(view.trend[1].height_percent, 100.0);
        assert_eq!(view.trend[0].height_percent, 50.0);
        assert_eq!(view.payment_methods.slices[0].percentage, 75.0);
    }

    #[tokio::test]
    async fn test_customer_analytics_split() {
        let view = service()
            .get_customer_analytics(&range(), &MetricFormatter::default())
            .await
            .unwrap();

        assert_eq!(view.split.total_customers, 120);
        assert_eq!(view.segments[0].percentage_label, "25.0%");
        assert_eq!(view.segments[1].percentage_label, "75.0%");
    }

    #[tokio::test]
    async fn test_top_items_rank_and_share() {
        let view = service()
            .get_top_items(&range(), None, &MetricFormatter::default())
            .await
            .unwrap();

        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].rank, 1);
        assert_eq!(view.items[0].revenue_label, "$1,800.00");
        assert!((view.items[0].share - 60.0).abs() < 1e-9);
        assert_eq!(view.bars[1].height_percent, 1200.0 / 1800.0 * 100.0);
    }

    #[tokio::test]
    async fn test_top_items_respects_limit() {
        let view = service()
            .get_top_items(&range(), Some(1), &MetricFormatter::default())
            .await
            .unwrap();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.pie.slices[0].percentage, 100.0);
    }

    #[test]
    fn test_negative_change_has_no_plus_sign() {
        let summary = RevenueSummary { total_revenue: 50.0, previous_revenue: 100.0, ..RevenueSummary::default() };
        let view = render_revenue(&summary, &[], &[], &MetricFormatter::default());
        assert_eq!(view.revenue_change_label, "-50.0%");
        assert!(view.trend.is_empty());
    }
}
