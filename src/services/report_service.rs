// src/services/report_service.rs
// Página de Relatórios: cada aba é um par (loader, renderer) registrado uma única vez.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;

use crate::{
    analytics::{
        chart::{bar_geometry, pie_geometry},
        format::MetricFormatter,
        listing::{sort_staff, StaffSortField},
        ratio::{customer_split, percent_change, percentage},
        stock::{classify, status_counts, total_value},
    },
    common::error::AppError,
    db::AnalyticsSource,
    models::{
        dashboard::MetricPoint,
        query::DateRange,
        reports::{ReportData, ReportTab, ReportTable, ReportView, SummaryCard},
    },
    services::dashboard_service::{revenue_points, DEFAULT_TOP_ITEMS},
};

/// Busca os agregados de uma aba.
#[async_trait]
pub trait ReportLoader: Send + Sync {
    async fn load(&self, source: &dyn AnalyticsSource, range: &DateRange) -> Result<ReportData, AppError>;
}

/// Transforma os agregados em uma view pronta para desenhar.
pub type ReportRenderer = fn(&ReportData, &DateRange, &MetricFormatter) -> Result<ReportView, AppError>;

#[derive(Clone)]
pub struct ReportEntry {
    pub loader: Arc<dyn ReportLoader>,
    pub renderer: ReportRenderer,
}

#[derive(Clone)]
pub struct ReportRegistry {
    entries: HashMap<ReportTab, ReportEntry>,
}

impl Default for ReportRegistry {
    fn default() -> Self {
        let mut registry = Self { entries: HashMap::new() };
        registry.register(ReportTab::Sales, Arc::new(SalesLoader), render_sales);
        registry.register(ReportTab::Inventory, Arc::new(InventoryLoader), render_inventory);
        registry.register(ReportTab::Staff, Arc::new(StaffLoader), render_staff);
        registry.register(ReportTab::Customers, Arc::new(CustomersLoader), render_customers);
        registry.register(ReportTab::Menu, Arc::new(MenuLoader), render_menu);
        registry
    }
}

impl ReportRegistry {
    pub fn register(&mut self, tab: ReportTab, loader: Arc<dyn ReportLoader>, renderer: ReportRenderer) {
        self.entries.insert(tab, ReportEntry { loader, renderer });
    }

    pub fn tabs(&self) -> Vec<ReportTab> {
        ReportTab::ALL
            .into_iter()
            .filter(|tab| self.entries.contains_key(tab))
            .collect()
    }

    pub fn resolve(&self, slug: &str) -> Result<(ReportTab, &ReportEntry), AppError> {
        ReportTab::from_slug(slug)
            .and_then(|tab| self.entries.get(&tab).map(|entry| (tab, entry)))
            .ok_or_else(|| AppError::ReportNotFound(slug.to_string()))
    }
}

#[derive(Clone)]
pub struct ReportService {
    source: Arc<dyn AnalyticsSource>,
    registry: Arc<ReportRegistry>,
}

impl ReportService {
    pub fn new(source: Arc<dyn AnalyticsSource>, registry: ReportRegistry) -> Self {
        Self { source, registry: Arc::new(registry) }
    }

    pub async fn get_report(
        &self,
        slug: &str,
        range: &DateRange,
        fmt: &MetricFormatter,
    ) -> Result<ReportView, AppError> {
        let (tab, entry) = self.registry.resolve(slug)?;
        tracing::debug!("Carregando relatório '{}'", tab.slug());

        let data = entry.loader.load(self.source.as_ref(), range).await?;
        (entry.renderer)(&data, range, fmt)
    }
}

// --- Loaders ---

pub struct SalesLoader;
pub struct InventoryLoader;
pub struct StaffLoader;
pub struct CustomersLoader;
pub struct MenuLoader;

#[async_trait]
impl ReportLoader for SalesLoader {
    async fn load(&self, source: &dyn AnalyticsSource, range: &DateRange) -> Result<ReportData, AppError> {
        let (summary, trend, payment_methods) = tokio::try_join!(
            source.revenue_summary(range),
            source.revenue_trend(range),
            source.payment_methods(range),
        )?;
        Ok(ReportData::Sales { summary, trend, payment_methods })
    }
}

#[async_trait]
impl ReportLoader for InventoryLoader {
    async fn load(&self, source: &dyn AnalyticsSource, _range: &DateRange) -> Result<ReportData, AppError> {
        Ok(ReportData::Inventory(source.stock_items().await?))
    }
}

#[async_trait]
impl ReportLoader for StaffLoader {
    async fn load(&self, source: &dyn AnalyticsSource, range: &DateRange) -> Result<ReportData, AppError> {
        Ok(ReportData::Staff(source.staff_performance(range).await?))
    }
}

#[async_trait]
impl ReportLoader for CustomersLoader {
    async fn load(&self, source: &dyn AnalyticsSource, range: &DateRange) -> Result<ReportData, AppError> {
        Ok(ReportData::Customers(source.customer_segments(range).await?))
    }
}

#[async_trait]
impl ReportLoader for MenuLoader {
    async fn load(&self, source: &dyn AnalyticsSource, range: &DateRange) -> Result<ReportData, AppError> {
        Ok(ReportData::Menu(source.top_items(range, DEFAULT_TOP_ITEMS * 2).await?))
    }
}

// --- Renderers ---

fn card(label: &str, value: String) -> SummaryCard {
    SummaryCard { label: label.to_string(), value }
}

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn base_view(tab: ReportTab, title: &str, range: &DateRange, fmt: &MetricFormatter) -> ReportView {
    ReportView {
        tab,
        title: title.to_string(),
        period: *range,
        period_label: format!("{} - {}", fmt.format_date(range.from), fmt.format_date(range.to)),
        cards: Vec::new(),
        bars: None,
        pie: None,
        table: ReportTable::default(),
    }
}

fn mismatch(tab: ReportTab) -> AppError {
    AppError::InternalServerError(anyhow::anyhow!(
        "Dados incompatíveis com o relatório '{}'",
        tab.slug()
    ))
}

pub fn render_sales(data: &ReportData, range: &DateRange, fmt: &MetricFormatter) -> Result<ReportView, AppError> {
    let ReportData::Sales { summary, trend, payment_methods } = data else {
        return Err(mismatch(ReportTab::Sales));
    };

    let change = percent_change(summary.total_revenue, summary.previous_revenue);
    let mut view = base_view(ReportTab::Sales, "Sales report", range, fmt);

    view.cards = vec![
        card("Total revenue", fmt.format_currency(summary.total_revenue)),
        card("Orders", fmt.format_count(summary.total_orders)),
        card("Average order value", fmt.format_currency(summary.average_order_value)),
        card("Growth", fmt.format_percent(change)),
    ];
    view.bars = Some(bar_geometry(trend));
    view.pie = Some(pie_geometry(payment_methods));
    view.table = ReportTable {
        columns: columns(&["Date", "Revenue"]),
        rows: trend
            .iter()
            .map(|point| vec![point.label.clone(), fmt.format_currency(point.value)])
            .collect(),
    };

    Ok(view)
}

pub fn render_inventory(data: &ReportData, range: &DateRange, fmt: &MetricFormatter) -> Result<ReportView, AppError> {
    let ReportData::Inventory(items) = data else {
        return Err(mismatch(ReportTab::Inventory));
    };

    let counts = status_counts(items);
    let mut view = base_view(ReportTab::Inventory, "Inventory report", range, fmt);

    view.cards = vec![
        card("Items", fmt.format_count(items.len() as i64)),
        card("Stock value", fmt.format_currency(total_value(items))),
        card("Low stock", fmt.format_count((counts.critical + counts.low) as i64)),
        card("Out of stock", fmt.format_count(counts.out_of_stock as i64)),
    ];

    // Valor em estoque por categoria, na ordem em que aparecem
    let mut by_category: Vec<MetricPoint> = Vec::new();
    for item in items {
        match by_category.iter_mut().find(|point| point.label == item.category) {
            Some(point) => point.value += item.value,
            None => by_category.push(MetricPoint { label: item.category.clone(), value: item.value }),
        }
    }
    view.pie = Some(pie_geometry(&by_category));

    view.table = ReportTable {
        columns: columns(&["Item", "SKU", "Category", "Stock", "Minimum", "Status", "Value"]),
        rows: items
            .iter()
            .map(|item| {
                let status = serde_json::to_value(classify(item.current_stock, item.min_stock))
                    .ok()
                    .and_then(|value| value.as_str().map(str::to_string))
                    .unwrap_or_default();
                vec![
                    item.name.clone(),
                    item.sku.clone(),
                    item.category.clone(),
                    format!("{} {}", fmt.format_number(item.current_stock), item.unit),
                    format!("{} {}", fmt.format_number(item.min_stock), item.unit),
                    status,
                    fmt.format_currency(item.value),
                ]
            })
            .collect(),
    };

    Ok(view)
}

pub fn render_staff(data: &ReportData, range: &DateRange, fmt: &MetricFormatter) -> Result<ReportView, AppError> {
    let ReportData::Staff(records) = data else {
        return Err(mismatch(ReportTab::Staff));
    };

    let mut records = records.clone();
    sort_staff(&mut records, StaffSortField::TotalRevenue);

    let total_revenue: f64 = records.iter().map(|r| r.total_revenue).sum();
    let total_orders: i64 = records.iter().map(|r| r.total_orders).sum();
    let mut view = base_view(ReportTab::Staff, "Staff report", range, fmt);

    view.cards = vec![
        card("Staff members", fmt.format_count(records.len() as i64)),
        card("Total revenue", fmt.format_currency(total_revenue)),
        card("Total orders", fmt.format_count(total_orders)),
    ];

    let points: Vec<MetricPoint> = records
        .iter()
        .map(|r| MetricPoint { label: r.name.clone(), value: r.total_revenue })
        .collect();
    view.bars = Some(bar_geometry(&points));

    view.table = ReportTable {
        columns: columns(&["Name", "Role", "Orders", "Revenue", "Average order", "Share"]),
        rows: records
            .iter()
            .map(|r| {
                vec![
                    r.name.clone(),
                    r.role.clone(),
                    fmt.format_count(r.total_orders),
                    fmt.format_currency(r.total_revenue),
                    fmt.format_currency(r.average_order_value),
                    fmt.format_percent(percentage(r.total_revenue, total_revenue)),
                ]
            })
            .collect(),
    };

    Ok(view)
}

pub fn render_customers(data: &ReportData, range: &DateRange, fmt: &MetricFormatter) -> Result<ReportView, AppError> {
    let ReportData::Customers(segments) = data else {
        return Err(mismatch(ReportTab::Customers));
    };

    let split = customer_split(segments);
    let mut view = base_view(ReportTab::Customers, "Customer report", range, fmt);

    view.cards = vec![
        card("Total customers", fmt.format_count(split.total_customers)),
        card("New customers", fmt.format_count(segments.new_count)),
        card("Returning customers", fmt.format_count(segments.returning_count)),
    ];
    view.pie = Some(pie_geometry(&[
        MetricPoint { label: "New".to_string(), value: segments.new_count as f64 },
        MetricPoint { label: "Returning".to_string(), value: segments.returning_count as f64 },
    ]));
    view.table = ReportTable {
        columns: columns(&["Segment", "Customers", "Share"]),
        rows: vec![
            vec!["New".to_string(), fmt.format_count(segments.new_count), fmt.format_percent(split.new_percentage)],
            vec![
                "Returning".to_string(),
                fmt.format_count(segments.returning_count),
                fmt.format_percent(split.returning_percentage),
            ],
        ],
    };

    Ok(view)
}

pub fn render_menu(data: &ReportData, range: &DateRange, fmt: &MetricFormatter) -> Result<ReportView, AppError> {
    let ReportData::Menu(items) = data else {
        return Err(mismatch(ReportTab::Menu));
    };

    let total_revenue: f64 = items.iter().map(|item| item.revenue).sum();
    let total_quantity: f64 = items.iter().map(|item| item.quantity).sum();
    let points = revenue_points(items);
    let mut view = base_view(ReportTab::Menu, "Menu performance", range, fmt);

    view.cards = vec![
        card("Items sold", fmt.format_number(total_quantity)),
        card("Menu revenue", fmt.format_currency(total_revenue)),
    ];
    view.bars = Some(bar_geometry(&points));
    view.pie = Some(pie_geometry(&points));
    view.table = ReportTable {
        columns: columns(&["Rank", "Item", "Category", "Quantity", "Revenue", "Share"]),
        rows: items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                vec![
                    (index + 1).to_string(),
                    item.name.clone(),
                    item.category.clone(),
                    fmt.format_number(item.quantity),
                    fmt.format_currency(item.revenue),
                    fmt.format_percent(percentage(item.revenue, total_revenue)),
                ]
            })
            .collect(),
    };

    Ok(view)
}
