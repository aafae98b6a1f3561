// src/docs.rs

use utoipa::OpenApi;
use crate::analytics;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Dashboard ---
        handlers::dashboard::get_revenue,
        handlers::dashboard::get_customers,
        handlers::dashboard::get_staff_performance,
        handlers::dashboard::get_top_items,
        handlers::dashboard::get_inventory_alerts,

        // --- Listas ---
        handlers::inventory::get_inventory,
        handlers::staff::list_staff,
        handlers::orders::list_orders,

        // --- Relatórios ---
        handlers::reports::get_report,

        // --- Gráficos ---
        handlers::charts::bar_chart,
        handlers::charts::pie_chart,
        handlers::charts::ratio,

        // --- Settings ---
        handlers::settings::get_settings,
        handlers::settings::update_settings,
    ),
    components(
        schemas(
            // --- Métricas e gráficos ---
            analytics::chart::BarSegment,
            analytics::chart::PieSlice,
            analytics::chart::PieChart,
            analytics::ratio::CustomerSplit,
            analytics::stock::StatusCounts,
            analytics::listing::StaffSortField,

            // --- Dashboard ---
            models::dashboard::MetricPoint,
            models::dashboard::RevenueAnalyticsView,
            models::dashboard::SegmentShare,
            models::dashboard::CustomerAnalyticsView,
            models::dashboard::TopItemRow,
            models::dashboard::TopItemsView,

            // --- Inventory ---
            models::inventory::StockItem,
            models::inventory::StockStatus,
            models::inventory::StockItemView,
            models::inventory::InventoryView,
            models::inventory::InventoryAlertsView,

            // --- Staff / Orders ---
            models::staff::StaffRecord,
            models::staff::StaffRow,
            models::staff::StaffPerformanceView,
            models::orders::OrderSummary,
            models::orders::OrderRow,
            models::orders::OrdersView,

            // --- Reports ---
            models::query::DateRange,
            models::reports::ReportTab,
            models::reports::SummaryCard,
            models::reports::ReportTable,
            models::reports::ReportView,

            // --- Settings ---
            models::settings::RestaurantSettings,
            models::settings::UpdateSettingsRequest,

            // --- Payloads ---
            handlers::charts::ChartPayload,
            handlers::charts::RatioPayload,
            handlers::charts::RatioView,
        )
    ),
    tags(
        (name = "Dashboard", description = "Indicadores e Gráficos Gerenciais"),
        (name = "Inventory", description = "Estoque classificado por situação"),
        (name = "Staff", description = "Desempenho da Equipe"),
        (name = "Orders", description = "Pedidos do período"),
        (name = "Reports", description = "Relatórios por aba"),
        (name = "Charts", description = "Geometria de gráficos de barras e pizza"),
        (name = "Settings", description = "Configurações do Restaurante")
    )
)]
pub struct ApiDoc;
