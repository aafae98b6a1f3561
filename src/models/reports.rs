// src/models/reports.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::analytics::chart::{BarSegment, PieChart};
use crate::models::{
    dashboard::{CustomerSegments, MetricPoint, RevenueSummary, TopSellingItem},
    inventory::StockItem,
    query::DateRange,
    staff::StaffRecord,
};

// Abas da página de Relatórios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportTab {
    Sales,
    Inventory,
    Staff,
    Customers,
    Menu,
}

impl ReportTab {
    pub const ALL: [ReportTab; 5] = [
        ReportTab::Sales,
        ReportTab::Inventory,
        ReportTab::Staff,
        ReportTab::Customers,
        ReportTab::Menu,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ReportTab::Sales => "sales",
            ReportTab::Inventory => "inventory",
            ReportTab::Staff => "staff",
            ReportTab::Customers => "customers",
            ReportTab::Menu => "menu",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.slug() == slug)
    }
}

/// Dados brutos carregados para uma aba, antes da renderização.
#[derive(Debug, Clone)]
pub enum ReportData {
    Sales {
        summary: RevenueSummary,
        trend: Vec<MetricPoint>,
        payment_methods: Vec<MetricPoint>,
    },
    Inventory(Vec<StockItem>),
    Staff(Vec<StaffRecord>),
    Customers(CustomerSegments),
    Menu(Vec<TopSellingItem>),
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCard {
    #[schema(example = "Total revenue")]
    pub label: String,
    #[schema(example = "$12,480.00")]
    pub value: String,
}

// Tabela já formatada: o frontend só desenha as strings
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub tab: ReportTab,
    pub title: String,
    pub period: DateRange,
    pub period_label: String,
    pub cards: Vec<SummaryCard>,
    pub bars: Option<Vec<BarSegment>>,
    pub pie: Option<PieChart>,
    pub table: ReportTable,
}
