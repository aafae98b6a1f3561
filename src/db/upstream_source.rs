// src/db/upstream_source.rs

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::{
    common::{envelope::ApiEnvelope, error::AppError},
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

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Lê os agregados do backend REST operacional.
/// Toda resposta é um `ApiEnvelope` desembrulhado uma única vez aqui.
#[derive(Clone)]
pub struct UpstreamSource {
    client: reqwest::Client,
    base_url: String,
}

impl UpstreamSource {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, AppError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        // Não usamos error_for_status: respostas 4xx/5xx também vêm em envelope com `message`
        let envelope = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .json::<ApiEnvelope<T>>()
            .await?;

        Ok(envelope.into_result()?)
    }
}

fn range_params(range: &DateRange) -> Vec<(&'static str, String)> {
    vec![("from", range.from.to_string()), ("to", range.to.to_string())]
}

#[async_trait]
impl AnalyticsSource for UpstreamSource {
    async fn revenue_summary(&self, range: &DateRange) -> Result<RevenueSummary, AppError> {
        self.get("/reports/revenue", &range_params(range)).await
    }

    async fn revenue_trend(&self, range: &DateRange) -> Result<Vec<MetricPoint>, AppError> {
        self.get("/reports/revenue/trend", &range_params(range)).await
    }

    async fn payment_methods(&self, range: &DateRange) -> Result<Vec<MetricPoint>, AppError> {
        self.get("/reports/payment-methods", &range_params(range)).await
    }

    async fn customer_segments(&self, range: &DateRange) -> Result<CustomerSegments, AppError> {
        self.get("/reports/customers", &range_params(range)).await
    }

    async fn top_items(&self, range: &DateRange, limit: u32) -> Result<Vec<TopSellingItem>, AppError> {
        let mut params = range_params(range);
        params.push(("limit", limit.to_string()));
        self.get("/reports/top-items", &params).await
    }

    async fn stock_items(&self) -> Result<Vec<StockItem>, AppError> {
        self.get("/inventory", &[]).await
    }

    async fn staff_performance(&self, range: &DateRange) -> Result<Vec<StaffRecord>, AppError> {
        self.get("/staff/performance", &range_params(range)).await
    }

    async fn orders(&self, range: &DateRange) -> Result<Vec<OrderSummary>, AppError> {
        self.get("/orders", &range_params(range)).await
    }
}

#[async_trait]
impl SettingsSource for UpstreamSource {
    async fn load_settings(&self) -> Result<Option<RestaurantSettings>, AppError> {
        let settings = self.get::<RestaurantSettings>("/settings", &[]).await?;
        Ok(Some(settings))
    }

    async fn save_settings(&self, settings: &RestaurantSettings) -> Result<RestaurantSettings, AppError> {
        let envelope = self
            .client
            .put(self.url("/settings"))
            .json(settings)
            .send()
            .await?
            .json::<ApiEnvelope<RestaurantSettings>>()
            .await?;

        Ok(envelope.into_result()?)
    }
}
