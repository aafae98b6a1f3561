// src/config.rs

pub mod settings_store;

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    analytics::format::MetricFormatter,
    db::{AnalyticsSource, PgAnalyticsSource, SettingsRepository, SettingsSource, UpstreamSource},
    middleware::i18n::Locale,
    models::settings::RestaurantSettings,
    services::{
        dashboard_service::DashboardService, inventory_service::InventoryService,
        order_service::OrderService, report_service::{ReportRegistry, ReportService},
        staff_service::StaffService,
    },
};
use settings_store::SettingsStore;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

// Tudo que vem do ambiente (.env é carregado no main)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub upstream_api_url: Option<String>,
    pub bind_addr: String,
    pub db_max_connections: u32,
    pub restaurant_name: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let db_max_connections = match env::var("DB_MAX_CONNECTIONS") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS inválido: '{}'", value))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url: non_empty("DATABASE_URL"),
            upstream_api_url: non_empty("UPSTREAM_API_URL"),
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            db_max_connections,
            restaurant_name: non_empty("RESTAURANT_NAME"),
        })
    }
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[derive(Clone)]
pub struct AppState {
    // Presente só quando os dados vêm do Postgres (migrações no main)
    pub db_pool: Option<PgPool>,
    pub settings_source: Arc<dyn SettingsSource>,
    pub settings: SettingsStore,
    pub dashboard_service: DashboardService,
    pub inventory_service: InventoryService,
    pub staff_service: StaffService,
    pub order_service: OrderService,
    pub report_service: ReportService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let (db_pool, source, settings_source): (Option<PgPool>, Arc<dyn AnalyticsSource>, Arc<dyn SettingsSource>) =
            if let Some(database_url) = &config.database_url {
                let db_pool = PgPoolOptions::new()
                    .max_connections(config.db_max_connections)
                    .acquire_timeout(Duration::from_secs(3))
                    .connect(database_url)
                    .await?;

                tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

                (
                    Some(db_pool.clone()),
                    Arc::new(PgAnalyticsSource::new(db_pool.clone())),
                    Arc::new(SettingsRepository::new(db_pool)),
                )
            } else if let Some(base_url) = &config.upstream_api_url {
                let upstream = Arc::new(UpstreamSource::new(base_url)?);
                tracing::info!("🌐 Usando a API upstream em {}", base_url);

                (None, upstream.clone(), upstream)
            } else {
                anyhow::bail!("Defina DATABASE_URL ou UPSTREAM_API_URL");
            };

        let settings = match settings_source.load_settings().await {
            Ok(Some(settings)) => settings,
            Ok(None) => default_settings(config),
            // Sem configurações salvas o dashboard ainda funciona com os padrões
            Err(e) => {
                tracing::warn!("Não foi possível carregar as configurações: {}", e);
                default_settings(config)
            }
        };

        Ok(Self::from_parts(db_pool, source, settings_source, settings))
    }

    // Monta o gráfico de dependências a partir de fontes já prontas
    pub fn from_parts(
        db_pool: Option<PgPool>,
        source: Arc<dyn AnalyticsSource>,
        settings_source: Arc<dyn SettingsSource>,
        settings: RestaurantSettings,
    ) -> Self {
        Self {
            db_pool,
            settings_source,
            settings: SettingsStore::init(settings),
            dashboard_service: DashboardService::new(source.clone()),
            inventory_service: InventoryService::new(source.clone()),
            staff_service: StaffService::new(source.clone()),
            order_service: OrderService::new(source.clone()),
            report_service: ReportService::new(source, ReportRegistry::default()),
        }
    }

    // Formatação por requisição: idioma do cliente + moeda do restaurante
    pub fn formatter(&self, locale: &Locale) -> MetricFormatter {
        MetricFormatter::for_settings(&locale.0, &self.settings.current())
    }
}

fn default_settings(config: &Config) -> RestaurantSettings {
    let mut settings = RestaurantSettings::default();
    if let Some(name) = &config.restaurant_name {
        settings.restaurant_name = name.clone();
    }
    settings
}
