//src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use restaurant_analytics::{
    config::{settings_store::spawn_change_logger, AppState, Config},
    routes::app_router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // RUST_LOG controla o nível; sem ele, info
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    let app_state = AppState::new(&config).await?;

    // Faz o app rodar as migrações do SQLx na inicialização (só no modo Postgres)
    if let Some(db_pool) = &app_state.db_pool {
        sqlx::migrate!().run(db_pool).await?;
        tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");
    }

    let _settings_logger = spawn_change_logger(&app_state.settings);
    tracing::info!(
        "🍽️ Restaurante '{}' carregado",
        app_state.settings.current().restaurant_name
    );

    let app = app_router(app_state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
