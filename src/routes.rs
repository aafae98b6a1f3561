// src/routes.rs

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

pub fn app_router(app_state: AppState) -> Router {
    let dashboard_routes = Router::new()
        .route("/revenue", get(handlers::dashboard::get_revenue))
        .route("/customers", get(handlers::dashboard::get_customers))
        .route("/staff", get(handlers::dashboard::get_staff_performance))
        .route("/top-items", get(handlers::dashboard::get_top_items))
        .route("/inventory-alerts", get(handlers::dashboard::get_inventory_alerts));

    let chart_routes = Router::new()
        .route("/bar", post(handlers::charts::bar_chart))
        .route("/pie", post(handlers::charts::pie_chart))
        .route("/ratio", post(handlers::charts::ratio));

    // O SPA roda em outra origem
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/dashboard", dashboard_routes)
        .route("/api/inventory", get(handlers::inventory::get_inventory))
        .route("/api/staff", get(handlers::staff::list_staff))
        .route("/api/orders", get(handlers::orders::list_orders))
        .route("/api/reports/{tab}", get(handlers::reports::get_report))
        .nest("/api/charts", chart_routes)
        .route(
            "/api/settings",
            get(handlers::settings::get_settings).put(handlers::settings::update_settings),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::{
        common::error::AppError,
        db::{memory::MemoryStore, SettingsSource},
        models::settings::RestaurantSettings,
    };

    fn test_state() -> AppState {
        let store = Arc::new(MemoryStore::sample());
        AppState::from_parts(None, store.clone(), store, RestaurantSettings::default())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app_router(test_state())
            .oneshot(get_request("/api/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_revenue_is_wrapped_in_envelope() {
        let (status, body) = send(app_router(test_state()), get_request("/api/dashboard/revenue")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["totalRevenue"], "$12,480.00");
        assert_eq!(body["data"]["revenueChangeLabel"], "+20.0%");
        assert_eq!(body["data"]["paymentMethods"]["slices"][0]["label"], "card");
    }

    #[tokio::test]
    async fn test_accept_language_changes_separators() {
        let request = Request::builder()
            .uri("/api/dashboard/revenue")
            .header(header::ACCEPT_LANGUAGE, "pt-BR,pt;q=0.9")
            .body(Body::empty())
            .unwrap();
        let (_, body) = send(app_router(test_state()), request).await;

        assert_eq!(body["data"]["totalRevenue"], "$12.480,00");
    }

    #[tokio::test]
    async fn test_inverted_range_is_rejected_in_portuguese() {
        let request = Request::builder()
            .uri("/api/dashboard/customers?from=2026-10-19&to=2026-10-01")
            .header(header::ACCEPT_LANGUAGE, "pt-BR")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app_router(test_state()), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Um ou mais campos são inválidos.");
        assert!(body["details"].is_object());
    }

    #[tokio::test]
    async fn test_date_at_calendar_edge_is_rejected() {
        let (status, body) = send(
            app_router(test_state()),
            get_request("/api/dashboard/customers?to=-262143-01-01"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);

        let (status, _) = send(
            app_router(test_state()),
            get_request("/api/reports/sales?from=-262143-01-01&to=2026-10-19"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_staff_sort_query() {
        let (status, body) = send(
            app_router(test_state()),
            get_request("/api/dashboard/staff?sortBy=totalOrders"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["staff"][0]["name"], "Alice");
        assert_eq!(body["data"]["staff"][1]["name"], "Bruno");
    }

    #[tokio::test]
    async fn test_staff_page_defaults_to_name_order() {
        let (_, body) = send(app_router(test_state()), get_request("/api/staff?role=all")).await;

        let names: Vec<_> = body["data"]["staff"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["Alice", "Bruno", "Carla"]);
    }

    #[tokio::test]
    async fn test_inventory_filters_and_alerts() {
        let (_, body) = send(app_router(test_state()), get_request("/api/inventory?search=farm")).await;
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);

        let (_, body) = send(app_router(test_state()), get_request("/api/dashboard/inventory-alerts")).await;
        assert_eq!(body["data"]["alerts"][0]["status"], "out_of_stock");
        assert_eq!(body["data"]["counts"]["critical"], 1);
    }

    #[tokio::test]
    async fn test_orders_by_status() {
        let (_, body) = send(app_router(test_state()), get_request("/api/orders?status=cancelled")).await;

        assert_eq!(body["data"]["count"], 1);
        assert_eq!(body["data"]["orders"][0]["orderNumber"], "ORD-1003");
        assert_eq!(body["data"]["totalLabel"], "$15.00");
    }

    #[tokio::test]
    async fn test_top_items_limit_is_validated() {
        let (status, _) = send(app_router(test_state()), get_request("/api/dashboard/top-items?limit=0")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(app_router(test_state()), get_request("/api/dashboard/top-items?limit=1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_reports() {
        let (status, body) = send(app_router(test_state()), get_request("/api/reports/customers")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["tab"], "customers");
        assert_eq!(body["data"]["cards"][0]["value"], "120");

        let (status, body) = send(app_router(test_state()), get_request("/api/reports/payroll")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Report 'payroll' does not exist.");
    }

    #[tokio::test]
    async fn test_chart_endpoints() {
        let points = json!({ "points": [
            { "label": "Mon", "value": 50.0 },
            { "label": "Tue", "value": 100.0 }
        ]});

        let (_, body) = send(app_router(test_state()), json_request(Method::POST, "/api/charts/bar", points.clone())).await;
        assert_eq!(body["data"][0]["heightPercent"], 50.0);

        let (_, body) = send(app_router(test_state()), json_request(Method::POST, "/api/charts/pie", points)).await;
        assert_eq!(body["data"]["total"], 150.0);
        assert_eq!(body["data"]["slices"].as_array().unwrap().len(), 2);

        let (_, body) = send(
            app_router(test_state()),
            json_request(Method::POST, "/api/charts/ratio", json!({ "parts": [1.0, 3.0] })),
        )
        .await;
        assert_eq!(body["data"]["percentages"], json!([25.0, 75.0]));

        let (status, _) = send(
            app_router(test_state()),
            json_request(Method::POST, "/api/charts/ratio", json!({ "parts": [-1.0] })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_settings_update_propagates() {
        let state = test_state();
        let mut changes = state.settings.subscribe();

        let (status, body) = send(
            app_router(state.clone()),
            json_request(
                Method::PUT,
                "/api/settings",
                json!({ "restaurantName": "Cantina", "currencyCode": "brl", "currencySymbol": "R$" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["currencyCode"], "BRL");
        assert!(changes.has_changed().unwrap());
        assert_eq!(state.settings.current().restaurant_name, "Cantina");

        // O símbolo novo aparece na formatação seguinte
        let (_, body) = send(app_router(state), get_request("/api/dashboard/revenue")).await;
        assert_eq!(body["data"]["totalRevenue"], "R$12,480.00");
    }

    // Salvamento lento: força os dois PUTs a se sobreporem
    struct SlowSettings(MemoryStore);

    #[async_trait::async_trait]
    impl SettingsSource for SlowSettings {
        async fn load_settings(&self) -> Result<Option<RestaurantSettings>, AppError> {
            self.0.load_settings().await
        }

        async fn save_settings(&self, settings: &RestaurantSettings) -> Result<RestaurantSettings, AppError> {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            self.0.save_settings(settings).await
        }
    }

    #[tokio::test]
    async fn test_concurrent_settings_updates_keep_both_fields() {
        let state = AppState::from_parts(
            None,
            Arc::new(MemoryStore::sample()),
            Arc::new(SlowSettings(MemoryStore::sample())),
            RestaurantSettings::default(),
        );

        let (first, second) = tokio::join!(
            send(
                app_router(state.clone()),
                json_request(Method::PUT, "/api/settings", json!({ "restaurantName": "Cantina" })),
            ),
            send(
                app_router(state.clone()),
                json_request(Method::PUT, "/api/settings", json!({ "theme": "dark" })),
            ),
        );

        assert_eq!(first.0, StatusCode::OK);
        assert_eq!(second.0, StatusCode::OK);

        let current = state.settings.current();
        assert_eq!(current.restaurant_name, "Cantina");
        assert_eq!(current.theme, "dark");
    }

    #[tokio::test]
    async fn test_invalid_settings_are_not_saved() {
        let state = test_state();
        let (status, body) = send(
            app_router(state.clone()),
            json_request(Method::PUT, "/api/settings", json!({ "theme": "neon" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["details"]["theme"].is_array());
        assert_eq!(state.settings.current(), RestaurantSettings::default());
    }
}
