use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;
use crate::shared::app_state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Category registry
        .route(
            "/api/profit-categories",
            get(handlers::a001_profit_distribution_config::list_categories),
        )
        // ========================================
        // A001 Distribution configuration
        // ========================================
        .route(
            "/api/owners/:owner_id/distribution-config",
            get(handlers::a001_profit_distribution_config::list)
                .post(handlers::a001_profit_distribution_config::upsert),
        )
        .route(
            "/api/owners/:owner_id/distribution-config/defaults",
            post(handlers::a001_profit_distribution_config::apply_defaults),
        )
        .route(
            "/api/owners/:owner_id/distribution-config/status",
            get(handlers::a001_profit_distribution_config::status),
        )
        .route(
            "/api/owners/:owner_id/distribution-config/:category",
            axum::routing::delete(handlers::a001_profit_distribution_config::remove),
        )
        // ========================================
        // U501 / U502 Simulation and execution
        // ========================================
        .route(
            "/api/owners/:owner_id/distribution/simulate",
            post(handlers::usecases::u501_simulate),
        )
        .route(
            "/api/owners/:owner_id/distribution/scenarios",
            post(handlers::usecases::u501_scenarios),
        )
        .route(
            "/api/owners/:owner_id/distribution/preview",
            post(handlers::usecases::u502_preview),
        )
        .route(
            "/api/owners/:owner_id/distribution/execute",
            post(handlers::usecases::u502_execute),
        )
        // ========================================
        // A002 Distribution history, D401 summary
        // ========================================
        .route(
            "/api/owners/:owner_id/distributions",
            get(handlers::a002_profit_distribution::list),
        )
        .route(
            "/api/owners/:owner_id/distributions/summary",
            get(handlers::d401_distribution_history::get_summary),
        )
        .route(
            "/api/owners/:owner_id/distributions/:id",
            get(handlers::a002_profit_distribution::get_by_id)
                .delete(handlers::a002_profit_distribution::delete),
        )
        // ========================================
        // A003 Attendances, D400 financial summary
        // ========================================
        .route(
            "/api/owners/:owner_id/attendances",
            get(handlers::a003_attendance::list).post(handlers::a003_attendance::create),
        )
        .route(
            "/api/owners/:owner_id/attendances/:id",
            get(handlers::a003_attendance::get_by_id).delete(handlers::a003_attendance::delete),
        )
        .route(
            "/api/owners/:owner_id/attendances/:id/payment-status",
            post(handlers::a003_attendance::set_payment_status),
        )
        .route(
            "/api/owners/:owner_id/financial-summary",
            get(handlers::d400_financial_summary::get_summary),
        )
        .route(
            "/api/owners/:owner_id/financial-summary/monthly",
            get(handlers::d400_financial_summary::get_monthly_report),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::parse_config;
    use crate::shared::data::db::test_connection;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn app(enforce_full_allocation: bool) -> Router {
        let mut config = parse_config("[database]\npath = \"unused.db\"\n").unwrap();
        config.distribution.enforce_full_allocation = enforce_full_allocation;
        configure_routes(AppState::new(test_connection().await, config))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let request = match body {
            Some(body) => request.body(Body::from(body.to_string())).unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health_and_categories() {
        let app = app(false).await;

        let (status, _) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, "GET", "/api/profit-categories", None).await;
        assert_eq!(status, StatusCode::OK);
        let codes: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["code"].as_str().unwrap())
            .collect();
        assert_eq!(
            codes,
            vec!["pro_labore", "equipment_reserve", "emergency_reserve", "investment"]
        );
    }

    #[tokio::test]
    async fn test_configure_simulate_execute_flow() {
        let app = app(false).await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/owners/salon-1/distribution-config/defaults",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 4);

        let (status, body) = send(
            &app,
            "POST",
            "/api/owners/salon-1/distribution-config",
            Some(json!({"category": "equipment_reserve", "percentage": 35})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["percentage"], json!(35.0));

        let (status, body) = send(
            &app,
            "GET",
            "/api/owners/salon-1/distribution-config/status",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_over_allocated"], json!(true));

        let (status, body) = send(
            &app,
            "POST",
            "/api/owners/salon-1/distribution/simulate",
            Some(json!({"total_profit": 1000})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["allocations"][1]["amount"], json!(350.0));

        let (status, body) = send(
            &app,
            "POST",
            "/api/owners/salon-1/distribution/execute",
            Some(json!({
                "month": 4,
                "year": 2025,
                "financials": {"total_revenue": 1500, "total_costs": 500, "total_profit": 1000}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["pro_labore_amount"], json!(600.0));
        let record_id = body["id"].as_str().unwrap().to_string();

        let (status, body) = send(&app, "GET", "/api/owners/salon-1/distributions", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, body) = send(
            &app,
            "GET",
            &format!("/api/owners/salon-1/distributions/{}", record_id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_profit"], json!(1000.0));

        let (status, _) = send(
            &app,
            "DELETE",
            &format!("/api/owners/salon-1/distributions/{}", record_id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_error_responses() {
        let app = app(true).await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/owners/salon-1/distribution-config",
            Some(json!({"category": "pro_labore", "percentage": 120})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("VALIDATION_ERROR"));

        let (status, body) = send(
            &app,
            "DELETE",
            "/api/owners/salon-1/distribution-config/investment",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], json!("NOT_FOUND"));

        send(
            &app,
            "POST",
            "/api/owners/salon-1/distribution-config",
            Some(json!({"category": "pro_labore", "percentage": 85})),
        )
        .await;
        let (status, body) = send(
            &app,
            "POST",
            "/api/owners/salon-1/distribution/execute",
            Some(json!({"month": 4, "year": 2025})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], json!("ALLOCATION_MISMATCH"));

        // Неизвестная категория отклоняется еще при разборе запроса
        let (status, body) = send(
            &app,
            "POST",
            "/api/owners/salon-1/distribution/simulate",
            Some(json!({
                "total_profit": 1000,
                "percentages": {"source": "override", "allocations": [{"category": "marketing", "percentage": 10}]}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn test_malformed_requests_use_error_body() {
        let app = app(false).await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/owners/salon-1/distribution-config",
            Some(json!({"category": "marketing", "percentage": 10})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("VALIDATION_ERROR"));
        assert!(body["message"].as_str().unwrap().contains("marketing"));

        let request = Request::builder()
            .method("POST")
            .uri("/api/owners/salon-1/distribution/simulate")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], json!("VALIDATION_ERROR"));

        let (status, body) = send(
            &app,
            "GET",
            "/api/owners/salon-1/distributions?year=abc",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn test_records_are_scoped_to_owner() {
        let app = app(false).await;
        send(
            &app,
            "POST",
            "/api/owners/salon-1/distribution-config/defaults",
            None,
        )
        .await;
        let (status, body) = send(
            &app,
            "POST",
            "/api/owners/salon-1/distribution/execute",
            Some(json!({
                "month": 4,
                "year": 2025,
                "financials": {"total_revenue": 1500, "total_costs": 500, "total_profit": 1000}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let record_uri = format!(
            "/api/owners/salon-2/distributions/{}",
            body["id"].as_str().unwrap()
        );

        let (status, body) = send(&app, "GET", &record_uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], json!("NOT_FOUND"));
        let (status, _) = send(&app, "DELETE", &record_uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, "GET", "/api/owners/salon-1/distributions", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, body) = send(
            &app,
            "POST",
            "/api/owners/salon-1/attendances",
            Some(json!({"date": "2025-04-02", "value": 150})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let attendance_id = body["id"].as_str().unwrap().to_string();

        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/owners/salon-2/attendances/{}/payment-status", attendance_id),
            Some(json!({"payment_status": "refunded"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(
            &app,
            "GET",
            &format!("/api/owners/salon-1/attendances/{}", attendance_id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["payment_status"], json!("pending"));
    }
}
