use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use kreator_api::{app, AdminPasscodes, AppState};
use kreator_store::InMemoryShopConfig;
use serde_json::{json, Value};
use tower::ServiceExt;

const PROFIT_PASSCODE: &str = "5150";
const CONFIG_PASSCODE: &str = "5051";

fn test_app() -> Router {
    app(AppState {
        shop: Arc::new(InMemoryShopConfig::default()),
        admin: AdminPasscodes {
            profit: PROFIT_PASSCODE.to_string(),
            config: CONFIG_PASSCODE.to_string(),
        },
    })
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    passcode: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(code) = passcode {
        builder = builder.header("x-admin-passcode", code);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn starter_order(quantity: i64) -> Value {
    json!({
        "quantity": quantity,
        "package_tier": "Starter Package",
        "design_paid": true,
        "packaging_design_paid": true,
        "branding_paid": true
    })
}

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_packages() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/v1/packages", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let tiers = body.as_array().unwrap();
    assert_eq!(tiers.len(), 4);
    assert_eq!(tiers[0]["name"], "Starter Package");
    assert_eq!(tiers[0]["commercial_rights_included"], false);
    assert_eq!(tiers[3]["tier"], "ENTERPRISE");
    assert_eq!(tiers[3]["landing_page_included"], true);
}

#[tokio::test]
async fn test_public_quote_hides_profit() {
    let app = test_app();
    let (status, body) = send(&app, "POST", "/v1/quotes", None, Some(starter_order(50))).await;
    assert_eq!(status, StatusCode::OK);

    let total = body["total"].as_f64().unwrap();
    assert!((total - 872.40).abs() < 1e-6);
    assert!(body["summary"].as_str().unwrap().contains("- **Total: $872.40**"));
    assert!(!body["summary"].as_str().unwrap().contains("Profit"));
    assert!(body["disclaimer"].as_str().unwrap().contains("Estimate only"));
    assert!(body["breakdown"].get("profit").is_none());
    assert!(body["breakdown"].get("cost_basis").is_none());

    let lines = body["breakdown"]["lines"].as_array().unwrap();
    let kinds: Vec<&str> = lines.iter().map(|l| l["kind"].as_str().unwrap()).collect();
    assert_eq!(kinds, vec!["figures_subtotal", "shipping", "service_charge"]);
}

#[tokio::test]
async fn test_public_quote_ignores_profit_flag() {
    let app = test_app();
    let mut order = starter_order(50);
    order["include_profit_in_output"] = json!(true);

    let (status, body) = send(&app, "POST", "/v1/quotes", None, Some(order)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["summary"].as_str().unwrap().contains("Profit"));
}

#[tokio::test]
async fn test_minimum_quantity_rejected() {
    let app = test_app();
    let (status, body) = send(&app, "POST", "/v1/quotes", None, Some(starter_order(24))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Minimum order quantity is 25.");
}

#[tokio::test]
async fn test_invalid_input_rejected() {
    let app = test_app();

    let (status, _) = send(&app, "POST", "/v1/quotes", None, Some(starter_order(-3))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let order = json!({ "quantity": 30, "package_tier": "Platinum" });
    let (status, body) = send(&app, "POST", "/v1/quotes", None, Some(order)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Platinum"));
}

#[tokio::test]
async fn test_malformed_body_returns_json_error() {
    let app = test_app();

    for order in [
        json!({ "quantity": "fifty", "package_tier": "Starter" }),
        json!({ "quantity": 1e20, "package_tier": "Starter" }),
    ] {
        let (status, body) = send(&app, "POST", "/v1/quotes", None, Some(order)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    let request = Request::builder()
        .method("POST")
        .uri("/v1/quotes")
        .header("content-type", "application/json")
        .body(Body::from("not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()["content-type"], "application/json");
}

#[tokio::test]
async fn test_malformed_admin_update_returns_json_error() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "PUT",
        "/v1/admin/shop-config",
        Some(CONFIG_PASSCODE),
        Some(json!({ "service_charge_base": "lots" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_breakdown_lines_match_summary() {
    let app = test_app();
    let (status, _) = send(
        &app,
        "PUT",
        "/v1/admin/shop-config",
        Some(CONFIG_PASSCODE),
        Some(json!({ "service_charge_base": 0.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let mut order = starter_order(30);
    order["wants_part_sourcing"] = json!(true);
    let (status, body) = send(&app, "POST", "/v1/quotes", None, Some(order)).await;
    assert_eq!(status, StatusCode::OK);

    let summary = body["summary"].as_str().unwrap();
    assert!(summary.contains("- Service Charge: $0.00"));
    let kinds: Vec<&str> = body["breakdown"]["lines"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["kind"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec!["figures_subtotal", "part_sourcing", "shipping", "service_charge"]
    );
}

#[tokio::test]
async fn test_custom_part_quote() {
    let app = test_app();
    let order = json!({
        "quantity": 25,
        "package_tier": "Starter",
        "custom_parts_per_figure": 1,
        "wants_custom_part_creation": true
    });

    let (status, body) = send(&app, "POST", "/v1/quotes/custom-parts", None, Some(order)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["summary"],
        "### Quote Summary\n- Custom Parts (1 ea): $100.00\n- Custom Part Creation: $150.00\n- Shipping: $18.00\n- Service Charge: $50.00"
    );
}

#[tokio::test]
async fn test_admin_requires_passcode() {
    let app = test_app();

    let (status, body) = send(&app, "POST", "/v1/admin/quotes", None, Some(starter_order(50))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Password required");

    let (status, body) =
        send(&app, "POST", "/v1/admin/quotes", Some("1234"), Some(starter_order(50))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Incorrect password");
}

#[tokio::test]
async fn test_profit_quote() {
    let app = test_app();
    let mut order = starter_order(50);
    order["include_profit_in_output"] = json!(true);

    let (status, body) =
        send(&app, "POST", "/v1/admin/quotes", Some(PROFIT_PASSCODE), Some(order)).await;
    assert_eq!(status, StatusCode::OK);

    let summary = body["summary"].as_str().unwrap();
    assert!(summary.starts_with("### Quote Summary with Profit"));
    assert!(summary.contains("- **Profit: $"));

    let profit = body["breakdown"]["profit"].as_f64().unwrap();
    let cost_basis = body["breakdown"]["cost_basis"].as_f64().unwrap();
    let total = body["breakdown"]["total"].as_f64().unwrap();
    assert!((total - cost_basis - profit).abs() < 1e-9);
}

#[tokio::test]
async fn test_capabilities_do_not_overlap() {
    let app = test_app();

    let (status, _) =
        send(&app, "POST", "/v1/admin/quotes", Some(CONFIG_PASSCODE), Some(starter_order(50))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, "GET", "/v1/admin/shop-config", Some(PROFIT_PASSCODE), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_service_charge_update_applies_to_later_quotes() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/v1/admin/shop-config", Some(CONFIG_PASSCODE), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service_charge_base"], 50.0);

    let (status, body) = send(
        &app,
        "PUT",
        "/v1/admin/shop-config",
        Some(CONFIG_PASSCODE),
        Some(json!({ "service_charge_base": 100.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service_charge_base"], 100.0);

    let (_, body) = send(&app, "POST", "/v1/quotes", None, Some(starter_order(50))).await;
    assert!(body["summary"].as_str().unwrap().contains("- Service Charge: $100.00"));
    let total = body["total"].as_f64().unwrap();
    assert!((total - 922.40).abs() < 1e-6);
}

#[tokio::test]
async fn test_service_charge_update_rejects_negative() {
    let app = test_app();
    let (status, _) = send(
        &app,
        "PUT",
        "/v1/admin/shop-config",
        Some(CONFIG_PASSCODE),
        Some(json!({ "service_charge_base": -10.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, "GET", "/v1/admin/shop-config", Some(CONFIG_PASSCODE), None).await;
    assert_eq!(body["service_charge_base"], 50.0);
}
