use axum::{
    extract::{rejection::JsonRejection, State},
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use kreator_catalog::{OrderForm, QuoteBreakdown, QuoteSummary, ShopConfig, SummaryView};
use serde::Deserialize;

use crate::middleware::auth::{admin_passcode_middleware, require, AdminCapability};
use crate::quotes::{price_order, QuoteResponse};
use crate::{error::AppError, state::AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct UpdateShopConfigRequest {
    pub service_charge_base: f64,
}

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/v1/admin/quotes", post(create_profit_quote))
        .route(
            "/v1/admin/shop-config",
            get(get_shop_config).put(update_shop_config),
        )
        .route_layer(middleware::from_fn_with_state(state, admin_passcode_middleware))
}

// ============================================================================
// Profit View Handlers
// ============================================================================

/// POST /v1/admin/quotes
async fn create_profit_quote(
    State(state): State<AppState>,
    Extension(capability): Extension<AdminCapability>,
    payload: Result<Json<OrderForm>, JsonRejection>,
) -> Result<Json<QuoteResponse<QuoteBreakdown>>, AppError> {
    require(capability, AdminCapability::ProfitView)?;
    let Json(form) = payload?;

    let (order, breakdown) = price_order(&state, form).await?;
    let summary = QuoteSummary::render(
        &breakdown,
        &order,
        SummaryView::Full,
        order.include_profit_in_output,
    );

    Ok(Json(QuoteResponse::new(breakdown.total, summary, breakdown)))
}

// ============================================================================
// Shop Config Handlers
// ============================================================================

/// GET /v1/admin/shop-config
async fn get_shop_config(
    State(state): State<AppState>,
    Extension(capability): Extension<AdminCapability>,
) -> Result<Json<ShopConfig>, AppError> {
    require(capability, AdminCapability::ConfigEditor)?;
    Ok(Json(state.shop.current().await))
}

/// PUT /v1/admin/shop-config
async fn update_shop_config(
    State(state): State<AppState>,
    Extension(capability): Extension<AdminCapability>,
    payload: Result<Json<UpdateShopConfigRequest>, JsonRejection>,
) -> Result<Json<ShopConfig>, AppError> {
    require(capability, AdminCapability::ConfigEditor)?;
    let Json(req) = payload?;

    let updated = state
        .shop
        .update_service_charge_base(req.service_charge_base)
        .await?;

    Ok(Json(updated))
}
