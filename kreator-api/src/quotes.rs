use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Utc};
use kreator_catalog::{
    applicable_lines, compute_quote, LineKind, OrderForm, OrderRequest, PackageTier,
    QuoteBreakdown, QuoteSummary, SummaryView, DISCLAIMER,
};
use serde::Serialize;
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct QuoteLine {
    pub kind: LineKind,
    pub label: &'static str,
    pub amount: f64,
}

/// Customer-facing breakdown: charge lines only, no cost basis or profit
#[derive(Debug, Serialize)]
pub struct PublicBreakdown {
    pub quantity: u32,
    pub package_tier: PackageTier,
    pub figure_discount_rate: f64,
    pub add_on_discount_rate: f64,
    pub unit_price: f64,
    pub landing_page_active: bool,
    pub shipping_weight_grams: u64,
    pub lines: Vec<QuoteLine>,
}

impl PublicBreakdown {
    /// Same lines the markdown summary lists
    pub fn new(b: &QuoteBreakdown, order: &OrderRequest) -> Self {
        Self {
            quantity: b.quantity,
            package_tier: b.package_tier,
            figure_discount_rate: b.figure_discount_rate,
            add_on_discount_rate: b.add_on_discount_rate,
            unit_price: b.unit_price,
            landing_page_active: b.landing_page_active,
            shipping_weight_grams: b.shipping_weight_grams,
            lines: applicable_lines(b, order)
                .into_iter()
                .map(|(kind, amount)| QuoteLine {
                    kind,
                    label: kind.label(),
                    amount,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse<B> {
    pub quote_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub total: f64,
    pub summary: String,
    pub disclaimer: &'static str,
    pub breakdown: B,
}

impl<B> QuoteResponse<B> {
    pub fn new(total: f64, summary: String, breakdown: B) -> Self {
        Self {
            quote_id: Uuid::new_v4(),
            issued_at: Utc::now(),
            total,
            summary,
            disclaimer: DISCLAIMER,
            breakdown,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/quotes", post(create_quote))
        .route("/v1/quotes/custom-parts", post(create_custom_part_quote))
}

/// Validate the form and price it against the current shop settings
pub async fn price_order(
    state: &AppState,
    form: OrderForm,
) -> Result<(OrderRequest, QuoteBreakdown), AppError> {
    let order = OrderRequest::try_from(form)?;
    let config = state.shop.current().await;

    let breakdown = compute_quote(&order, &config).map_err(|e| {
        tracing::info!(quantity = order.quantity, "Quote rejected: {}", e);
        e
    })?;

    Ok((order, breakdown))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/quotes
async fn create_quote(
    State(state): State<AppState>,
    payload: Result<Json<OrderForm>, JsonRejection>,
) -> Result<Json<QuoteResponse<PublicBreakdown>>, AppError> {
    let Json(form) = payload?;
    let (order, breakdown) = price_order(&state, form).await?;
    let summary = QuoteSummary::render(&breakdown, &order, SummaryView::Full, false);

    Ok(Json(QuoteResponse::new(
        breakdown.total,
        summary,
        PublicBreakdown::new(&breakdown, &order),
    )))
}

/// POST /v1/quotes/custom-parts
async fn create_custom_part_quote(
    State(state): State<AppState>,
    payload: Result<Json<OrderForm>, JsonRejection>,
) -> Result<Json<QuoteResponse<PublicBreakdown>>, AppError> {
    let Json(form) = payload?;
    let (order, breakdown) = price_order(&state, form).await?;
    let summary = QuoteSummary::render(&breakdown, &order, SummaryView::CustomParts, false);

    Ok(Json(QuoteResponse::new(
        breakdown.total,
        summary,
        PublicBreakdown::new(&breakdown, &order),
    )))
}
