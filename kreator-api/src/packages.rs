use axum::{routing::get, Json, Router};
use kreator_catalog::{PackageInfo, PackageTier};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/packages", get(list_packages))
}

/// GET /v1/packages
/// Tier details the order form uses to pre-check or disable add-ons
async fn list_packages() -> Json<Vec<PackageInfo>> {
    Json(PackageTier::ALL.iter().map(PackageTier::info).collect())
}
