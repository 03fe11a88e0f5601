use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

pub const PASSCODE_HEADER: &str = "x-admin-passcode";

/// What an operator unlocked with their passcode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminCapability {
    /// Quotes with cost basis and profit
    ProfitView,
    /// Service charge base editor
    ConfigEditor,
}

// ============================================================================
// Admin Passcode Middleware
// ============================================================================

pub async fn admin_passcode_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let passcode = req
        .headers()
        .get(PASSCODE_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Password required".to_string()))?;

    let capability = state.admin.resolve(passcode).ok_or_else(|| {
        tracing::warn!(path = %req.uri().path(), "Rejected admin passcode");
        AppError::AuthenticationError("Incorrect password".to_string())
    })?;

    req.extensions_mut().insert(capability);

    Ok(next.run(req).await)
}

// ============================================================================
// Capability Check Helper
// ============================================================================

pub fn require(granted: AdminCapability, needed: AdminCapability) -> Result<(), AppError> {
    if granted != needed {
        return Err(AppError::AuthorizationError(format!(
            "{:?} access required",
            needed
        )));
    }
    Ok(())
}
