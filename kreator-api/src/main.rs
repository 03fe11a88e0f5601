use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use kreator_api::{app, AdminPasscodes, AppState};
use kreator_catalog::ShopConfig;
use kreator_store::InMemoryShopConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kreator_api=debug,kreator_store=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = kreator_store::Config::load().context("Failed to load config")?;
    tracing::info!("Starting Kreator quote API on port {}", config.server.port);

    let initial = ShopConfig::new(config.shop.service_charge_base)
        .context("Invalid shop.service_charge_base")?;
    tracing::info!(service_charge_base = initial.service_charge_base, "Shop config initialized");

    let app_state = AppState {
        shop: Arc::new(InMemoryShopConfig::new(initial)),
        admin: AdminPasscodes {
            profit: config.admin.profit_passcode.clone(),
            config: config.admin.config_passcode.clone(),
        },
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
