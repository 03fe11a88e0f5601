use async_trait::async_trait;
use kreator_catalog::ShopConfig;
use tokio::sync::RwLock;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid service charge base: {0}")]
    InvalidServiceChargeBase(f64),
}

/// Access to the live shop settings
#[async_trait]
pub trait ShopConfigRepository: Send + Sync {
    /// Snapshot handed to the quote engine
    async fn current(&self) -> ShopConfig;

    async fn update_service_charge_base(&self, base: f64) -> Result<ShopConfig, StoreError>;
}

/// Process-lifetime settings, lost on restart
pub struct InMemoryShopConfig {
    config: RwLock<ShopConfig>,
}

impl InMemoryShopConfig {
    pub fn new(initial: ShopConfig) -> Self {
        Self {
            config: RwLock::new(initial),
        }
    }
}

impl Default for InMemoryShopConfig {
    fn default() -> Self {
        Self::new(ShopConfig::default())
    }
}

#[async_trait]
impl ShopConfigRepository for InMemoryShopConfig {
    async fn current(&self) -> ShopConfig {
        *self.config.read().await
    }

    async fn update_service_charge_base(&self, base: f64) -> Result<ShopConfig, StoreError> {
        let updated = ShopConfig::new(base).map_err(|_| StoreError::InvalidServiceChargeBase(base))?;

        let mut config = self.config.write().await;
        let previous = config.service_charge_base;
        *config = updated;

        tracing::info!(previous, current = base, "Service charge base updated");
        Ok(updated)
    }
}
