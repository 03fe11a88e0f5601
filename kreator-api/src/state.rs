use std::sync::Arc;
use kreator_store::ShopConfigRepository;

use crate::middleware::auth::AdminCapability;

#[derive(Clone)]
pub struct AdminPasscodes {
    pub profit: String,
    pub config: String,
}

impl AdminPasscodes {
    pub fn resolve(&self, passcode: &str) -> Option<AdminCapability> {
        if passcode == self.profit {
            Some(AdminCapability::ProfitView)
        } else if passcode == self.config {
            Some(AdminCapability::ConfigEditor)
        } else {
            None
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub shop: Arc<dyn ShopConfigRepository>,
    pub admin: AdminPasscodes,
}
