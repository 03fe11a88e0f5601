pub mod app_config;
pub mod shop;

pub use app_config::Config;
pub use shop::{InMemoryShopConfig, ShopConfigRepository, StoreError};
