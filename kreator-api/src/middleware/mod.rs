pub mod auth;

pub use auth::{admin_passcode_middleware, AdminCapability};
