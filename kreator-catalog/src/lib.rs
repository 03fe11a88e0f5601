pub mod package;
pub mod order;
pub mod pricing;
pub mod shipping;
pub mod summary;

pub use package::{PackageTier, PackageInfo};
pub use order::{OrderForm, OrderRequest};
pub use pricing::{compute_quote, LineKind, QuoteBreakdown, ShopConfig, MINIMUM_QUANTITY};
pub use summary::{applicable_lines, QuoteSummary, SummaryView, DISCLAIMER};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuoteError {
    #[error("Minimum order quantity is {minimum}.")]
    MinimumQuantity { minimum: u32, requested: u32 },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type QuoteResult<T> = Result<T, QuoteError>;
