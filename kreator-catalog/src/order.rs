use serde::{Deserialize, Serialize};

use crate::package::PackageTier;
use crate::QuoteError;

/// A validated order, ready to be priced
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderRequest {
    pub quantity: u32,
    pub package_tier: PackageTier,
    pub design_paid: bool,
    pub packaging_design_paid: bool,
    pub branding_paid: bool,
    pub wants_commercial_rights: bool,
    pub wants_packaging: bool,
    pub wants_keychain_conversion: bool,
    pub wants_part_sourcing: bool,
    pub wants_landing_page: bool,
    pub wants_custom_part_creation: bool,
    pub custom_parts_per_figure: u32,
    pub domain_count: u32,
    pub include_profit_in_output: bool,
}

impl OrderRequest {
    /// Bare order: nothing paid up front, no add-ons
    pub fn new(quantity: u32, package_tier: PackageTier) -> Self {
        Self {
            quantity,
            package_tier,
            design_paid: false,
            packaging_design_paid: false,
            branding_paid: false,
            wants_commercial_rights: false,
            wants_packaging: false,
            wants_keychain_conversion: false,
            wants_part_sourcing: false,
            wants_landing_page: false,
            wants_custom_part_creation: false,
            custom_parts_per_figure: 0,
            domain_count: 0,
            include_profit_in_output: false,
        }
    }
}

/// Order fields as submitted by a client form
///
/// Counts are signed and the tier is free text so that bad input can be
/// reported instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OrderForm {
    pub quantity: i64,
    pub package_tier: String,
    pub design_paid: bool,
    pub packaging_design_paid: bool,
    pub branding_paid: bool,
    pub wants_commercial_rights: bool,
    pub wants_packaging: bool,
    pub wants_keychain_conversion: bool,
    pub wants_part_sourcing: bool,
    pub wants_landing_page: bool,
    pub wants_custom_part_creation: bool,
    pub custom_parts_per_figure: i64,
    pub domain_count: i64,
    pub include_profit_in_output: bool,
}

fn count(field: &str, value: i64) -> Result<u32, QuoteError> {
    u32::try_from(value).map_err(|_| {
        QuoteError::InvalidInput(format!("{} must be between 0 and {}, got {}", field, u32::MAX, value))
    })
}

impl TryFrom<OrderForm> for OrderRequest {
    type Error = QuoteError;

    fn try_from(form: OrderForm) -> Result<Self, Self::Error> {
        Ok(Self {
            quantity: count("quantity", form.quantity)?,
            package_tier: form.package_tier.parse()?,
            design_paid: form.design_paid,
            packaging_design_paid: form.packaging_design_paid,
            branding_paid: form.branding_paid,
            wants_commercial_rights: form.wants_commercial_rights,
            wants_packaging: form.wants_packaging,
            wants_keychain_conversion: form.wants_keychain_conversion,
            wants_part_sourcing: form.wants_part_sourcing,
            wants_landing_page: form.wants_landing_page,
            wants_custom_part_creation: form.wants_custom_part_creation,
            custom_parts_per_figure: count("custom_parts_per_figure", form.custom_parts_per_figure)?,
            domain_count: count("domain_count", form.domain_count)?,
            include_profit_in_output: form.include_profit_in_output,
        })
    }
}
