use serde::{Deserialize, Serialize};

use crate::order::OrderRequest;
use crate::package::PackageTier;
use crate::shipping;
use crate::{QuoteError, QuoteResult};

/// Smallest order the shop will quote
pub const MINIMUM_QUANTITY: u32 = 25;

/// Material cost of one figure
pub const UNIT_MATERIAL_COST: f64 = 12.50;
/// Labor per figure
pub const LABOR_COST: f64 = 2.00;
/// Markup applied after the quantity discount
pub const MARGIN_MULTIPLIER: f64 = 1.15;

/// Quantity discount steps, largest threshold first
pub const QUANTITY_DISCOUNTS: [(u32, f64); 5] = [
    (100, 0.06),
    (75, 0.05),
    (50, 0.04),
    (35, 0.03),
    (30, 0.02),
];

const CHARACTER_DESIGN_FEE: f64 = 85.0;
const COMMERCIAL_RIGHTS_FEE: f64 = 25.0;
const PACKAGING_DESIGN_FEE: f64 = 100.0;
const BRANDING_REMOVAL_FEE: f64 = 85.0;
const AD_PACKAGE_FEE: f64 = 500.0;
const PART_SOURCING_FEE: f64 = 25.0;
const CUSTOM_PART_UNIT_FEE: f64 = 4.0;
const CUSTOM_PART_CREATION_FEE: f64 = 150.0;
const PACKAGING_WITH_KEYCHAIN_UNIT: f64 = 2.00;
const PACKAGING_UNIT: f64 = 4.50;
const KEYCHAIN_UNIT: f64 = 3.00;
const LANDING_PAGE_FEE: f64 = 350.0;
const DOMAIN_FEE: f64 = 85.0;

const BULK_SERVICE_THRESHOLD: u32 = 75;
const BULK_SERVICE_MULTIPLIER: f64 = 1.15;
const PACKAGING_SERVICE_MULTIPLIER: f64 = 1.05;
const LANDING_PAGE_SERVICE_MULTIPLIER: f64 = 1.05;
const SOURCING_SERVICE_MULTIPLIER: f64 = 1.03;

/// Share of custom-parts revenue treated as supplier cost
const CUSTOM_PARTS_COST_SHARE: f64 = 0.5;

/// Shop-wide settings the engine reads but never changes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ShopConfig {
    /// Starting point for the service charge before order multipliers
    pub service_charge_base: f64,
}

impl ShopConfig {
    pub const DEFAULT_SERVICE_CHARGE_BASE: f64 = 50.0;

    pub fn new(service_charge_base: f64) -> QuoteResult<Self> {
        let config = Self { service_charge_base };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> QuoteResult<()> {
        if !self.service_charge_base.is_finite() || self.service_charge_base < 0.0 {
            return Err(QuoteError::InvalidInput(format!(
                "service charge base must be a non-negative amount, got {}",
                self.service_charge_base
            )));
        }
        Ok(())
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            service_charge_base: Self::DEFAULT_SERVICE_CHARGE_BASE,
        }
    }
}

/// Every line that contributes to a quote total
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    FiguresSubtotal,
    CharacterDesign,
    CommercialRights,
    PackagingDesign,
    BrandingRemoval,
    AdPackage,
    PartSourcing,
    CustomParts,
    CustomPartCreation,
    PackagingProduction,
    KeychainConversion,
    LandingPage,
    Domains,
    Shipping,
    ServiceCharge,
}

impl LineKind {
    pub fn label(&self) -> &'static str {
        match self {
            LineKind::FiguresSubtotal => "Figures Total",
            LineKind::CharacterDesign => "Character Design",
            LineKind::CommercialRights => "Commercial Rights",
            LineKind::PackagingDesign => "Packaging Design",
            LineKind::BrandingRemoval => "Branding Removal",
            LineKind::AdPackage => "2D/3D Ad Package",
            LineKind::PartSourcing => "Part Sourcing",
            LineKind::CustomParts => "Custom Parts",
            LineKind::CustomPartCreation => "Custom Part Creation",
            LineKind::PackagingProduction => "Packaging Production",
            LineKind::KeychainConversion => "Keychains",
            LineKind::LandingPage => "Landing Page",
            LineKind::Domains => "Domains",
            LineKind::Shipping => "Shipping",
            LineKind::ServiceCharge => "Service Charge",
        }
    }
}

/// Priced order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteBreakdown {
    pub quantity: u32,
    pub package_tier: PackageTier,
    pub figure_discount_rate: f64,
    pub add_on_discount_rate: f64,
    /// Discounted production cost before markup
    pub figures_base_cost: f64,
    pub figures_subtotal: f64,
    pub unit_price: f64,
    pub character_design_fee: f64,
    pub commercial_rights_fee: f64,
    pub packaging_design_fee: f64,
    pub branding_removal_fee: f64,
    pub ad_package_fee: f64,
    pub part_sourcing_fee: f64,
    pub custom_parts_fee: f64,
    pub custom_part_creation_fee: f64,
    pub packaging_production_fee: f64,
    pub keychain_conversion_fee: f64,
    pub landing_page_active: bool,
    pub landing_page_fee: f64,
    pub domain_fee: f64,
    pub shipping_weight_grams: u64,
    pub shipping_cost: f64,
    pub service_charge: f64,
    pub total: f64,
    pub cost_basis: f64,
    pub profit: f64,
}

impl QuoteBreakdown {
    /// Charge lines in presentation order; `total` is their sum
    pub fn line_items(&self) -> [(LineKind, f64); 15] {
        [
            (LineKind::FiguresSubtotal, self.figures_subtotal),
            (LineKind::CharacterDesign, self.character_design_fee),
            (LineKind::CommercialRights, self.commercial_rights_fee),
            (LineKind::PackagingDesign, self.packaging_design_fee),
            (LineKind::BrandingRemoval, self.branding_removal_fee),
            (LineKind::AdPackage, self.ad_package_fee),
            (LineKind::PartSourcing, self.part_sourcing_fee),
            (LineKind::CustomParts, self.custom_parts_fee),
            (LineKind::CustomPartCreation, self.custom_part_creation_fee),
            (LineKind::PackagingProduction, self.packaging_production_fee),
            (LineKind::KeychainConversion, self.keychain_conversion_fee),
            (LineKind::LandingPage, self.landing_page_fee),
            (LineKind::Domains, self.domain_fee),
            (LineKind::Shipping, self.shipping_cost),
            (LineKind::ServiceCharge, self.service_charge),
        ]
    }

    fn sum_lines(&self) -> f64 {
        self.line_items().iter().map(|(_, amount)| amount).sum()
    }
}

/// Quantity step rate, replaced outright by a tier override
pub fn figure_discount_rate(quantity: u32, tier: PackageTier) -> f64 {
    if let Some(rate) = tier.figure_discount_override() {
        return rate;
    }

    QUANTITY_DISCOUNTS
        .iter()
        .find(|(threshold, _)| quantity >= *threshold)
        .map(|(_, rate)| *rate)
        .unwrap_or(0.0)
}

pub fn service_charge(base: f64, order: &OrderRequest, landing_page_active: bool) -> f64 {
    let mut charge = base;

    if order.quantity >= BULK_SERVICE_THRESHOLD {
        charge *= BULK_SERVICE_MULTIPLIER;
    }
    if order.wants_packaging {
        charge *= PACKAGING_SERVICE_MULTIPLIER;
    }
    if landing_page_active {
        charge *= LANDING_PAGE_SERVICE_MULTIPLIER;
    }
    if order.wants_part_sourcing {
        charge *= SOURCING_SERVICE_MULTIPLIER;
    }

    charge
}

/// Price an order against the current shop settings
pub fn compute_quote(order: &OrderRequest, config: &ShopConfig) -> QuoteResult<QuoteBreakdown> {
    if order.quantity < MINIMUM_QUANTITY {
        return Err(QuoteError::MinimumQuantity {
            minimum: MINIMUM_QUANTITY,
            requested: order.quantity,
        });
    }
    config.validate()?;

    let tier = order.package_tier;
    let qty = f64::from(order.quantity);

    let figure_discount_rate = figure_discount_rate(order.quantity, tier);
    let figures_base_cost = (UNIT_MATERIAL_COST + LABOR_COST) * qty * (1.0 - figure_discount_rate);
    let figures_subtotal = figures_base_cost * MARGIN_MULTIPLIER;
    let unit_price = figures_subtotal / qty;

    let add_on_discount_rate = tier.add_on_discount();
    let discounted = |fee: f64| fee * (1.0 - add_on_discount_rate);

    let character_design_fee = if order.design_paid { 0.0 } else { CHARACTER_DESIGN_FEE };

    let commercial_rights_fee = if !tier.includes_commercial_rights() && order.wants_commercial_rights {
        COMMERCIAL_RIGHTS_FEE
    } else {
        0.0
    };

    let packaging_design_fee = if order.wants_packaging && !order.packaging_design_paid {
        PACKAGING_DESIGN_FEE
    } else {
        0.0
    };

    let branding_removal_fee = if order.wants_packaging && !order.branding_paid {
        BRANDING_REMOVAL_FEE
    } else {
        0.0
    };

    let ad_package_fee = if tier.includes_ad_package() { AD_PACKAGE_FEE } else { 0.0 };
    let part_sourcing_fee = if order.wants_part_sourcing { PART_SOURCING_FEE } else { 0.0 };
    let custom_parts_fee = f64::from(order.custom_parts_per_figure) * CUSTOM_PART_UNIT_FEE * qty;
    let custom_part_creation_fee = if order.wants_custom_part_creation {
        CUSTOM_PART_CREATION_FEE
    } else {
        0.0
    };

    let packaging_production_fee = match (order.wants_packaging, order.wants_keychain_conversion) {
        (true, true) => PACKAGING_WITH_KEYCHAIN_UNIT * qty,
        (true, false) => PACKAGING_UNIT * qty,
        (false, _) => 0.0,
    };

    let keychain_conversion_fee = if order.wants_keychain_conversion { KEYCHAIN_UNIT * qty } else { 0.0 };

    let landing_page_active = order.wants_landing_page || tier.includes_landing_page();
    let landing_page_fee = if landing_page_active { LANDING_PAGE_FEE } else { 0.0 };
    let domain_fee = if landing_page_active {
        f64::from(order.domain_count) * DOMAIN_FEE
    } else {
        0.0
    };

    let shipping_weight_grams = shipping::estimate_weight(order.quantity, order.wants_keychain_conversion);
    let shipping_cost = shipping::shipping_cost(shipping_weight_grams);

    let service_charge = service_charge(config.service_charge_base, order, landing_page_active);

    let mut breakdown = QuoteBreakdown {
        quantity: order.quantity,
        package_tier: tier,
        figure_discount_rate,
        add_on_discount_rate,
        figures_base_cost,
        figures_subtotal,
        unit_price,
        character_design_fee,
        commercial_rights_fee: discounted(commercial_rights_fee),
        packaging_design_fee: discounted(packaging_design_fee),
        branding_removal_fee: discounted(branding_removal_fee),
        ad_package_fee: discounted(ad_package_fee),
        part_sourcing_fee: discounted(part_sourcing_fee),
        custom_parts_fee,
        custom_part_creation_fee,
        packaging_production_fee: discounted(packaging_production_fee),
        keychain_conversion_fee: discounted(keychain_conversion_fee),
        landing_page_active,
        landing_page_fee: discounted(landing_page_fee),
        domain_fee: discounted(domain_fee),
        shipping_weight_grams,
        shipping_cost,
        service_charge,
        total: 0.0,
        cost_basis: 0.0,
        profit: 0.0,
    };

    breakdown.total = breakdown.sum_lines();
    // Packaging cost before the add-on discount
    breakdown.cost_basis = breakdown.figures_base_cost
        + packaging_production_fee
        + breakdown.shipping_cost
        + breakdown.custom_parts_fee * CUSTOM_PARTS_COST_SHARE;
    breakdown.profit = breakdown.total - breakdown.cost_basis;

    tracing::debug!(
        quantity = order.quantity,
        tier = %tier,
        total = breakdown.total,
        "Quote computed"
    );

    Ok(breakdown)
}
