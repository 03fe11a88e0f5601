use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::QuoteError;

/// Service levels a customer can order under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageTier {
    Starter,
    Pro,
    Premium,
    Enterprise,
}

impl PackageTier {
    pub const ALL: [PackageTier; 4] = [
        PackageTier::Starter,
        PackageTier::Pro,
        PackageTier::Premium,
        PackageTier::Enterprise,
    ];

    /// Display name used on quotes, e.g. "Pro Package"
    pub fn display_name(&self) -> &'static str {
        match self {
            PackageTier::Starter => "Starter Package",
            PackageTier::Pro => "Pro Package",
            PackageTier::Premium => "Premium Package",
            PackageTier::Enterprise => "Enterprise Package",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PackageTier::Starter => "Includes: 25 figures + Character Design",
            PackageTier::Pro => {
                "Includes: Starter + Priority Review + 10% off add-ons + Commercial Rights + Part Sourcing"
            }
            PackageTier::Premium => "Includes: Pro + Custom Packaging + 2D/3D Ad + 10% off add-ons",
            PackageTier::Enterprise => {
                "Includes: Premium + Remove Branding + Part Sourcing + 15% off add-ons"
            }
        }
    }

    /// Flat figure discount that replaces the quantity-based rate
    pub fn figure_discount_override(&self) -> Option<f64> {
        match self {
            PackageTier::Premium => Some(0.10),
            PackageTier::Enterprise => Some(0.15),
            PackageTier::Starter | PackageTier::Pro => None,
        }
    }

    /// Reduction applied to discountable add-on fees
    pub fn add_on_discount(&self) -> f64 {
        match self {
            PackageTier::Starter => 0.0,
            PackageTier::Pro | PackageTier::Premium => 0.10,
            PackageTier::Enterprise => 0.15,
        }
    }

    pub fn includes_commercial_rights(&self) -> bool {
        !matches!(self, PackageTier::Starter)
    }

    pub fn includes_ad_package(&self) -> bool {
        matches!(self, PackageTier::Premium)
    }

    pub fn includes_landing_page(&self) -> bool {
        matches!(self, PackageTier::Enterprise)
    }

    pub fn info(&self) -> PackageInfo {
        PackageInfo {
            tier: *self,
            name: self.display_name().to_string(),
            description: self.description().to_string(),
            figure_discount_override: self.figure_discount_override(),
            add_on_discount: self.add_on_discount(),
            commercial_rights_included: self.includes_commercial_rights(),
            landing_page_included: self.includes_landing_page(),
        }
    }
}

impl fmt::Display for PackageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PackageTier {
    type Err = QuoteError;

    /// Accepts "Pro", "pro package", "PRO" and the like
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let name = normalized
            .strip_suffix(" package")
            .unwrap_or(&normalized)
            .trim();

        match name {
            "starter" => Ok(PackageTier::Starter),
            "pro" => Ok(PackageTier::Pro),
            "premium" => Ok(PackageTier::Premium),
            "enterprise" => Ok(PackageTier::Enterprise),
            _ => Err(QuoteError::InvalidInput(format!("unknown package tier: {}", s))),
        }
    }
}

/// What the order form needs to know about a tier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackageInfo {
    pub tier: PackageTier,
    pub name: String,
    pub description: String,
    pub figure_discount_override: Option<f64>,
    pub add_on_discount: f64,
    pub commercial_rights_included: bool,
    pub landing_page_included: bool,
}
