//! Markdown rendering of a priced order.

use serde::{Deserialize, Serialize};

use crate::order::OrderRequest;
use crate::pricing::{LineKind, QuoteBreakdown};

pub const DISCLAIMER: &str =
    "⚠️ Disclaimer: Estimate only. For accurate quote, visit https://shopqzr.com/create-a-kreator";

/// Which lines of a quote to show
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SummaryView {
    #[default]
    Full,
    /// Only the lines relevant to a custom part request
    CustomParts,
}

impl SummaryView {
    fn shows(&self, kind: LineKind) -> bool {
        match self {
            SummaryView::Full => true,
            SummaryView::CustomParts => matches!(
                kind,
                LineKind::CommercialRights
                    | LineKind::CustomParts
                    | LineKind::CustomPartCreation
                    | LineKind::Shipping
                    | LineKind::ServiceCharge
            ),
        }
    }
}

pub struct QuoteSummary;

impl QuoteSummary {
    pub fn render(
        breakdown: &QuoteBreakdown,
        order: &OrderRequest,
        view: SummaryView,
        include_profit: bool,
    ) -> String {
        let title = if include_profit {
            "### Quote Summary with Profit"
        } else {
            "### Quote Summary"
        };
        let mut lines = vec![title.to_string()];

        if view == SummaryView::Full {
            lines.push(format!("- Package: {}", breakdown.package_tier));
            lines.push(format!("- Quantity: {}", breakdown.quantity));
            lines.push(format!(
                "- Figure Discount: {:.0}%",
                breakdown.figure_discount_rate * 100.0
            ));
            lines.push(money_line(LineKind::FiguresSubtotal.label(), breakdown.figures_subtotal));
            lines.push(money_line("Unit Price per Figure", breakdown.unit_price));
        }

        for (kind, amount) in applicable_lines(breakdown, order) {
            if kind == LineKind::FiguresSubtotal || !view.shows(kind) {
                continue;
            }
            let line = match kind {
                LineKind::CustomParts => money_line(
                    &format!("Custom Parts ({} ea)", order.custom_parts_per_figure),
                    amount,
                ),
                _ => money_line(kind.label(), amount),
            };
            lines.push(line);
        }

        if view == SummaryView::Full {
            lines.push(format!("- **Total: ${:.2}**", breakdown.total));
            if include_profit {
                lines.push(format!("- **Profit: ${:.2}**", breakdown.profit));
            }
        }

        lines.join("\n")
    }
}

/// Charge lines worth showing the customer, in presentation order
pub fn applicable_lines(breakdown: &QuoteBreakdown, order: &OrderRequest) -> Vec<(LineKind, f64)> {
    breakdown
        .line_items()
        .into_iter()
        .filter(|(kind, amount)| is_applicable(*kind, *amount, breakdown, order))
        .collect()
}

fn money_line(label: &str, amount: f64) -> String {
    format!("- {}: ${:.2}", label, amount)
}

/// Requested lines show even when discounted to zero; the rest only when charged
fn is_applicable(kind: LineKind, amount: f64, breakdown: &QuoteBreakdown, order: &OrderRequest) -> bool {
    match kind {
        LineKind::CharacterDesign => !order.design_paid,
        LineKind::PartSourcing => order.wants_part_sourcing,
        LineKind::CustomParts => order.custom_parts_per_figure > 0,
        LineKind::CustomPartCreation => order.wants_custom_part_creation,
        LineKind::PackagingProduction => order.wants_packaging,
        LineKind::KeychainConversion => order.wants_keychain_conversion,
        LineKind::LandingPage => breakdown.landing_page_active,
        LineKind::Domains => breakdown.landing_page_active && order.domain_count > 0,
        LineKind::FiguresSubtotal | LineKind::Shipping | LineKind::ServiceCharge => true,
        LineKind::CommercialRights
        | LineKind::PackagingDesign
        | LineKind::BrandingRemoval
        | LineKind::AdPackage => amount != 0.0,
    }
}
