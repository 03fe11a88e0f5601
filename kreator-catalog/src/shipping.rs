/// Flat shipping rates keyed by the heaviest package (grams) they cover
pub const SHIPPING_TABLE: [(u64, f64); 5] = [
    (100, 12.00),
    (250, 14.50),
    (500, 18.00),
    (1000, 22.00),
    (1500, 26.00),
];

/// Rate for anything heavier than the last table entry
pub const OVERWEIGHT_RATE: f64 = 30.00;

const PACKAGING_OVERHEAD_GRAMS: u64 = 50;

/// Estimated parcel weight in grams
///
/// Keychains ship lighter (12g) and without the 3g stand.
pub fn estimate_weight(quantity: u32, keychain: bool) -> u64 {
    let quantity = u64::from(quantity);
    let per_figure = if keychain { 12 } else { 15 };
    let stands = if keychain { 0 } else { 3 * quantity };

    per_figure * quantity + PACKAGING_OVERHEAD_GRAMS + stands
}

pub fn shipping_cost(weight_grams: u64) -> f64 {
    SHIPPING_TABLE
        .iter()
        .find(|(ceiling, _)| weight_grams <= *ceiling)
        .map(|(_, cost)| *cost)
        .unwrap_or(OVERWEIGHT_RATE)
}
