use rust_decimal::Decimal;

// This was deprecated as a method on Decimal, so re-implement it.
// That implementation doesn't actually do zero checks, and can result
// in weird behaviour.
pub fn is_positive(d: &Decimal) -> bool {
    d.is_sign_positive() && !d.is_zero()
}

pub fn dollar_precision_str(d: &Decimal) -> String {
    format!("{:.2}", d)
}

/// Renders d with trailing zeros removed, but keeping at least
/// min_precision decimal places.
pub fn to_string_min_precision(d: &Decimal, min_precision: u32) -> String {
    let normalized = d.normalize();
    if normalized.scale() < min_precision {
        format!("{:.*}", min_precision as usize, normalized)
    } else {
        normalized.to_string()
    }
}
