/// Price with the rupee prefix; whole amounts print without decimals.
pub fn format_price(price: f64) -> String {
    if price.is_finite() && price.fract() == 0.0 {
        format!("Rs{:.0}", price)
    } else {
        format!("Rs{}", price)
    }
}
