/// Round to two decimals
pub fn round2(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}
