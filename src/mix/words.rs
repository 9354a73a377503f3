//! Word-level mixing.
//!
//! Both inputs are split on single spaces and paired by position. Pairs
//! of numbers are interpolated and rounded; everything else goes through
//! [`string_mix`]. A missing token on either side counts as `""`.

use super::chars::string_mix;

/// Parse `token` as a finite decimal number.
pub fn parse_numeric(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Whether `token` parses as a finite decimal number.
pub fn is_numeric(token: &str) -> bool {
    parse_numeric(token).is_some()
}

/// Interpolate between two numbers and round to the nearest integer.
///
/// Halves round toward positive infinity, so `7.5` becomes `8` and
/// `-2.5` becomes `-2`.
pub fn number_mix(num1: f64, num2: f64, ratio: f64) -> f64 {
    let mixed = num1 + (num2 - num1) * ratio;
    let floor = mixed.floor();
    let rounded = if mixed - floor >= 0.5 { floor + 1.0 } else { floor };
    // Avoid printing "-0".
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Blend two texts word by word.
pub fn text_mix(text1: &str, text2: &str, ratio: f64) -> String {
    let words1: Vec<&str> = text1.split(' ').collect();
    let words2: Vec<&str> = text2.split(' ').collect();
    let n_max = words1.len().max(words2.len());

    let mut out = Vec::with_capacity(n_max);
    for i in 0..n_max {
        let w1 = words1.get(i).copied().unwrap_or("");
        let w2 = words2.get(i).copied().unwrap_or("");
        match (parse_numeric(w1), parse_numeric(w2)) {
            (Some(n1), Some(n2)) => out.push(number_mix(n1, n2, ratio).to_string()),
            _ => out.push(string_mix(w1, w2, ratio)),
        }
    }
    out.join(" ")
}
