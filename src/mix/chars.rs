//! Positional character mixing.
//!
//! The output length interpolates linearly between the two input lengths,
//! and each position takes its char from `text2` when it falls left of
//! `ratio * max_len`, otherwise from `text1`.

/// Blend two strings char by char.
///
/// Output length is `len1 + floor((len2 - len1) * ratio)`, clamped at zero.
/// Positions with no char in the selected input (possible when `ratio`
/// lies outside `[0, 1]`) contribute nothing, so only the first
/// `max(len1, len2)` positions are visited.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn string_mix(text1: &str, text2: &str, ratio: f64) -> String {
    let a: Vec<char> = text1.chars().collect();
    let b: Vec<char> = text2.chars().collect();

    let delta = ((b.len() as f64 - a.len() as f64) * ratio).floor();
    if delta.is_nan() {
        return String::new();
    }
    let new_len = ((a.len() as f64 + delta).max(0.0) as usize).min(a.len().max(b.len()));
    let threshold = ratio * a.len().max(b.len()) as f64;

    (0..new_len).filter_map(|i| pick(&a, &b, i, threshold)).collect()
}

#[allow(clippy::cast_precision_loss)]
fn pick(a: &[char], b: &[char], idx: usize, threshold: f64) -> Option<char> {
    if idx >= a.len() {
        return b.get(idx).copied();
    }
    if idx >= b.len() {
        return a.get(idx).copied();
    }
    if (idx as f64) < threshold {
        Some(b[idx])
    } else {
        Some(a[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_endpoints() {
        assert_eq!(string_mix("hello", "jello", 0.0), "hello");
        assert_eq!(string_mix("hello", "jello", 1.0), "jello");
        assert_eq!(string_mix("world", "there", 1.0), "there");
    }

    #[test]
    fn test_left_to_right_threshold() {
        assert_eq!(string_mix("cat", "dog", 0.34), "dot");
        assert_eq!(string_mix("world", "there", 0.5), "theld");
    }

    #[test]
    fn test_length_interpolates() {
        assert_eq!(string_mix("abc", "abcdef", 0.5), "abcd");
        assert_eq!(string_mix("abcdef", "abc", 0.5), "abcd");
        assert_eq!(string_mix("abcdef", "abc", 1.0), "abc");
    }

    #[test]
    fn test_empty_sides() {
        assert_eq!(string_mix("", "", 0.5), "");
        assert_eq!(string_mix("", "abcd", 0.5), "ab");
        assert_eq!(string_mix("2", "", 0.5), "");
    }

    #[test]
    fn test_extrapolation() {
        assert_eq!(string_mix("ab", "abcd", 2.0), "abcd");
        assert_eq!(string_mix("ab", "abcd", -1.0), "");
        assert_eq!(string_mix("ab", "abcd", f64::NAN), "");
    }

    #[test]
    fn test_huge_ratio_is_bounded() {
        assert_eq!(string_mix("a", "abc", 1e18), "abc");
        assert_eq!(string_mix("a", "abc", f64::INFINITY), "abc");
        assert_eq!(string_mix("abc", "a", f64::INFINITY), "");
        assert_eq!(string_mix("a", "abc", f64::NEG_INFINITY), "");
    }
}
