/// Remainders this close to a whole number are dropped (or rounded up).
pub const WHOLE_NUMBER_TOLERANCE: f64 = 0.05;

/// Cooking fractions in priority order. The first candidate with the smallest
/// distance wins, so an exact tie resolves towards the earlier entry.
const FRACTION_CANDIDATES: &[(f64, &str)] = &[
    (0.0, ""),
    (0.25, "1/4"),
    (0.33, "1/3"),
    (0.5, "1/2"),
    (0.67, "2/3"),
    (0.75, "3/4"),
];

/// Renders a scaled amount as a cook-friendly quantity: `"2"`, `"1/3"`, `"1 3/4"`.
pub fn render_amount(amount: f64) -> String {
    if !amount.is_finite() || amount <= 0.0 {
        return "0".to_string();
    }

    let whole = amount.trunc();
    let remainder = amount - whole;

    if remainder < WHOLE_NUMBER_TOLERANCE {
        return format_whole(whole);
    }
    if 1.0 - remainder < WHOLE_NUMBER_TOLERANCE {
        return format_whole(whole + 1.0);
    }

    let mut nearest = FRACTION_CANDIDATES[0];
    let mut smallest_diff = (remainder - nearest.0).abs();
    for &candidate in &FRACTION_CANDIDATES[1..] {
        let diff = (remainder - candidate.0).abs();
        if diff < smallest_diff {
            smallest_diff = diff;
            nearest = candidate;
        }
    }

    match (whole > 0.0, nearest.1) {
        (_, "") => format_whole(whole),
        (true, fraction) => format!("{} {}", format_whole(whole), fraction),
        (false, fraction) => fraction.to_string(),
    }
}

fn format_whole(whole: f64) -> String {
    format!("{:.0}", whole)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_common_fractions() {
        assert_eq!(render_amount(0.25), "1/4");
        assert_eq!(render_amount(0.5), "1/2");
        assert_eq!(render_amount(0.75), "3/4");
        assert_eq!(render_amount(1.25), "1 1/4");
        assert_eq!(render_amount(1.0 / 3.0), "1/3");
        assert_eq!(render_amount(2.0 + 2.0 / 3.0), "2 2/3");
    }

    #[test]
    fn test_render_whole_numbers() {
        assert_eq!(render_amount(0.0), "0");
        assert_eq!(render_amount(1.0), "1");
        assert_eq!(render_amount(12.0), "12");
    }

    #[test]
    fn test_render_rounds_near_whole_numbers() {
        assert_eq!(render_amount(2.96), "3");
        assert_eq!(render_amount(0.98), "1");
        assert_eq!(render_amount(4.02), "4");
    }

    #[test]
    fn test_render_small_remainder_rounds_down() {
        // 0.1 sits closer to 0 than to 1/4.
        assert_eq!(render_amount(3.1), "3");
        assert_eq!(render_amount(0.1), "0");
    }

    #[test]
    fn test_render_tie_prefers_earlier_candidate() {
        // 0.125 is equidistant from 0 and 1/4.
        assert_eq!(render_amount(2.125), "2");
        // 0.625 is equidistant from 1/2 and 3/4 but 2/3 (0.67) is nearer.
        assert_eq!(render_amount(0.625), "2/3");
    }

    #[test]
    fn test_render_large_remainder_uses_three_quarters() {
        assert_eq!(render_amount(1.9), "1 3/4");
    }

    #[test]
    fn test_render_huge_whole_amounts() {
        assert_eq!(render_amount(3e19), "30000000000000000000");
        assert_eq!(render_amount(1e20 + 0.5), "100000000000000000000");
    }

    #[test]
    fn test_render_degenerate_input() {
        assert_eq!(render_amount(f64::NAN), "0");
        assert_eq!(render_amount(f64::INFINITY), "0");
        assert_eq!(render_amount(-1.5), "0");
    }
}
