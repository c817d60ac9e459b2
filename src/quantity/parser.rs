use regex::Regex;
use std::sync::LazyLock;

/// Terms that mark a quantity as vague. Any quantity containing one of these
/// is never scaled, even if it also contains digits ("1 pinch").
pub const NON_SCALABLE_TERMS: &[&str] = &["to taste", "pinch", "dash", "handful", "splash"];

// The leading group keeps a match from starting in the middle of another
// number, e.g. the "5" of "1.5".
static MIXED_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\d.])(\d+)\s+(\d+)/(\d+)").expect("valid mixed number pattern")
});
static SIMPLE_FRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\d.])(\d+)/(\d+)").expect("valid fraction pattern")
});
static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d*\.\d+|\d+").expect("valid decimal pattern"));
static UNIT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+").expect("valid unit pattern"));

/// Result of reading a free-text quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedQuantity {
    /// A finite, non-negative amount that can be multiplied by a serving ratio.
    Scalable(f64),
    /// Vague or unreadable text ("to taste", "some"); passed through untouched.
    NonScalable,
}

impl ParsedQuantity {
    pub fn amount(&self) -> Option<f64> {
        match self {
            ParsedQuantity::Scalable(amount) => Some(*amount),
            ParsedQuantity::NonScalable => None,
        }
    }

    pub fn is_scalable(&self) -> bool {
        matches!(self, ParsedQuantity::Scalable(_))
    }
}

/// Parses a quantity string such as `"2 cups"`, `"1 1/2 tbsp"` or `"to taste"`.
///
/// Matchers run in a fixed order and the first one that fires decides the
/// result: vague terms, mixed number, simple fraction, then decimal/integer.
/// Anything else is `NonScalable`. This function never fails.
pub fn parse_quantity(quantity: &str) -> ParsedQuantity {
    let normalized = quantity.trim().to_lowercase();

    if contains_non_scalable_term(&normalized) {
        return ParsedQuantity::NonScalable;
    }

    match_mixed_number(&normalized)
        .or_else(|| match_simple_fraction(&normalized))
        .or_else(|| match_decimal(&normalized))
        .unwrap_or(ParsedQuantity::NonScalable)
}

/// First contiguous run of ASCII letters in the quantity, e.g. `"cups"` in `"2 cups"`.
pub fn extract_unit(quantity: &str) -> Option<&str> {
    UNIT_TOKEN.find(quantity).map(|m| m.as_str())
}

fn contains_non_scalable_term(normalized: &str) -> bool {
    NON_SCALABLE_TERMS
        .iter()
        .any(|term| normalized.contains(term))
}

fn match_mixed_number(text: &str) -> Option<ParsedQuantity> {
    let caps = MIXED_NUMBER.captures(text)?;
    let whole = caps[1].parse::<f64>().ok()?;
    Some(ratio(&caps[2], &caps[3]).map_or(ParsedQuantity::NonScalable, |fraction| {
        ParsedQuantity::Scalable(whole + fraction)
    }))
}

fn match_simple_fraction(text: &str) -> Option<ParsedQuantity> {
    let caps = SIMPLE_FRACTION.captures(text)?;
    Some(ratio(&caps[1], &caps[2]).map_or(ParsedQuantity::NonScalable, ParsedQuantity::Scalable))
}

fn match_decimal(text: &str) -> Option<ParsedQuantity> {
    let found = DECIMAL.find(text)?;
    let value = found.as_str().parse::<f64>().ok()?;
    if value.is_finite() {
        Some(ParsedQuantity::Scalable(value))
    } else {
        Some(ParsedQuantity::NonScalable)
    }
}

// None when the denominator is zero or the digits overflow to infinity.
fn ratio(numerator: &str, denominator: &str) -> Option<f64> {
    let numerator = numerator.parse::<f64>().ok()?;
    let denominator = denominator.parse::<f64>().ok()?;
    if denominator == 0.0 {
        return None;
    }
    let value = numerator / denominator;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_numbers() {
        for n in [0u64, 1, 2, 7, 12, 250, 1_000_000] {
            assert_eq!(parse_quantity(&n.to_string()), ParsedQuantity::Scalable(n as f64));
        }
    }

    #[test]
    fn test_parse_fractions_and_mixed_numbers() {
        assert_eq!(parse_quantity("1/2"), ParsedQuantity::Scalable(0.5));
        assert_eq!(parse_quantity("1 1/2"), ParsedQuantity::Scalable(1.5));
        assert_eq!(parse_quantity("2 1/4"), ParsedQuantity::Scalable(2.25));
        assert_eq!(parse_quantity("3/4 cup"), ParsedQuantity::Scalable(0.75));
    }

    #[test]
    fn test_parse_mixed_number_with_extra_whitespace() {
        assert_eq!(parse_quantity("1  1/2"), ParsedQuantity::Scalable(1.5));
        assert_eq!(parse_quantity("  1 \t 1/2 tbsp  "), ParsedQuantity::Scalable(1.5));
    }

    #[test]
    fn test_parse_decimal_with_unit() {
        assert_eq!(parse_quantity("2 cups"), ParsedQuantity::Scalable(2.0));
        assert_eq!(parse_quantity("1.5 tbsp"), ParsedQuantity::Scalable(1.5));
        assert_eq!(parse_quantity("about 250g"), ParsedQuantity::Scalable(250.0));
    }

    #[test]
    fn test_matches_do_not_start_inside_a_decimal() {
        assert_eq!(parse_quantity(".5 cup"), ParsedQuantity::Scalable(0.5));
        // No mixed number here: "1.5" is not a whole part, so the bare fraction wins.
        assert_eq!(parse_quantity("1.5 1/2"), ParsedQuantity::Scalable(0.5));
        assert_eq!(parse_quantity("2.5/4"), ParsedQuantity::Scalable(2.5));
        assert_eq!(parse_quantity("about 1 1/2 cups"), ParsedQuantity::Scalable(1.5));
    }

    #[test]
    fn test_non_scalable_terms_win_over_digits() {
        assert_eq!(parse_quantity("to taste"), ParsedQuantity::NonScalable);
        assert_eq!(parse_quantity("1 pinch"), ParsedQuantity::NonScalable);
        assert_eq!(parse_quantity("2 Dashes"), ParsedQuantity::NonScalable);
        assert_eq!(parse_quantity("a HANDFUL"), ParsedQuantity::NonScalable);
        assert_eq!(parse_quantity("splash of 2%"), ParsedQuantity::NonScalable);
    }

    #[test]
    fn test_unreadable_text_is_non_scalable() {
        assert_eq!(parse_quantity(""), ParsedQuantity::NonScalable);
        assert_eq!(parse_quantity("some"), ParsedQuantity::NonScalable);
        assert_eq!(parse_quantity("   "), ParsedQuantity::NonScalable);
    }

    #[test]
    fn test_zero_denominator_is_non_scalable() {
        assert_eq!(parse_quantity("1/0"), ParsedQuantity::NonScalable);
        assert_eq!(parse_quantity("2 3/0 cups"), ParsedQuantity::NonScalable);
    }

    #[test]
    fn test_extract_unit() {
        assert_eq!(extract_unit("2 cups"), Some("cups"));
        assert_eq!(extract_unit("1 1/2 tbsp"), Some("tbsp"));
        assert_eq!(extract_unit("250g"), Some("g"));
        assert_eq!(extract_unit("3"), None);
        assert_eq!(extract_unit("2 large eggs"), Some("large"));
    }

    #[test]
    fn test_parsed_quantity_accessors() {
        assert_eq!(ParsedQuantity::Scalable(1.5).amount(), Some(1.5));
        assert_eq!(ParsedQuantity::NonScalable.amount(), None);
        assert!(!ParsedQuantity::NonScalable.is_scalable());
    }
}
