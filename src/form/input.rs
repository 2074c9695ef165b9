//! Operand parsing.

/// Parse operand text as typed by the user.
///
/// Surrounding whitespace is ignored. Returns `None` for anything that is not
/// a finite number: NaN and infinities cannot travel as JSON numbers.
pub fn parse_operand(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integers_and_decimals() {
        assert_eq!(parse_operand("2"), Some(2.0));
        assert_eq!(parse_operand("-3.25"), Some(-3.25));
        assert_eq!(parse_operand(".5"), Some(0.5));
        assert_eq!(parse_operand("1e3"), Some(1000.0));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_operand("  42 \n"), Some(42.0));
        assert_eq!(parse_operand("\t0.1"), Some(0.1));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("   "), None);
        assert_eq!(parse_operand("abc"), None);
        assert_eq!(parse_operand("1,5"), None);
        assert_eq!(parse_operand("2 3"), None);
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert_eq!(parse_operand("NaN"), None);
        assert_eq!(parse_operand("inf"), None);
        assert_eq!(parse_operand("-infinity"), None);
        assert_eq!(parse_operand("1e400"), None);
    }
}
