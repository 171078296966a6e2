use serde::Serialize;

/// A number read from a results cell, with a flag telling whether the
/// cell actually held one or the value is the 0.0 default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParsedNumber {
    pub value: f64,
    pub valid: bool,
}

impl ParsedNumber {
    pub fn parsed(value: f64) -> Self {
        Self { value, valid: true }
    }

    pub fn defaulted() -> Self {
        Self {
            value: 0.0,
            valid: false,
        }
    }
}

/// Trim and turn a comma decimal separator into a period.
pub fn normalize_decimal(text: &str) -> String {
    text.trim().replace(',', ".")
}

/// Parse a VP cell. Anything that is not a finite number becomes 0.0.
pub fn parse_or_default(text: &str) -> ParsedNumber {
    parse_finite(&normalize_decimal(text))
}

/// Parse a penalty cell. Interior spaces are dropped; an empty cell or a
/// bare separator is a legitimate zero.
pub fn parse_penalty(text: &str) -> ParsedNumber {
    let cleaned = normalize_decimal(text).replace(' ', "");
    if cleaned.is_empty() || cleaned == "." {
        return ParsedNumber::parsed(0.0);
    }
    parse_finite(&cleaned)
}

fn parse_finite(text: &str) -> ParsedNumber {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => ParsedNumber::parsed(value),
        _ => ParsedNumber::defaulted(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separator_is_normalized() {
        assert_eq!(parse_or_default(" 12,57 "), ParsedNumber::parsed(12.57));
        assert_eq!(parse_or_default("8.43"), ParsedNumber::parsed(8.43));
    }

    #[test]
    fn test_garbage_defaults_to_zero() {
        assert_eq!(parse_or_default("abc"), ParsedNumber::defaulted());
        assert_eq!(parse_or_default(""), ParsedNumber::defaulted());
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        // f64::from_str accepts these, a results cell must not
        assert!(!parse_or_default("NaN").valid);
        assert!(!parse_or_default("inf").valid);
        assert_eq!(parse_or_default("-infinity").value, 0.0);
    }

    #[test]
    fn test_genuine_zero_is_valid() {
        let zero = parse_or_default("0,00");
        assert_eq!(zero.value, 0.0);
        assert!(zero.valid);
    }

    #[test]
    fn test_penalty_cleanup() {
        assert_eq!(parse_penalty("- 1,5"), ParsedNumber::parsed(-1.5));
        assert_eq!(parse_penalty("   "), ParsedNumber::parsed(0.0));
        assert_eq!(parse_penalty(","), ParsedNumber::parsed(0.0));
        assert_eq!(parse_penalty("n/a"), ParsedNumber::defaulted());
    }
}
