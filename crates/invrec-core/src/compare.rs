//! Equality of captured quantity and cost values.

use invrec_model::ValueComparison;

/// Whether two captured values count as equal under `comparison`.
pub fn values_match(left: &str, right: &str, comparison: ValueComparison) -> bool {
    match comparison {
        ValueComparison::Exact => left == right,
        ValueComparison::Numeric => match (parse_number(left), parse_number(right)) {
            (Some(a), Some(b)) => a == b,
            _ => left == right,
        },
    }
}

fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|number| number.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_comparison_is_textual() {
        assert!(values_match("5", "5", ValueComparison::Exact));
        assert!(!values_match("5", "05", ValueComparison::Exact));
        assert!(!values_match("5", "5.0", ValueComparison::Exact));
    }

    #[test]
    fn numeric_comparison_normalizes_numbers() {
        assert!(values_match("5", "05", ValueComparison::Numeric));
        assert!(values_match("5", "5.0", ValueComparison::Numeric));
        assert!(values_match(" 12.50", "12.5", ValueComparison::Numeric));
        assert!(!values_match("5", "6", ValueComparison::Numeric));
    }

    #[test]
    fn numeric_comparison_falls_back_to_text() {
        assert!(values_match("", "", ValueComparison::Numeric));
        assert!(!values_match("", "0", ValueComparison::Numeric));
        assert!(values_match("n/a", "n/a", ValueComparison::Numeric));
        assert!(!values_match("NaN", "nan", ValueComparison::Numeric));
    }
}
