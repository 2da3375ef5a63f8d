use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::BillAmount;

/// Parses free-form bill text into a [`BillAmount`].
///
/// Surrounding whitespace is ignored. Plain decimals (`"42"`, `"42.50"`) and
/// scientific notation (`"4.25e1"`) are accepted. Anything else, including
/// empty text, yields zero; the caller never sees an error.
pub fn parse_bill_amount(text: &str) -> BillAmount {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return BillAmount::ZERO;
    }
    // The decimal parser tolerates digit separators; bill text does not.
    if trimmed.contains('_') {
        tracing::debug!(input = %text, "bill text is not a number, using zero");
        return BillAmount::ZERO;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_or_else(
            |e| {
                tracing::debug!(input = %text, "bill text is not a number, using zero: {}", e);
                BillAmount::ZERO
            },
            BillAmount::new,
        )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(parse_bill_amount("50").value(), dec!(50));
        assert_eq!(parse_bill_amount("33.33").value(), dec!(33.33));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_bill_amount("  12.50 ").value(), dec!(12.50));
    }

    #[test]
    fn parses_scientific_notation() {
        assert_eq!(parse_bill_amount("1.5e2").value(), dec!(150));
    }

    #[test]
    fn empty_text_is_zero() {
        assert_eq!(parse_bill_amount(""), BillAmount::ZERO);
        assert_eq!(parse_bill_amount("   "), BillAmount::ZERO);
    }

    #[test]
    fn non_numeric_text_is_zero() {
        assert_eq!(parse_bill_amount("abc"), BillAmount::ZERO);
        assert_eq!(parse_bill_amount("12abc"), BillAmount::ZERO);
        assert_eq!(parse_bill_amount("1,234.56"), BillAmount::ZERO);
        assert_eq!(parse_bill_amount("1_000"), BillAmount::ZERO);
    }

    #[test]
    fn negative_amounts_are_zero() {
        assert_eq!(parse_bill_amount("-20"), BillAmount::ZERO);
    }
}
