//! Resolvers between the CII tree and the canonical invoice, and the two
//! document converters built on them.
//!
//! Each resolver module has a forward half (`parse_*`, CII → canonical) and a
//! reverse half (`new_*`, canonical → CII).

pub mod charges;
pub mod codes;
pub mod ctog;
pub mod date;
pub mod gtoc;
pub mod line;
pub mod party;
pub mod payment;
pub mod reference;

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::core::ConversionError;

/// Parse a lexical decimal, attaching `field` to the error.
pub fn parse_decimal(value: &str, field: &str) -> Result<Decimal, ConversionError> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed).map_err(|_| ConversionError::Decimal {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Parse an optional lexical decimal; `None` stays `None`.
pub fn parse_optional_decimal(
    value: Option<&str>,
    field: &str,
) -> Result<Option<Decimal>, ConversionError> {
    value.map(|v| parse_decimal(v, field)).transpose()
}

/// Format a monetary amount with at least two decimal places.
pub fn format_amount(d: Decimal) -> String {
    let s = d.normalize().to_string();
    match s.find('.') {
        Some(dot) if s.len() - dot - 1 >= 2 => s,
        Some(dot) => format!("{s}{}", "0".repeat(2 - (s.len() - dot - 1))),
        None => format!("{s}.00"),
    }
}

/// Format a quantity or percentage without trailing zeros.
pub fn format_number(d: Decimal) -> String {
    d.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amounts_have_two_places() {
        assert_eq!(format_amount(dec!(100)), "100.00");
        assert_eq!(format_amount(dec!(1500.0)), "1500.00");
        assert_eq!(format_amount(dec!(49.9)), "49.90");
        assert_eq!(format_amount(dec!(0.005)), "0.005");
        assert_eq!(format_amount(dec!(-12.5)), "-12.50");
    }

    #[test]
    fn numbers_drop_trailing_zeros() {
        assert_eq!(format_number(dec!(19.00)), "19");
        assert_eq!(format_number(dec!(2.50)), "2.5");
    }

    #[test]
    fn decimals_are_trimmed() {
        assert_eq!(parse_decimal(" 12.30 ", "x").unwrap(), dec!(12.30));
    }

    #[test]
    fn bad_decimal_reports_field() {
        let err = parse_decimal("12,30", "lines[0].quantity").unwrap_err();
        assert!(matches!(
            err,
            ConversionError::Decimal { ref field, ref value }
                if field == "lines[0].quantity" && value == "12,30"
        ));
        assert_eq!(parse_optional_decimal(None, "x").unwrap(), None);
    }
}
