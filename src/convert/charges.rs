//! Allowance/charge resolver, shared by header and line level.

use rust_decimal::Decimal;

use crate::cii::*;
use crate::core::*;

use super::codes::{ALLOWANCE_REASONS, CHARGE_REASONS};
use super::line::{new_trade_tax, parse_trade_tax};
use super::{format_amount, format_number, parse_decimal, parse_optional_decimal};

const INDICATOR_CHARGE: &str = "true";
const INDICATOR_ALLOWANCE: &str = "false";

/// Split allowance/charge elements into charges and discounts, preserving
/// document order within each list.
pub fn parse_allowance_charges(
    list: &[TradeAllowanceCharge],
    field: &str,
) -> Result<(Vec<Charge>, Vec<Discount>), ConversionError> {
    let mut charges = Vec::new();
    let mut discounts = Vec::new();
    for (i, ac) in list.iter().enumerate() {
        let field = format!("{field}[{i}]");
        match ac.charge_indicator.indicator.trim() {
            // xs:boolean lexical forms
            INDICATOR_CHARGE | "1" => charges.push(parse_charge(ac, &field)?),
            INDICATOR_ALLOWANCE | "0" => discounts.push(parse_discount(ac, &field)?),
            other => {
                return Err(ConversionError::mapping(
                    format!("{field}.charge_indicator"),
                    format!("expected a boolean, found '{other}'"),
                ));
            }
        }
    }
    Ok((charges, discounts))
}

struct Common {
    percent: Option<Decimal>,
    base: Option<Decimal>,
    amount: Decimal,
    taxes: Vec<TaxCombo>,
}

fn parse_common(ac: &TradeAllowanceCharge, field: &str) -> Result<Common, ConversionError> {
    Ok(Common {
        percent: parse_optional_decimal(
            ac.calculation_percent.as_deref(),
            &format!("{field}.percent"),
        )?,
        base: parse_optional_decimal(ac.basis_amount.as_deref(), &format!("{field}.base"))?,
        amount: parse_decimal(&ac.actual_amount, &format!("{field}.amount"))?,
        taxes: ac
            .category_trade_tax
            .as_ref()
            .map(|t| parse_trade_tax(t, &format!("{field}.tax")))
            .transpose()?
            .into_iter()
            .collect(),
    })
}

fn parse_charge(ac: &TradeAllowanceCharge, field: &str) -> Result<Charge, ConversionError> {
    let common = parse_common(ac, field)?;
    let mut ext = Extensions::new();
    let key = ac.reason_code.as_deref().and_then(|code| {
        ext.insert(EXT_KEY_CHARGE.to_string(), code.trim().to_string());
        CHARGE_REASONS.find(code)
    });
    Ok(Charge {
        key,
        reason: ac.reason.clone(),
        percent: common.percent,
        base: common.base,
        amount: common.amount,
        taxes: common.taxes,
        ext,
    })
}

fn parse_discount(ac: &TradeAllowanceCharge, field: &str) -> Result<Discount, ConversionError> {
    let common = parse_common(ac, field)?;
    let mut ext = Extensions::new();
    let key = ac.reason_code.as_deref().and_then(|code| {
        ext.insert(EXT_KEY_ALLOWANCE.to_string(), code.trim().to_string());
        ALLOWANCE_REASONS.find(code)
    });
    Ok(Discount {
        key,
        reason: ac.reason.clone(),
        percent: common.percent,
        base: common.base,
        amount: common.amount,
        taxes: common.taxes,
        ext,
    })
}

// ---------------------------------------------------------------------------
// Reverse
// ---------------------------------------------------------------------------

/// Build allowance/charge elements: discounts first, then charges.
pub fn new_allowance_charges(
    charges: &[Charge],
    discounts: &[Discount],
) -> Result<Vec<TradeAllowanceCharge>, ConversionError> {
    let mut out = Vec::with_capacity(charges.len() + discounts.len());
    for d in discounts {
        let reason_code = match (d.ext.get(EXT_KEY_ALLOWANCE), d.key) {
            (Some(code), _) => Some(code.clone()),
            (None, Some(key)) => Some(ALLOWANCE_REASONS.to_code(key)?.to_string()),
            (None, None) => None,
        };
        out.push(new_element(
            INDICATOR_ALLOWANCE,
            d.percent,
            d.base,
            d.amount,
            reason_code,
            d.reason.clone(),
            &d.taxes,
        ));
    }
    for c in charges {
        let reason_code = match (c.ext.get(EXT_KEY_CHARGE), c.key) {
            (Some(code), _) => Some(code.clone()),
            (None, Some(key)) => Some(CHARGE_REASONS.to_code(key)?.to_string()),
            (None, None) => None,
        };
        out.push(new_element(
            INDICATOR_CHARGE,
            c.percent,
            c.base,
            c.amount,
            reason_code,
            c.reason.clone(),
            &c.taxes,
        ));
    }
    Ok(out)
}

fn new_element(
    indicator: &str,
    percent: Option<Decimal>,
    base: Option<Decimal>,
    amount: Decimal,
    reason_code: Option<String>,
    reason: Option<String>,
    taxes: &[TaxCombo],
) -> TradeAllowanceCharge {
    TradeAllowanceCharge {
        charge_indicator: ChargeIndicator {
            indicator: indicator.to_string(),
        },
        calculation_percent: percent.map(format_number),
        basis_amount: base.map(format_amount),
        actual_amount: format_amount(amount),
        reason_code,
        reason,
        category_trade_tax: taxes.first().map(new_trade_tax),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn element(indicator: &str, amount: &str, code: Option<&str>) -> TradeAllowanceCharge {
        TradeAllowanceCharge {
            charge_indicator: ChargeIndicator {
                indicator: indicator.into(),
            },
            actual_amount: amount.into(),
            reason_code: code.map(String::from),
            category_trade_tax: Some(TradeTax {
                type_code: Some("VAT".into()),
                category_code: Some("S".into()),
                rate_applicable_percent: Some("19".into()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn indicator_selects_polarity() {
        let list = vec![
            element("true", "25.00", Some("FC")),
            element("false", "10.00", Some("95")),
        ];
        let (charges, discounts) = parse_allowance_charges(&list, "charges").unwrap();
        assert_eq!(charges.len(), 1);
        assert_eq!(charges[0].key, Some(ChargeKey::Freight));
        assert_eq!(charges[0].amount, dec!(25));
        assert_eq!(charges[0].taxes[0].percent, Some(dec!(19)));
        assert_eq!(discounts.len(), 1);
        assert_eq!(discounts[0].key, Some(DiscountKey::Discount));
        assert_eq!(discounts[0].amount, dec!(10));
    }

    #[test]
    fn numeric_indicators_are_accepted() {
        let list = vec![
            element("0", "3.00", None),
            element("1", "4.00", Some("FC")),
            element(" 1 ", "2.00", None),
        ];
        let (charges, discounts) = parse_allowance_charges(&list, "charges").unwrap();
        assert_eq!(charges.len(), 2);
        assert_eq!(charges[0].amount, dec!(4));
        assert_eq!(discounts.len(), 1);
        assert_eq!(discounts[0].amount, dec!(3));
    }

    #[test]
    fn unknown_reason_code_is_kept() {
        let (charges, _) =
            parse_allowance_charges(&[element("true", "5", Some("XYZ"))], "charges").unwrap();
        assert_eq!(charges[0].key, None);
        assert_eq!(charges[0].ext.get(EXT_KEY_CHARGE).map(String::as_str), Some("XYZ"));
    }

    #[test]
    fn bad_indicator_is_mapping_error() {
        let err = parse_allowance_charges(
            &[element("false", "1", None), element("yes", "1", None)],
            "charges",
        )
        .unwrap_err();
        assert!(matches!(err, ConversionError::Mapping { .. }));
        assert_eq!(err.field(), Some("charges[1].charge_indicator"));
    }

    #[test]
    fn empty_list_yields_nothing() {
        let (charges, discounts) = parse_allowance_charges(&[], "charges").unwrap();
        assert!(charges.is_empty() && discounts.is_empty());
    }

    #[test]
    fn reverse_writes_codes_and_indicators() {
        let charge = Charge {
            key: Some(ChargeKey::Packing),
            reason: Some("Packaging".into()),
            percent: None,
            base: None,
            amount: dec!(7.5),
            taxes: Vec::new(),
            ext: Extensions::new(),
        };
        let discount = Discount {
            key: None,
            reason: Some("Loyalty".into()),
            percent: Some(dec!(2.00)),
            base: Some(dec!(100)),
            amount: dec!(2),
            taxes: Vec::new(),
            ext: Extensions::new(),
        };
        let out = new_allowance_charges(&[charge], &[discount]).unwrap();
        assert_eq!(out[0].charge_indicator.indicator, "false");
        assert_eq!(out[0].reason_code, None);
        assert_eq!(out[0].calculation_percent.as_deref(), Some("2"));
        assert_eq!(out[0].basis_amount.as_deref(), Some("100.00"));
        assert_eq!(out[1].charge_indicator.indicator, "true");
        assert_eq!(out[1].reason_code.as_deref(), Some("ABL"));
        assert_eq!(out[1].actual_amount, "7.50");
    }
}
