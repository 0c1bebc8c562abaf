use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::error::ConversionError;
use super::types::*;

/// Category assumed for taxes that carry no UNTDID 5305 code.
pub const DEFAULT_TAX_CATEGORY: &str = "S";

/// Net amount of a line: the stated sum, or quantity × price − discounts + charges.
///
/// Fails with a mapping error at `lines[i].sum` when the amount leaves the
/// `Decimal` range.
pub fn line_sum(line: &Line) -> Result<Decimal, ConversionError> {
    if let Some(sum) = line.sum {
        return Ok(sum);
    }
    let field = || format!("lines[{}].sum", line.index.saturating_sub(1));
    let base = line
        .quantity
        .checked_mul(line.item.price)
        .ok_or_else(|| overflow(field()))?;
    let discounts =
        checked_sum(line.discounts.iter().map(|d| d.amount)).ok_or_else(|| overflow(field()))?;
    let charges =
        checked_sum(line.charges.iter().map(|c| c.amount)).ok_or_else(|| overflow(field()))?;
    base.checked_sub(discounts)
        .and_then(|v| v.checked_add(charges))
        .ok_or_else(|| overflow(field()))
}

/// Calculate document totals and the VAT breakdown.
///
/// Amounts are grouped by (category, percent). Tax per group is rounded half-up
/// to two decimal places; the breakdown is sorted by category code, then rate.
/// Sums outside the `Decimal` range are reported as a mapping error at `totals`.
pub fn calculate_totals(invoice: &Invoice) -> Result<Totals, ConversionError> {
    let line_sums = invoice
        .lines
        .iter()
        .map(line_sum)
        .collect::<Result<Vec<_>, _>>()?;

    let line_net_total =
        checked_sum(line_sums.iter().copied()).ok_or_else(|| overflow("totals"))?;
    let discounts_total =
        checked_sum(invoice.discounts.iter().map(|d| d.amount)).ok_or_else(|| overflow("totals"))?;
    let charges_total =
        checked_sum(invoice.charges.iter().map(|c| c.amount)).ok_or_else(|| overflow("totals"))?;
    let net_total = line_net_total
        .checked_sub(discounts_total)
        .and_then(|v| v.checked_add(charges_total))
        .ok_or_else(|| overflow("totals"))?;

    let mut groups: BTreeMap<(String, Decimal), Decimal> = BTreeMap::new();
    let mut add = |key: (String, Decimal), amount: Decimal| -> Result<(), ConversionError> {
        let entry = groups.entry(key).or_insert(Decimal::ZERO);
        *entry = entry.checked_add(amount).ok_or_else(|| overflow("totals"))?;
        Ok(())
    };

    for (line, sum) in invoice.lines.iter().zip(&line_sums) {
        add(vat_key(&line.taxes), *sum)?;
    }
    // Document-level discounts reduce the taxable base
    for discount in &invoice.discounts {
        add(vat_key(&discount.taxes), -discount.amount)?;
    }
    for charge in &invoice.charges {
        add(vat_key(&charge.taxes), charge.amount)?;
    }

    let mut vat_total = Decimal::ZERO;
    let mut vat_breakdown = Vec::with_capacity(groups.len());
    for ((category, percent), taxable_amount) in groups {
        let tax_amount = taxable_amount
            .checked_mul(percent)
            .and_then(|v| v.checked_div(dec!(100)))
            .map(|v| round_half_up(v, 2))
            .ok_or_else(|| overflow("totals"))?;
        vat_total = vat_total.checked_add(tax_amount).ok_or_else(|| overflow("totals"))?;
        vat_breakdown.push(VatBreakdown {
            category,
            percent,
            taxable_amount,
            tax_amount,
        });
    }

    let gross_total = net_total.checked_add(vat_total).ok_or_else(|| overflow("totals"))?;

    Ok(Totals {
        line_net_total,
        discounts_total,
        charges_total,
        net_total,
        vat_total,
        gross_total,
        vat_breakdown,
    })
}

fn checked_sum(mut amounts: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    amounts.try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))
}

fn overflow(field: impl Into<String>) -> ConversionError {
    ConversionError::mapping(field, "amount out of range")
}

fn vat_key(taxes: &[TaxCombo]) -> (String, Decimal) {
    let vat = taxes.iter().find(|t| t.category.eq_ignore_ascii_case("VAT"));
    let category = vat
        .and_then(TaxCombo::category_code)
        .unwrap_or(DEFAULT_TAX_CATEGORY)
        .to_string();
    let percent = vat.and_then(|t| t.percent).unwrap_or(Decimal::ZERO);
    (category, percent.normalize())
}

fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
