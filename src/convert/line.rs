//! Trade line items and trade taxes.

use crate::cii::*;
use crate::core::*;

use super::charges::{new_allowance_charges, parse_allowance_charges};
use super::{format_amount, format_number, parse_decimal, parse_optional_decimal};

/// Tax scheme written when a tax carries no type code.
pub const TAX_TYPE_VAT: &str = "VAT";

/// Resolve all line items; the first failing line aborts.
pub fn parse_lines(items: &[TradeLineItem]) -> Result<Vec<Line>, ConversionError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_line(item, i + 1, &format!("lines[{i}]")))
        .collect()
}

/// Resolve one line item. `index` is the 1-based position in the document.
pub fn parse_line(
    item: &TradeLineItem,
    index: usize,
    field: &str,
) -> Result<Line, ConversionError> {
    let billed = &item.delivery.billed_quantity;
    let quantity = parse_decimal(&billed.value, &format!("{field}.quantity"))?;

    let net = &item.agreement.net_price;
    let price = parse_decimal(&net.charge_amount, &format!("{field}.price"))?;
    let gross_price = item
        .agreement
        .gross_price
        .as_ref()
        .map(|p| parse_decimal(&p.charge_amount, &format!("{field}.gross_price")))
        .transpose()?;
    let base_quantity = net
        .basis_quantity
        .as_ref()
        .map(|q| parse_decimal(&q.value, &format!("{field}.base_quantity")))
        .transpose()?;

    let product = &item.product;
    let identities = product
        .global_id
        .iter()
        .map(|id| Identity {
            scheme: id.scheme_id.clone(),
            label: None,
            code: id.value.clone(),
        })
        .collect();

    let taxes = item
        .settlement
        .taxes
        .iter()
        .enumerate()
        .map(|(i, t)| parse_trade_tax(t, &format!("{field}.taxes[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    let (charges, discounts) = parse_allowance_charges(
        &item.settlement.allowance_charges,
        &format!("{field}.allowance_charges"),
    )?;

    let sum = parse_optional_decimal(
        item.settlement.summation.line_total.as_deref(),
        &format!("{field}.sum"),
    )?;

    Ok(Line {
        index,
        quantity,
        item: Item {
            name: product.name.clone(),
            description: product.description.clone(),
            price,
            gross_price,
            base_quantity,
            unit: billed.unit_code.clone(),
            reference: product.seller_assigned_id.clone(),
            buyer_reference: product.buyer_assigned_id.clone(),
            identities,
            origin: product.origin_country.as_ref().map(|c| c.id.clone()),
        },
        taxes,
        discounts,
        charges,
        notes: parse_notes(&item.line_document.notes),
        sum,
    })
}

/// Resolve an `ApplicableTradeTax`/`CategoryTradeTax` into a tax combo.
pub fn parse_trade_tax(tax: &TradeTax, field: &str) -> Result<TaxCombo, ConversionError> {
    let mut ext = Extensions::new();
    if let Some(code) = &tax.category_code {
        ext.insert(EXT_KEY_TAX_CATEGORY.to_string(), code.trim().to_string());
    }
    if let Some(code) = &tax.exemption_reason_code {
        ext.insert(EXT_KEY_EXEMPTION.to_string(), code.trim().to_string());
    }
    Ok(TaxCombo {
        category: tax
            .type_code
            .as_deref()
            .map(str::trim)
            .unwrap_or(TAX_TYPE_VAT)
            .to_string(),
        percent: parse_optional_decimal(
            tax.rate_applicable_percent.as_deref(),
            &format!("{field}.percent"),
        )?,
        ext,
    })
}

pub fn parse_notes(notes: &[IncludedNote]) -> Vec<Note> {
    notes
        .iter()
        .map(|n| Note {
            code: n.subject_code.clone(),
            text: n.content.clone(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Reverse
// ---------------------------------------------------------------------------

/// Build a line item; the line total is always written, computed when the
/// line carries no stated sum.
pub fn new_line_item(line: &Line) -> Result<TradeLineItem, ConversionError> {
    let item = &line.item;
    Ok(TradeLineItem {
        line_document: LineDocument {
            line_id: line.index.to_string(),
            notes: new_notes(&line.notes),
        },
        product: TradeProduct {
            global_id: item.identities.first().map(|id| SchemedId {
                scheme_id: id.scheme.clone(),
                value: id.code.clone(),
            }),
            seller_assigned_id: item.reference.clone(),
            buyer_assigned_id: item.buyer_reference.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            origin_country: item.origin.clone().map(|id| TradeCountry { id }),
        },
        agreement: LineTradeAgreement {
            gross_price: item.gross_price.map(|p| TradePrice {
                charge_amount: format_amount(p),
                basis_quantity: None,
            }),
            net_price: TradePrice {
                charge_amount: format_amount(item.price),
                basis_quantity: item.base_quantity.map(|q| Quantity {
                    unit_code: item.unit.clone(),
                    value: format_number(q),
                }),
            },
        },
        delivery: LineTradeDelivery {
            billed_quantity: Quantity {
                unit_code: item.unit.clone(),
                value: format_number(line.quantity),
            },
        },
        settlement: LineTradeSettlement {
            taxes: line.taxes.iter().map(new_trade_tax).collect(),
            allowance_charges: new_allowance_charges(&line.charges, &line.discounts)?,
            summation: LineMonetarySummation {
                line_total: Some(format_amount(line_sum(line)?)),
            },
        },
    })
}

/// Build a trade tax without amounts; header breakdowns add them.
pub fn new_trade_tax(tax: &TaxCombo) -> TradeTax {
    TradeTax {
        type_code: Some(tax.category.to_ascii_uppercase()),
        category_code: Some(
            tax.category_code()
                .unwrap_or(DEFAULT_TAX_CATEGORY)
                .to_string(),
        ),
        exemption_reason_code: tax.ext.get(EXT_KEY_EXEMPTION).cloned(),
        rate_applicable_percent: tax.percent.map(format_number),
        ..Default::default()
    }
}

pub fn new_notes(notes: &[Note]) -> Vec<IncludedNote> {
    notes
        .iter()
        .map(|n| IncludedNote {
            content: n.text.clone(),
            subject_code: n.code.clone(),
        })
        .collect()
}
