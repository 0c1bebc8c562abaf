//! Canonical invoice → CII.

use tracing::{debug, trace};

use crate::cii::*;
use crate::core::*;

use super::charges::new_allowance_charges;
use super::codes::DOCUMENT_TYPES;
use super::date::new_date_time;
use super::format_amount;
use super::line::{TAX_TYPE_VAT, new_line_item, new_notes};
use super::party::new_trade_party;
use super::payment::write_payment;
use super::reference::{new_referenced_document, write_delivery, write_ordering};

/// Reverse converter writing documents for one guideline [`Context`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    context: Context,
}

impl Converter {
    pub fn new(context: Context) -> Self {
        Self { context }
    }

    /// Build the CII tree. Line sums, the VAT breakdown and the monetary
    /// summation are computed from the invoice.
    pub fn convert(self, invoice: &Invoice) -> Result<Document, ConversionError> {
        debug!(
            code = %invoice.code,
            lines = invoice.lines.len(),
            context = ?self.context,
            "converting invoice to CII"
        );

        let mut doc = Document {
            rsm_namespace: Some(ns::RSM.to_string()),
            ram_namespace: Some(ns::RAM.to_string()),
            qdt_namespace: Some(ns::QDT.to_string()),
            udt_namespace: Some(ns::UDT.to_string()),
            context: ExchangedDocumentContext {
                business_process: self.context.business_process_id().map(|id| {
                    ContextParameter { id: id.to_string() }
                }),
                guideline: ContextParameter {
                    id: self.context.guideline_id().to_string(),
                },
            },
            exchanged_document: ExchangedDocument {
                id: invoice.code.clone(),
                type_code: DOCUMENT_TYPES.to_code(invoice.invoice_type)?.to_string(),
                issue_date_time: new_date_time(invoice.issue_date),
                notes: new_notes(&invoice.notes),
            },
            transaction: SupplyChainTradeTransaction::default(),
        };

        let tx = &mut doc.transaction;
        tx.line_items = invoice
            .lines
            .iter()
            .map(new_line_item)
            .collect::<Result<_, _>>()?;

        let (seller, representative) = split_tax_representative(invoice);
        tx.agreement.seller = new_trade_party(seller);
        tx.agreement.seller_tax_representative = representative.map(new_trade_party);
        tx.agreement.buyer = new_trade_party(&invoice.customer);

        if let Some(ordering) = &invoice.ordering {
            write_ordering(ordering, tx);
        }
        if let Some(delivery) = &invoice.delivery {
            write_delivery(delivery, &mut tx.delivery);
        }

        let settlement = &mut tx.settlement;
        settlement.currency_code = invoice.currency.clone();
        if let Some(payment) = &invoice.payment {
            write_payment(payment, settlement)?;
        }
        settlement.allowance_charges = new_allowance_charges(&invoice.charges, &invoice.discounts)?;
        settlement.referenced_invoices = invoice
            .preceding
            .iter()
            .map(new_referenced_document)
            .collect();

        let totals = calculate_totals(invoice)?;
        settlement.taxes = totals.vat_breakdown.iter().map(new_breakdown_tax).collect();
        settlement.summation = new_summation(&totals, invoice);

        debug!(
            code = %invoice.code,
            grand_total = %totals.gross_total,
            "invoice converted to CII"
        );
        Ok(doc)
    }
}

/// Seller and optional tax representative: the inverse of
/// [`apply_tax_representative`](super::ctog::apply_tax_representative).
pub fn split_tax_representative(invoice: &Invoice) -> (&Party, Option<&Party>) {
    match invoice.ordering.as_ref().and_then(|o| o.seller.as_ref()) {
        Some(seller) => {
            trace!(seller = %seller.name, "supplier written as seller tax representative");
            (seller, Some(&invoice.supplier))
        }
        None => (&invoice.supplier, None),
    }
}

fn new_breakdown_tax(vat: &VatBreakdown) -> TradeTax {
    TradeTax {
        calculated_amount: Some(format_amount(vat.tax_amount)),
        type_code: Some(TAX_TYPE_VAT.to_string()),
        basis_amount: Some(format_amount(vat.taxable_amount)),
        category_code: Some(vat.category.clone()),
        rate_applicable_percent: Some(format_amount(vat.percent)),
        ..Default::default()
    }
}

fn new_summation(totals: &Totals, invoice: &Invoice) -> MonetarySummation {
    MonetarySummation {
        line_total: format_amount(totals.line_net_total),
        charge_total: (!invoice.charges.is_empty()).then(|| format_amount(totals.charges_total)),
        allowance_total: (!invoice.discounts.is_empty())
            .then(|| format_amount(totals.discounts_total)),
        tax_basis_total: format_amount(totals.net_total),
        tax_total: vec![Amount {
            currency_id: Some(invoice.currency.clone()),
            value: format_amount(totals.vat_total),
        }],
        grand_total: format_amount(totals.gross_total),
        prepaid_total: None,
        due_payable: format_amount(totals.gross_total),
    }
}

/// Convert a canonical invoice and encode it as CII XML.
#[cfg(feature = "xml")]
pub fn convert_to_cii(invoice: &Invoice, context: Context) -> Result<String, ConversionError> {
    let doc = Converter::new(context).convert(invoice)?;
    to_cii_xml(&doc)
}
