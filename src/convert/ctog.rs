//! CII → canonical invoice.

use tracing::{debug, trace};

use crate::cii::*;
use crate::core::*;

use super::charges::parse_allowance_charges;
use super::codes::DOCUMENT_TYPES;
use super::date::resolve;
use super::line::{parse_lines, parse_notes};
use super::party::parse_party;
use super::payment::parse_payment;
use super::reference::{parse_delivery, parse_document_refs, parse_ordering};

/// Forward converter for one document.
///
/// Consumed by [`Converter::convert`]; create a new one per document.
///
/// ```
/// use belegwandler::cii::Document;
/// use belegwandler::ctog::Converter;
///
/// let doc = Document::default();
/// // An empty document has no invoice number.
/// assert!(Converter::new(&doc).convert().is_err());
/// ```
#[derive(Debug)]
pub struct Converter<'a> {
    doc: &'a Document,
}

impl<'a> Converter<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self { doc }
    }

    /// Run the conversion. The first failing step aborts; no partial invoice
    /// is returned.
    pub fn convert(self) -> Result<Invoice, ConversionError> {
        let doc = self.doc;
        let header = &doc.exchanged_document;
        let tx = &doc.transaction;

        debug!(
            code = %header.id,
            lines = tx.line_items.len(),
            guideline = ?Context::from_guideline(&doc.context.guideline.id),
            "converting CII document"
        );

        let code = header.id.trim();
        if code.is_empty() {
            return Err(ConversionError::missing("code"));
        }
        let type_code = header.type_code.trim();
        let invoice_type = DOCUMENT_TYPES.to_canonical(type_code)?;
        let currency = tx.settlement.currency_code.trim();
        if currency.is_empty() {
            return Err(ConversionError::missing("currency"));
        }
        let tax = Tax {
            ext: [(EXT_KEY_DOCUMENT_TYPE.to_string(), type_code.to_string())].into(),
        };

        let supplier = parse_party(&tx.agreement.seller);
        let customer = parse_party(&tx.agreement.buyer);

        let issue_date = resolve(&header.issue_date_time.date_time_string, "issue_date")?;

        let lines = parse_lines(&tx.line_items)?;
        let payment = parse_payment(&tx.settlement)?;
        let notes = parse_notes(&header.notes);
        let ordering = parse_ordering(tx)?;
        let delivery = parse_delivery(&tx.delivery)?;
        let preceding = parse_document_refs(&tx.settlement.referenced_invoices, "preceding")?;

        let mut invoice = Invoice {
            code: code.to_string(),
            invoice_type,
            issue_date,
            currency: currency.to_string(),
            tax: Some(tax),
            supplier,
            customer,
            lines,
            discounts: Vec::new(),
            charges: Vec::new(),
            ordering,
            payment,
            delivery,
            preceding,
            notes,
        };

        if let Some(rep) = &tx.agreement.seller_tax_representative {
            apply_tax_representative(&mut invoice, parse_party(rep));
        }

        let (charges, discounts) =
            parse_allowance_charges(&tx.settlement.allowance_charges, "charges")?;
        invoice.charges = charges;
        invoice.discounts = discounts;

        debug!(code = %invoice.code, "CII document converted");
        Ok(invoice)
    }
}

/// Put a seller tax representative in the supplier's place.
///
/// The original supplier moves to `ordering.seller`; an ordering block is
/// created if the invoice has none.
pub fn apply_tax_representative(invoice: &mut Invoice, representative: Party) {
    trace!(representative = %representative.name, "applying seller tax representative");
    let seller = std::mem::replace(&mut invoice.supplier, representative);
    invoice
        .ordering
        .get_or_insert_with(Ordering::default)
        .seller = Some(seller);
}

/// Decode CII XML and convert it to a canonical invoice.
#[cfg(feature = "xml")]
pub fn convert_to_invoice(data: &[u8]) -> Result<Invoice, ConversionError> {
    let doc = from_cii_xml(data)?;
    Converter::new(&doc).convert()
}
