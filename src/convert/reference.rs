//! Referenced documents, ordering and delivery.

use tracing::trace;

use crate::cii::*;
use crate::core::*;

use super::date::{new_date_time, new_formatted_date_time, resolve};
use super::party::{new_trade_party, parse_optional_party};

/// Additional reference type code for a tender or lot.
pub const REF_TYPE_TENDER: &str = "50";
/// Additional reference type code for an invoiced object identifier.
pub const REF_TYPE_INVOICED_OBJECT: &str = "130";

/// Resolve a referenced document. A missing identifier is an error, and so is
/// an issue-date element whose value does not parse (including an empty one).
pub fn parse_document_ref(
    doc: &ReferencedDocument,
    field: &str,
) -> Result<DocumentRef, ConversionError> {
    let code = doc
        .issuer_assigned_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ConversionError::missing(format!("{field}.code")))?;
    let issue_date = doc
        .formatted_issue_date_time
        .as_ref()
        .map(|d| resolve(&d.date_time_string, &format!("{field}.issue_date")))
        .transpose()?;
    Ok(DocumentRef {
        code: code.to_string(),
        issue_date,
        description: doc.name.clone(),
        type_code: doc.type_code.clone(),
    })
}

pub fn parse_document_refs(
    docs: &[ReferencedDocument],
    field: &str,
) -> Result<Vec<DocumentRef>, ConversionError> {
    docs.iter()
        .enumerate()
        .map(|(i, d)| parse_document_ref(d, &format!("{field}[{i}]")))
        .collect()
}

fn parse_optional_ref(
    doc: Option<&ReferencedDocument>,
    field: &str,
) -> Result<Vec<DocumentRef>, ConversionError> {
    doc.map(|d| parse_document_ref(d, field))
        .into_iter()
        .collect()
}

/// Resolve the ordering block; `None` when nothing is referenced.
///
/// The seller is not set here: it only appears when a tax representative
/// takes the supplier's place.
pub fn parse_ordering(
    transaction: &SupplyChainTradeTransaction,
) -> Result<Option<Ordering>, ConversionError> {
    let agreement = &transaction.agreement;
    let delivery = &transaction.delivery;

    let mut ordering = Ordering {
        code: agreement.buyer_reference.clone(),
        period: transaction
            .settlement
            .billing_period
            .as_ref()
            .map(parse_period)
            .transpose()?
            .flatten(),
        purchases: parse_optional_ref(agreement.buyer_order.as_ref(), "ordering.purchases[0]")?,
        sales: parse_optional_ref(agreement.seller_order.as_ref(), "ordering.sales[0]")?,
        contracts: parse_optional_ref(agreement.contract.as_ref(), "ordering.contracts[0]")?,
        despatch: parse_optional_ref(delivery.despatch_advice.as_ref(), "ordering.despatch[0]")?,
        receiving: parse_optional_ref(
            delivery.receiving_advice.as_ref(),
            "ordering.receiving[0]",
        )?,
        ..Default::default()
    };

    if let Some(project) = &agreement.procuring_project {
        ordering.projects.push(DocumentRef {
            description: Some(project.name.clone()).filter(|n| !n.is_empty()),
            ..DocumentRef::new(project.id.clone())
        });
    }

    for (i, doc) in agreement.additional_documents.iter().enumerate() {
        let field = format!("ordering.additional_documents[{i}]");
        match doc.type_code.as_deref().map(str::trim) {
            Some(REF_TYPE_TENDER) => ordering.tender.push(parse_document_ref(doc, &field)?),
            Some(REF_TYPE_INVOICED_OBJECT) => {
                let r = parse_document_ref(doc, &field)?;
                ordering.identities.push(Identity {
                    scheme: None,
                    label: r.description,
                    code: r.code,
                });
            }
            other => trace!(type_code = ?other, "additional document not mapped"),
        }
    }

    Ok(if ordering.is_empty() {
        None
    } else {
        Some(ordering)
    })
}

/// A billing period with only one bound is closed on the same date.
fn parse_period(period: &BillingPeriod) -> Result<Option<Period>, ConversionError> {
    let start = period
        .start
        .as_ref()
        .map(|d| resolve(&d.date_time_string, "ordering.period.start"))
        .transpose()?;
    let end = period
        .end
        .as_ref()
        .map(|d| resolve(&d.date_time_string, "ordering.period.end"))
        .transpose()?;
    Ok(match (start, end) {
        (Some(start), Some(end)) => Some(Period { start, end }),
        (Some(d), None) | (None, Some(d)) => Some(Period { start: d, end: d }),
        (None, None) => None,
    })
}

/// Resolve ship-to party and actual delivery date; `None` when neither exists.
pub fn parse_delivery(delivery: &HeaderTradeDelivery) -> Result<Option<Delivery>, ConversionError> {
    let receiver = parse_optional_party(delivery.ship_to.as_ref());
    let date = delivery
        .actual_delivery
        .as_ref()
        .map(|e| resolve(&e.occurrence.date_time_string, "delivery.date"))
        .transpose()?;
    if receiver.is_none() && date.is_none() {
        return Ok(None);
    }
    Ok(Some(Delivery { receiver, date }))
}

// ---------------------------------------------------------------------------
// Reverse
// ---------------------------------------------------------------------------

pub fn new_referenced_document(r: &DocumentRef) -> ReferencedDocument {
    ReferencedDocument {
        issuer_assigned_id: Some(r.code.clone()),
        type_code: r.type_code.clone(),
        name: r.description.clone(),
        formatted_issue_date_time: r.issue_date.map(new_formatted_date_time),
        ..Default::default()
    }
}

/// Write the ordering block. CII carries one reference per kind, so only the
/// first entry of each list is written; tender and identities go to
/// additional referenced documents.
pub fn write_ordering(ordering: &Ordering, transaction: &mut SupplyChainTradeTransaction) {
    let agreement = &mut transaction.agreement;
    agreement.buyer_reference = ordering.code.clone();
    agreement.buyer_order = ordering.purchases.first().map(new_referenced_document);
    agreement.seller_order = ordering.sales.first().map(new_referenced_document);
    agreement.contract = ordering.contracts.first().map(new_referenced_document);
    agreement.procuring_project = ordering.projects.first().map(|p| ProcuringProject {
        id: p.code.clone(),
        name: p.description.clone().unwrap_or_default(),
    });
    for tender in &ordering.tender {
        agreement.additional_documents.push(ReferencedDocument {
            type_code: Some(REF_TYPE_TENDER.to_string()),
            ..new_referenced_document(tender)
        });
    }
    for identity in &ordering.identities {
        agreement.additional_documents.push(ReferencedDocument {
            issuer_assigned_id: Some(identity.code.clone()),
            type_code: Some(REF_TYPE_INVOICED_OBJECT.to_string()),
            name: identity.label.clone(),
            ..Default::default()
        });
    }

    let delivery = &mut transaction.delivery;
    delivery.despatch_advice = ordering.despatch.first().map(new_referenced_document);
    delivery.receiving_advice = ordering.receiving.first().map(new_referenced_document);

    transaction.settlement.billing_period = ordering.period.map(|p| BillingPeriod {
        start: Some(new_date_time(p.start)),
        end: Some(new_date_time(p.end)),
    });
}

pub fn write_delivery(delivery: &Delivery, out: &mut HeaderTradeDelivery) {
    out.ship_to = delivery.receiver.as_ref().map(new_trade_party);
    out.actual_delivery = delivery.date.map(|d| SupplyChainEvent {
        occurrence: new_date_time(d),
    });
}
