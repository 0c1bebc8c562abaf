#![cfg(feature = "xml")]

use belegwandler::cii::{self, Context};
use belegwandler::core::*;
use belegwandler::ctog::{self, Converter};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

const INVOICE_TEST_01: &str = include_str!("data/invoice-test-01.xml");
const CII_EXAMPLE_2: &str = include_str!("data/CII_example2.xml");

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn load(xml: &str) -> cii::Document {
    cii::from_cii_xml(xml.as_bytes()).unwrap()
}

fn convert(xml: &str) -> Invoice {
    ctog::convert_to_invoice(xml.as_bytes()).unwrap()
}

// ── Parties ─────────────────────────────────────────────────────────────────

#[test]
fn seller_and_buyer_from_sample_invoice() {
    let doc = load(INVOICE_TEST_01);
    let agreement = &doc.transaction.agreement;
    let seller = belegwandler::convert::party::parse_party(&agreement.seller);
    let buyer = belegwandler::convert::party::parse_party(&agreement.buyer);

    assert_eq!(seller.name, "Sample Seller");
    let tax_id = seller.tax_id.as_ref().unwrap();
    assert_eq!(tax_id.country, "DE");
    assert_eq!(tax_id.code, "049120826");

    assert_eq!(buyer.name, "Sample Buyer");
    assert_eq!(
        buyer.addresses[0],
        Address {
            street: "Sample Street 2".into(),
            locality: "Sample City".into(),
            code: "48000".into(),
            country: "DE".into(),
            ..Default::default()
        }
    );
}

#[test]
fn tax_representative_replaces_supplier() {
    let inv = convert(CII_EXAMPLE_2);

    let rep = &inv.supplier;
    assert_eq!(rep.name, "Tax handling company AS");
    let tax_id = rep.tax_id.as_ref().unwrap();
    assert_eq!(tax_id.code, "967611265");
    assert_eq!(tax_id.country, "NO");
    assert_eq!(rep.addresses.len(), 1);
    assert_eq!(rep.addresses[0].street, "Regent street");
    assert_eq!(rep.addresses[0].locality, "Newtown");
    assert_eq!(rep.addresses[0].code, "202");
    assert_eq!(rep.addresses[0].country, "NO");

    let seller = inv.ordering.as_ref().and_then(|o| o.seller.as_ref()).unwrap();
    assert_eq!(seller.name, "Salescompany ltd.");
    let tax_id = seller.tax_id.as_ref().unwrap();
    assert_eq!(tax_id.code, "123456789");
    assert_eq!(tax_id.country, "NO");
    assert_eq!(seller.addresses.len(), 1);
    let addr = &seller.addresses[0];
    assert_eq!(addr.street, "Main street 34");
    assert_eq!(addr.street_extra.as_deref(), Some("Suite 123"));
    assert_eq!(addr.locality, "Big city");
    assert_eq!(addr.region.as_deref(), Some("RegionA"));
    assert_eq!(addr.code, "303");
    assert_eq!(addr.country, "NO");
    assert_eq!(seller.people.len(), 1);
    assert_eq!(seller.people[0].name.given, "Antonio Salesmacher");
    assert_eq!(seller.emails.len(), 1);
    assert_eq!(seller.emails[0].address, "antonio@salescompany.no");
    assert_eq!(seller.telephones.len(), 1);
    assert_eq!(seller.telephones[0].number, "46211230");

    // The ordering block keeps its own references alongside the seller.
    let ordering = inv.ordering.as_ref().unwrap();
    assert_eq!(ordering.code.as_deref(), Some("0150abc"));
    assert_eq!(ordering.purchases[0].code, "123");
    assert_eq!(ordering.contracts[0].code, "Contract321");
}

// ── Header, lines, settlement ───────────────────────────────────────────────

#[test]
fn header_fields() {
    let inv = convert(INVOICE_TEST_01);
    assert_eq!(inv.code, "SAMPLE-001");
    assert_eq!(inv.invoice_type, InvoiceType::Standard);
    assert_eq!(inv.issue_date, date(2024, 2, 13));
    assert_eq!(inv.currency, "EUR");
    assert_eq!(
        inv.notes,
        vec![Note {
            code: Some("AAI".into()),
            text: "Thank you for your business.".into(),
        }]
    );
}

#[test]
fn lines() {
    let inv = convert(INVOICE_TEST_01);
    assert_eq!(inv.lines.len(), 2);

    let first = &inv.lines[0];
    assert_eq!(first.index, 1);
    assert_eq!(first.quantity, dec!(20));
    assert_eq!(first.item.name, "Development services");
    assert_eq!(first.item.reference.as_deref(), Some("DEV-01"));
    assert_eq!(first.item.price, dec!(90));
    assert_eq!(first.item.unit.as_deref(), Some("HUR"));
    assert_eq!(first.discounts.len(), 1);
    assert_eq!(first.discounts[0].key, Some(DiscountKey::Discount));
    assert_eq!(first.discounts[0].amount, dec!(180));
    assert_eq!(first.sum, Some(dec!(1620)));

    let second = &inv.lines[1];
    assert_eq!(second.index, 2);
    assert_eq!(second.item.gross_price, Some(dec!(45)));
    assert_eq!(second.item.base_quantity, Some(dec!(1)));
    assert_eq!(second.item.origin.as_deref(), Some("AT"));
    assert_eq!(second.item.identities[0].scheme.as_deref(), Some("0160"));
    assert_eq!(second.taxes[0].percent, Some(dec!(7)));
    assert_eq!(second.notes[0].text, "Printed edition");
}

#[test]
fn payment_block() {
    let inv = convert(INVOICE_TEST_01);
    let payment = inv.payment.as_ref().unwrap();
    assert!(payment.payee.is_none());

    let terms = payment.terms.as_ref().unwrap();
    assert_eq!(terms.detail.as_deref(), Some("Payable within 30 days"));
    assert_eq!(terms.due_dates[0].date, date(2024, 3, 14));

    let instr = payment.instructions.as_ref().unwrap();
    assert_eq!(instr.key, PaymentMeansKey::SepaCreditTransfer);
    assert_eq!(instr.detail.as_deref(), Some("SEPA credit transfer"));
    assert_eq!(instr.reference.as_deref(), Some("SAMPLE-001"));
    assert_eq!(
        instr.credit_transfer[0],
        CreditTransfer {
            iban: Some("DE75512108001245126199".into()),
            number: None,
            name: Some("Sample Seller".into()),
            bic: Some("SOGEDEFFXXX".into()),
        }
    );
}

#[test]
fn payee_is_mapped() {
    let inv = convert(CII_EXAMPLE_2);
    let payment = inv.payment.as_ref().unwrap();
    let payee = payment.payee.as_ref().unwrap();
    assert_eq!(payee.name, "Ebeneser Scrooge AS");
    assert_eq!(
        payment.instructions.as_ref().unwrap().key,
        PaymentMeansKey::CreditTransfer
    );
}

#[test]
fn ordering_delivery_and_references() {
    let inv = convert(INVOICE_TEST_01);

    let ordering = inv.ordering.as_ref().unwrap();
    assert!(ordering.seller.is_none());
    assert_eq!(ordering.code.as_deref(), Some("04011000-12345-34"));
    assert_eq!(ordering.purchases[0].code, "PO-4711");
    assert_eq!(ordering.contracts[0].code, "CT-2024-07");
    assert_eq!(ordering.projects[0].code, "PRJ-42");
    assert_eq!(
        ordering.period,
        Some(Period {
            start: date(2024, 1, 1),
            end: date(2024, 1, 31),
        })
    );

    let delivery = inv.delivery.as_ref().unwrap();
    assert_eq!(delivery.date, Some(date(2024, 2, 10)));
    assert!(delivery.receiver.is_none());

    assert_eq!(inv.preceding.len(), 1);
    assert_eq!(inv.preceding[0].code, "INV-100");
    assert_eq!(inv.preceding[0].issue_date, None);

    let other = convert(CII_EXAMPLE_2);
    assert_eq!(other.preceding[0].code, "TOSL100");
    assert_eq!(other.preceding[0].issue_date, Some(date(2013, 6, 1)));
    let receiver = other.delivery.unwrap().receiver.unwrap();
    assert_eq!(receiver.addresses[0].locality, "DeliveryCity");
}

#[test]
fn header_charges() {
    let inv = convert(INVOICE_TEST_01);
    assert!(inv.discounts.is_empty());
    assert_eq!(inv.charges.len(), 1);
    let charge = &inv.charges[0];
    assert_eq!(charge.key, Some(ChargeKey::Freight));
    assert_eq!(charge.reason.as_deref(), Some("Freight"));
    assert_eq!(charge.amount, dec!(25));
    assert_eq!(charge.taxes[0].category_code(), Some("S"));
}

#[test]
fn guideline_is_recognised() {
    let doc = load(INVOICE_TEST_01);
    assert_eq!(
        Context::from_guideline(&doc.context.guideline.id),
        Some(Context::XRechnung)
    );
}

// ── Behaviour ───────────────────────────────────────────────────────────────

#[test]
fn conversion_is_idempotent() {
    let doc = load(CII_EXAMPLE_2);
    let first = Converter::new(&doc).convert().unwrap();
    let second = Converter::new(&doc).convert().unwrap();
    assert_eq!(first, second);
}

#[test]
fn self_billed_type() {
    let xml = INVOICE_TEST_01.replacen(
        "<ram:TypeCode>380</ram:TypeCode>",
        "<ram:TypeCode>389</ram:TypeCode>",
        1,
    );
    assert_eq!(convert(&xml).invoice_type, InvoiceType::SelfBilled);
}

#[test]
fn unsupported_date_format_aborts() {
    let xml = INVOICE_TEST_01.replacen(
        r#"<udt:DateTimeString format="102">20240213</udt:DateTimeString>"#,
        r#"<udt:DateTimeString format="610">202402</udt:DateTimeString>"#,
        1,
    );
    let err = ctog::convert_to_invoice(xml.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("unsupported date format"), "{err}");
}

#[test]
fn bad_charge_indicator_aborts() {
    let xml = INVOICE_TEST_01.replacen(
        "<udt:Indicator>true</udt:Indicator>",
        "<udt:Indicator>maybe</udt:Indicator>",
        1,
    );
    let err = ctog::convert_to_invoice(xml.as_bytes()).unwrap_err();
    assert!(matches!(err, ConversionError::Mapping { .. }));
}

#[test]
fn empty_reference_date_aborts() {
    let xml = CII_EXAMPLE_2.replacen(
        r#"<qdt:DateTimeString format="102">20130601</qdt:DateTimeString>"#,
        r#"<qdt:DateTimeString format="102"></qdt:DateTimeString>"#,
        1,
    );
    let err = ctog::convert_to_invoice(xml.as_bytes()).unwrap_err();
    assert_eq!(err.field(), Some("preceding[0].issue_date"));
}

#[test]
fn truncated_xml_is_rejected() {
    let truncated = &INVOICE_TEST_01[..INVOICE_TEST_01.len() / 2];
    assert!(matches!(
        ctog::convert_to_invoice(truncated.as_bytes()),
        Err(ConversionError::Xml(_))
    ));
}
