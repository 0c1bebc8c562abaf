#![cfg(feature = "xml")]

use belegwandler::cii::{self, Context};
use belegwandler::core::*;
use belegwandler::{ctog, gtoc};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

const INVOICE_TEST_01: &str = include_str!("data/invoice-test-01.xml");
const CII_EXAMPLE_2: &str = include_str!("data/CII_example2.xml");

#[test]
fn decode_encode_decode_is_stable() {
    for xml in [INVOICE_TEST_01, CII_EXAMPLE_2] {
        let doc = cii::from_cii_xml(xml.as_bytes()).unwrap();
        let encoded = cii::to_cii_xml(&doc).unwrap();
        let again = cii::from_cii_xml(encoded.as_bytes()).unwrap();
        assert_eq!(doc, again);
    }
}

#[test]
fn prefixed_elements_are_decoded() {
    let doc = cii::from_cii_xml(INVOICE_TEST_01.as_bytes()).unwrap();
    assert_eq!(doc.exchanged_document.id, "SAMPLE-001");
    assert_eq!(doc.exchanged_document.type_code, "380");
    assert_eq!(doc.transaction.line_items.len(), 2);
    assert_eq!(doc.transaction.line_items[0].product.name, "Development services");
    assert_eq!(
        doc.transaction.agreement.seller.name.as_deref(),
        Some("Sample Seller")
    );
    assert_eq!(doc.transaction.settlement.summation.grand_total, "2043.15");

    let doc = cii::from_cii_xml(CII_EXAMPLE_2.as_bytes()).unwrap();
    assert_eq!(doc.exchanged_document.id, "TOSL108");
    assert_eq!(doc.transaction.line_items.len(), 1);
    let representative = doc.transaction.agreement.seller_tax_representative.unwrap();
    assert_eq!(representative.name.as_deref(), Some("Tax handling company AS"));
    assert_eq!(doc.transaction.settlement.summation.grand_total, "1250.00");
}

#[test]
fn party_description_is_ignored() {
    let with_description = INVOICE_TEST_01.replacen(
        "<ram:Name>Sample Seller</ram:Name>",
        "<ram:Name>Sample Seller</ram:Name><ram:Description>Registered trader</ram:Description>",
        1,
    );
    let doc = cii::from_cii_xml(with_description.as_bytes()).unwrap();
    let plain = cii::from_cii_xml(INVOICE_TEST_01.as_bytes()).unwrap();
    assert_eq!(doc, plain);
    assert!(!cii::to_cii_xml(&doc).unwrap().contains("Registered trader"));
}

#[test]
fn forward_reverse_forward_preserves_invoice() {
    for xml in [INVOICE_TEST_01, CII_EXAMPLE_2] {
        let first = ctog::convert_to_invoice(xml.as_bytes()).unwrap();
        let written = gtoc::convert_to_cii(&first, Context::En16931).unwrap();
        let second = ctog::convert_to_invoice(written.as_bytes()).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn reverse_totals_match_source_summation() {
    let doc = cii::from_cii_xml(INVOICE_TEST_01.as_bytes()).unwrap();
    let invoice = ctog::Converter::new(&doc).convert().unwrap();
    let out = gtoc::Converter::new(Context::XRechnung)
        .convert(&invoice)
        .unwrap();

    let expected = &doc.transaction.settlement.summation;
    let actual = &out.transaction.settlement.summation;
    assert_eq!(actual.line_total, expected.line_total);
    assert_eq!(actual.charge_total, expected.charge_total);
    assert_eq!(actual.tax_basis_total, expected.tax_basis_total);
    assert_eq!(actual.tax_total[0].value, expected.tax_total[0].value);
    assert_eq!(actual.grand_total, expected.grand_total);
    assert_eq!(actual.due_payable, expected.due_payable);
}

#[test]
fn written_document_has_namespaces_and_context() {
    let invoice = InvoiceBuilder::new("NS-1", NaiveDate::from_ymd_opt(2024, 2, 13).unwrap())
        .supplier(PartyBuilder::new("Seller & Söhne").build())
        .customer(PartyBuilder::new("Buyer").build())
        .add_line(LineBuilder::new("Widget", dec!(1), dec!(10)).vat("S", dec!(19)).build())
        .build()
        .unwrap();
    let xml = gtoc::convert_to_cii(&invoice, Context::XRechnung).unwrap();

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains(&format!("xmlns:rsm=\"{}\"", cii::ns::RSM)));
    assert!(xml.contains(&format!("xmlns:ram=\"{}\"", cii::ns::RAM)));
    assert!(xml.contains(cii::XRECHNUNG_GUIDELINE_ID));
    assert!(xml.contains("Seller &amp; Söhne"));
    assert!(xml.contains("<ram:GrandTotalAmount>11.90</ram:GrandTotalAmount>"));

    let parsed = ctog::convert_to_invoice(xml.as_bytes()).unwrap();
    assert_eq!(parsed.supplier.name, "Seller & Söhne");
}

#[test]
fn byte_order_mark_is_accepted() {
    let mut bytes = "\u{feff}".as_bytes().to_vec();
    bytes.extend_from_slice(CII_EXAMPLE_2.as_bytes());
    let invoice = ctog::convert_to_invoice(&bytes).unwrap();
    assert_eq!(invoice.code, "TOSL108");
}

#[test]
fn invalid_utf8_is_rejected() {
    let err = cii::from_cii_xml(&[0x3c, 0xff, 0xfe, 0x3e]).unwrap_err();
    assert!(matches!(err, ConversionError::Xml(_)));
}
