//! Property-based tests for code lists, dates and conversions.
//!
//! Run with: `cargo test --test proptest_tests`

use belegwandler::cii::Context;
use belegwandler::convert::codes::{DOCUMENT_TYPES, PAYMENT_MEANS};
use belegwandler::convert::date::{format_date, parse_date};
use belegwandler::convert::payment::has_payment;
use belegwandler::core::*;
use belegwandler::{ctog, gtoc};
use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn seller() -> Party {
    PartyBuilder::new("ACME GmbH")
        .tax_id("DE", "123456789")
        .address(
            AddressBuilder::new("Berlin", "10115", "DE")
                .street("Friedrichstraße 123")
                .build(),
        )
        .email("billing@acme.de")
        .build()
}

fn buyer() -> Party {
    PartyBuilder::new("Kunde AG")
        .address(
            AddressBuilder::new("München", "80331", "DE")
                .street("Marienplatz 1")
                .build(),
        )
        .build()
}

fn build(lines: Vec<Line>) -> Invoice {
    let mut builder =
        InvoiceBuilder::new("RE-2024-PROP", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
            .supplier(seller())
            .customer(buyer());
    for line in lines {
        builder = builder.add_line(line);
    }
    builder.build().unwrap()
}

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Any calendar date between 1900 and 2999.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..3000, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Generate a reasonable price (0.01 to 99999.99).
fn arb_price() -> impl Strategy<Value = Decimal> {
    (1u64..10_000_000u64).prop_map(|cents| Decimal::new(cents as i64, 2))
}

fn arb_quantity() -> impl Strategy<Value = Decimal> {
    (1u32..=100u32).prop_map(Decimal::from)
}

fn arb_rate() -> impl Strategy<Value = (&'static str, Decimal)> {
    prop_oneof![
        Just(("Z", dec!(0))),
        Just(("S", dec!(7))),
        Just(("S", dec!(19))),
    ]
}

fn arb_lines() -> impl Strategy<Value = Vec<Line>> {
    prop::collection::vec((arb_quantity(), arb_price(), arb_rate()), 1..=5).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (qty, price, (cat, rate)))| {
                LineBuilder::new(format!("Item {}", i + 1), qty, price)
                    .unit("C62")
                    .vat(cat, rate)
                    .build()
            })
            .collect()
    })
}

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// Every valid date survives format → parse.
    #[test]
    fn date_round_trip(date in arb_date()) {
        let s = format_date(date);
        prop_assert_eq!(s.len(), 8);
        prop_assert_eq!(parse_date(&s, Some("102")).unwrap(), date);
    }

    /// Eight-digit strings either parse to a date that formats back identically, or fail.
    #[test]
    fn parse_then_format_is_identity(s in "[0-9]{8}") {
        if let Ok(date) = parse_date(&s, None) {
            prop_assert_eq!(format_date(date), s);
        }
    }

    /// Only the generic payment means code leaves an otherwise empty settlement without payment.
    #[test]
    fn predicate_tracks_means_code(idx in 0usize..15) {
        let code = PAYMENT_MEANS.codes().nth(idx).unwrap();
        let means = belegwandler::cii::PaymentMeans {
            type_code: code.to_string(),
            ..Default::default()
        };
        prop_assert_eq!(has_payment(None, None, Some(&means)), code != "1");
    }

    /// Canonical → CII → canonical preserves key fields and totals.
    #[test]
    fn reverse_forward_preserves_fields(lines in arb_lines()) {
        let inv = build(lines);
        let doc = gtoc::Converter::new(Context::XRechnung).convert(&inv).unwrap();
        let parsed = ctog::Converter::new(&doc).convert().unwrap();

        prop_assert_eq!(&parsed.code, &inv.code);
        prop_assert_eq!(parsed.issue_date, inv.issue_date);
        prop_assert_eq!(parsed.invoice_type, inv.invoice_type);
        prop_assert_eq!(&parsed.currency, &inv.currency);
        prop_assert_eq!(parsed.lines.len(), inv.lines.len());
        prop_assert_eq!(&parsed.supplier, &inv.supplier);
        prop_assert_eq!(&parsed.customer, &inv.customer);

        let orig = calculate_totals(&inv).unwrap();
        let round = calculate_totals(&parsed).unwrap();
        prop_assert_eq!(round.line_net_total, orig.line_net_total);
        prop_assert_eq!(round.vat_total, orig.vat_total);
        prop_assert_eq!(round.gross_total, orig.gross_total);
    }

    /// Two converter instances on the same document agree.
    #[test]
    fn forward_is_idempotent(lines in arb_lines()) {
        let doc = gtoc::Converter::new(Context::En16931).convert(&build(lines)).unwrap();
        let a = ctog::Converter::new(&doc).convert().unwrap();
        let b = ctog::Converter::new(&doc).convert().unwrap();
        prop_assert_eq!(a, b);
    }

    /// VAT per group is rounded to cents and sums to the total.
    #[test]
    fn breakdown_sums_to_vat_total(lines in arb_lines()) {
        let totals = calculate_totals(&build(lines)).unwrap();
        let sum: Decimal = totals.vat_breakdown.iter().map(|b| b.tax_amount).sum();
        prop_assert_eq!(sum, totals.vat_total);
        for b in &totals.vat_breakdown {
            prop_assert_eq!(b.tax_amount, b.tax_amount.round_dp(2));
        }
        prop_assert_eq!(totals.gross_total, totals.net_total + totals.vat_total);
    }
}

#[test]
fn document_type_codes_round_trip() {
    for code in DOCUMENT_TYPES.codes() {
        let value = DOCUMENT_TYPES.to_canonical(code).unwrap();
        assert_eq!(DOCUMENT_TYPES.to_code(value).unwrap(), code);
    }
}

#[test]
fn unicode_names_survive() {
    let mut inv = build(vec![
        LineBuilder::new("Größenänderung – Übersetzung", dec!(1), dec!(100))
            .vat("S", dec!(19))
            .build(),
    ]);
    inv.customer.name = "Ærøskøbing Café ÖÄÜ".into();
    let doc = gtoc::Converter::new(Context::default()).convert(&inv).unwrap();
    let parsed = ctog::Converter::new(&doc).convert().unwrap();
    assert_eq!(parsed.customer.name, "Ærøskøbing Café ÖÄÜ");
    assert_eq!(parsed.lines[0].item.name, "Größenänderung – Übersetzung");
}
