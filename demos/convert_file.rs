//! Convert a CII invoice file to the canonical model and back.
//!
//! ```sh
//! cargo run --example convert_file -- tests/data/CII_example2.xml
//! ```

use std::process::ExitCode;

use belegwandler::cii::Context;
use belegwandler::core::calculate_totals;
use belegwandler::{ctog, gtoc};

fn main() -> ExitCode {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: convert_file <invoice.xml>");
        return ExitCode::FAILURE;
    };
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("cannot read {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let invoice = match ctog::convert_to_invoice(&bytes) {
        Ok(invoice) => invoice,
        Err(e) => {
            match e.field() {
                Some(field) => eprintln!("conversion failed at {field}: {e}"),
                None => eprintln!("conversion failed: {e}"),
            }
            return ExitCode::FAILURE;
        }
    };

    println!("=== Canonical invoice ===");
    println!(
        "{}",
        serde_json::to_string_pretty(&invoice).expect("invoice serializes to JSON")
    );

    let totals = calculate_totals(&invoice).expect("invoice totals fit the decimal range");
    println!("\n=== Totals ===");
    println!("Net:   {} {}", totals.net_total, invoice.currency);
    println!("VAT:   {} {}", totals.vat_total, invoice.currency);
    println!("Gross: {} {}", totals.gross_total, invoice.currency);

    let xml = gtoc::convert_to_cii(&invoice, Context::En16931).expect("CII generation failed");
    println!("\n=== CII (EN 16931) ===");
    println!("{}", &xml[..800.min(xml.len())]);
    ExitCode::SUCCESS
}
