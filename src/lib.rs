//! # belegwandler
//!
//! Bidirectional mapping between UN/CEFACT Cross Industry Invoice (CII)
//! documents and a flat canonical invoice model.
//!
//! - [`ctog`] converts a decoded CII [`cii::Document`] into a [`core::Invoice`].
//! - [`gtoc`] converts an invoice back into a CII document for a chosen
//!   guideline [`cii::Context`], computing totals and the VAT breakdown.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Dates are [`chrono::NaiveDate`].
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "xml")] {
//! use belegwandler::cii::Context;
//! use belegwandler::core::*;
//! use belegwandler::{ctog, gtoc};
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new("RE-2024-001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .supplier(PartyBuilder::new("ACME GmbH")
//!         .tax_id("DE", "123456789")
//!         .address(AddressBuilder::new("Berlin", "10115", "DE").build())
//!         .build())
//!     .customer(PartyBuilder::new("Kunde AG")
//!         .address(AddressBuilder::new("München", "80331", "DE").build())
//!         .build())
//!     .add_line(LineBuilder::new("Beratung", dec!(10), dec!(150))
//!         .unit("HUR")
//!         .vat("S", dec!(19))
//!         .build())
//!     .build()
//!     .unwrap();
//!
//! let xml = gtoc::convert_to_cii(&invoice, Context::XRechnung).unwrap();
//! let parsed = ctog::convert_to_invoice(xml.as_bytes()).unwrap();
//! assert_eq!(parsed.supplier.tax_id, invoice.supplier.tax_id);
//! assert_eq!(parsed.lines[0].sum, Some(dec!(1500.00)));
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `xml` (default) | CII XML decoding and encoding via `quick-xml` |
//!
//! ## Logging
//!
//! Conversions emit [`tracing`] events (`debug` per document, `trace` per
//! resolver decision). No subscriber is installed by the library.

pub mod cii;
pub mod convert;
pub mod core;

pub use convert::{ctog, gtoc};
