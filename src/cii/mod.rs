//! UN/CEFACT Cross Industry Invoice (CII) document tree and XML codec.
//!
//! # Example
//!
//! ```no_run
//! use belegwandler::cii;
//!
//! let bytes = std::fs::read("invoice.xml").unwrap();
//! let doc = cii::from_cii_xml(&bytes).unwrap();
//! let xml = cii::to_cii_xml(&doc).unwrap();
//! ```

mod context;
mod document;
#[cfg(feature = "xml")]
mod xml;

pub use context::*;
pub use document::*;
#[cfg(feature = "xml")]
pub use xml::{from_cii_xml, to_cii_xml};

/// CII namespace URIs.
pub mod ns {
    pub const RSM: &str = "urn:un:unece:uncefact:data:standard:CrossIndustryInvoice:100";
    pub const RAM: &str =
        "urn:un:unece:uncefact:data:standard:ReusableAggregateBusinessInformationEntity:100";
    pub const QDT: &str = "urn:un:unece:uncefact:data:standard:QualifiedDataType:100";
    pub const UDT: &str = "urn:un:unece:uncefact:data:standard:UnqualifiedDataType:100";
}
