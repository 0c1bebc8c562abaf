//! Static code-list tables between CII codes and canonical values.
//!
//! Each table is plain data: supporting another code means adding a row,
//! never touching the converters.

use std::fmt::Debug;

use crate::core::*;

/// Bidirectional, exhaustively enumerated code list.
#[derive(Debug)]
pub struct CodeList<T: 'static> {
    name: &'static str,
    entries: &'static [(&'static str, T)],
}

impl<T: Copy + PartialEq + Debug> CodeList<T> {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, T)]) -> Self {
        Self { name, entries }
    }

    /// Name used in error messages, e.g. "UNTDID 1001 document type".
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up the canonical value for a code, if listed.
    pub fn find(&self, code: &str) -> Option<T> {
        let code = code.trim();
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, v)| *v)
    }

    /// Look up the code for a canonical value, if listed.
    pub fn find_code(&self, value: T) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(c, _)| *c)
    }

    /// Forward translation; unknown codes are an error.
    pub fn to_canonical(&self, code: &str) -> Result<T, ConversionError> {
        self.find(code).ok_or_else(|| ConversionError::UnsupportedCode {
            list: self.name,
            code: code.to_string(),
        })
    }

    /// Reverse translation; values missing from the table are an error.
    pub fn to_code(&self, value: T) -> Result<&'static str, ConversionError> {
        self.find_code(value)
            .ok_or_else(|| ConversionError::UnsupportedCode {
                list: self.name,
                code: format!("{value:?}"),
            })
    }

    /// All codes in table order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(c, _)| *c)
    }
}

/// UNTDID 1001 document type codes.
pub static DOCUMENT_TYPES: CodeList<InvoiceType> = CodeList::new(
    "UNTDID 1001 document type",
    &[
        ("380", InvoiceType::Standard),
        ("381", InvoiceType::CreditNote),
        ("383", InvoiceType::DebitNote),
        ("384", InvoiceType::Corrective),
        ("389", InvoiceType::SelfBilled),
        ("325", InvoiceType::Proforma),
        ("326", InvoiceType::Partial),
        ("386", InvoiceType::Prepayment),
    ],
);

/// Payment means code meaning "instrument not defined".
pub const PAYMENT_MEANS_GENERIC: &str = "1";

/// UNTDID 4461 payment means codes.
pub static PAYMENT_MEANS: CodeList<PaymentMeansKey> = CodeList::new(
    "UNTDID 4461 payment means",
    &[
        (PAYMENT_MEANS_GENERIC, PaymentMeansKey::Any),
        ("10", PaymentMeansKey::Cash),
        ("20", PaymentMeansKey::Cheque),
        ("21", PaymentMeansKey::BankDraft),
        ("30", PaymentMeansKey::CreditTransfer),
        ("31", PaymentMeansKey::DebitTransfer),
        ("42", PaymentMeansKey::BankAccount),
        ("48", PaymentMeansKey::Card),
        ("49", PaymentMeansKey::DirectDebit),
        ("57", PaymentMeansKey::StandingOrder),
        ("58", PaymentMeansKey::SepaCreditTransfer),
        ("59", PaymentMeansKey::SepaDirectDebit),
        ("68", PaymentMeansKey::Online),
        ("97", PaymentMeansKey::Netting),
        ("ZZZ", PaymentMeansKey::Other),
    ],
);

/// UNTDID 7161 charge reason codes.
pub static CHARGE_REASONS: CodeList<ChargeKey> = CodeList::new(
    "UNTDID 7161 charge reason",
    &[
        ("AA", ChargeKey::Advertising),
        ("AAA", ChargeKey::Telecommunication),
        ("AAC", ChargeKey::Modification),
        ("AAE", ChargeKey::Outlays),
        ("ABK", ChargeKey::Miscellaneous),
        ("ABL", ChargeKey::Packing),
        ("FC", ChargeKey::Freight),
        ("FI", ChargeKey::Financing),
        ("FL", ChargeKey::FlatRate),
        ("LA", ChargeKey::Labelling),
        ("TS", ChargeKey::Testing),
        ("IN", ChargeKey::Insurance),
        ("HD", ChargeKey::Handling),
        ("ST", ChargeKey::Storage),
        ("AEW", ChargeKey::Environmental),
        ("ZZZ", ChargeKey::Other),
    ],
);

/// UNTDID 5189 allowance reason codes.
pub static ALLOWANCE_REASONS: CodeList<DiscountKey> = CodeList::new(
    "UNTDID 5189 allowance reason",
    &[
        ("41", DiscountKey::EarlyCompletion),
        ("62", DiscountKey::Military),
        ("63", DiscountKey::WorkAccident),
        ("64", DiscountKey::SpecialAgreement),
        ("65", DiscountKey::ProductionError),
        ("66", DiscountKey::NewOutlet),
        ("67", DiscountKey::Sample),
        ("68", DiscountKey::EndOfRange),
        ("70", DiscountKey::Incoterm),
        ("71", DiscountKey::PosThreshold),
        ("95", DiscountKey::Discount),
        ("100", DiscountKey::Special),
        ("102", DiscountKey::FixedLongTerm),
        ("103", DiscountKey::Temporary),
        ("104", DiscountKey::Standard),
        ("105", DiscountKey::YearlyTurnover),
    ],
);
