use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Code-list values attached to a tax-relevant object, keyed by extension name.
pub type Extensions = BTreeMap<String, String>;

/// Extension key holding the UNTDID 1001 document type code.
pub const EXT_KEY_DOCUMENT_TYPE: &str = "untdid-document-type";
/// Extension key holding the UNTDID 5305 tax category code.
pub const EXT_KEY_TAX_CATEGORY: &str = "untdid-tax-category";
/// Extension key holding the CEF VATEX exemption reason code.
pub const EXT_KEY_EXEMPTION: &str = "cef-vatex";
/// Extension key holding the UNTDID 4461 payment means code.
pub const EXT_KEY_PAYMENT_MEANS: &str = "untdid-payment-means";
/// Extension key holding the UNTDID 7161 charge reason code.
pub const EXT_KEY_CHARGE: &str = "untdid-charge";
/// Extension key holding the UNTDID 5189 allowance reason code.
pub const EXT_KEY_ALLOWANCE: &str = "untdid-allowance";

/// Canonical invoice: the flat business document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice identifier.
    pub code: String,
    /// Document type.
    #[serde(rename = "type")]
    pub invoice_type: InvoiceType,
    /// Issue date.
    pub issue_date: NaiveDate,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Document-level tax information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<Tax>,
    /// Party issuing the invoice (or its tax representative).
    pub supplier: Party,
    /// Party receiving the invoice.
    pub customer: Party,
    /// Invoice lines, in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<Line>,
    /// Document-level discounts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discounts: Vec<Discount>,
    /// Document-level charges.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub charges: Vec<Charge>,
    /// Ordering details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordering: Option<Ordering>,
    /// Payment details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
    /// Delivery details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Delivery>,
    /// Preceding invoices this document refers to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preceding: Vec<DocumentRef>,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<Note>,
}

/// Canonical invoice type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvoiceType {
    Standard,
    CreditNote,
    DebitNote,
    Corrective,
    SelfBilled,
    Proforma,
    Partial,
    Prepayment,
}

/// Document-level tax information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tax {
    #[serde(default, skip_serializing_if = "Extensions::is_empty")]
    pub ext: Extensions,
}

/// Free-text note, optionally classified by a UNTDID 4451 subject code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub text: String,
}

/// Business party (supplier, customer, payee, representative, receiver).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    /// Trading name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<TaxIdentity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identities: Vec<Identity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub people: Vec<Person>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<Email>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub telephones: Vec<Telephone>,
    /// Electronic addresses (e.g. Peppol participant IDs).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inboxes: Vec<Inbox>,
}

/// VAT identifier split into country prefix and national code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxIdentity {
    /// ISO 3166-1 alpha-2 (or VAT prefix such as "EL").
    pub country: String,
    pub code: String,
}

/// Additional identifier, optionally qualified by a scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// Kind of identity, e.g. "legal", "tax-number".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub code: String,
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_extra: Option<String>,
    #[serde(default)]
    pub locality: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Postal code.
    #[serde(default)]
    pub code: String,
    /// ISO 3166-1 alpha-2.
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    /// Department or function.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub given: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Telephone {
    pub number: String,
}

/// Electronic address with optional EAS scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inbox {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    pub code: String,
}

/// Invoice line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// 1-based position.
    pub index: usize,
    pub quantity: Decimal,
    pub item: Item,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub taxes: Vec<TaxCombo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discounts: Vec<Discount>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub charges: Vec<Charge>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<Note>,
    /// Line net amount as stated by the source document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sum: Option<Decimal>,
}

/// Item being invoiced on a line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Net unit price.
    pub price: Decimal,
    /// Price before item-level discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_price: Option<Decimal>,
    /// Quantity the price refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_quantity: Option<Decimal>,
    /// UN/ECE Rec 20 unit code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Seller's item identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Buyer's item identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_reference: Option<String>,
    /// Standard identifiers (GTIN etc.).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identities: Vec<Identity>,
    /// Country of origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

/// Tax applied to a line, charge or discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxCombo {
    /// Tax type, e.g. "VAT".
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Extensions::is_empty")]
    pub ext: Extensions,
}

impl TaxCombo {
    /// UNTDID 5305 category code, if recorded.
    pub fn category_code(&self) -> Option<&str> {
        self.ext.get(EXT_KEY_TAX_CATEGORY).map(String::as_str)
    }
}

/// Amount added to the total (document or line level).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<ChargeKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Decimal>,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub taxes: Vec<TaxCombo>,
    #[serde(default, skip_serializing_if = "Extensions::is_empty")]
    pub ext: Extensions,
}

/// Amount subtracted from the total (document or line level).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<DiscountKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Decimal>,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub taxes: Vec<TaxCombo>,
    #[serde(default, skip_serializing_if = "Extensions::is_empty")]
    pub ext: Extensions,
}

/// Classified charge reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChargeKey {
    Advertising,
    Telecommunication,
    Modification,
    Outlays,
    Miscellaneous,
    Packing,
    Freight,
    Financing,
    FlatRate,
    Labelling,
    Testing,
    Insurance,
    Handling,
    Storage,
    Environmental,
    Other,
}

/// Classified discount reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscountKey {
    EarlyCompletion,
    Military,
    WorkAccident,
    SpecialAgreement,
    ProductionError,
    NewOutlet,
    Sample,
    EndOfRange,
    Incoterm,
    PosThreshold,
    Discount,
    Special,
    FixedLongTerm,
    Temporary,
    Standard,
    YearlyTurnover,
}

/// Payment details: who gets paid, when and how.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee: Option<Party>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<Terms>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Instructions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Terms {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub due_dates: Vec<DueDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueDate {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

/// How the payment is expected to be made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructions {
    pub key: PaymentMeansKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Remittance information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub credit_transfer: Vec<CreditTransfer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_debit: Option<DirectDebit>,
    #[serde(default, skip_serializing_if = "Extensions::is_empty")]
    pub ext: Extensions,
}

/// Canonical payment means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMeansKey {
    Any,
    Cash,
    Cheque,
    BankDraft,
    CreditTransfer,
    DebitTransfer,
    BankAccount,
    Card,
    DirectDebit,
    StandingOrder,
    SepaCreditTransfer,
    SepaDirectDebit,
    Online,
    Netting,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditTransfer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    /// Proprietary account number when no IBAN is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Last digits of the card number.
    pub last4: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectDebit {
    /// Mandate reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Creditor identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creditor: Option<String>,
    /// Debited account (IBAN).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
}

/// Ordering details; `seller` is set when the supplier is a tax representative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ordering {
    /// Buyer reference (e.g. Leitweg-ID).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<Party>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identities: Vec<Identity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<DocumentRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contracts: Vec<DocumentRef>,
    /// Buyer's purchase orders.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub purchases: Vec<DocumentRef>,
    /// Seller's sales orders.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sales: Vec<DocumentRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub receiving: Vec<DocumentRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub despatch: Vec<DocumentRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tender: Vec<DocumentRef>,
}

impl Ordering {
    /// True when no field carries information.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<Party>,
    /// Actual delivery date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Reference to another document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// UNTDID 1001 type of the referenced document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_code: Option<String>,
}

impl DocumentRef {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            issue_date: None,
            description: None,
            type_code: None,
        }
    }
}

/// Document totals, as written to the CII monetary summation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of line net amounts.
    pub line_net_total: Decimal,
    pub discounts_total: Decimal,
    pub charges_total: Decimal,
    /// line_net_total - discounts + charges.
    pub net_total: Decimal,
    pub vat_total: Decimal,
    /// net_total + vat_total.
    pub gross_total: Decimal,
    pub vat_breakdown: Vec<VatBreakdown>,
}

/// VAT amount per category/rate combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatBreakdown {
    /// UNTDID 5305 category code.
    pub category: String,
    pub percent: Decimal,
    pub taxable_amount: Decimal,
    pub tax_amount: Decimal,
}
