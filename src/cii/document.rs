//! In-memory CII document tree.
//!
//! Field order follows the CII D16B schema sequence so the tree serializes to
//! schema-valid XML. Optional substructures are `Option`, repeated ones `Vec`;
//! lexical values (amounts, dates, indicators) stay strings and are interpreted
//! by the resolvers in [`crate::convert`].
//!
//! Elements are written with their `rsm:`/`ram:`/`udt:`/`qdt:` prefix and read
//! back by local name: the quick-xml deserializer matches elements without
//! their prefix.

use serde::{Deserialize, Serialize};

/// Document root, `rsm:CrossIndustryInvoice`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename(serialize = "rsm:CrossIndustryInvoice", deserialize = "CrossIndustryInvoice"))]
pub struct Document {
    #[serde(rename = "@xmlns:rsm", default, skip_serializing_if = "Option::is_none")]
    pub rsm_namespace: Option<String>,
    #[serde(rename = "@xmlns:ram", default, skip_serializing_if = "Option::is_none")]
    pub ram_namespace: Option<String>,
    #[serde(rename = "@xmlns:qdt", default, skip_serializing_if = "Option::is_none")]
    pub qdt_namespace: Option<String>,
    #[serde(rename = "@xmlns:udt", default, skip_serializing_if = "Option::is_none")]
    pub udt_namespace: Option<String>,

    #[serde(rename(serialize = "rsm:ExchangedDocumentContext", deserialize = "ExchangedDocumentContext"), default)]
    pub context: ExchangedDocumentContext,
    #[serde(rename(serialize = "rsm:ExchangedDocument", deserialize = "ExchangedDocument"))]
    pub exchanged_document: ExchangedDocument,
    #[serde(rename(serialize = "rsm:SupplyChainTradeTransaction", deserialize = "SupplyChainTradeTransaction"))]
    pub transaction: SupplyChainTradeTransaction,
}

// ---------------------------------------------------------------------------
// Shared building blocks
// ---------------------------------------------------------------------------

/// `udt:DateTimeString` with its format discriminator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeString {
    #[serde(rename = "@format", default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: String,
}

/// Date wrapper using the unqualified data type (`udt:DateTimeString`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTime {
    #[serde(rename(serialize = "udt:DateTimeString", deserialize = "DateTimeString"))]
    pub date_time_string: DateTimeString,
}

/// Date wrapper using the qualified data type (`qdt:DateTimeString`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedDateTime {
    #[serde(rename(serialize = "qdt:DateTimeString", deserialize = "DateTimeString"))]
    pub date_time_string: DateTimeString,
}

/// Identifier with optional scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemedId {
    #[serde(rename = "@schemeID", default, skip_serializing_if = "Option::is_none")]
    pub scheme_id: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: String,
}

/// Monetary amount with optional currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    #[serde(rename = "@currencyID", default, skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: String,
}

/// Quantity with optional UN/ECE Rec 20 unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity {
    #[serde(rename = "@unitCode", default, skip_serializing_if = "Option::is_none")]
    pub unit_code: Option<String>,
    #[serde(rename = "$text", default)]
    pub value: String,
}

/// `ram:IncludedNote`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludedNote {
    #[serde(rename(serialize = "ram:Content", deserialize = "Content"), default)]
    pub content: String,
    #[serde(rename(serialize = "ram:SubjectCode", deserialize = "SubjectCode"), default, skip_serializing_if = "Option::is_none")]
    pub subject_code: Option<String>,
}

/// Any `*ReferencedDocument` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencedDocument {
    #[serde(rename(serialize = "ram:IssuerAssignedID", deserialize = "IssuerAssignedID"), default, skip_serializing_if = "Option::is_none")]
    pub issuer_assigned_id: Option<String>,
    #[serde(rename(serialize = "ram:URIID", deserialize = "URIID"), default, skip_serializing_if = "Option::is_none")]
    pub uri_id: Option<String>,
    #[serde(rename(serialize = "ram:TypeCode", deserialize = "TypeCode"), default, skip_serializing_if = "Option::is_none")]
    pub type_code: Option<String>,
    #[serde(rename(serialize = "ram:Name", deserialize = "Name"), default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename(serialize = "ram:FormattedIssueDateTime", deserialize = "FormattedIssueDateTime"), default, skip_serializing_if = "Option::is_none")]
    pub formatted_issue_date_time: Option<FormattedDateTime>,
}

/// `ram:ApplicableTradeTax` / `ram:CategoryTradeTax`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeTax {
    #[serde(rename(serialize = "ram:CalculatedAmount", deserialize = "CalculatedAmount"), default, skip_serializing_if = "Option::is_none")]
    pub calculated_amount: Option<String>,
    #[serde(rename(serialize = "ram:TypeCode", deserialize = "TypeCode"), default, skip_serializing_if = "Option::is_none")]
    pub type_code: Option<String>,
    #[serde(rename(serialize = "ram:ExemptionReason", deserialize = "ExemptionReason"), default, skip_serializing_if = "Option::is_none")]
    pub exemption_reason: Option<String>,
    #[serde(rename(serialize = "ram:BasisAmount", deserialize = "BasisAmount"), default, skip_serializing_if = "Option::is_none")]
    pub basis_amount: Option<String>,
    #[serde(rename(serialize = "ram:CategoryCode", deserialize = "CategoryCode"), default, skip_serializing_if = "Option::is_none")]
    pub category_code: Option<String>,
    #[serde(rename(serialize = "ram:ExemptionReasonCode", deserialize = "ExemptionReasonCode"), default, skip_serializing_if = "Option::is_none")]
    pub exemption_reason_code: Option<String>,
    #[serde(rename(serialize = "ram:RateApplicablePercent", deserialize = "RateApplicablePercent"), default, skip_serializing_if = "Option::is_none")]
    pub rate_applicable_percent: Option<String>,
}

/// `ram:ChargeIndicator`; `udt:Indicator` holds "true" (charge) or "false" (allowance).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeIndicator {
    #[serde(rename(serialize = "udt:Indicator", deserialize = "Indicator"), default)]
    pub indicator: String,
}

/// `ram:SpecifiedTradeAllowanceCharge` (header or line level).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeAllowanceCharge {
    #[serde(rename(serialize = "ram:ChargeIndicator", deserialize = "ChargeIndicator"))]
    pub charge_indicator: ChargeIndicator,
    #[serde(rename(serialize = "ram:CalculationPercent", deserialize = "CalculationPercent"), default, skip_serializing_if = "Option::is_none")]
    pub calculation_percent: Option<String>,
    #[serde(rename(serialize = "ram:BasisAmount", deserialize = "BasisAmount"), default, skip_serializing_if = "Option::is_none")]
    pub basis_amount: Option<String>,
    #[serde(rename(serialize = "ram:ActualAmount", deserialize = "ActualAmount"), default)]
    pub actual_amount: String,
    #[serde(rename(serialize = "ram:ReasonCode", deserialize = "ReasonCode"), default, skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<String>,
    #[serde(rename(serialize = "ram:Reason", deserialize = "Reason"), default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(rename(serialize = "ram:CategoryTradeTax", deserialize = "CategoryTradeTax"), default, skip_serializing_if = "Option::is_none")]
    pub category_trade_tax: Option<TradeTax>,
}

/// `ram:BillingSpecifiedPeriod`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPeriod {
    #[serde(rename(serialize = "ram:StartDateTime", deserialize = "StartDateTime"), default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime>,
    #[serde(rename(serialize = "ram:EndDateTime", deserialize = "EndDateTime"), default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime>,
}

// ---------------------------------------------------------------------------
// Parties
// ---------------------------------------------------------------------------

/// Any `*TradeParty` element (seller, buyer, payee, tax representative, ship-to).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeParty {
    #[serde(rename(serialize = "ram:ID", deserialize = "ID"), default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<SchemedId>,
    #[serde(rename(serialize = "ram:GlobalID", deserialize = "GlobalID"), default, skip_serializing_if = "Vec::is_empty")]
    pub global_ids: Vec<SchemedId>,
    #[serde(rename(serialize = "ram:Name", deserialize = "Name"), default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename(serialize = "ram:SpecifiedLegalOrganization", deserialize = "SpecifiedLegalOrganization"), default, skip_serializing_if = "Option::is_none")]
    pub legal_organization: Option<LegalOrganization>,
    #[serde(rename(serialize = "ram:DefinedTradeContact", deserialize = "DefinedTradeContact"), default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<TradeContact>,
    #[serde(rename(serialize = "ram:PostalTradeAddress", deserialize = "PostalTradeAddress"), default, skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<PostalAddress>,
    #[serde(rename(serialize = "ram:URIUniversalCommunication", deserialize = "URIUniversalCommunication"), default, skip_serializing_if = "Option::is_none")]
    pub uri_communication: Option<UriCommunication>,
    #[serde(rename(serialize = "ram:SpecifiedTaxRegistration", deserialize = "SpecifiedTaxRegistration"), default, skip_serializing_if = "Vec::is_empty")]
    pub tax_registrations: Vec<TaxRegistration>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalOrganization {
    #[serde(rename(serialize = "ram:ID", deserialize = "ID"), default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SchemedId>,
    #[serde(rename(serialize = "ram:TradingBusinessName", deserialize = "TradingBusinessName"), default, skip_serializing_if = "Option::is_none")]
    pub trading_business_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeContact {
    #[serde(rename(serialize = "ram:PersonName", deserialize = "PersonName"), default, skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,
    #[serde(rename(serialize = "ram:DepartmentName", deserialize = "DepartmentName"), default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    #[serde(rename(serialize = "ram:TelephoneUniversalCommunication", deserialize = "TelephoneUniversalCommunication"), default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<TelephoneCommunication>,
    #[serde(rename(serialize = "ram:EmailURIUniversalCommunication", deserialize = "EmailURIUniversalCommunication"), default, skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailCommunication>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelephoneCommunication {
    #[serde(rename(serialize = "ram:CompleteNumber", deserialize = "CompleteNumber"), default)]
    pub complete_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailCommunication {
    #[serde(rename(serialize = "ram:URIID", deserialize = "URIID"), default)]
    pub uri_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UriCommunication {
    #[serde(rename(serialize = "ram:URIID", deserialize = "URIID"))]
    pub uri_id: SchemedId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    #[serde(rename(serialize = "ram:PostcodeCode", deserialize = "PostcodeCode"), default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(rename(serialize = "ram:LineOne", deserialize = "LineOne"), default, skip_serializing_if = "Option::is_none")]
    pub line_one: Option<String>,
    #[serde(rename(serialize = "ram:LineTwo", deserialize = "LineTwo"), default, skip_serializing_if = "Option::is_none")]
    pub line_two: Option<String>,
    #[serde(rename(serialize = "ram:LineThree", deserialize = "LineThree"), default, skip_serializing_if = "Option::is_none")]
    pub line_three: Option<String>,
    #[serde(rename(serialize = "ram:CityName", deserialize = "CityName"), default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename(serialize = "ram:CountryID", deserialize = "CountryID"), default)]
    pub country_id: String,
    #[serde(rename(serialize = "ram:CountrySubDivisionName", deserialize = "CountrySubDivisionName"), default, skip_serializing_if = "Option::is_none")]
    pub subdivision: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRegistration {
    #[serde(rename(serialize = "ram:ID", deserialize = "ID"))]
    pub id: SchemedId,
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangedDocumentContext {
    #[serde(rename(serialize = "ram:BusinessProcessSpecifiedDocumentContextParameter", deserialize = "BusinessProcessSpecifiedDocumentContextParameter"), default, skip_serializing_if = "Option::is_none")]
    pub business_process: Option<ContextParameter>,
    #[serde(rename(serialize = "ram:GuidelineSpecifiedDocumentContextParameter", deserialize = "GuidelineSpecifiedDocumentContextParameter"), default)]
    pub guideline: ContextParameter,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextParameter {
    #[serde(rename(serialize = "ram:ID", deserialize = "ID"), default)]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangedDocument {
    #[serde(rename(serialize = "ram:ID", deserialize = "ID"), default)]
    pub id: String,
    #[serde(rename(serialize = "ram:TypeCode", deserialize = "TypeCode"), default)]
    pub type_code: String,
    #[serde(rename(serialize = "ram:IssueDateTime", deserialize = "IssueDateTime"), default)]
    pub issue_date_time: DateTime,
    #[serde(rename(serialize = "ram:IncludedNote", deserialize = "IncludedNote"), default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<IncludedNote>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyChainTradeTransaction {
    #[serde(rename(serialize = "ram:IncludedSupplyChainTradeLineItem", deserialize = "IncludedSupplyChainTradeLineItem"), default, skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<TradeLineItem>,
    #[serde(rename(serialize = "ram:ApplicableHeaderTradeAgreement", deserialize = "ApplicableHeaderTradeAgreement"), default)]
    pub agreement: HeaderTradeAgreement,
    #[serde(rename(serialize = "ram:ApplicableHeaderTradeDelivery", deserialize = "ApplicableHeaderTradeDelivery"), default)]
    pub delivery: HeaderTradeDelivery,
    #[serde(rename(serialize = "ram:ApplicableHeaderTradeSettlement", deserialize = "ApplicableHeaderTradeSettlement"), default)]
    pub settlement: HeaderTradeSettlement,
}

// ---------------------------------------------------------------------------
// Agreement
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderTradeAgreement {
    #[serde(rename(serialize = "ram:BuyerReference", deserialize = "BuyerReference"), default, skip_serializing_if = "Option::is_none")]
    pub buyer_reference: Option<String>,
    #[serde(rename(serialize = "ram:SellerTradeParty", deserialize = "SellerTradeParty"), default)]
    pub seller: TradeParty,
    #[serde(rename(serialize = "ram:BuyerTradeParty", deserialize = "BuyerTradeParty"), default)]
    pub buyer: TradeParty,
    #[serde(rename(serialize = "ram:SellerTaxRepresentativeTradeParty", deserialize = "SellerTaxRepresentativeTradeParty"), default, skip_serializing_if = "Option::is_none")]
    pub seller_tax_representative: Option<TradeParty>,
    #[serde(rename(serialize = "ram:SellerOrderReferencedDocument", deserialize = "SellerOrderReferencedDocument"), default, skip_serializing_if = "Option::is_none")]
    pub seller_order: Option<ReferencedDocument>,
    #[serde(rename(serialize = "ram:BuyerOrderReferencedDocument", deserialize = "BuyerOrderReferencedDocument"), default, skip_serializing_if = "Option::is_none")]
    pub buyer_order: Option<ReferencedDocument>,
    #[serde(rename(serialize = "ram:ContractReferencedDocument", deserialize = "ContractReferencedDocument"), default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<ReferencedDocument>,
    #[serde(rename(serialize = "ram:AdditionalReferencedDocument", deserialize = "AdditionalReferencedDocument"), default, skip_serializing_if = "Vec::is_empty")]
    pub additional_documents: Vec<ReferencedDocument>,
    #[serde(rename(serialize = "ram:SpecifiedProcuringProject", deserialize = "SpecifiedProcuringProject"), default, skip_serializing_if = "Option::is_none")]
    pub procuring_project: Option<ProcuringProject>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcuringProject {
    #[serde(rename(serialize = "ram:ID", deserialize = "ID"), default)]
    pub id: String,
    #[serde(rename(serialize = "ram:Name", deserialize = "Name"), default)]
    pub name: String,
}

// ---------------------------------------------------------------------------
// Delivery
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderTradeDelivery {
    #[serde(rename(serialize = "ram:ShipToTradeParty", deserialize = "ShipToTradeParty"), default, skip_serializing_if = "Option::is_none")]
    pub ship_to: Option<TradeParty>,
    #[serde(rename(serialize = "ram:ActualDeliverySupplyChainEvent", deserialize = "ActualDeliverySupplyChainEvent"), default, skip_serializing_if = "Option::is_none")]
    pub actual_delivery: Option<SupplyChainEvent>,
    #[serde(rename(serialize = "ram:DespatchAdviceReferencedDocument", deserialize = "DespatchAdviceReferencedDocument"), default, skip_serializing_if = "Option::is_none")]
    pub despatch_advice: Option<ReferencedDocument>,
    #[serde(rename(serialize = "ram:ReceivingAdviceReferencedDocument", deserialize = "ReceivingAdviceReferencedDocument"), default, skip_serializing_if = "Option::is_none")]
    pub receiving_advice: Option<ReferencedDocument>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyChainEvent {
    #[serde(rename(serialize = "ram:OccurrenceDateTime", deserialize = "OccurrenceDateTime"))]
    pub occurrence: DateTime,
}

// ---------------------------------------------------------------------------
// Settlement
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderTradeSettlement {
    #[serde(rename(serialize = "ram:CreditorReferenceID", deserialize = "CreditorReferenceID"), default, skip_serializing_if = "Option::is_none")]
    pub creditor_reference_id: Option<String>,
    #[serde(rename(serialize = "ram:PaymentReference", deserialize = "PaymentReference"), default, skip_serializing_if = "Option::is_none")]
    pub payment_reference: Option<String>,
    #[serde(rename(serialize = "ram:TaxCurrencyCode", deserialize = "TaxCurrencyCode"), default, skip_serializing_if = "Option::is_none")]
    pub tax_currency_code: Option<String>,
    #[serde(rename(serialize = "ram:InvoiceCurrencyCode", deserialize = "InvoiceCurrencyCode"), default)]
    pub currency_code: String,
    #[serde(rename(serialize = "ram:PayeeTradeParty", deserialize = "PayeeTradeParty"), default, skip_serializing_if = "Option::is_none")]
    pub payee: Option<TradeParty>,
    #[serde(rename(serialize = "ram:SpecifiedTradeSettlementPaymentMeans", deserialize = "SpecifiedTradeSettlementPaymentMeans"), default, skip_serializing_if = "Vec::is_empty")]
    pub payment_means: Vec<PaymentMeans>,
    #[serde(rename(serialize = "ram:ApplicableTradeTax", deserialize = "ApplicableTradeTax"), default, skip_serializing_if = "Vec::is_empty")]
    pub taxes: Vec<TradeTax>,
    #[serde(rename(serialize = "ram:BillingSpecifiedPeriod", deserialize = "BillingSpecifiedPeriod"), default, skip_serializing_if = "Option::is_none")]
    pub billing_period: Option<BillingPeriod>,
    #[serde(rename(serialize = "ram:SpecifiedTradeAllowanceCharge", deserialize = "SpecifiedTradeAllowanceCharge"), default, skip_serializing_if = "Vec::is_empty")]
    pub allowance_charges: Vec<TradeAllowanceCharge>,
    #[serde(rename(serialize = "ram:SpecifiedTradePaymentTerms", deserialize = "SpecifiedTradePaymentTerms"), default, skip_serializing_if = "Vec::is_empty")]
    pub payment_terms: Vec<PaymentTerms>,
    #[serde(rename(serialize = "ram:SpecifiedTradeSettlementHeaderMonetarySummation", deserialize = "SpecifiedTradeSettlementHeaderMonetarySummation"), default)]
    pub summation: MonetarySummation,
    #[serde(rename(serialize = "ram:InvoiceReferencedDocument", deserialize = "InvoiceReferencedDocument"), default, skip_serializing_if = "Vec::is_empty")]
    pub referenced_invoices: Vec<ReferencedDocument>,
}

/// `ram:SpecifiedTradeSettlementPaymentMeans`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMeans {
    #[serde(rename(serialize = "ram:TypeCode", deserialize = "TypeCode"), default)]
    pub type_code: String,
    #[serde(rename(serialize = "ram:Information", deserialize = "Information"), default, skip_serializing_if = "Option::is_none")]
    pub information: Option<String>,
    #[serde(rename(serialize = "ram:ApplicableTradeSettlementFinancialCard", deserialize = "ApplicableTradeSettlementFinancialCard"), default, skip_serializing_if = "Option::is_none")]
    pub card: Option<FinancialCard>,
    #[serde(rename(serialize = "ram:PayerPartyDebtorFinancialAccount", deserialize = "PayerPartyDebtorFinancialAccount"), default, skip_serializing_if = "Option::is_none")]
    pub debtor_account: Option<DebtorAccount>,
    #[serde(rename(serialize = "ram:PayeePartyCreditorFinancialAccount", deserialize = "PayeePartyCreditorFinancialAccount"), default, skip_serializing_if = "Option::is_none")]
    pub creditor_account: Option<CreditorAccount>,
    #[serde(rename(serialize = "ram:PayeeSpecifiedCreditorFinancialInstitution", deserialize = "PayeeSpecifiedCreditorFinancialInstitution"), default, skip_serializing_if = "Option::is_none")]
    pub creditor_institution: Option<FinancialInstitution>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialCard {
    #[serde(rename(serialize = "ram:ID", deserialize = "ID"), default)]
    pub id: String,
    #[serde(rename(serialize = "ram:CardholderName", deserialize = "CardholderName"), default, skip_serializing_if = "Option::is_none")]
    pub cardholder_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtorAccount {
    #[serde(rename(serialize = "ram:IBANID", deserialize = "IBANID"), default)]
    pub iban_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditorAccount {
    #[serde(rename(serialize = "ram:IBANID", deserialize = "IBANID"), default, skip_serializing_if = "Option::is_none")]
    pub iban_id: Option<String>,
    #[serde(rename(serialize = "ram:AccountName", deserialize = "AccountName"), default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(rename(serialize = "ram:ProprietaryID", deserialize = "ProprietaryID"), default, skip_serializing_if = "Option::is_none")]
    pub proprietary_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialInstitution {
    #[serde(rename(serialize = "ram:BICID", deserialize = "BICID"), default)]
    pub bic_id: String,
}

/// `ram:SpecifiedTradePaymentTerms`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTerms {
    #[serde(rename(serialize = "ram:Description", deserialize = "Description"), default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename(serialize = "ram:DueDateDateTime", deserialize = "DueDateDateTime"), default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime>,
    #[serde(rename(serialize = "ram:DirectDebitMandateID", deserialize = "DirectDebitMandateID"), default, skip_serializing_if = "Option::is_none")]
    pub direct_debit_mandate_id: Option<String>,
    #[serde(rename(serialize = "ram:PartialPaymentAmount", deserialize = "PartialPaymentAmount"), default, skip_serializing_if = "Option::is_none")]
    pub partial_payment_amount: Option<String>,
}

/// `ram:SpecifiedTradeSettlementHeaderMonetarySummation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonetarySummation {
    #[serde(rename(serialize = "ram:LineTotalAmount", deserialize = "LineTotalAmount"), default)]
    pub line_total: String,
    #[serde(rename(serialize = "ram:ChargeTotalAmount", deserialize = "ChargeTotalAmount"), default, skip_serializing_if = "Option::is_none")]
    pub charge_total: Option<String>,
    #[serde(rename(serialize = "ram:AllowanceTotalAmount", deserialize = "AllowanceTotalAmount"), default, skip_serializing_if = "Option::is_none")]
    pub allowance_total: Option<String>,
    #[serde(rename(serialize = "ram:TaxBasisTotalAmount", deserialize = "TaxBasisTotalAmount"), default)]
    pub tax_basis_total: String,
    #[serde(rename(serialize = "ram:TaxTotalAmount", deserialize = "TaxTotalAmount"), default, skip_serializing_if = "Vec::is_empty")]
    pub tax_total: Vec<Amount>,
    #[serde(rename(serialize = "ram:GrandTotalAmount", deserialize = "GrandTotalAmount"), default)]
    pub grand_total: String,
    #[serde(rename(serialize = "ram:TotalPrepaidAmount", deserialize = "TotalPrepaidAmount"), default, skip_serializing_if = "Option::is_none")]
    pub prepaid_total: Option<String>,
    #[serde(rename(serialize = "ram:DuePayableAmount", deserialize = "DuePayableAmount"), default)]
    pub due_payable: String,
}

// ---------------------------------------------------------------------------
// Lines
// ---------------------------------------------------------------------------

/// `ram:IncludedSupplyChainTradeLineItem`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeLineItem {
    #[serde(rename(serialize = "ram:AssociatedDocumentLineDocument", deserialize = "AssociatedDocumentLineDocument"), default)]
    pub line_document: LineDocument,
    #[serde(rename(serialize = "ram:SpecifiedTradeProduct", deserialize = "SpecifiedTradeProduct"), default)]
    pub product: TradeProduct,
    #[serde(rename(serialize = "ram:SpecifiedLineTradeAgreement", deserialize = "SpecifiedLineTradeAgreement"), default)]
    pub agreement: LineTradeAgreement,
    #[serde(rename(serialize = "ram:SpecifiedLineTradeDelivery", deserialize = "SpecifiedLineTradeDelivery"), default)]
    pub delivery: LineTradeDelivery,
    #[serde(rename(serialize = "ram:SpecifiedLineTradeSettlement", deserialize = "SpecifiedLineTradeSettlement"), default)]
    pub settlement: LineTradeSettlement,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDocument {
    #[serde(rename(serialize = "ram:LineID", deserialize = "LineID"), default)]
    pub line_id: String,
    #[serde(rename(serialize = "ram:IncludedNote", deserialize = "IncludedNote"), default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<IncludedNote>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeProduct {
    #[serde(rename(serialize = "ram:GlobalID", deserialize = "GlobalID"), default, skip_serializing_if = "Option::is_none")]
    pub global_id: Option<SchemedId>,
    #[serde(rename(serialize = "ram:SellerAssignedID", deserialize = "SellerAssignedID"), default, skip_serializing_if = "Option::is_none")]
    pub seller_assigned_id: Option<String>,
    #[serde(rename(serialize = "ram:BuyerAssignedID", deserialize = "BuyerAssignedID"), default, skip_serializing_if = "Option::is_none")]
    pub buyer_assigned_id: Option<String>,
    #[serde(rename(serialize = "ram:Name", deserialize = "Name"), default)]
    pub name: String,
    #[serde(rename(serialize = "ram:Description", deserialize = "Description"), default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename(serialize = "ram:OriginTradeCountry", deserialize = "OriginTradeCountry"), default, skip_serializing_if = "Option::is_none")]
    pub origin_country: Option<TradeCountry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeCountry {
    #[serde(rename(serialize = "ram:ID", deserialize = "ID"), default)]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTradeAgreement {
    #[serde(rename(serialize = "ram:GrossPriceProductTradePrice", deserialize = "GrossPriceProductTradePrice"), default, skip_serializing_if = "Option::is_none")]
    pub gross_price: Option<TradePrice>,
    #[serde(rename(serialize = "ram:NetPriceProductTradePrice", deserialize = "NetPriceProductTradePrice"), default)]
    pub net_price: TradePrice,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradePrice {
    #[serde(rename(serialize = "ram:ChargeAmount", deserialize = "ChargeAmount"), default)]
    pub charge_amount: String,
    #[serde(rename(serialize = "ram:BasisQuantity", deserialize = "BasisQuantity"), default, skip_serializing_if = "Option::is_none")]
    pub basis_quantity: Option<Quantity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTradeDelivery {
    #[serde(rename(serialize = "ram:BilledQuantity", deserialize = "BilledQuantity"), default)]
    pub billed_quantity: Quantity,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTradeSettlement {
    #[serde(rename(serialize = "ram:ApplicableTradeTax", deserialize = "ApplicableTradeTax"), default, skip_serializing_if = "Vec::is_empty")]
    pub taxes: Vec<TradeTax>,
    #[serde(rename(serialize = "ram:SpecifiedTradeAllowanceCharge", deserialize = "SpecifiedTradeAllowanceCharge"), default, skip_serializing_if = "Vec::is_empty")]
    pub allowance_charges: Vec<TradeAllowanceCharge>,
    #[serde(rename(serialize = "ram:SpecifiedTradeSettlementLineMonetarySummation", deserialize = "SpecifiedTradeSettlementLineMonetarySummation"), default)]
    pub summation: LineMonetarySummation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineMonetarySummation {
    #[serde(rename(serialize = "ram:LineTotalAmount", deserialize = "LineTotalAmount"), default, skip_serializing_if = "Option::is_none")]
    pub line_total: Option<String>,
}
