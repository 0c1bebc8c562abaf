use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::ConversionError;
use super::types::*;

/// Builder for canonical invoices.
///
/// ```
/// use belegwandler::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::new("SAMPLE-001", NaiveDate::from_ymd_opt(2024, 2, 13).unwrap())
///     .supplier(PartyBuilder::new("Sample Seller")
///         .tax_id("DE", "049120826")
///         .address(AddressBuilder::new("Sample City", "10115", "DE").build())
///         .build())
///     .customer(PartyBuilder::new("Sample Buyer").build())
///     .add_line(LineBuilder::new("Development services", dec!(20), dec!(90))
///         .unit("HUR")
///         .vat("S", dec!(19))
///         .build())
///     .build()
///     .unwrap();
///
/// assert_eq!(invoice.lines[0].index, 1);
/// ```
pub struct InvoiceBuilder {
    code: String,
    issue_date: NaiveDate,
    invoice_type: InvoiceType,
    currency: String,
    supplier: Option<Party>,
    customer: Option<Party>,
    lines: Vec<Line>,
    discounts: Vec<Discount>,
    charges: Vec<Charge>,
    ordering: Option<Ordering>,
    payment: Option<Payment>,
    delivery: Option<Delivery>,
    preceding: Vec<DocumentRef>,
    notes: Vec<Note>,
}

impl InvoiceBuilder {
    pub fn new(code: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            code: code.into(),
            issue_date,
            invoice_type: InvoiceType::Standard,
            currency: "EUR".to_string(),
            supplier: None,
            customer: None,
            lines: Vec::new(),
            discounts: Vec::new(),
            charges: Vec::new(),
            ordering: None,
            payment: None,
            delivery: None,
            preceding: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn invoice_type(mut self, invoice_type: InvoiceType) -> Self {
        self.invoice_type = invoice_type;
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    pub fn supplier(mut self, party: Party) -> Self {
        self.supplier = Some(party);
        self
    }

    pub fn customer(mut self, party: Party) -> Self {
        self.customer = Some(party);
        self
    }

    /// Append a line; its index is assigned from its position.
    pub fn add_line(mut self, mut line: Line) -> Self {
        line.index = self.lines.len() + 1;
        self.lines.push(line);
        self
    }

    pub fn add_discount(mut self, discount: Discount) -> Self {
        self.discounts.push(discount);
        self
    }

    pub fn add_charge(mut self, charge: Charge) -> Self {
        self.charges.push(charge);
        self
    }

    pub fn ordering(mut self, ordering: Ordering) -> Self {
        self.ordering = Some(ordering);
        self
    }

    pub fn payment(mut self, payment: Payment) -> Self {
        self.payment = Some(payment);
        self
    }

    pub fn delivery(mut self, delivery: Delivery) -> Self {
        self.delivery = Some(delivery);
        self
    }

    pub fn preceding(mut self, reference: DocumentRef) -> Self {
        self.preceding.push(reference);
        self
    }

    pub fn note(mut self, text: impl Into<String>) -> Self {
        self.notes.push(Note {
            code: None,
            text: text.into(),
        });
        self
    }

    /// Build the invoice. Supplier and customer are required.
    pub fn build(self) -> Result<Invoice, ConversionError> {
        let supplier = self
            .supplier
            .ok_or_else(|| ConversionError::missing("supplier"))?;
        let customer = self
            .customer
            .ok_or_else(|| ConversionError::missing("customer"))?;

        Ok(Invoice {
            code: self.code,
            invoice_type: self.invoice_type,
            issue_date: self.issue_date,
            currency: self.currency,
            tax: None,
            supplier,
            customer,
            lines: self.lines,
            discounts: self.discounts,
            charges: self.charges,
            ordering: self.ordering,
            payment: self.payment,
            delivery: self.delivery,
            preceding: self.preceding,
            notes: self.notes,
        })
    }
}

/// Builder for Party.
pub struct PartyBuilder {
    party: Party,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            party: Party {
                name: name.into(),
                ..Default::default()
            },
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.party.alias = Some(alias.into());
        self
    }

    pub fn tax_id(mut self, country: impl Into<String>, code: impl Into<String>) -> Self {
        self.party.tax_id = Some(TaxIdentity {
            country: country.into(),
            code: code.into(),
        });
        self
    }

    pub fn identity(mut self, identity: Identity) -> Self {
        self.party.identities.push(identity);
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.party.addresses.push(address);
        self
    }

    pub fn person(mut self, given: impl Into<String>) -> Self {
        self.party.people.push(Person {
            name: Name {
                given: given.into(),
                surname: None,
            },
            role: None,
        });
        self
    }

    pub fn email(mut self, address: impl Into<String>) -> Self {
        self.party.emails.push(Email {
            address: address.into(),
        });
        self
    }

    pub fn telephone(mut self, number: impl Into<String>) -> Self {
        self.party.telephones.push(Telephone {
            number: number.into(),
        });
        self
    }

    pub fn inbox(mut self, scheme: impl Into<String>, code: impl Into<String>) -> Self {
        self.party.inboxes.push(Inbox {
            scheme: Some(scheme.into()),
            code: code.into(),
        });
        self
    }

    pub fn build(self) -> Party {
        self.party
    }
}

/// Builder for Address.
pub struct AddressBuilder {
    address: Address,
}

impl AddressBuilder {
    pub fn new(
        locality: impl Into<String>,
        code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            address: Address {
                locality: locality.into(),
                code: code.into(),
                country: country.into(),
                ..Default::default()
            },
        }
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.address.street = street.into();
        self
    }

    pub fn street_extra(mut self, extra: impl Into<String>) -> Self {
        self.address.street_extra = Some(extra.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.address.region = Some(region.into());
        self
    }

    pub fn build(self) -> Address {
        self.address
    }
}

/// Builder for Line.
pub struct LineBuilder {
    line: Line,
}

impl LineBuilder {
    pub fn new(name: impl Into<String>, quantity: Decimal, price: Decimal) -> Self {
        Self {
            line: Line {
                index: 0,
                quantity,
                item: Item {
                    name: name.into(),
                    price,
                    ..Default::default()
                },
                taxes: Vec::new(),
                discounts: Vec::new(),
                charges: Vec::new(),
                notes: Vec::new(),
                sum: None,
            },
        }
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.line.item.unit = Some(unit.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.line.item.description = Some(description.into());
        self
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.line.item.reference = Some(reference.into());
        self
    }

    /// Add a VAT combo with the given UNTDID 5305 category and rate.
    pub fn vat(mut self, category: impl Into<String>, percent: Decimal) -> Self {
        self.line.taxes.push(TaxCombo {
            category: "VAT".to_string(),
            percent: Some(percent),
            ext: [(EXT_KEY_TAX_CATEGORY.to_string(), category.into())].into(),
        });
        self
    }

    pub fn add_discount(mut self, discount: Discount) -> Self {
        self.line.discounts.push(discount);
        self
    }

    pub fn add_charge(mut self, charge: Charge) -> Self {
        self.line.charges.push(charge);
        self
    }

    pub fn note(mut self, text: impl Into<String>) -> Self {
        self.line.notes.push(Note {
            code: None,
            text: text.into(),
        });
        self
    }

    pub fn build(self) -> Line {
        self.line
    }
}
