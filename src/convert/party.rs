//! Trade party ↔ canonical party.

use crate::cii::*;
use crate::core::*;

/// Tax registration scheme for VAT identifiers.
pub const SCHEME_VAT: &str = "VA";
/// Tax registration scheme for national fiscal numbers.
pub const SCHEME_FISCAL: &str = "FC";

/// Identity label for the legal registration (`SpecifiedLegalOrganization/ID`).
pub const LABEL_LEGAL: &str = "legal";
/// Identity label for global identifiers (`GlobalID`, e.g. GLN).
pub const LABEL_GLOBAL: &str = "global";
/// Identity label for fiscal numbers (`SpecifiedTaxRegistration` with scheme FC).
pub const LABEL_TAX_NUMBER: &str = "tax-number";

/// Resolve an optional trade party; `None` stays `None`.
pub fn parse_optional_party(party: Option<&TradeParty>) -> Option<Party> {
    party.map(parse_party)
}

/// Resolve a trade party into a canonical party.
///
/// Absent optional parts (address, contacts, registrations) simply leave the
/// corresponding canonical fields empty.
pub fn parse_party(party: &TradeParty) -> Party {
    let mut p = Party {
        name: party.name.clone().unwrap_or_default(),
        ..Default::default()
    };

    for id in &party.ids {
        p.identities.push(Identity {
            scheme: id.scheme_id.clone(),
            label: None,
            code: id.value.clone(),
        });
    }
    for id in &party.global_ids {
        p.identities.push(Identity {
            scheme: id.scheme_id.clone(),
            label: Some(LABEL_GLOBAL.to_string()),
            code: id.value.clone(),
        });
    }

    if let Some(org) = &party.legal_organization {
        p.alias = org.trading_business_name.clone();
        if let Some(id) = &org.id {
            p.identities.push(Identity {
                scheme: id.scheme_id.clone(),
                label: Some(LABEL_LEGAL.to_string()),
                code: id.value.clone(),
            });
        }
    }

    for contact in &party.contacts {
        if let Some(name) = &contact.person_name {
            p.people.push(Person {
                name: Name {
                    given: name.clone(),
                    surname: None,
                },
                role: contact.department_name.clone(),
            });
        }
        if let Some(tel) = &contact.telephone {
            p.telephones.push(Telephone {
                number: tel.complete_number.clone(),
            });
        }
        if let Some(email) = &contact.email {
            p.emails.push(Email {
                address: email.uri_id.clone(),
            });
        }
    }

    if let Some(addr) = &party.postal_address {
        p.addresses.push(parse_address(addr));
    }

    if let Some(uri) = &party.uri_communication {
        p.inboxes.push(Inbox {
            scheme: uri.uri_id.scheme_id.clone(),
            code: uri.uri_id.value.clone(),
        });
    }

    let address_country = p.addresses.first().map(|a| a.country.as_str());
    for reg in &party.tax_registrations {
        match reg.id.scheme_id.as_deref() {
            Some(SCHEME_VAT) => {
                p.tax_id = Some(parse_tax_id(&reg.id.value, address_country));
            }
            Some(SCHEME_FISCAL) => p.identities.push(Identity {
                scheme: None,
                label: Some(LABEL_TAX_NUMBER.to_string()),
                code: reg.id.value.trim().to_string(),
            }),
            other => p.identities.push(Identity {
                scheme: other.map(String::from),
                label: None,
                code: reg.id.value.trim().to_string(),
            }),
        }
    }

    p
}

/// Split a VAT identifier into country prefix and code.
///
/// Identifiers without a two-letter prefix take the country from the address.
pub fn parse_tax_id(value: &str, address_country: Option<&str>) -> TaxIdentity {
    let value = value.trim();
    let bytes = value.as_bytes();
    if bytes.len() > 2 && bytes[0].is_ascii_alphabetic() && bytes[1].is_ascii_alphabetic() {
        TaxIdentity {
            country: value[..2].to_ascii_uppercase(),
            code: value[2..].to_string(),
        }
    } else {
        TaxIdentity {
            country: address_country.unwrap_or_default().to_string(),
            code: value.to_string(),
        }
    }
}

/// Resolve a postal address; LineThree is folded into `street_extra`.
pub fn parse_address(addr: &PostalAddress) -> Address {
    let street_extra = match (&addr.line_two, &addr.line_three) {
        (Some(two), Some(three)) => Some(format!("{two}, {three}")),
        (Some(two), None) => Some(two.clone()),
        (None, Some(three)) => Some(three.clone()),
        (None, None) => None,
    };
    Address {
        street: addr.line_one.clone().unwrap_or_default(),
        street_extra,
        locality: addr.city.clone().unwrap_or_default(),
        region: addr.subdivision.clone(),
        code: addr.postcode.clone().unwrap_or_default(),
        country: addr.country_id.trim().to_string(),
    }
}

// ---------------------------------------------------------------------------
// Reverse
// ---------------------------------------------------------------------------

/// Build a trade party from a canonical party.
///
/// Contacts are rebuilt positionally: the n-th person, telephone and email
/// form the n-th `DefinedTradeContact`. Only the first address and inbox are
/// written, as CII allows one of each.
pub fn new_trade_party(party: &Party) -> TradeParty {
    let mut tp = TradeParty {
        name: non_empty(&party.name),
        ..Default::default()
    };

    let mut legal_id = None;
    for identity in &party.identities {
        let id = SchemedId {
            scheme_id: identity.scheme.clone(),
            value: identity.code.clone(),
        };
        match identity.label.as_deref() {
            Some(LABEL_LEGAL) if legal_id.is_none() => legal_id = Some(id),
            Some(LABEL_GLOBAL) => tp.global_ids.push(id),
            Some(LABEL_TAX_NUMBER) => tp.tax_registrations.push(TaxRegistration {
                id: SchemedId {
                    scheme_id: Some(SCHEME_FISCAL.to_string()),
                    value: identity.code.clone(),
                },
            }),
            _ => tp.ids.push(id),
        }
    }
    if legal_id.is_some() || party.alias.is_some() {
        tp.legal_organization = Some(LegalOrganization {
            id: legal_id,
            trading_business_name: party.alias.clone(),
        });
    }

    let contacts = party
        .people
        .len()
        .max(party.telephones.len())
        .max(party.emails.len());
    for i in 0..contacts {
        let person = party.people.get(i);
        tp.contacts.push(TradeContact {
            person_name: person.map(|p| person_name(&p.name)),
            department_name: person.and_then(|p| p.role.clone()),
            telephone: party.telephones.get(i).map(|t| TelephoneCommunication {
                complete_number: t.number.clone(),
            }),
            email: party.emails.get(i).map(|e| EmailCommunication {
                uri_id: e.address.clone(),
            }),
        });
    }

    tp.postal_address = party.addresses.first().map(new_postal_address);

    tp.uri_communication = party.inboxes.first().map(|inbox| UriCommunication {
        uri_id: SchemedId {
            scheme_id: inbox.scheme.clone(),
            value: inbox.code.clone(),
        },
    });

    if let Some(tax_id) = &party.tax_id {
        // VAT registration precedes the fiscal number
        tp.tax_registrations.insert(
            0,
            TaxRegistration {
                id: SchemedId {
                    scheme_id: Some(SCHEME_VAT.to_string()),
                    value: format!("{}{}", tax_id.country, tax_id.code),
                },
            },
        );
    }

    tp
}

pub fn new_postal_address(addr: &Address) -> PostalAddress {
    PostalAddress {
        postcode: non_empty(&addr.code),
        line_one: non_empty(&addr.street),
        line_two: addr.street_extra.clone(),
        line_three: None,
        city: non_empty(&addr.locality),
        country_id: addr.country.clone(),
        subdivision: addr.region.clone(),
    }
}

fn person_name(name: &Name) -> String {
    match &name.surname {
        Some(surname) => format!("{} {}", name.given, surname),
        None => name.given.clone(),
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
