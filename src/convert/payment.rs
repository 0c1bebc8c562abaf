//! Payment resolver.
//!
//! A payment block only exists when the settlement carries something a payer
//! can act on; see [`has_payment`].

use tracing::trace;

use crate::cii::*;
use crate::core::*;

use super::codes::{PAYMENT_MEANS, PAYMENT_MEANS_GENERIC};
use super::date::{new_date_time, resolve};
use super::party::{new_trade_party, parse_optional_party};
use super::{format_amount, parse_optional_decimal};

/// True iff a payee is present, the first terms carry a due date, or the first
/// means has a type code other than the generic "1".
pub fn has_payment(
    payee: Option<&TradeParty>,
    terms: Option<&PaymentTerms>,
    means: Option<&PaymentMeans>,
) -> bool {
    payee.is_some()
        || terms.is_some_and(|t| t.due_date.is_some())
        || means.is_some_and(|m| m.type_code.trim() != PAYMENT_MEANS_GENERIC)
}

/// Resolve the payment block, or `None` when [`has_payment`] does not hold.
pub fn parse_payment(settlement: &HeaderTradeSettlement) -> Result<Option<Payment>, ConversionError> {
    let present = has_payment(
        settlement.payee.as_ref(),
        settlement.payment_terms.first(),
        settlement.payment_means.first(),
    );
    trace!(present, "payment predicate");
    if !present {
        return Ok(None);
    }

    Ok(Some(Payment {
        payee: parse_optional_party(settlement.payee.as_ref()),
        terms: parse_terms(&settlement.payment_terms)?,
        instructions: parse_instructions(settlement)?,
    }))
}

fn parse_terms(terms: &[PaymentTerms]) -> Result<Option<Terms>, ConversionError> {
    let detail = terms.iter().find_map(|t| t.description.clone());
    let mut due_dates = Vec::new();
    for (i, term) in terms.iter().enumerate() {
        let Some(due) = &term.due_date else {
            continue;
        };
        let field = format!("settlement.payment_terms[{i}]");
        due_dates.push(DueDate {
            date: resolve(&due.date_time_string, &format!("{field}.due_date"))?,
            amount: parse_optional_decimal(
                term.partial_payment_amount.as_deref(),
                &format!("{field}.amount"),
            )?,
        });
    }
    if detail.is_none() && due_dates.is_empty() {
        return Ok(None);
    }
    Ok(Some(Terms { detail, due_dates }))
}

fn parse_instructions(
    settlement: &HeaderTradeSettlement,
) -> Result<Option<Instructions>, ConversionError> {
    let Some(first) = settlement.payment_means.first() else {
        return Ok(None);
    };
    let code = first.type_code.trim();
    let key = PAYMENT_MEANS.to_canonical(code)?;

    let credit_transfer = settlement
        .payment_means
        .iter()
        .filter_map(|m| {
            m.creditor_account.as_ref().map(|acc| CreditTransfer {
                iban: acc.iban_id.clone(),
                number: acc.proprietary_id.clone(),
                name: acc.account_name.clone(),
                bic: m.creditor_institution.as_ref().map(|i| i.bic_id.clone()),
            })
        })
        .collect();

    let card = first.card.as_ref().map(|c| Card {
        last4: c.id.clone(),
        holder: c.cardholder_name.clone(),
    });

    let mandate = settlement
        .payment_terms
        .iter()
        .find_map(|t| t.direct_debit_mandate_id.clone());
    let debtor = first.debtor_account.as_ref().map(|a| a.iban_id.clone());
    let direct_debit = if mandate.is_some()
        || debtor.is_some()
        || settlement.creditor_reference_id.is_some()
    {
        Some(DirectDebit {
            reference: mandate,
            creditor: settlement.creditor_reference_id.clone(),
            account: debtor,
        })
    } else {
        None
    };

    Ok(Some(Instructions {
        key,
        detail: first.information.clone(),
        reference: settlement.payment_reference.clone(),
        credit_transfer,
        card,
        direct_debit,
        ext: [(EXT_KEY_PAYMENT_MEANS.to_string(), code.to_string())].into(),
    }))
}

// ---------------------------------------------------------------------------
// Reverse
// ---------------------------------------------------------------------------

/// Write payee, payment means and payment terms into the settlement.
pub fn write_payment(
    payment: &Payment,
    settlement: &mut HeaderTradeSettlement,
) -> Result<(), ConversionError> {
    settlement.payee = payment.payee.as_ref().map(new_trade_party);

    let mut terms = Vec::new();
    if let Some(t) = &payment.terms {
        for due in &t.due_dates {
            terms.push(PaymentTerms {
                due_date: Some(new_date_time(due.date)),
                partial_payment_amount: due.amount.map(format_amount),
                ..Default::default()
            });
        }
        if let Some(detail) = &t.detail {
            match terms.first_mut() {
                Some(first) => first.description = Some(detail.clone()),
                None => terms.push(PaymentTerms {
                    description: Some(detail.clone()),
                    ..Default::default()
                }),
            }
        }
    }

    if let Some(instr) = &payment.instructions {
        let type_code = match instr.ext.get(EXT_KEY_PAYMENT_MEANS) {
            Some(code) => code.clone(),
            None => PAYMENT_MEANS.to_code(instr.key)?.to_string(),
        };
        settlement.payment_reference = instr.reference.clone();

        let mut means = vec![PaymentMeans {
            type_code: type_code.clone(),
            information: instr.detail.clone(),
            card: instr.card.as_ref().map(|c| FinancialCard {
                id: c.last4.clone(),
                cardholder_name: c.holder.clone(),
            }),
            ..Default::default()
        }];
        for (i, ct) in instr.credit_transfer.iter().enumerate() {
            if i > 0 {
                means.push(PaymentMeans {
                    type_code: type_code.clone(),
                    ..Default::default()
                });
            }
            let m = &mut means[i];
            m.creditor_account = Some(CreditorAccount {
                iban_id: ct.iban.clone(),
                account_name: ct.name.clone(),
                proprietary_id: ct.number.clone(),
            });
            m.creditor_institution = ct.bic.clone().map(|bic_id| FinancialInstitution { bic_id });
        }

        if let Some(dd) = &instr.direct_debit {
            settlement.creditor_reference_id = dd.creditor.clone();
            means[0].debtor_account = dd.account.clone().map(|iban_id| DebtorAccount { iban_id });
            if let Some(mandate) = &dd.reference {
                match terms.first_mut() {
                    Some(first) => first.direct_debit_mandate_id = Some(mandate.clone()),
                    None => terms.push(PaymentTerms {
                        direct_debit_mandate_id: Some(mandate.clone()),
                        ..Default::default()
                    }),
                }
            }
        }
        settlement.payment_means = means;
    }

    settlement.payment_terms = terms;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn means(code: &str) -> PaymentMeans {
        PaymentMeans {
            type_code: code.into(),
            ..Default::default()
        }
    }

    fn due(value: &str) -> PaymentTerms {
        PaymentTerms {
            due_date: Some(DateTime {
                date_time_string: DateTimeString {
                    format: Some("102".into()),
                    value: value.into(),
                },
            }),
            ..Default::default()
        }
    }

    #[test]
    fn predicate_payee_only() {
        assert!(has_payment(Some(&TradeParty::default()), None, None));
    }

    #[test]
    fn predicate_terms_without_due_date() {
        let terms = PaymentTerms {
            description: Some("30 days net".into()),
            ..Default::default()
        };
        assert!(!has_payment(None, Some(&terms), None));
        assert!(has_payment(None, Some(&due("20240313")), None));
    }

    #[test]
    fn predicate_generic_means() {
        assert!(!has_payment(None, None, Some(&means("1"))));
        assert!(has_payment(None, None, Some(&means("58"))));
        assert!(!has_payment(None, None, None));
    }

    #[test]
    fn no_block_when_predicate_fails() {
        let settlement = HeaderTradeSettlement {
            payment_means: vec![means("1")],
            payment_terms: vec![PaymentTerms {
                description: Some("Immediately".into()),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(parse_payment(&settlement).unwrap(), None);
    }

    #[test]
    fn sepa_credit_transfer() {
        let mut m = means("58");
        m.information = Some("SEPA credit transfer".into());
        m.creditor_account = Some(CreditorAccount {
            iban_id: Some("DE75512108001245126199".into()),
            account_name: Some("Sample Seller".into()),
            proprietary_id: None,
        });
        m.creditor_institution = Some(FinancialInstitution {
            bic_id: "SOGEDEFFXXX".into(),
        });
        let mut term = due("20240313");
        term.description = Some("30 days net".into());
        let settlement = HeaderTradeSettlement {
            payment_reference: Some("RE-2024-001".into()),
            payment_means: vec![m],
            payment_terms: vec![term],
            ..Default::default()
        };

        let payment = parse_payment(&settlement).unwrap().unwrap();
        assert!(payment.payee.is_none());
        let terms = payment.terms.as_ref().unwrap();
        assert_eq!(terms.detail.as_deref(), Some("30 days net"));
        assert_eq!(
            terms.due_dates[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 13).unwrap()
        );
        let instr = payment.instructions.as_ref().unwrap();
        assert_eq!(instr.key, PaymentMeansKey::SepaCreditTransfer);
        assert_eq!(instr.reference.as_deref(), Some("RE-2024-001"));
        assert_eq!(
            instr.credit_transfer[0].iban.as_deref(),
            Some("DE75512108001245126199")
        );
        assert_eq!(instr.credit_transfer[0].bic.as_deref(), Some("SOGEDEFFXXX"));
        assert!(instr.direct_debit.is_none());

        let mut out = HeaderTradeSettlement::default();
        write_payment(&payment, &mut out).unwrap();
        assert_eq!(out.payment_means, settlement.payment_means);
        assert_eq!(out.payment_terms, settlement.payment_terms);
        assert_eq!(out.payment_reference, settlement.payment_reference);
    }

    #[test]
    fn unknown_means_is_an_error() {
        let settlement = HeaderTradeSettlement {
            payment_means: vec![means("999")],
            ..Default::default()
        };
        assert!(matches!(
            parse_payment(&settlement),
            Err(ConversionError::UnsupportedCode { .. })
        ));
    }

    #[test]
    fn bad_due_date_is_fatal() {
        let settlement = HeaderTradeSettlement {
            payment_terms: vec![due("2024-03-13")],
            ..Default::default()
        };
        let err = parse_payment(&settlement).unwrap_err();
        assert_eq!(err.field(), Some("settlement.payment_terms[0].due_date"));
    }

    #[test]
    fn direct_debit_round_trip() {
        let mut m = means("59");
        m.debtor_account = Some(DebtorAccount {
            iban_id: "DE02120300000000202051".into(),
        });
        let mut term = due("20240320");
        term.direct_debit_mandate_id = Some("MANDATE-1".into());
        term.partial_payment_amount = Some("100.00".into());
        let settlement = HeaderTradeSettlement {
            creditor_reference_id: Some("DE98ZZZ09999999999".into()),
            payment_means: vec![m],
            payment_terms: vec![term],
            ..Default::default()
        };
        let payment = parse_payment(&settlement).unwrap().unwrap();
        let dd = payment
            .instructions
            .as_ref()
            .and_then(|i| i.direct_debit.as_ref())
            .unwrap();
        assert_eq!(dd.reference.as_deref(), Some("MANDATE-1"));
        assert_eq!(dd.creditor.as_deref(), Some("DE98ZZZ09999999999"));
        assert_eq!(dd.account.as_deref(), Some("DE02120300000000202051"));
        assert_eq!(
            payment.terms.as_ref().unwrap().due_dates[0].amount,
            Some(dec!(100))
        );

        let mut out = HeaderTradeSettlement::default();
        write_payment(&payment, &mut out).unwrap();
        assert_eq!(out, settlement);
    }
}
