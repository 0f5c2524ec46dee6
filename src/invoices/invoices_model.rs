//! Credit card invoice domain model.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::invoices_errors::InvoiceError;
use crate::constants::MAX_CLOSE_TO_DUE_GAP_DAYS;
use crate::errors::Result;
use crate::money::Amount;

/// One billing cycle of a credit card account.
///
/// Exactly one invoice exists per account and billing month; it is created
/// lazily when the first transaction of the cycle arrives. The amount is the
/// running sum of its non-deleted member transactions, card payments
/// excluded, and is recomputed by the reconciliation services.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardInvoice {
    pub id: String,
    /// Owning account, by ID. Kept as a reference so the account, invoice,
    /// and transaction records never form an in-memory ownership cycle.
    pub account_id: String,
    pub close_date: NaiveDate,
    pub due_date: NaiveDate,
    pub amount: Amount,
    pub created_at: NaiveDateTime,
}

/// Input model for creating an invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCreditCardInvoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub account_id: String,
    pub close_date: NaiveDate,
    pub due_date: NaiveDate,
    pub amount: Decimal,
}

impl CreditCardInvoice {
    /// Builds a validated invoice.
    ///
    /// The due date must not precede the closing date, and the gap between
    /// them must stay within [`MAX_CLOSE_TO_DUE_GAP_DAYS`].
    pub fn try_new(new: NewCreditCardInvoice) -> Result<Self> {
        let amount = Amount::new(new.amount)?;

        if new.due_date < new.close_date {
            return Err(InvoiceError::InvalidDates(format!(
                "due date {} precedes closing date {}",
                new.due_date, new.close_date
            ))
            .into());
        }
        let gap = (new.due_date - new.close_date).num_days();
        if gap > MAX_CLOSE_TO_DUE_GAP_DAYS {
            return Err(InvoiceError::InvalidDates(format!(
                "{} days between closing and due date exceed the {} day tolerance",
                gap, MAX_CLOSE_TO_DUE_GAP_DAYS
            ))
            .into());
        }

        Ok(Self {
            id: new.id.unwrap_or_default(),
            account_id: new.account_id,
            close_date: new.close_date,
            due_date: new.due_date,
            amount,
            created_at: Utc::now().naive_utc(),
        })
    }

    /// An invoice is closed once its closing date has passed.
    pub fn is_closed(&self, reference_date: NaiveDate) -> bool {
        self.close_date <= reference_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn new_invoice(close: NaiveDate, due: NaiveDate) -> NewCreditCardInvoice {
        NewCreditCardInvoice {
            id: None,
            account_id: "acc-1".to_string(),
            close_date: close,
            due_date: due,
            amount: dec!(0),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_gap_within_tolerance_is_valid() {
        let invoice =
            CreditCardInvoice::try_new(new_invoice(date(2023, 2, 3), date(2023, 2, 13))).unwrap();
        assert_eq!(invoice.amount.value(), 0);
    }

    #[test]
    fn test_gap_above_tolerance_fails() {
        let result = CreditCardInvoice::try_new(new_invoice(date(2023, 2, 3), date(2023, 2, 14)));
        assert!(matches!(
            result,
            Err(crate::Error::Invoice(InvoiceError::InvalidDates(_)))
        ));
    }

    #[test]
    fn test_due_before_close_fails() {
        let result = CreditCardInvoice::try_new(new_invoice(date(2023, 2, 10), date(2023, 2, 3)));
        assert!(matches!(
            result,
            Err(crate::Error::Invoice(InvoiceError::InvalidDates(_)))
        ));
    }

    #[test]
    fn test_fractional_amount_fails() {
        let mut new = new_invoice(date(2023, 2, 3), date(2023, 2, 10));
        new.amount = dec!(10.5);
        assert!(CreditCardInvoice::try_new(new).is_err());
    }

    #[test]
    fn test_is_closed() {
        let invoice =
            CreditCardInvoice::try_new(new_invoice(date(2023, 2, 3), date(2023, 2, 10))).unwrap();
        assert!(!invoice.is_closed(date(2023, 2, 2)));
        assert!(invoice.is_closed(date(2023, 2, 3)));
        assert!(invoice.is_closed(date(2023, 3, 1)));
    }
}
