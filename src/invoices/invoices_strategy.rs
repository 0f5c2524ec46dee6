//! Billing-cycle policies: mapping a transaction date onto invoice dates.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_BILLING_DAY, MIN_BILLING_DAY};
use crate::errors::{Error, Result};
use crate::invoices::InvoiceError;

/// The closing and due date of the invoice a transaction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDates {
    pub closing_date: NaiveDate,
    pub due_date: NaiveDate,
}

/// Bank-specific billing-cycle policy.
///
/// Pure date arithmetic, no side effects; one implementation per supported
/// bank rule.
pub trait CreditCardInvoiceStrategy: Send + Sync {
    /// Computes the invoice dates for a transaction made on
    /// `transaction_date` under the account's close/due day parameters.
    fn calculate_invoice_dates(
        &self,
        transaction_date: NaiveDate,
        close_day: u32,
        due_day: u32,
    ) -> Result<InvoiceDates>;
}

/// Nubank cycle rule: purchases on or after the close day roll into the
/// next month's invoice, and a due day numerically before the close day
/// means the due date falls in the month after the closing date.
pub struct NubankInvoiceStrategy;

impl CreditCardInvoiceStrategy for NubankInvoiceStrategy {
    fn calculate_invoice_dates(
        &self,
        transaction_date: NaiveDate,
        close_day: u32,
        due_day: u32,
    ) -> Result<InvoiceDates> {
        for (name, day) in [("closeDay", close_day), ("dueDay", due_day)] {
            if !(MIN_BILLING_DAY..=MAX_BILLING_DAY).contains(&day) {
                return Err(InvoiceError::InvalidDates(format!(
                    "{} {} is outside [{}, {}]",
                    name, day, MIN_BILLING_DAY, MAX_BILLING_DAY
                ))
                .into());
            }
        }

        // Months counted as year * 12 + month0 so cycle advances are plain
        // integer increments.
        let month = transaction_date.year() * 12 + transaction_date.month0() as i32;
        let mut closing_month = month;
        let mut due_month = month;

        if due_day < close_day {
            due_month += 1;
        }
        if transaction_date.day() >= close_day {
            closing_month += 1;
            due_month += 1;
        }

        Ok(InvoiceDates {
            closing_date: date_in_month(closing_month, close_day)?,
            due_date: date_in_month(due_month, due_day)?,
        })
    }
}

/// Builds the date for `day` within the given absolute month, clamping to
/// the last day of shorter months (close day 31 in February closes on the
/// 28th/29th).
fn date_in_month(month: i32, day: u32) -> Result<NaiveDate> {
    let year = month.div_euclid(12);
    let month = month.rem_euclid(12) as u32 + 1;
    for day in (1..=day.min(31)).rev() {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Ok(date);
        }
    }
    Err(Error::Unexpected(format!(
        "no valid day in month {}-{}",
        year, month
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calc(tx: NaiveDate, close_day: u32, due_day: u32) -> InvoiceDates {
        NubankInvoiceStrategy
            .calculate_invoice_dates(tx, close_day, due_day)
            .unwrap()
    }

    #[test]
    fn test_day_before_close_stays_in_current_cycle() {
        let dates = calc(date(2023, 2, 2), 3, 10);
        assert_eq!(dates.closing_date, date(2023, 2, 3));
        assert_eq!(dates.due_date, date(2023, 2, 10));
    }

    #[test]
    fn test_close_day_rolls_to_next_cycle() {
        let dates = calc(date(2023, 2, 3), 3, 10);
        assert_eq!(dates.closing_date, date(2023, 3, 3));
        assert_eq!(dates.due_date, date(2023, 3, 10));
    }

    #[test]
    fn test_day_after_close_rolls_to_next_cycle() {
        let dates = calc(date(2023, 2, 27), 3, 10);
        assert_eq!(dates.closing_date, date(2023, 3, 3));
        assert_eq!(dates.due_date, date(2023, 3, 10));
    }

    #[test]
    fn test_due_day_before_close_day_wraps_into_next_month() {
        // Cycle closes on the 28th, payment due on the 5th of the next month.
        let dates = calc(date(2023, 1, 10), 28, 5);
        assert_eq!(dates.closing_date, date(2023, 1, 28));
        assert_eq!(dates.due_date, date(2023, 2, 5));

        // On the close day itself the whole pair advances one month.
        let dates = calc(date(2023, 1, 28), 28, 5);
        assert_eq!(dates.closing_date, date(2023, 2, 28));
        assert_eq!(dates.due_date, date(2023, 3, 5));
    }

    #[test]
    fn test_year_boundary() {
        let dates = calc(date(2023, 12, 15), 3, 10);
        assert_eq!(dates.closing_date, date(2024, 1, 3));
        assert_eq!(dates.due_date, date(2024, 1, 10));
    }

    #[test]
    fn test_close_day_clamped_in_short_months() {
        let dates = calc(date(2023, 2, 10), 31, 31);
        assert_eq!(dates.closing_date, date(2023, 2, 28));
        assert_eq!(dates.due_date, date(2023, 2, 28));
    }

    #[test]
    fn test_out_of_range_days_fail() {
        let result = NubankInvoiceStrategy.calculate_invoice_dates(date(2023, 2, 2), 0, 10);
        assert!(result.is_err());
        let result = NubankInvoiceStrategy.calculate_invoice_dates(date(2023, 2, 2), 3, 32);
        assert!(result.is_err());
    }
}
