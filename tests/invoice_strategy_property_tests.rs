//! Property-based integration tests for the billing cycle strategy and the
//! integer money type.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use centavo_core::invoices::{CreditCardInvoiceStrategy, NubankInvoiceStrategy};
use centavo_core::Amount;

// =============================================================================
// Generators
// =============================================================================

/// Generates a valid transaction date within a wide range of cycles.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2015i32..2035, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d).expect("generated day range is always valid")
    })
}

/// Generates a valid billing day of month.
fn arb_billing_day() -> impl Strategy<Value = u32> {
    1u32..=31
}

proptest! {
    /// The due date of a cycle is never before its closing date.
    #[test]
    fn prop_due_date_on_or_after_closing_date(
        date in arb_date(),
        close_day in arb_billing_day(),
        due_day in arb_billing_day(),
    ) {
        let dates = NubankInvoiceStrategy
            .calculate_invoice_dates(date, close_day, due_day)
            .unwrap();
        prop_assert!(dates.due_date >= dates.closing_date);
    }

    /// The cycle never closes before the transaction that bills to it.
    #[test]
    fn prop_closing_date_not_before_transaction_date(
        date in arb_date(),
        close_day in arb_billing_day(),
        due_day in arb_billing_day(),
    ) {
        let dates = NubankInvoiceStrategy
            .calculate_invoice_dates(date, close_day, due_day)
            .unwrap();
        prop_assert!(dates.closing_date >= date);
    }

    /// Later purchases never land on an earlier cycle.
    #[test]
    fn prop_cycle_assignment_is_monotonic(
        date in arb_date(),
        offset_days in 0i64..120,
        close_day in arb_billing_day(),
        due_day in arb_billing_day(),
    ) {
        let later = date + chrono::Duration::days(offset_days);
        let strategy = NubankInvoiceStrategy;
        let first = strategy.calculate_invoice_dates(date, close_day, due_day).unwrap();
        let second = strategy.calculate_invoice_dates(later, close_day, due_day).unwrap();
        prop_assert!(second.closing_date >= first.closing_date);
        prop_assert!(second.due_date >= first.due_date);
    }

    /// A purchase before the close day closes within the next 31 days.
    #[test]
    fn prop_purchase_before_close_day_closes_this_cycle(
        date in arb_date(),
        due_day in arb_billing_day(),
    ) {
        prop_assume!(date.day() < 28);
        let close_day = date.day() + 1;
        let dates = NubankInvoiceStrategy
            .calculate_invoice_dates(date, close_day, due_day)
            .unwrap();
        prop_assert!((dates.closing_date - date).num_days() <= 31);
        prop_assert_eq!(dates.closing_date.day(), close_day);
    }

    /// Out-of-range billing days are always rejected.
    #[test]
    fn prop_invalid_billing_days_rejected(
        date in arb_date(),
        close_day in 32u32..100,
        due_day in arb_billing_day(),
    ) {
        prop_assert!(NubankInvoiceStrategy
            .calculate_invoice_dates(date, close_day, due_day)
            .is_err());
        prop_assert!(NubankInvoiceStrategy
            .calculate_invoice_dates(date, due_day, 0)
            .is_err());
    }

    /// Integer cent values always construct and round-trip exactly.
    #[test]
    fn prop_integer_cents_round_trip(cents in -1_000_000_000i64..1_000_000_000) {
        let amount = Amount::new(Decimal::from(cents)).unwrap();
        prop_assert_eq!(amount.value(), cents);
        prop_assert_eq!(amount.as_decimal(), Decimal::from(cents));
    }

    /// Fractional cent values are always rejected.
    #[test]
    fn prop_fractional_cents_rejected(units in -1_000_000i64..1_000_000, frac in 1u32..100) {
        let value = Decimal::from(units) + Decimal::new(frac as i64, 2);
        prop_assert!(Amount::new(value).is_err());
    }

    /// Adding then subtracting the same delta is the identity.
    #[test]
    fn prop_add_subtract_is_identity(
        cents in -1_000_000i64..1_000_000,
        delta in -1_000_000i64..1_000_000,
    ) {
        let amount = Amount::new(Decimal::from(cents)).unwrap();
        let round_trip = amount
            .add(Decimal::from(delta))
            .unwrap()
            .subtract(Decimal::from(delta))
            .unwrap();
        prop_assert_eq!(round_trip, amount);
    }
}
