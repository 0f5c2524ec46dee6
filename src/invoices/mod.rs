//! Invoices module - credit card billing cycles and reconciliation.

mod invoices_errors;
mod invoices_model;
mod invoices_service;
mod invoices_strategy;
mod invoices_traits;

pub use invoices_errors::InvoiceError;
pub use invoices_model::{CreditCardInvoice, NewCreditCardInvoice};
pub use invoices_service::CreditCardInvoiceService;
pub use invoices_strategy::{CreditCardInvoiceStrategy, InvoiceDates, NubankInvoiceStrategy};
pub use invoices_traits::{CreditCardInvoiceRepositoryTrait, CreditCardInvoiceServiceTrait};
