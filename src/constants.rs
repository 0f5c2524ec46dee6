/// Maximum allowed gap, in days, between an invoice closing date and its
/// due date. Billing cycles observed across supported banks stay well
/// within this bound.
pub const MAX_CLOSE_TO_DUE_GAP_DAYS: i64 = 10;

/// First valid day-of-month for billing cycle parameters.
pub const MIN_BILLING_DAY: u32 = 1;

/// Last valid day-of-month for billing cycle parameters.
pub const MAX_BILLING_DAY: u32 = 31;
