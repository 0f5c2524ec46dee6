/// Name of the special category marking a payment against a credit card.
///
/// A transaction in this category settles invoice debt rather than creating
/// it, so invoice amount aggregation excludes these transactions.
pub const CARD_PAYMENT_CATEGORY_NAME: &str = "Pagamento de cartão";

/// Returns true if the given category name is the card-payment category.
pub fn is_card_payment_category(name: &str) -> bool {
    name == CARD_PAYMENT_CATEGORY_NAME
}
