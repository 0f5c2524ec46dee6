//! Money module - the integer-cents amount value object.

mod money_model;

pub use money_model::Amount;
