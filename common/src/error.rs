use thiserror::Error;

use crate::bounds::Quantity;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{quantity} must be a number, got '{input}'")]
    NotANumber { quantity: Quantity, input: String },

    #[error("{quantity} must be finite, got {value}")]
    NotFinite { quantity: Quantity, value: f64 },

    #[error("{quantity} of {value} {unit} is outside the accepted range {min}..={max} {unit}", unit = .quantity.unit())]
    OutOfRange {
        quantity: Quantity,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unknown language '{0}', expected one of: en, ru")]
    UnknownLocale(String),
}
