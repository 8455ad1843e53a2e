use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Field;

/// library-level faults; user input problems are reported as [`InputError`]
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },

    #[error("zero interest rate rejected by configuration")]
    ZeroRateRejected,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalculatorError>;

/// a field-level validation failure, rendered next to the offending input
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputError {
    #[error("Please enter a valid mortgage amount")]
    InvalidAmount,

    #[error("Please enter a valid mortgage term")]
    InvalidTerm,

    #[error("Please enter a valid interest rate")]
    InvalidRate,

    #[error("Please select a mortgage type")]
    MissingMortgageType,
}

impl InputError {
    /// the form field this error belongs to
    pub fn field(&self) -> Field {
        match self {
            InputError::InvalidAmount => Field::Amount,
            InputError::InvalidTerm => Field::Term,
            InputError::InvalidRate => Field::Rate,
            InputError::MissingMortgageType => Field::MortgageType,
        }
    }

    /// the error raised when `field` fails validation
    pub fn for_field(field: Field) -> Self {
        match field {
            Field::Amount => InputError::InvalidAmount,
            Field::Term => InputError::InvalidTerm,
            Field::Rate => InputError::InvalidRate,
            Field::MortgageType => InputError::MissingMortgageType,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages() {
        assert_eq!(InputError::InvalidAmount.to_string(), "Please enter a valid mortgage amount");
        assert_eq!(InputError::InvalidTerm.to_string(), "Please enter a valid mortgage term");
        assert_eq!(InputError::InvalidRate.to_string(), "Please enter a valid interest rate");
        assert_eq!(InputError::MissingMortgageType.to_string(), "Please select a mortgage type");
    }

    #[test]
    fn test_field_mapping_is_symmetric() {
        for field in Field::ALL {
            assert_eq!(InputError::for_field(field).field(), field);
        }
    }
}
