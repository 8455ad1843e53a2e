use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::decimal::{Money, Rate};
use crate::errors::{self, CalculatorError, InputError};
use crate::form::MortgageForm;
use crate::types::{Field, MortgageType};

/// one optional error per form field; all `None` means the form is valid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub amount: Option<InputError>,
    pub term: Option<InputError>,
    pub rate: Option<InputError>,
    pub mortgage_type: Option<InputError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_none())
    }

    pub fn get(&self, field: Field) -> Option<InputError> {
        match field {
            Field::Amount => self.amount,
            Field::Term => self.term,
            Field::Rate => self.rate,
            Field::MortgageType => self.mortgage_type,
        }
    }

    /// message to show next to `field`, if any
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|error| error.to_string())
    }

    /// copy with the error on `field` removed
    pub fn cleared(&self, field: Field) -> Self {
        let mut next = *self;
        match field {
            Field::Amount => next.amount = None,
            Field::Term => next.term = None,
            Field::Rate => next.rate = None,
            Field::MortgageType => next.mortgage_type = None,
        }
        next
    }

    /// failing fields in display order
    pub fn failed_fields(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|field| self.get(*field).is_some())
            .collect()
    }

    pub fn errors(&self) -> Vec<InputError> {
        Field::ALL.iter().filter_map(|field| self.get(*field)).collect()
    }
}

/// validated mortgage input; only obtainable through [`MortgageInput::parse`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageInput {
    amount: Money,
    term_years: Decimal,
    annual_rate: Rate,
    mortgage_type: MortgageType,
}

impl MortgageInput {
    /// validate every field independently and build the typed input
    pub fn parse(form: &MortgageForm) -> Result<Self, ValidationResult> {
        // amounts below the working precision round to nothing
        let amount = parse_positive(&form.mortgage_amount)
            .map(Money::from_decimal)
            .filter(|amount| amount.as_decimal() > Decimal::ZERO);
        let term_years = parse_positive(&form.mortgage_term);
        let rate_percent = parse_positive(&form.interest_rate);
        let mortgage_type = MortgageType::from_str(&form.mortgage_type).ok();

        match (amount, term_years, rate_percent, mortgage_type) {
            (Some(amount), Some(term_years), Some(rate_percent), Some(mortgage_type)) => Ok(Self {
                amount,
                term_years,
                annual_rate: Rate::from_percentage_decimal(rate_percent),
                mortgage_type,
            }),
            _ => Err(ValidationResult {
                amount: amount.is_none().then_some(InputError::InvalidAmount),
                term: term_years.is_none().then_some(InputError::InvalidTerm),
                rate: rate_percent.is_none().then_some(InputError::InvalidRate),
                mortgage_type: mortgage_type.is_none().then_some(InputError::MissingMortgageType),
            }),
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn term_years(&self) -> Decimal {
        self.term_years
    }

    pub fn annual_rate(&self) -> Rate {
        self.annual_rate
    }

    pub fn mortgage_type(&self) -> MortgageType {
        self.mortgage_type
    }

    /// term expressed in monthly payments; fractional for odd terms
    pub fn number_of_payments(&self) -> errors::Result<Decimal> {
        self.term_years
            .checked_mul(Decimal::from(12))
            .ok_or_else(|| CalculatorError::CalculationError {
                message: "number of payments is out of range".to_string(),
            })
    }
}

/// check a form without building the input
pub fn validate(form: &MortgageForm) -> ValidationResult {
    MortgageInput::parse(form).err().unwrap_or_default()
}

/// parse a strictly positive number from raw text.
///
/// accepts plain or scientific decimal notation with surrounding whitespace;
/// digit separators, hex and non-finite words are rejected.
fn parse_positive(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.contains('_') {
        return None;
    }

    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()?;

    (value > Decimal::ZERO).then_some(value)
}
