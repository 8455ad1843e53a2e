use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// unique identifier for a calculator session
pub type SessionId = Uuid;

/// mortgage product selected on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MortgageType {
    /// each payment covers interest and part of the principal
    Repayment,
    /// payments cover interest only, principal due at term end
    InterestOnly,
}

impl MortgageType {
    /// the radio value the form submits for this product
    pub fn form_value(&self) -> &'static str {
        match self {
            MortgageType::Repayment => "repayment",
            MortgageType::InterestOnly => "interest-only",
        }
    }
}

impl fmt::Display for MortgageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_value())
    }
}

/// raised when a raw radio value names no known product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMortgageType(pub String);

impl fmt::Display for UnknownMortgageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mortgage type: {:?}", self.0)
    }
}

impl std::error::Error for UnknownMortgageType {}

impl FromStr for MortgageType {
    type Err = UnknownMortgageType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "repayment" => Ok(MortgageType::Repayment),
            "interest-only" => Ok(MortgageType::InterestOnly),
            other => Err(UnknownMortgageType(other.to_string())),
        }
    }
}

/// form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Amount,
    Term,
    Rate,
    MortgageType,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Amount, Field::Term, Field::Rate, Field::MortgageType];

    /// form input name
    pub fn name(&self) -> &'static str {
        match self {
            Field::Amount => "mortgageAmount",
            Field::Term => "mortgageTerm",
            Field::Rate => "interestRate",
            Field::MortgageType => "mortgageType",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// no result shown
    #[default]
    Idle,
    /// a result is shown
    Submitted,
}
