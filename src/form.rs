use serde::{Deserialize, Serialize};

use crate::types::{Field, MortgageType};

/// raw form contents exactly as typed, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageForm {
    pub mortgage_amount: String,
    pub mortgage_term: String,
    pub interest_rate: String,
    pub mortgage_type: String,
}

/// a single input change coming from the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Amount(String),
    Term(String),
    Rate(String),
    /// raw radio value, `"repayment"` or `"interest-only"`
    MortgageType(String),
}

impl FieldEdit {
    /// radio selection of a known product
    pub fn select(kind: MortgageType) -> Self {
        FieldEdit::MortgageType(kind.form_value().to_string())
    }

    /// the field this edit touches
    pub fn field(&self) -> Field {
        match self {
            FieldEdit::Amount(_) => Field::Amount,
            FieldEdit::Term(_) => Field::Term,
            FieldEdit::Rate(_) => Field::Rate,
            FieldEdit::MortgageType(_) => Field::MortgageType,
        }
    }
}

impl MortgageForm {
    pub fn new(
        amount: impl Into<String>,
        term: impl Into<String>,
        rate: impl Into<String>,
        mortgage_type: MortgageType,
    ) -> Self {
        Self {
            mortgage_amount: amount.into(),
            mortgage_term: term.into(),
            interest_rate: rate.into(),
            mortgage_type: mortgage_type.form_value().to_string(),
        }
    }

    /// return a copy with one field replaced
    pub fn with_edit(&self, edit: FieldEdit) -> Self {
        let mut next = self.clone();
        match edit {
            FieldEdit::Amount(value) => next.mortgage_amount = value,
            FieldEdit::Term(value) => next.mortgage_term = value,
            FieldEdit::Rate(value) => next.interest_rate = value,
            FieldEdit::MortgageType(value) => next.mortgage_type = value,
        }
        next
    }

    /// raw text of a field
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Amount => &self.mortgage_amount,
            Field::Term => &self.mortgage_term,
            Field::Rate => &self.interest_rate,
            Field::MortgageType => &self.mortgage_type,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.value(*field).is_empty())
    }
}
