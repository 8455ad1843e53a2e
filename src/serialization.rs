//! serialization support for sessions
use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::form::MortgageForm;
use crate::repayments::RepaymentResult;
use crate::session::RepaymentSession;
use crate::types::{Field, MortgageType, SessionId, SessionPhase};
use crate::validation::ValidationResult;

/// serializable view of what the page renders
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionView {
    pub id: SessionId,
    pub phase: SessionPhase,
    pub form: MortgageForm,
    pub errors: ErrorsView,
    pub result: Option<ResultView>,
    pub config: CalculatorConfig,
}

/// inline error messages keyed like the form inputs
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorsView {
    pub mortgage_amount: Option<String>,
    pub mortgage_term: Option<String>,
    pub interest_rate: Option<String>,
    pub mortgage_type: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultView {
    pub mortgage_type: MortgageType,
    pub monthly_repayment: String,
    pub total_repayment: String,
    pub total_interest: String,
}

impl ErrorsView {
    pub fn from_validation(errors: &ValidationResult) -> Self {
        ErrorsView {
            mortgage_amount: errors.message(Field::Amount),
            mortgage_term: errors.message(Field::Term),
            interest_rate: errors.message(Field::Rate),
            mortgage_type: errors.message(Field::MortgageType),
        }
    }
}

impl ResultView {
    pub fn from_result(result: &RepaymentResult) -> Self {
        ResultView {
            mortgage_type: result.mortgage_type,
            monthly_repayment: result.monthly_display(),
            total_repayment: result.total_display(),
            total_interest: result.total_interest().to_currency(result.decimal_places),
        }
    }
}

impl SessionView {
    pub fn from_session(session: &RepaymentSession) -> Self {
        SessionView {
            id: session.id,
            phase: session.phase(),
            form: session.form().clone(),
            errors: ErrorsView::from_validation(session.errors()),
            result: session.result().map(ResultView::from_result),
            config: session.config().clone(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
