use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::Result;
use crate::form::{FieldEdit, MortgageForm};
use crate::repayments::{RepaymentCalculator, RepaymentResult};
use crate::types::{SessionId, SessionPhase};
use crate::validation::{MortgageInput, ValidationResult};

/// everything the view renders; every transition returns a fresh value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub form: MortgageForm,
    pub errors: ValidationResult,
    pub result: Option<RepaymentResult>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// set one field and clear its error; phase and result are untouched
    pub fn edited(&self, edit: FieldEdit) -> Self {
        let field = edit.field();
        Self {
            phase: self.phase,
            form: self.form.with_edit(edit),
            errors: self.errors.cleared(field),
            result: self.result.clone(),
        }
    }

    /// validate and, if every field passes, calculate.
    ///
    /// a rejected submission keeps the phase and any earlier result and only
    /// replaces the errors. arithmetic faults leave no new state behind.
    pub fn submitted(&self, calculator: &RepaymentCalculator) -> Result<Self> {
        match MortgageInput::parse(&self.form) {
            Ok(input) => {
                let result = calculator.calculate(&input)?;
                Ok(Self {
                    phase: SessionPhase::Submitted,
                    form: self.form.clone(),
                    errors: ValidationResult::default(),
                    result: Some(result),
                })
            }
            Err(errors) => Ok(Self {
                errors,
                ..self.clone()
            }),
        }
    }

    /// back to the empty idle state
    pub fn reset(&self) -> Self {
        Self::default()
    }

    /// no input, no errors, no result
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }
}

/// state snapshot for audit trail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub snapshot_id: Uuid,
    pub session_id: SessionId,
    pub timestamp: DateTime<Utc>,
    pub state: SessionState,
    pub trigger: String,
}

impl StateSnapshot {
    pub fn capture(
        session_id: SessionId,
        state: &SessionState,
        trigger: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            snapshot_id: Uuid::new_v4(),
            session_id,
            timestamp,
            state: state.clone(),
            trigger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InputError;
    use crate::types::{Field, MortgageType};
    use rust_decimal_macros::dec;

    fn filled(amount: &str) -> SessionState {
        SessionState::new()
            .edited(FieldEdit::Amount(amount.to_string()))
            .edited(FieldEdit::Term("25".to_string()))
            .edited(FieldEdit::Rate("5".to_string()))
            .edited(FieldEdit::select(MortgageType::Repayment))
    }

    #[test]
    fn test_valid_submission_moves_to_submitted() {
        let calculator = RepaymentCalculator::default();
        let state = filled("200000").submitted(&calculator).unwrap();

        assert_eq!(state.phase, SessionPhase::Submitted);
        assert!(state.errors.is_valid());
        let result = state.result.as_ref().unwrap();
        assert_eq!(result.monthly_payment.as_decimal(), dec!(1169.18));
    }

    #[test]
    fn test_rejected_submission_keeps_phase() {
        let calculator = RepaymentCalculator::default();
        let state = filled("0").submitted(&calculator).unwrap();

        assert_eq!(state.phase, SessionPhase::Idle);
        assert_eq!(state.errors.amount, Some(InputError::InvalidAmount));
        assert!(state.result.is_none());
    }

    #[test]
    fn test_rejection_after_success_keeps_previous_result() {
        let calculator = RepaymentCalculator::default();
        let calculated = filled("200000").submitted(&calculator).unwrap();
        let rejected = calculated
            .edited(FieldEdit::Term(String::new()))
            .submitted(&calculator)
            .unwrap();

        assert_eq!(rejected.phase, SessionPhase::Submitted);
        assert_eq!(rejected.errors.failed_fields(), vec![Field::Term]);
        assert_eq!(rejected.result, calculated.result);
    }

    #[test]
    fn test_edit_clears_only_its_own_error() {
        let calculator = RepaymentCalculator::default();
        let rejected = SessionState::new().submitted(&calculator).unwrap();
        assert_eq!(rejected.errors.failed_fields().len(), 4);

        let edited = rejected.edited(FieldEdit::Rate("4".to_string()));
        assert_eq!(edited.errors.rate, None);
        assert_eq!(edited.errors.failed_fields(), vec![Field::Amount, Field::Term, Field::MortgageType]);
        assert_eq!(edited.phase, rejected.phase);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let calculator = RepaymentCalculator::default();
        let state = filled("200000").submitted(&calculator).unwrap();

        let reset = state.reset();
        assert!(reset.is_initial());
        assert_eq!(reset.reset(), reset);
        assert_eq!(reset.phase, SessionPhase::Idle);
        assert!(reset.form.is_empty());
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let calculator = RepaymentCalculator::default();
        let state = filled("200000").submitted(&calculator).unwrap();
        let snapshot = StateSnapshot::capture(Uuid::new_v4(), &state, "submit".to_string(), Utc::now());

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: StateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.state, state);
        assert_eq!(restored.trigger, "submit");
    }
}
