use hourglass_rs::SafeTimeProvider;
use log::{debug, warn};
use uuid::Uuid;

use crate::config::CalculatorConfig;
use crate::errors::Result;
use crate::events::{Event, EventStore};
use crate::form::{FieldEdit, MortgageForm};
use crate::repayments::{RepaymentCalculator, RepaymentResult};
use crate::serialization::SessionView;
use crate::state::{SessionState, StateSnapshot};
use crate::types::{SessionId, SessionPhase};
use crate::validation::ValidationResult;

/// outcome of pressing "calculate"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Calculated(RepaymentResult),
    Rejected(ValidationResult),
}

/// session controller: owns the current state and records every transition
pub struct RepaymentSession {
    pub id: SessionId,
    pub state: SessionState,
    /// grows with every transition; long-lived callers drain it with `take_events`
    pub events: EventStore,
    /// one per transition; drain with [`RepaymentSession::take_snapshots`]
    pub snapshots: Vec<StateSnapshot>,
    calculator: RepaymentCalculator,
}

impl RepaymentSession {
    /// start an idle session
    pub fn start(config: CalculatorConfig, time_provider: &SafeTimeProvider) -> Result<Self> {
        let calculator = RepaymentCalculator::new(config)?;
        let id = Uuid::new_v4();
        let now = time_provider.now();

        let mut session = Self {
            id,
            state: SessionState::new(),
            events: EventStore::new(),
            snapshots: Vec::new(),
            calculator,
        };

        session.events.emit(Event::SessionStarted { session_id: id, timestamp: now });
        session.snapshots.push(StateSnapshot::capture(id, &session.state, "start".to_string(), now));
        debug!("session {} started", id);

        Ok(session)
    }

    pub fn config(&self) -> &CalculatorConfig {
        self.calculator.config()
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn form(&self) -> &MortgageForm {
        &self.state.form
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.state.errors
    }

    pub fn result(&self) -> Option<&RepaymentResult> {
        self.state.result.as_ref()
    }

    /// apply one field change from the view
    pub fn edit(&mut self, edit: FieldEdit, time_provider: &SafeTimeProvider) {
        let field = edit.field();
        let error_cleared = self.state.errors.get(field).is_some();
        let next = self.state.edited(edit);

        self.commit(next, format!("edit: {}", field), time_provider);
        self.events.emit(Event::FieldEdited {
            session_id: self.id,
            field,
            error_cleared,
            timestamp: time_provider.now(),
        });
    }

    /// validate the form and calculate when every field passes
    pub fn submit(&mut self, time_provider: &SafeTimeProvider) -> Result<SubmitOutcome> {
        let now = time_provider.now();
        let next = match self.state.submitted(&self.calculator) {
            Ok(next) => next,
            Err(e) => {
                warn!("session {} calculation failed: {}", self.id, e);
                self.events.emit(Event::CalculationFailed {
                    session_id: self.id,
                    reason: e.to_string(),
                    timestamp: now,
                });
                return Err(e);
            }
        };

        let outcome = match (&next.result, next.errors.is_valid()) {
            (Some(result), true) => {
                self.events.emit(Event::RepaymentsCalculated {
                    session_id: self.id,
                    mortgage_type: result.mortgage_type,
                    monthly_payment: result.monthly_payment,
                    total_payment: result.total_payment,
                    timestamp: now,
                });
                SubmitOutcome::Calculated(result.clone())
            }
            _ => {
                warn!(
                    "session {} submission rejected: {:?}",
                    self.id,
                    next.errors.failed_fields()
                );
                self.events.emit(Event::SubmissionRejected {
                    session_id: self.id,
                    fields: next.errors.failed_fields(),
                    timestamp: now,
                });
                SubmitOutcome::Rejected(next.errors)
            }
        };

        self.commit(next, "submit".to_string(), time_provider);
        Ok(outcome)
    }

    /// clear inputs, errors and result
    pub fn reset(&mut self, time_provider: &SafeTimeProvider) {
        let next = self.state.reset();
        self.commit(next, "reset".to_string(), time_provider);
        self.events.emit(Event::SessionReset {
            session_id: self.id,
            timestamp: time_provider.now(),
        });
    }

    /// hand over recorded snapshots, leaving the session's list empty
    pub fn take_snapshots(&mut self) -> Vec<StateSnapshot> {
        std::mem::take(&mut self.snapshots)
    }

    /// serializable view of the session
    pub fn view(&self) -> SessionView {
        SessionView::from_session(self)
    }

    /// pretty json of the current view
    pub fn json(&self) -> Result<String> {
        Ok(self.view().to_json_pretty()?)
    }

    fn commit(&mut self, next: SessionState, trigger: String, time_provider: &SafeTimeProvider) {
        if next.phase != self.state.phase {
            debug!("session {} {:?} -> {:?}", self.id, self.state.phase, next.phase);
        }
        self.state = next;
        self.snapshots.push(StateSnapshot::capture(
            self.id,
            &self.state,
            trigger,
            time_provider.now(),
        ));
    }
}
