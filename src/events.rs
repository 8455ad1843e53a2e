use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{Field, MortgageType, SessionId};

/// all events that can be emitted by a calculator session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    SessionStarted {
        session_id: SessionId,
        timestamp: DateTime<Utc>,
    },
    FieldEdited {
        session_id: SessionId,
        field: Field,
        error_cleared: bool,
        timestamp: DateTime<Utc>,
    },
    SubmissionRejected {
        session_id: SessionId,
        fields: Vec<Field>,
        timestamp: DateTime<Utc>,
    },
    RepaymentsCalculated {
        session_id: SessionId,
        mortgage_type: MortgageType,
        monthly_payment: Money,
        total_payment: Money,
        timestamp: DateTime<Utc>,
    },
    CalculationFailed {
        session_id: SessionId,
        reason: String,
        timestamp: DateTime<Utc>,
    },
    SessionReset {
        session_id: SessionId,
        timestamp: DateTime<Utc>,
    },
}

impl Event {
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Event::SessionStarted { timestamp, .. }
            | Event::FieldEdited { timestamp, .. }
            | Event::SubmissionRejected { timestamp, .. }
            | Event::RepaymentsCalculated { timestamp, .. }
            | Event::CalculationFailed { timestamp, .. }
            | Event::SessionReset { timestamp, .. } => *timestamp,
        }
    }
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
