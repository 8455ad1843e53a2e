pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod form;
pub mod repayments;
pub mod serialization;
pub mod session;
pub mod state;
pub mod types;
pub mod validation;

// re-export key types
pub use config::{CalculatorConfig, RoundingMode, ZeroRatePolicy};
pub use decimal::{Money, Rate};
pub use errors::{CalculatorError, InputError, Result};
pub use events::{Event, EventStore};
pub use form::{FieldEdit, MortgageForm};
pub use repayments::{RepaymentCalculator, RepaymentResult};
pub use serialization::SessionView;
pub use session::{RepaymentSession, SubmitOutcome};
pub use state::{SessionState, StateSnapshot};
pub use types::{Field, MortgageType, SessionId, SessionPhase};
pub use validation::{validate, MortgageInput, ValidationResult};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
