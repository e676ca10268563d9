//! Error types.
//!
//! The routing engine itself never fails; errors only come from building a
//! priority configuration or from the storage collaborators behind
//! [`plan_day`](crate::solver::plan_day).

use thiserror::Error;

use crate::priority::PriorityKey;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriorityConfigError {
    #[error("priority key '{0}' appears more than once")]
    DuplicateKey(PriorityKey),
    #[error("unknown priority key '{0}'")]
    UnknownKey(String),
}

/// A storage collaborator failed; each source keeps its own error type.
#[derive(Debug, Error)]
pub enum PlanError<EA, EP> {
    #[error("failed to load appointments: {0}")]
    Appointments(EA),
    #[error("failed to load route priorities: {0}")]
    Priorities(EP),
}
