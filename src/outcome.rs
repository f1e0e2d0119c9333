//! Outcome taxonomy shared by all behavior kinds.
//!
//! Every execute operation reports its result as an integer outcome code plus
//! a diagnostic message. Codes are partitioned by range:
//!
//! - `0` - success
//! - `1..=99` - behavior-specific soft failures (no plan found, collision
//!   predicted, ...)
//! - `100` - generic failure; the only failure code a legacy-wrapped plugin
//!   can report
//! - `101..=253` - behavior-specific hard failures
//! - `254` - canceled
//! - `255` - not applicable: the wrapped implementation cannot report this
//!   outcome class at all. Downstream code must treat this as "unknowable
//!   here", never as an error to propagate.
//!
//! Adapters over legacy plugins only ever produce `0` or `100`; the legacy
//! interface carries no finer classification and the adapter never invents
//! one.

use crate::types::{Pose, Velocity};
use std::fmt;

/// Successful completion.
pub const SUCCESS: u8 = 0;
/// Generic, unclassified failure.
pub const FAILURE: u8 = 100;
/// Execution stopped after a cancel request.
pub const CANCELED: u8 = 254;
/// The implementation cannot report this outcome class.
pub const NOT_APPLICABLE: u8 = 255;

/// Integer outcome classifier carried by every behavior result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome(pub u8);

impl Outcome {
    pub const SUCCESS: Outcome = Outcome(SUCCESS);
    pub const FAILURE: Outcome = Outcome(FAILURE);
    pub const CANCELED: Outcome = Outcome(CANCELED);
    pub const NOT_APPLICABLE: Outcome = Outcome(NOT_APPLICABLE);

    /// Range classification of this code
    pub fn class(self) -> OutcomeClass {
        match self.0 {
            0 => OutcomeClass::Success,
            1..=99 => OutcomeClass::SoftFailure,
            100 => OutcomeClass::Failure,
            101..=253 => OutcomeClass::HardFailure,
            254 => OutcomeClass::Canceled,
            255 => OutcomeClass::NotApplicable,
        }
    }

    pub fn is_success(self) -> bool {
        self.0 == SUCCESS
    }

    pub fn is_canceled(self) -> bool {
        self.0 == CANCELED
    }
}

impl From<u8> for Outcome {
    fn from(code: u8) -> Self {
        Outcome(code)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.class())
    }
}

/// Range classification of an outcome code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeClass {
    Success,
    /// Behavior-specific, potentially retryable failure (`1..=99`)
    SoftFailure,
    /// Generic failure (`100`)
    Failure,
    /// Behavior-specific unrecoverable failure (`101..=253`)
    HardFailure,
    Canceled,
    /// Outcome class the implementation cannot report (`255`)
    NotApplicable,
}

impl fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeClass::Success => write!(f, "success"),
            OutcomeClass::SoftFailure => write!(f, "soft failure"),
            OutcomeClass::Failure => write!(f, "failure"),
            OutcomeClass::HardFailure => write!(f, "hard failure"),
            OutcomeClass::Canceled => write!(f, "canceled"),
            OutcomeClass::NotApplicable => write!(f, "not applicable"),
        }
    }
}

/// Result of a global planning attempt
#[derive(Debug, Clone, PartialEq)]
pub struct PlanResult {
    pub outcome: Outcome,
    /// Human-readable diagnostic (may be empty)
    pub message: String,
    /// Ordered sequence of poses from start to goal
    pub plan: Vec<Pose>,
    /// Non-negative plan cost
    pub cost: f32,
}

impl PlanResult {
    /// Successful planning result with an empty message
    pub fn success(plan: Vec<Pose>, cost: f32) -> Self {
        Self {
            outcome: Outcome::SUCCESS,
            message: String::new(),
            plan,
            cost,
        }
    }

    /// Failed planning result carrying no plan
    pub fn failure(outcome: Outcome, message: impl Into<String>) -> Self {
        Self {
            outcome,
            message: message.into(),
            plan: Vec::new(),
            cost: 0.0,
        }
    }
}

/// Result of a velocity computation
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityResult {
    pub outcome: Outcome,
    /// Human-readable diagnostic (may be empty)
    pub message: String,
    /// Velocity command to send to the base
    pub cmd: Velocity,
}

impl VelocityResult {
    /// Successful velocity command with an empty message
    pub fn success(cmd: Velocity) -> Self {
        Self {
            outcome: Outcome::SUCCESS,
            message: String::new(),
            cmd,
        }
    }

    /// Failed velocity computation; the command is zeroed
    pub fn failure(outcome: Outcome, message: impl Into<String>) -> Self {
        Self {
            outcome,
            message: message.into(),
            cmd: Velocity::zero(),
        }
    }
}

/// Result of a recovery behavior run
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveryResult {
    pub outcome: Outcome,
    /// Human-readable diagnostic (may be empty)
    pub message: String,
}

impl RecoveryResult {
    /// Successful recovery run with an empty message
    pub fn success() -> Self {
        Self {
            outcome: Outcome::SUCCESS,
            message: String::new(),
        }
    }

    /// Failed recovery run
    pub fn failure(outcome: Outcome, message: impl Into<String>) -> Self {
        Self {
            outcome,
            message: message.into(),
        }
    }
}
