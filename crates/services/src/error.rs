//! Shared error types for the services crate.

use thiserror::Error;

use river_core::model::{QuestionError, SummaryError};

/// Errors emitted while building a session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("question bank has {available} questions, session needs {required}")]
    BankTooSmall { available: usize, required: usize },
    #[error("layout has {pads} pads for {questions} questions")]
    LayoutMismatch { questions: usize, pads: usize },
    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// Rejected game inputs.
///
/// Every variant leaves the session untouched, so callers that only care
/// about the happy path can drop these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("no game in progress")]
    NotStarted,
    #[error("game already completed")]
    Completed,
    #[error("game is paused")]
    Paused,
    #[error("current question already answered")]
    AlreadyAnswered,
    #[error("option {index} is out of range for {len} options")]
    OptionOutOfRange { index: usize, len: usize },
    #[error("question timer is disabled")]
    TimerDisabled,
    #[error("scheduled transition no longer applies")]
    StaleTransition,
    #[error(transparent)]
    Summary(#[from] SummaryError),
}
