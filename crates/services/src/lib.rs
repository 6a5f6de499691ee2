#![forbid(unsafe_code)]

pub mod error;
pub mod preferences_service;
pub mod sessions;

pub use river_core::Clock;

pub use error::{GameError, SessionError};
pub use preferences_service::{MotionSource, PreferenceStore};

pub use sessions::{
    AnswerFeedback, AnswerState, CountdownToken, GameLoopService, GamePhase, GameProgress,
    GameSession, LilyPadLayout, NarrationController, Narrator, PendingTransition, Resolution,
    SessionBuilder, SessionPlan, TickOutcome, TransitionToken, narration_for_question,
};
