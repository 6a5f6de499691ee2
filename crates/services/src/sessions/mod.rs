mod layout;
mod narration;
mod plan;
mod progress;
mod service;
mod timer;
mod workflow;

// Public API of the game subsystem.
pub use crate::error::{GameError, SessionError};
pub use layout::LilyPadLayout;
pub use narration::{NarrationController, Narrator, narration_for_question};
pub use plan::{SessionBuilder, SessionPlan};
pub use progress::{AnswerState, GameProgress};
pub use service::{AnswerFeedback, GameSession, Resolution, TickOutcome};
pub use timer::{CountdownToken, PendingTransition, TransitionToken};
pub use workflow::{GameLoopService, GamePhase};
