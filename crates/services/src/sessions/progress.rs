use river_core::model::AnswerKind;

/// Lifecycle of the current question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnswerState {
    #[default]
    Unanswered,
    Correct,
    Wrong,
    TimedOut,
}

impl AnswerState {
    #[must_use]
    pub fn kind(self) -> Option<AnswerKind> {
        match self {
            AnswerState::Unanswered => None,
            AnswerState::Correct => Some(AnswerKind::Correct),
            AnswerState::Wrong => Some(AnswerKind::Wrong),
            AnswerState::TimedOut => Some(AnswerKind::TimedOut),
        }
    }

    #[must_use]
    pub fn is_answered(self) -> bool {
        self != AnswerState::Unanswered
    }
}

impl From<AnswerKind> for AnswerState {
    fn from(kind: AnswerKind) -> Self {
        match kind {
            AnswerKind::Correct => AnswerState::Correct,
            AnswerKind::Wrong => AnswerState::Wrong,
            AnswerKind::TimedOut => AnswerState::TimedOut,
        }
    }
}

/// Aggregated view of game progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameProgress {
    pub current_index: usize,
    pub total: usize,
    pub score: usize,
    pub lives: u32,
    pub max_lives: u32,
    pub time_remaining: u32,
    pub answer_state: AnswerState,
    pub selected_option: Option<usize>,
    pub is_paused: bool,
    pub is_complete: bool,
}

impl GameProgress {
    /// Share of questions answered correctly, in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.score as f32 / self.total as f32
    }
}
