use chrono::{DateTime, Utc};

use river_core::model::{
    AnswerKind, AnswerRecord, GameOutcome, GameRules, GameSummary, Question,
};

use super::layout::LilyPadLayout;
use super::plan::SessionPlan;
use super::progress::{AnswerState, GameProgress};
use super::timer::{
    CountdownEpoch, CountdownToken, PendingTransition, TransitionSlot, TransitionToken,
};
use crate::error::{GameError, SessionError};

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// What happened to an answer (or a timeout) and which transition follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub question_index: usize,
    pub kind: AnswerKind,
    pub selected_option: Option<usize>,
    pub correct_index: usize,
    /// Fire through [`GameSession::resolve_feedback`] once the delay elapses.
    pub pending: PendingTransition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Counting { remaining: u32 },
    TimedOut(AnswerFeedback),
}

/// Result of applying a delayed feedback transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Advanced { index: usize },
    Retry { index: usize, lives: u32 },
    Won,
    Lost,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One playthrough: a fixed question set and layout plus the mutable progress.
///
/// Time never moves on its own here. The host feeds one [`tick`](Self::tick)
/// per elapsed second and fires each [`PendingTransition`] after its delay.
/// Any input the current state does not allow is rejected with a
/// [`GameError`] and leaves the session unchanged.
#[derive(Debug)]
pub struct GameSession {
    rules: GameRules,
    questions: Vec<Question>,
    layout: LilyPadLayout,
    current: usize,
    score: usize,
    lives: u32,
    time_remaining: u32,
    answer_state: AnswerState,
    selected_option: Option<usize>,
    paused: bool,
    feedback: TransitionSlot,
    countdown: CountdownEpoch,
    records: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
    summary: Option<GameSummary>,
}

impl GameSession {
    /// # Errors
    ///
    /// Returns `SessionError::BankTooSmall` for an empty plan and
    /// `SessionError::LayoutMismatch` when the layout does not have one pad
    /// per question.
    pub fn new(
        rules: GameRules,
        plan: SessionPlan,
        layout: LilyPadLayout,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if plan.is_empty() {
            return Err(SessionError::BankTooSmall {
                available: 0,
                required: rules.question_count(),
            });
        }
        if layout.len() != plan.total() {
            return Err(SessionError::LayoutMismatch {
                questions: plan.total(),
                pads: layout.len(),
            });
        }

        let lives = rules.max_lives();
        let time_remaining = rules.question_time_secs();
        Ok(Self {
            rules,
            questions: plan.questions,
            layout,
            current: 0,
            score: 0,
            lives,
            time_remaining,
            answer_state: AnswerState::Unanswered,
            selected_option: None,
            paused: false,
            feedback: TransitionSlot::default(),
            countdown: CountdownEpoch::default(),
            records: Vec::new(),
            started_at,
            summary: None,
        })
    }

    #[must_use]
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn layout(&self) -> &LilyPadLayout {
        &self.layout
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub fn answer_state(&self) -> AnswerState {
        self.answer_state
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.summary.is_some()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.summary.as_ref().map(GameSummary::outcome)
    }

    /// Available once the game is won or lost.
    #[must_use]
    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn has_pending_transition(&self) -> bool {
        self.feedback.is_pending()
    }

    #[must_use]
    pub fn progress(&self) -> GameProgress {
        GameProgress {
            current_index: self.current,
            total: self.questions.len(),
            score: self.score,
            lives: self.lives,
            max_lives: self.rules.max_lives(),
            time_remaining: self.time_remaining,
            answer_state: self.answer_state,
            selected_option: self.selected_option,
            is_paused: self.paused,
            is_complete: self.is_complete(),
        }
    }

    /// Token for the running countdown, or `None` while the clock is stopped.
    #[must_use]
    pub fn countdown_token(&self) -> Option<CountdownToken> {
        let counting = self.rules.timer_enabled()
            && !self.paused
            && !self.is_complete()
            && self.answer_state == AnswerState::Unanswered;
        counting.then(|| self.countdown.token())
    }

    /// Answer the current question.
    ///
    /// A correct answer scores immediately; advancing (or losing a life)
    /// waits for the returned transition.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Completed`, `GameError::Paused` or
    /// `GameError::AlreadyAnswered` when answers are not accepted, and
    /// `GameError::OptionOutOfRange` for an index past the last option.
    pub fn submit_answer(
        &mut self,
        option: usize,
        at: DateTime<Utc>,
    ) -> Result<AnswerFeedback, GameError> {
        self.ensure_accepting_answers()?;
        let question = &self.questions[self.current];
        if option >= question.option_count() {
            return Err(GameError::OptionOutOfRange {
                index: option,
                len: question.option_count(),
            });
        }

        let kind = if question.is_correct(option) {
            self.score += 1;
            AnswerKind::Correct
        } else {
            AnswerKind::Wrong
        };
        Ok(self.record_answer(kind, Some(option), at))
    }

    /// Count down one second. Reaching zero times the question out, which
    /// behaves like a wrong answer with nothing selected.
    ///
    /// # Errors
    ///
    /// Returns `GameError::TimerDisabled` when the rules turn the timer off,
    /// the same guard errors as [`submit_answer`](Self::submit_answer), and
    /// `GameError::StaleTransition` when `token` belongs to an earlier run of
    /// the countdown.
    pub fn tick(
        &mut self,
        token: CountdownToken,
        at: DateTime<Utc>,
    ) -> Result<TickOutcome, GameError> {
        if !self.rules.timer_enabled() {
            return Err(GameError::TimerDisabled);
        }
        self.ensure_accepting_answers()?;
        if token != self.countdown.token() {
            return Err(GameError::StaleTransition);
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining > 0 {
            return Ok(TickOutcome::Counting {
                remaining: self.time_remaining,
            });
        }
        Ok(TickOutcome::TimedOut(
            self.record_answer(AnswerKind::TimedOut, None, at),
        ))
    }

    /// Apply the transition scheduled by the last answer or timeout.
    ///
    /// # Errors
    ///
    /// Returns `GameError::StaleTransition` if `token` was superseded or
    /// cancelled (pause, reset), `GameError::Paused` while paused and
    /// `GameError::Completed` once the game is over.
    pub fn resolve_feedback(
        &mut self,
        token: TransitionToken,
        at: DateTime<Utc>,
    ) -> Result<Resolution, GameError> {
        if self.is_complete() {
            return Err(GameError::Completed);
        }
        if self.paused {
            return Err(GameError::Paused);
        }
        if !self.feedback.take(token) {
            return Err(GameError::StaleTransition);
        }

        match self.answer_state {
            AnswerState::Unanswered => Err(GameError::StaleTransition),
            AnswerState::Correct => {
                if self.current + 1 >= self.questions.len() {
                    self.finish(GameOutcome::Won, at)?;
                    return Ok(Resolution::Won);
                }
                self.current += 1;
                self.restart_question();
                Ok(Resolution::Advanced {
                    index: self.current,
                })
            }
            AnswerState::Wrong | AnswerState::TimedOut => {
                if self.rules.lives_enabled() {
                    self.lives = self.lives.saturating_sub(1);
                    if self.lives == 0 {
                        self.finish(GameOutcome::Lost, at)?;
                        return Ok(Resolution::Lost);
                    }
                }
                self.restart_question();
                Ok(Resolution::Retry {
                    index: self.current,
                    lives: self.lives,
                })
            }
        }
    }

    /// Freeze the countdown and block answers. A pending feedback transition
    /// is cancelled and re-issued by [`resume`](Self::resume).
    ///
    /// # Errors
    ///
    /// Returns `GameError::Completed` once the game is over.
    pub fn pause(&mut self) -> Result<(), GameError> {
        if self.is_complete() {
            return Err(GameError::Completed);
        }
        if self.paused {
            return Ok(());
        }
        self.paused = true;
        self.countdown.bump();
        self.feedback.cancel();
        Ok(())
    }

    /// Returns the re-issued feedback transition when paused mid-feedback.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Completed` once the game is over.
    pub fn resume(&mut self) -> Result<Option<PendingTransition>, GameError> {
        if self.is_complete() {
            return Err(GameError::Completed);
        }
        if !self.paused {
            return Ok(None);
        }
        self.paused = false;
        self.countdown.bump();
        if self.answer_state.is_answered() {
            return Ok(Some(self.feedback.schedule(self.rules.feedback_delay())));
        }
        Ok(None)
    }

    /// # Errors
    ///
    /// Returns `GameError::Completed` once the game is over.
    pub fn toggle_pause(&mut self) -> Result<Option<PendingTransition>, GameError> {
        if self.paused {
            self.resume()
        } else {
            self.pause().map(|()| None)
        }
    }

    fn ensure_accepting_answers(&self) -> Result<(), GameError> {
        if self.is_complete() {
            return Err(GameError::Completed);
        }
        if self.paused {
            return Err(GameError::Paused);
        }
        if self.answer_state.is_answered() {
            return Err(GameError::AlreadyAnswered);
        }
        Ok(())
    }

    fn record_answer(
        &mut self,
        kind: AnswerKind,
        selected_option: Option<usize>,
        at: DateTime<Utc>,
    ) -> AnswerFeedback {
        self.answer_state = kind.into();
        self.selected_option = selected_option;
        self.records.push(AnswerRecord::new(self.current, kind, at));
        self.countdown.bump();
        let pending = self.feedback.schedule(self.rules.feedback_delay());

        AnswerFeedback {
            question_index: self.current,
            kind,
            selected_option,
            correct_index: self.questions[self.current].correct_index(),
            pending,
        }
    }

    fn restart_question(&mut self) {
        self.answer_state = AnswerState::Unanswered;
        self.selected_option = None;
        self.time_remaining = self.rules.question_time_secs();
        self.countdown.bump();
    }

    fn finish(&mut self, outcome: GameOutcome, at: DateTime<Utc>) -> Result<(), GameError> {
        // A wall clock stepping backwards must not block completion.
        let completed_at = at.max(self.started_at);
        let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        let summary = GameSummary::from_records(
            outcome,
            total,
            self.lives,
            self.started_at,
            completed_at,
            &self.records,
        )?;
        self.summary = Some(summary);
        self.countdown.bump();
        Ok(())
    }
}
