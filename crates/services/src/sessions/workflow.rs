use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use river_core::model::{GameOutcome, GameRules, QuestionBank};

use super::layout::LilyPadLayout;
use super::plan::SessionBuilder;
use super::service::{AnswerFeedback, GameSession, Resolution, TickOutcome};
use super::timer::{CountdownToken, PendingTransition, TransitionToken};
use crate::Clock;
use crate::error::{GameError, SessionError};

/// Which screen the game loop is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Welcome,
    Playing,
    Won,
    Lost,
}

/// Owns the current playthrough and starts new ones.
///
/// Timestamps come from the injected [`Clock`]; question selection and pad
/// placement share one RNG so a seeded loop replays the same games.
#[derive(Debug)]
pub struct GameLoopService {
    clock: Clock,
    rules: GameRules,
    bank: Arc<QuestionBank>,
    rng: StdRng,
    session: Option<GameSession>,
    sessions_started: u64,
}

impl GameLoopService {
    #[must_use]
    pub fn new(clock: Clock, rules: GameRules, bank: Arc<QuestionBank>) -> Self {
        Self {
            clock,
            rules,
            bank,
            rng: StdRng::from_os_rng(),
            session: None,
            sessions_started: 0,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn sessions_started(&self) -> u64 {
        self.sessions_started
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        let Some(session) = &self.session else {
            return GamePhase::Welcome;
        };
        match session.outcome() {
            None => GamePhase::Playing,
            Some(GameOutcome::Won) => GamePhase::Won,
            Some(GameOutcome::Lost) => GamePhase::Lost,
        }
    }

    /// Start a fresh playthrough, replacing any current one.
    ///
    /// Transitions issued by the replaced session are never accepted by the
    /// new one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::BankTooSmall` if the bank cannot fill a session.
    pub fn start(&mut self) -> Result<&GameSession, SessionError> {
        let plan = SessionBuilder::new(&self.bank, &self.rules).build(&mut self.rng)?;
        let layout = LilyPadLayout::generate(plan.total(), &mut self.rng);
        debug!(
            capped = plan.capped_selected,
            filled = plan.fill_selected,
            "selected session questions"
        );

        let session = GameSession::new(self.rules.clone(), plan, layout, self.clock.now())?;
        self.sessions_started += 1;
        info!(
            game = self.sessions_started,
            questions = session.questions().len(),
            "game started"
        );
        Ok(self.session.insert(session))
    }

    /// Abandon the current playthrough and start another.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::BankTooSmall` if the bank cannot fill a session.
    pub fn reset(&mut self) -> Result<&GameSession, SessionError> {
        if let Some(session) = self.session.take() {
            info!(
                score = session.score(),
                question = session.current_index(),
                "game reset"
            );
        }
        self.start()
    }

    /// Drop the current playthrough and return to the welcome screen.
    pub fn go_home(&mut self) {
        if self.session.take().is_some() {
            debug!("returned to welcome screen");
        }
    }

    /// # Errors
    ///
    /// Returns `GameError::NotStarted` without a session, otherwise whatever
    /// [`GameSession::submit_answer`] rejects.
    pub fn submit_answer(&mut self, option: usize) -> Result<AnswerFeedback, GameError> {
        let now = self.clock.now();
        let feedback = self.session_mut()?.submit_answer(option, now)?;
        debug!(option, kind = ?feedback.kind, "answer submitted");
        Ok(feedback)
    }

    /// # Errors
    ///
    /// Returns `GameError::NotStarted` without a session, otherwise whatever
    /// [`GameSession::tick`] rejects.
    pub fn tick(&mut self, token: CountdownToken) -> Result<TickOutcome, GameError> {
        let now = self.clock.now();
        let outcome = self.session_mut()?.tick(token, now)?;
        if let TickOutcome::TimedOut(feedback) = &outcome {
            debug!(question = feedback.question_index, "question timed out");
        }
        Ok(outcome)
    }

    /// # Errors
    ///
    /// Returns `GameError::NotStarted` without a session, otherwise whatever
    /// [`GameSession::resolve_feedback`] rejects.
    pub fn resolve_feedback(&mut self, token: TransitionToken) -> Result<Resolution, GameError> {
        let now = self.clock.now();
        let resolution = self.session_mut()?.resolve_feedback(token, now)?;
        match resolution {
            Resolution::Won | Resolution::Lost => {
                if let Some(summary) = self.session.as_ref().and_then(GameSession::summary) {
                    info!(
                        outcome = ?summary.outcome(),
                        score = summary.score(),
                        total = summary.total_questions(),
                        lives_left = summary.lives_left(),
                        "game finished"
                    );
                }
            }
            Resolution::Advanced { .. } | Resolution::Retry { .. } => {}
        }
        Ok(resolution)
    }

    /// # Errors
    ///
    /// Returns `GameError::NotStarted` without a session and
    /// `GameError::Completed` after it ends.
    pub fn pause(&mut self) -> Result<(), GameError> {
        self.session_mut()?.pause()
    }

    /// # Errors
    ///
    /// Returns `GameError::NotStarted` without a session and
    /// `GameError::Completed` after it ends.
    pub fn resume(&mut self) -> Result<Option<PendingTransition>, GameError> {
        self.session_mut()?.resume()
    }

    /// # Errors
    ///
    /// Returns `GameError::NotStarted` without a session and
    /// `GameError::Completed` after it ends.
    pub fn toggle_pause(&mut self) -> Result<Option<PendingTransition>, GameError> {
        self.session_mut()?.toggle_pause()
    }

    fn session_mut(&mut self) -> Result<&mut GameSession, GameError> {
        self.session.as_mut().ok_or(GameError::NotStarted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use river_core::time::fixed_clock;

    fn service() -> GameLoopService {
        GameLoopService::new(
            fixed_clock(),
            GameRules::default(),
            Arc::new(QuestionBank::standard()),
        )
        .with_seed(9)
    }

    #[test]
    fn inputs_before_start_are_rejected() {
        let mut service = service();
        assert_eq!(service.phase(), GamePhase::Welcome);
        assert_eq!(service.submit_answer(0), Err(GameError::NotStarted));
        assert_eq!(service.pause(), Err(GameError::NotStarted));
        assert_eq!(service.toggle_pause(), Err(GameError::NotStarted));
    }

    #[test]
    fn start_builds_a_full_session() {
        let mut service = service();
        let session = service.start().unwrap();
        assert_eq!(session.questions().len(), 8);
        assert_eq!(session.layout().len(), 8);
        assert_eq!(session.lives(), 3);
        assert_eq!(session.time_remaining(), 30);
        assert_eq!(service.phase(), GamePhase::Playing);
        assert_eq!(service.sessions_started(), 1);
    }

    #[test]
    fn reset_discards_pending_feedback() {
        let mut service = service();
        service.start().unwrap();
        let feedback = service.submit_answer(0).unwrap();

        service.reset().unwrap();
        assert_eq!(service.sessions_started(), 2);
        assert_eq!(
            service.resolve_feedback(feedback.pending.token),
            Err(GameError::StaleTransition)
        );
        let session = service.session().unwrap();
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn go_home_returns_to_welcome() {
        let mut service = service();
        service.start().unwrap();
        service.go_home();
        assert_eq!(service.phase(), GamePhase::Welcome);
        assert!(service.session().is_none());
    }

    #[test]
    fn same_seed_replays_the_same_game() {
        let mut first = service();
        let mut second = service();
        let a = first.start().unwrap().questions().to_vec();
        let b = second.start().unwrap().questions().to_vec();
        assert_eq!(a, b);
    }
}
