use std::time::Duration;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RulesError {
    #[error("a session needs at least 2 questions")]
    InvalidQuestionCount,

    #[error("category cap must be > 0")]
    InvalidCategoryCap,

    #[error("lives must be between 1 and 9")]
    InvalidLives,

    #[error("question time must be between 5 and 600 seconds")]
    InvalidQuestionTime,

    #[error("feedback delay must be between 100 and 10000 milliseconds")]
    InvalidFeedbackDelay,
}

//
// ─── RULES ─────────────────────────────────────────────────────────────────────
//

/// Tunables for one playthrough.
///
/// The timer and lives mechanics are optional layers on top of the basic
/// answer-and-advance loop; switching them off gives the untimed, unlimited
/// practice mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRules {
    question_count: usize,
    category_cap: usize,
    max_lives: u32,
    question_time_secs: u32,
    feedback_delay: Duration,
    timer_enabled: bool,
    lives_enabled: bool,
}

impl GameRules {
    /// Build custom rules.
    ///
    /// # Errors
    ///
    /// Returns `RulesError` when any value falls outside its allowed range.
    pub fn new(
        question_count: usize,
        category_cap: usize,
        max_lives: u32,
        question_time_secs: u32,
        feedback_delay: Duration,
    ) -> Result<Self, RulesError> {
        if question_count < 2 {
            return Err(RulesError::InvalidQuestionCount);
        }
        if category_cap == 0 {
            return Err(RulesError::InvalidCategoryCap);
        }
        if !(1..=9).contains(&max_lives) {
            return Err(RulesError::InvalidLives);
        }
        if !(5..=600).contains(&question_time_secs) {
            return Err(RulesError::InvalidQuestionTime);
        }
        if !(Duration::from_millis(100)..=Duration::from_secs(10)).contains(&feedback_delay) {
            return Err(RulesError::InvalidFeedbackDelay);
        }

        Ok(Self {
            question_count,
            category_cap,
            max_lives,
            question_time_secs,
            feedback_delay,
            timer_enabled: true,
            lives_enabled: true,
        })
    }

    #[must_use]
    pub fn with_timer_enabled(mut self, enabled: bool) -> Self {
        self.timer_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_lives_enabled(mut self, enabled: bool) -> Self {
        self.lives_enabled = enabled;
        self
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.question_count
    }

    #[must_use]
    pub fn category_cap(&self) -> usize {
        self.category_cap
    }

    #[must_use]
    pub fn max_lives(&self) -> u32 {
        self.max_lives
    }

    #[must_use]
    pub fn question_time_secs(&self) -> u32 {
        self.question_time_secs
    }

    #[must_use]
    pub fn feedback_delay(&self) -> Duration {
        self.feedback_delay
    }

    #[must_use]
    pub fn timer_enabled(&self) -> bool {
        self.timer_enabled
    }

    #[must_use]
    pub fn lives_enabled(&self) -> bool {
        self.lives_enabled
    }
}

impl Default for GameRules {
    /// 8 questions, at most 3 per category, 3 lives, 30 seconds per question
    /// and a 1.5 second feedback pause.
    fn default() -> Self {
        Self {
            question_count: 8,
            category_cap: 3,
            max_lives: 3,
            question_time_secs: 30,
            feedback_delay: Duration::from_millis(1500),
            timer_enabled: true,
            lives_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_validated_constructor() {
        let built = GameRules::new(8, 3, 3, 30, Duration::from_millis(1500)).unwrap();
        assert_eq!(built, GameRules::default());
    }

    #[test]
    fn new_rejects_out_of_range_values() {
        let delay = Duration::from_millis(1500);
        assert_eq!(
            GameRules::new(1, 3, 3, 30, delay),
            Err(RulesError::InvalidQuestionCount)
        );
        assert_eq!(
            GameRules::new(8, 0, 3, 30, delay),
            Err(RulesError::InvalidCategoryCap)
        );
        assert_eq!(GameRules::new(8, 3, 0, 30, delay), Err(RulesError::InvalidLives));
        assert_eq!(
            GameRules::new(8, 3, 3, 2, delay),
            Err(RulesError::InvalidQuestionTime)
        );
        assert_eq!(
            GameRules::new(8, 3, 3, 30, Duration::from_secs(30)),
            Err(RulesError::InvalidFeedbackDelay)
        );
    }

    #[test]
    fn feature_toggles_are_independent() {
        let rules = GameRules::default().with_timer_enabled(false);
        assert!(!rules.timer_enabled());
        assert!(rules.lives_enabled());
    }
}
