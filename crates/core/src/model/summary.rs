use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("score ({score}) exceeds the number of questions ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },

    #[error("too many answers for a single game: {len}")]
    TooManyAnswers { len: usize },
}

/// How a playthrough ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
}

/// How a single answer attempt resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    Correct,
    Wrong,
    TimedOut,
}

/// One answer attempt, kept in order for the end-of-game summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub kind: AnswerKind,
    pub answered_at: DateTime<Utc>,
}

impl AnswerRecord {
    #[must_use]
    pub fn new(question_index: usize, kind: AnswerKind, answered_at: DateTime<Utc>) -> Self {
        Self {
            question_index,
            kind,
            answered_at,
        }
    }
}

/// Final tally of a completed playthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    outcome: GameOutcome,
    total_questions: u32,
    lives_left: u32,
    correct: u32,
    wrong: u32,
    timed_out: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl GameSummary {
    /// Build a summary from the ordered answer log.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before
    /// `started_at`, `SummaryError::ScoreExceedsTotal` if more correct answers
    /// were logged than there are questions, and `SummaryError::TooManyAnswers`
    /// if the log length does not fit in `u32`.
    pub fn from_records(
        outcome: GameOutcome,
        total_questions: u32,
        lives_left: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        records: &[AnswerRecord],
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        u32::try_from(records.len())
            .map_err(|_| SummaryError::TooManyAnswers { len: records.len() })?;

        let mut correct = 0_u32;
        let mut wrong = 0_u32;
        let mut timed_out = 0_u32;
        for record in records {
            match record.kind {
                AnswerKind::Correct => correct = correct.saturating_add(1),
                AnswerKind::Wrong => wrong = wrong.saturating_add(1),
                AnswerKind::TimedOut => timed_out = timed_out.saturating_add(1),
            }
        }
        if correct > total_questions {
            return Err(SummaryError::ScoreExceedsTotal {
                score: correct,
                total: total_questions,
            });
        }

        Ok(Self {
            outcome,
            total_questions,
            lives_left,
            correct,
            wrong,
            timed_out,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        self.outcome == GameOutcome::Won
    }

    /// Questions answered correctly.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn lives_left(&self) -> u32 {
        self.lives_left
    }

    #[must_use]
    pub fn wrong(&self) -> u32 {
        self.wrong
    }

    #[must_use]
    pub fn timed_out(&self) -> u32 {
        self.timed_out
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn duration(&self) -> chrono::Duration {
        self.completed_at - self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn summary_counts_answer_kinds() {
        let now = fixed_now();
        let records = vec![
            AnswerRecord::new(0, AnswerKind::Correct, now),
            AnswerRecord::new(1, AnswerKind::Wrong, now),
            AnswerRecord::new(1, AnswerKind::TimedOut, now),
            AnswerRecord::new(1, AnswerKind::Wrong, now),
        ];
        let later = now + chrono::Duration::seconds(95);

        let summary =
            GameSummary::from_records(GameOutcome::Lost, 8, 0, now, later, &records).unwrap();

        assert_eq!(summary.score(), 1);
        assert_eq!(summary.wrong(), 2);
        assert_eq!(summary.timed_out(), 1);
        assert!(!summary.is_win());
        assert_eq!(summary.duration().num_seconds(), 95);
    }

    #[test]
    fn summary_rejects_inverted_time_range() {
        let now = fixed_now();
        let earlier = now - chrono::Duration::seconds(1);
        assert_eq!(
            GameSummary::from_records(GameOutcome::Won, 8, 3, now, earlier, &[]),
            Err(SummaryError::InvalidTimeRange)
        );
    }

    #[test]
    fn summary_rejects_score_above_total() {
        let now = fixed_now();
        let records = vec![
            AnswerRecord::new(0, AnswerKind::Correct, now),
            AnswerRecord::new(1, AnswerKind::Correct, now),
        ];
        assert_eq!(
            GameSummary::from_records(GameOutcome::Won, 1, 3, now, now, &records),
            Err(SummaryError::ScoreExceedsTotal { score: 2, total: 1 })
        );
    }
}
