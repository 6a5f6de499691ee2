use river_core::model::{GameOutcome, GameSummary};

use crate::vm::time_fmt::format_duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub won: bool,
    pub title: &'static str,
    pub headline: &'static str,
    pub closing: &'static str,
    pub score: u32,
    pub total: u32,
    pub wrong: u32,
    pub timed_out: u32,
    pub lives_left: u32,
    pub duration_str: String,
}

impl SummaryVm {
    #[must_use]
    pub fn score_line(&self) -> String {
        format!(
            "You answered {} out of {} questions correctly!",
            self.score, self.total
        )
    }
}

impl From<&GameSummary> for SummaryVm {
    fn from(summary: &GameSummary) -> Self {
        let (title, headline, closing) = match summary.outcome() {
            GameOutcome::Won => (
                "Congratulations! 🎉",
                "Professor Dave crossed the river!",
                "🌊 You're now a Water Conservation Champion! Keep protecting our precious water! 💧",
            ),
            GameOutcome::Lost => (
                "Splash! 💦",
                "Professor Dave got swept downstream.",
                "Every drop counts. Try again and help him reach the other bank!",
            ),
        };
        Self {
            won: summary.is_win(),
            title,
            headline,
            closing,
            score: summary.score(),
            total: summary.total_questions(),
            wrong: summary.wrong(),
            timed_out: summary.timed_out(),
            lives_left: summary.lives_left(),
            duration_str: format_duration(summary.duration()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use river_core::model::{AnswerKind, AnswerRecord};
    use river_core::time::fixed_now;

    #[test]
    fn lost_summary_reports_score_out_of_total() {
        let start = fixed_now();
        let records = vec![
            AnswerRecord::new(0, AnswerKind::Correct, start),
            AnswerRecord::new(1, AnswerKind::Wrong, start),
            AnswerRecord::new(1, AnswerKind::TimedOut, start),
            AnswerRecord::new(1, AnswerKind::Wrong, start),
        ];
        let summary = GameSummary::from_records(
            GameOutcome::Lost,
            8,
            0,
            start,
            start + Duration::seconds(75),
            &records,
        )
        .unwrap();

        let vm = SummaryVm::from(&summary);
        assert!(!vm.won);
        assert_eq!(vm.score_line(), "You answered 1 out of 8 questions correctly!");
        assert_eq!(vm.wrong, 2);
        assert_eq!(vm.timed_out, 1);
        assert_eq!(vm.duration_str, "1m 15s");
    }
}
