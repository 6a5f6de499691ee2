use tracing::debug;

use river_core::model::{AnswerKind, GameOutcome};
use services::{
    AnswerState, CountdownToken, GameError, GameLoopService, GamePhase, GameSession,
    PendingTransition, SessionError, TickOutcome, TransitionToken, narration_for_question,
};

use crate::vm::cues::AudioCue;
use crate::vm::summary_vm::SummaryVm;
use crate::vm::time_fmt::format_countdown;

/// Seconds left at which the timer is drawn as urgent.
const LOW_TIME_SECS: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameIntent {
    Choose(usize),
    TogglePause,
    Reset,
    Home,
}

/// Maps a key name (as rendered by `Key`'s `Display`) to an intent.
#[must_use]
pub fn intent_for_key(key: &str) -> Option<GameIntent> {
    match key {
        "p" | "P" | " " => Some(GameIntent::TogglePause),
        "r" | "R" => Some(GameIntent::Reset),
        "Escape" => Some(GameIntent::Home),
        _ => key
            .parse::<usize>()
            .ok()
            .filter(|digit| (1..=9).contains(digit))
            .map(|digit| GameIntent::Choose(digit - 1)),
    }
}

/// What the view must do after an input: play a cue and/or schedule a
/// feedback transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Followup {
    pub cue: Option<AudioCue>,
    pub schedule: Option<PendingTransition>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFollowup {
    Continue,
    Stop(Followup),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Correct,
    Wrong,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub id: String,
    pub key_hint: String,
    pub text: String,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub label: String,
    pub text: String,
    pub category: &'static str,
    pub options: Vec<OptionVm>,
    /// Answers are not accepted (feedback showing or paused).
    pub locked: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LivesVm {
    pub left: u32,
    pub max: u32,
}

impl LivesVm {
    #[must_use]
    pub fn hearts(self) -> String {
        let lost = self.max.saturating_sub(self.left) as usize;
        format!("{}{}", "❤️".repeat(self.left as usize), "🤍".repeat(lost))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HudVm {
    pub score_label: String,
    pub progress_percent: u32,
    pub lives: Option<LivesVm>,
    pub time_label: Option<String>,
    pub time_low: bool,
    pub paused: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PadState {
    Passed,
    Current,
    Next,
    Upcoming,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrogMotion {
    Resting,
    Jumping,
    Falling,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PadVm {
    pub index: usize,
    pub left_pct: f32,
    pub top_pct: f32,
    pub state: PadState,
    pub frog: Option<FrogMotion>,
    pub is_start: bool,
    pub is_goal: bool,
}

impl PadVm {
    #[must_use]
    pub fn style(&self) -> String {
        format!("left: {:.1}%; top: {:.1}%;", self.left_pct, self.top_pct)
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.state {
            PadState::Passed => "pad pad--passed",
            PadState::Current => "pad pad--current",
            PadState::Next => "pad pad--next",
            PadState::Upcoming => "pad",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub kind: AnswerKind,
    pub message: &'static str,
    pub explanation: Option<String>,
}

impl FeedbackVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.kind {
            AnswerKind::Correct => "feedback feedback--correct",
            AnswerKind::Wrong | AnswerKind::TimedOut => "feedback feedback--wrong",
        }
    }
}

/// Text to narrate, keyed so a retry of the same question is not re-read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NarrationRequest {
    pub key: (u64, usize),
    pub question_index: usize,
    pub text: String,
}

/// UI-facing wrapper around the game loop.
///
/// Rejected inputs are logged at debug level and produce an empty
/// [`Followup`], so the view never has to handle game errors.
#[derive(Debug)]
pub struct GameVm {
    game: GameLoopService,
}

impl GameVm {
    #[must_use]
    pub fn new(game: GameLoopService) -> Self {
        Self { game }
    }

    /// # Errors
    ///
    /// Returns `SessionError` when the question bank cannot fill a session.
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.game.start().map(|_| ())
    }

    /// # Errors
    ///
    /// Returns `SessionError` when the question bank cannot fill a session.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.game.reset().map(|_| ())
    }

    pub fn go_home(&mut self) {
        self.game.go_home();
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.game.phase()
    }

    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.game.session()
    }

    #[must_use]
    pub fn countdown_token(&self) -> Option<CountdownToken> {
        self.session().and_then(GameSession::countdown_token)
    }

    pub fn choose(&mut self, option: usize) -> Followup {
        match self.game.submit_answer(option) {
            Ok(feedback) => Followup {
                cue: Some(AudioCue::for_answer(feedback.kind)),
                schedule: Some(feedback.pending),
            },
            Err(err) => ignored("choose", &err),
        }
    }

    pub fn tick(&mut self, token: CountdownToken) -> TickFollowup {
        match self.game.tick(token) {
            Ok(TickOutcome::Counting { .. }) => TickFollowup::Continue,
            Ok(TickOutcome::TimedOut(feedback)) => TickFollowup::Stop(Followup {
                cue: Some(AudioCue::for_answer(feedback.kind)),
                schedule: Some(feedback.pending),
            }),
            Err(err) => TickFollowup::Stop(ignored("tick", &err)),
        }
    }

    pub fn resolve(&mut self, token: TransitionToken) -> Followup {
        match self.game.resolve_feedback(token) {
            Ok(resolution) => Followup {
                cue: AudioCue::for_resolution(resolution),
                schedule: None,
            },
            Err(err) => ignored("resolve", &err),
        }
    }

    pub fn toggle_pause(&mut self) -> Followup {
        match self.game.toggle_pause() {
            Ok(schedule) => Followup {
                cue: None,
                schedule,
            },
            Err(err) => ignored("pause", &err),
        }
    }

    #[must_use]
    pub fn question(&self) -> Option<QuestionVm> {
        let session = self.session()?;
        let question = session.current_question()?;
        let answer_state = session.answer_state();
        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let state = match (session.selected_option(), answer_state) {
                    (Some(selected), AnswerState::Correct) if selected == index => {
                        OptionState::Correct
                    }
                    (Some(selected), AnswerState::Wrong) if selected == index => {
                        OptionState::Wrong
                    }
                    _ => OptionState::Idle,
                };
                OptionVm {
                    index,
                    id: format!("option-{index}"),
                    key_hint: (index + 1).to_string(),
                    text: text.clone(),
                    state,
                }
            })
            .collect();

        Some(QuestionVm {
            index: session.current_index(),
            label: format!(
                "Question {} of {}",
                session.current_index() + 1,
                session.questions().len()
            ),
            text: question.text().to_owned(),
            category: question.category().label(),
            options,
            locked: answer_state.is_answered() || session.is_paused(),
        })
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn hud(&self) -> Option<HudVm> {
        let session = self.session()?;
        let progress = session.progress();
        let rules = session.rules();
        let percent = (progress.fraction() * 100.0).round();
        Some(HudVm {
            score_label: format!("{} / {}", progress.score, progress.total),
            progress_percent: percent as u32,
            lives: rules.lives_enabled().then_some(LivesVm {
                left: progress.lives,
                max: progress.max_lives,
            }),
            time_label: rules
                .timer_enabled()
                .then(|| format_countdown(progress.time_remaining)),
            time_low: rules.timer_enabled() && progress.time_remaining <= LOW_TIME_SECS,
            paused: progress.is_paused,
        })
    }

    #[must_use]
    pub fn pads(&self) -> Vec<PadVm> {
        let Some(session) = self.session() else {
            return Vec::new();
        };
        let current = session.current_index();
        let last = session.layout().len().saturating_sub(1);
        let motion = match session.answer_state() {
            AnswerState::Unanswered => FrogMotion::Resting,
            AnswerState::Correct => FrogMotion::Jumping,
            AnswerState::Wrong | AnswerState::TimedOut => FrogMotion::Falling,
        };
        let frog_index = if session.outcome() == Some(GameOutcome::Won) {
            last
        } else {
            current
        };

        session
            .layout()
            .pads()
            .iter()
            .enumerate()
            .map(|(index, pad)| {
                let state = match index {
                    i if i < current => PadState::Passed,
                    i if i == current => PadState::Current,
                    i if i == current + 1 => PadState::Next,
                    _ => PadState::Upcoming,
                };
                PadVm {
                    index,
                    left_pct: pad.horizontal,
                    top_pct: pad.vertical,
                    state,
                    frog: (index == frog_index).then_some(motion),
                    is_start: index == 0,
                    is_goal: index == last,
                }
            })
            .collect()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<FeedbackVm> {
        let session = self.session()?;
        let kind = session.answer_state().kind()?;
        let message = match kind {
            AnswerKind::Correct => "🎉 Great job! Professor Dave jumps forward!",
            AnswerKind::Wrong => "💦 Oops! Try again - Professor Dave fell in the water!",
            AnswerKind::TimedOut => "⏰ Time's up! Professor Dave slipped into the water!",
        };
        // Only a correct answer reveals the explanation; a retry must not
        // give the answer away.
        let explanation = session
            .current_question()
            .map(|question| question.explanation().trim())
            .filter(|text| kind == AnswerKind::Correct && !text.is_empty())
            .map(str::to_owned);
        Some(FeedbackVm {
            kind,
            message,
            explanation,
        })
    }

    #[must_use]
    pub fn summary(&self) -> Option<SummaryVm> {
        self.session()?.summary().map(SummaryVm::from)
    }

    #[must_use]
    pub fn narration(&self) -> Option<NarrationRequest> {
        let session = self.session()?;
        if session.is_complete() {
            return None;
        }
        let question = session.current_question()?;
        Some(NarrationRequest {
            key: (self.game.sessions_started(), session.current_index()),
            question_index: session.current_index(),
            text: narration_for_question(question),
        })
    }
}

fn ignored(action: &'static str, err: &GameError) -> Followup {
    debug!(action, error = %err, "input ignored");
    Followup::default()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use river_core::model::{GameRules, QuestionBank};
    use river_core::time::fixed_clock;

    fn started_vm(rules: GameRules) -> GameVm {
        let game = GameLoopService::new(fixed_clock(), rules, Arc::new(QuestionBank::standard()))
            .with_seed(3);
        let mut vm = GameVm::new(game);
        vm.start().unwrap();
        vm
    }

    fn correct(vm: &GameVm) -> usize {
        vm.session()
            .and_then(GameSession::current_question)
            .map(|question| question.correct_index())
            .unwrap()
    }

    #[test]
    fn keys_map_to_intents() {
        assert_eq!(intent_for_key("1"), Some(GameIntent::Choose(0)));
        assert_eq!(intent_for_key("4"), Some(GameIntent::Choose(3)));
        assert_eq!(intent_for_key("0"), None);
        assert_eq!(intent_for_key(" "), Some(GameIntent::TogglePause));
        assert_eq!(intent_for_key("p"), Some(GameIntent::TogglePause));
        assert_eq!(intent_for_key("r"), Some(GameIntent::Reset));
        assert_eq!(intent_for_key("Escape"), Some(GameIntent::Home));
        assert_eq!(intent_for_key("x"), None);
    }

    #[test]
    fn fresh_game_shows_first_question() {
        let vm = started_vm(GameRules::default());
        let question = vm.question().unwrap();
        assert_eq!(question.label, "Question 1 of 8");
        assert!(!question.locked);
        assert!(question.options.iter().all(|o| o.state == OptionState::Idle));

        let hud = vm.hud().unwrap();
        assert_eq!(hud.score_label, "0 / 8");
        assert_eq!(hud.time_label.as_deref(), Some("0:30"));
        assert_eq!(hud.lives.unwrap().hearts(), "❤️❤️❤️");

        let pads = vm.pads();
        assert_eq!(pads.len(), 8);
        assert!(pads[0].is_start && pads[7].is_goal);
        assert_eq!(pads[0].frog, Some(FrogMotion::Resting));
        assert_eq!(pads[1].state, PadState::Next);
    }

    #[test]
    fn correct_choice_locks_and_explains() {
        let mut vm = started_vm(GameRules::default());
        let option = correct(&vm);
        let followup = vm.choose(option);
        assert_eq!(followup.cue, Some(AudioCue::Correct));
        let pending = followup.schedule.unwrap();

        let question = vm.question().unwrap();
        assert!(question.locked);
        assert_eq!(question.options[option].state, OptionState::Correct);
        let feedback = vm.feedback().unwrap();
        assert!(feedback.message.contains("Great job"));
        assert_eq!(vm.pads()[0].frog, Some(FrogMotion::Jumping));
        assert_eq!(vm.hud().unwrap().score_label, "1 / 8");

        assert_eq!(vm.choose(option), Followup::default());
        assert_eq!(vm.resolve(pending.token), Followup::default());
        assert_eq!(vm.question().unwrap().label, "Question 2 of 8");
        assert!(vm.feedback().is_none());
    }

    #[test]
    fn wrong_choice_hides_explanation() {
        let mut vm = started_vm(GameRules::default());
        let option = (correct(&vm) + 1) % 2;
        vm.choose(option);
        let feedback = vm.feedback().unwrap();
        assert_eq!(feedback.kind, AnswerKind::Wrong);
        assert!(feedback.explanation.is_none());
        assert_eq!(vm.pads()[0].frog, Some(FrogMotion::Falling));
    }

    #[test]
    fn losing_produces_summary_and_end_cue() {
        let mut vm = started_vm(GameRules::default());
        let mut last = Followup::default();
        for _ in 0..3 {
            let option = (correct(&vm) + 1) % 2;
            let pending = vm.choose(option).schedule.unwrap();
            last = vm.resolve(pending.token);
        }
        assert_eq!(last.cue, Some(AudioCue::Lost));
        assert_eq!(vm.phase(), GamePhase::Lost);
        assert!(vm.narration().is_none());
        let summary = vm.summary().unwrap();
        assert!(!summary.won);
        assert_eq!(summary.score, 0);
    }

    #[test]
    fn untimed_rules_hide_timer_and_lives() {
        let rules = GameRules::default()
            .with_timer_enabled(false)
            .with_lives_enabled(false);
        let vm = started_vm(rules);
        let hud = vm.hud().unwrap();
        assert!(hud.time_label.is_none());
        assert!(hud.lives.is_none());
        assert!(vm.countdown_token().is_none());
    }

    #[test]
    fn narration_key_survives_retry() {
        let mut vm = started_vm(GameRules::default());
        let before = vm.narration().unwrap();
        let option = (correct(&vm) + 1) % 2;
        let pending = vm.choose(option).schedule.unwrap();
        vm.resolve(pending.token);
        assert_eq!(vm.narration().unwrap().key, before.key);
        assert!(before.text.contains("Option 1:"));
    }
}
