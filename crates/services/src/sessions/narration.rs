use river_core::model::Question;

/// Text-to-speech backend.
pub trait Narrator {
    fn speak(&mut self, text: &str);
    fn cancel(&mut self);
}

/// Keeps at most one utterance in flight and ties it to a question.
#[derive(Debug)]
pub struct NarrationController<N: Narrator> {
    narrator: N,
    enabled: bool,
    speaking_for: Option<usize>,
}

impl<N: Narrator> NarrationController<N> {
    #[must_use]
    pub fn new(narrator: N, enabled: bool) -> Self {
        Self {
            narrator,
            enabled,
            speaking_for: None,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Switching narration off silences whatever is playing.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled && !enabled {
            self.cancel();
        }
        self.enabled = enabled;
    }

    /// Speak `text` for the question at `question_index`, replacing any
    /// utterance in flight. Returns false when narration is off.
    pub fn narrate(&mut self, text: &str, question_index: usize) -> bool {
        if !self.enabled {
            return false;
        }
        self.cancel();
        self.narrator.speak(text);
        self.speaking_for = Some(question_index);
        true
    }

    /// Stops speech that belongs to a question no longer on screen.
    pub fn on_question_changed(&mut self, question_index: usize) {
        if self
            .speaking_for
            .is_some_and(|index| index != question_index)
        {
            self.cancel();
        }
    }

    pub fn cancel(&mut self) {
        if self.speaking_for.take().is_some() {
            self.narrator.cancel();
        }
    }

    #[must_use]
    pub fn narrator(&self) -> &N {
        &self.narrator
    }
}

/// Spoken form of a question: the prompt followed by numbered options.
#[must_use]
pub fn narration_for_question(question: &Question) -> String {
    let mut text = question.text().to_owned();
    for (index, option) in question.options().iter().enumerate() {
        text.push_str(&format!(" Option {}: {option}.", index + 1));
    }
    text
}
