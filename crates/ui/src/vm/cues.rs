use river_core::model::AnswerKind;
use services::Resolution;

/// Short sound played on answers and at the end of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCue {
    Correct,
    Wrong,
    TimedOut,
    Won,
    Lost,
}

/// Oscillator settings for one cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u32,
    pub wave: &'static str,
}

impl AudioCue {
    #[must_use]
    pub fn for_answer(kind: AnswerKind) -> Self {
        match kind {
            AnswerKind::Correct => AudioCue::Correct,
            AnswerKind::Wrong => AudioCue::Wrong,
            AnswerKind::TimedOut => AudioCue::TimedOut,
        }
    }

    /// Only the end of a game has its own cue.
    #[must_use]
    pub fn for_resolution(resolution: Resolution) -> Option<Self> {
        match resolution {
            Resolution::Won => Some(AudioCue::Won),
            Resolution::Lost => Some(AudioCue::Lost),
            Resolution::Advanced { .. } | Resolution::Retry { .. } => None,
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        let (frequency_hz, duration_ms, wave) = match self {
            AudioCue::Correct => (880, 160, "sine"),
            AudioCue::Wrong => (220, 260, "sawtooth"),
            AudioCue::TimedOut => (180, 320, "triangle"),
            AudioCue::Won => (1046, 450, "sine"),
            AudioCue::Lost => (130, 500, "triangle"),
        };
        Tone {
            frequency_hz,
            duration_ms,
            wave,
        }
    }
}
