mod cues;
mod game_vm;
mod preferences_vm;
mod summary_vm;
mod time_fmt;

pub use cues::{AudioCue, Tone};
pub use game_vm::{
    FeedbackVm, Followup, FrogMotion, GameIntent, GameVm, HudVm, LivesVm, NarrationRequest,
    OptionState, OptionVm, PadState, PadVm, QuestionVm, TickFollowup, intent_for_key,
};
pub use preferences_vm::{PreferenceToggle, root_classes};
pub use summary_vm::SummaryVm;
pub use time_fmt::{format_countdown, format_duration};
