mod bank;
mod category;
mod layout;
mod preferences;
mod question;
mod rules;
mod summary;

pub use bank::{BankError, QuestionBank};
pub use category::Category;
pub use layout::PadPosition;
pub use preferences::{FontSize, Preferences};
pub use question::{MAX_OPTIONS, MIN_OPTIONS, Question, QuestionError};
pub use rules::{GameRules, RulesError};
pub use summary::{AnswerKind, AnswerRecord, GameOutcome, GameSummary, SummaryError};
