use thiserror::Error;

use crate::model::Category;

/// Fewest options a question may offer.
pub const MIN_OPTIONS: usize = 2;
/// Most options a question may offer.
pub const MAX_OPTIONS: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("a question needs between 2 and 4 options, got {count}")]
    OptionCount { count: usize },

    #[error("option {index} is blank")]
    BlankOption { index: usize },

    #[error("option {index} repeats an earlier option")]
    DuplicateOption { index: usize },

    #[error("correct option {index} is out of range for {len} options")]
    CorrectOutOfRange { index: usize, len: usize },

    #[error("option order is not a permutation of {len} options")]
    InvalidOrder { len: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice trivia item.
///
/// The correct answer is tracked by index into `options`, so reordering the
/// options always goes through [`Question::reordered`] to keep the two in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_index: usize,
    category: Category,
    explanation: String,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the text is blank, the option count is
    /// outside `MIN_OPTIONS..=MAX_OPTIONS`, an option is blank or repeated, or
    /// `correct_index` does not point at an option.
    pub fn new<I, S>(
        text: impl Into<String>,
        options: I,
        correct_index: usize,
        category: Category,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(QuestionError::EmptyText);
        }

        let options: Vec<String> = options
            .into_iter()
            .map(|option| option.into().trim().to_string())
            .collect();
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&options.len()) {
            return Err(QuestionError::OptionCount {
                count: options.len(),
            });
        }
        for (index, option) in options.iter().enumerate() {
            if option.is_empty() {
                return Err(QuestionError::BlankOption { index });
            }
            if options[..index].contains(option) {
                return Err(QuestionError::DuplicateOption { index });
            }
        }
        if correct_index >= options.len() {
            return Err(QuestionError::CorrectOutOfRange {
                index: correct_index,
                len: options.len(),
            });
        }

        Ok(Self {
            text,
            options,
            correct_index,
            category,
            explanation: explanation.into().trim().to_string(),
        })
    }

    /// Build a question from built-in data without validation.
    ///
    /// Only used for the bundled bank, which has its own validation test.
    pub(crate) fn from_trusted(
        text: &str,
        options: &[&str],
        correct_index: usize,
        category: Category,
        explanation: &str,
    ) -> Self {
        Self {
            text: text.to_string(),
            options: options.iter().map(|option| (*option).to_string()).collect(),
            correct_index,
            category,
            explanation: explanation.to_string(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_index
    }

    /// Returns a copy with options rearranged.
    ///
    /// `order[i]` names the original option shown at position `i`. The correct
    /// index follows its option to the new position.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::InvalidOrder` unless `order` is a permutation of
    /// `0..option_count()`.
    pub fn reordered(&self, order: &[usize]) -> Result<Self, QuestionError> {
        let len = self.options.len();
        let mut seen = vec![false; len];
        if order.len() != len {
            return Err(QuestionError::InvalidOrder { len });
        }
        for &original in order {
            match seen.get_mut(original) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(QuestionError::InvalidOrder { len }),
            }
        }

        let options = order
            .iter()
            .map(|&original| self.options[original].clone())
            .collect();
        let correct_index = order
            .iter()
            .position(|&original| original == self.correct_index)
            .ok_or(QuestionError::InvalidOrder { len })?;

        Ok(Self {
            text: self.text.clone(),
            options,
            correct_index,
            category: self.category,
            explanation: self.explanation.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new(
            "Which uses the most water at home?",
            ["Washing dishes", "Taking a shower", "Flushing the toilet"],
            1,
            Category::HomeConservation,
            "Showers run a lot of water.",
        )
        .unwrap()
    }

    #[test]
    fn new_trims_and_validates() {
        let question = Question::new("  Why?  ", [" a ", "b"], 0, Category::WaterFacts, "")
            .unwrap();
        assert_eq!(question.text(), "Why?");
        assert_eq!(question.options(), ["a", "b"]);
        assert_eq!(question.correct_option(), "a");
    }

    #[test]
    fn new_rejects_bad_shapes() {
        assert_eq!(
            Question::new(" ", ["a", "b"], 0, Category::WaterFacts, ""),
            Err(QuestionError::EmptyText)
        );
        assert_eq!(
            Question::new("q", ["a"], 0, Category::WaterFacts, ""),
            Err(QuestionError::OptionCount { count: 1 })
        );
        assert_eq!(
            Question::new("q", ["a", "b", "c", "d", "e"], 0, Category::WaterFacts, ""),
            Err(QuestionError::OptionCount { count: 5 })
        );
        assert_eq!(
            Question::new("q", ["a", " "], 0, Category::WaterFacts, ""),
            Err(QuestionError::BlankOption { index: 1 })
        );
        assert_eq!(
            Question::new("q", ["a", "b", "a"], 0, Category::WaterFacts, ""),
            Err(QuestionError::DuplicateOption { index: 2 })
        );
        assert_eq!(
            Question::new("q", ["a", "b"], 2, Category::WaterFacts, ""),
            Err(QuestionError::CorrectOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn reordered_tracks_correct_option() {
        let question = sample();
        let shuffled = question.reordered(&[2, 0, 1]).unwrap();

        assert_eq!(
            shuffled.options(),
            ["Flushing the toilet", "Washing dishes", "Taking a shower"]
        );
        assert_eq!(shuffled.correct_index(), 2);
        assert_eq!(shuffled.correct_option(), question.correct_option());
        assert!(shuffled.is_correct(2));
        assert!(!shuffled.is_correct(1));
    }

    #[test]
    fn reordered_rejects_non_permutations() {
        let question = sample();
        assert!(question.reordered(&[0, 1]).is_err());
        assert!(question.reordered(&[0, 0, 1]).is_err());
        assert!(question.reordered(&[0, 1, 3]).is_err());
    }
}
