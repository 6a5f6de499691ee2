use std::collections::HashSet;

use thiserror::Error;

use crate::model::{Category, Question};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank cannot be empty")]
    Empty,

    #[error("question appears more than once: {text}")]
    DuplicateText { text: String },
}

/// The fixed pool every session draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Wrap a custom list of questions.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` for an empty list and
    /// `BankError::DuplicateText` when two questions share the same text.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.text()) {
                return Err(BankError::DuplicateText {
                    text: question.text().to_string(),
                });
            }
        }
        Ok(Self { questions })
    }

    /// The bundled water-conservation bank (13 questions).
    #[must_use]
    pub fn standard() -> Self {
        Self {
            questions: STANDARD
                .iter()
                .map(|entry| {
                    Question::from_trusted(
                        entry.text,
                        entry.options,
                        entry.correct,
                        entry.category,
                        entry.explanation,
                    )
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of questions tagged with `category`.
    #[must_use]
    pub fn count_in(&self, category: Category) -> usize {
        self.questions
            .iter()
            .filter(|question| question.category() == category)
            .count()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

struct Entry {
    text: &'static str,
    options: &'static [&'static str],
    correct: usize,
    category: Category,
    explanation: &'static str,
}

const STANDARD: [Entry; 13] = [
    Entry {
        text: "What percentage of Earth's surface is covered by water?",
        options: &["50%", "60%", "71%", "80%"],
        correct: 2,
        category: Category::WaterFacts,
        explanation: "About 71% of Earth is covered by water, but almost all of it is salty ocean.",
    },
    Entry {
        text: "How long should you turn off the tap while brushing your teeth to save water?",
        options: &["Don't turn it off", "Only when done", "While brushing", "Just at the start"],
        correct: 2,
        category: Category::HomeConservation,
        explanation: "Turning the tap off while you brush can save several litres every time.",
    },
    Entry {
        text: "Which of these uses the most water at home?",
        options: &["Washing dishes", "Taking a shower", "Flushing the toilet", "Watering plants"],
        correct: 1,
        category: Category::HomeConservation,
        explanation: "Showers are one of the biggest water users, so shorter showers help a lot.",
    },
    Entry {
        text: "What is the best way to water your garden?",
        options: &["Midday sun", "Early morning", "Anytime", "Late afternoon"],
        correct: 1,
        category: Category::Gardening,
        explanation: "In the cool morning less water evaporates before plants can drink it.",
    },
    Entry {
        text: "How much of Earth's water is fresh water we can drink?",
        options: &["50%", "25%", "10%", "Less than 3%"],
        correct: 3,
        category: Category::WaterFacts,
        explanation: "Less than 3% of Earth's water is fresh, and most of that is frozen in ice.",
    },
    Entry {
        text: "Which animal needs clean water to survive, just like us?",
        options: &["Only fish", "Only frogs", "All animals", "Only birds"],
        correct: 2,
        category: Category::Ecosystems,
        explanation: "Every animal depends on clean water, from tiny insects to big whales.",
    },
    Entry {
        text: "What happens when we pollute rivers and lakes?",
        options: &["Nothing changes", "Water gets cleaner", "Animals and plants suffer", "Water tastes better"],
        correct: 2,
        category: Category::Pollution,
        explanation: "Pollution harms the fish, frogs and plants that live in and around the water.",
    },
    Entry {
        text: "How can you help save water when washing your hands?",
        options: &["Use hot water only", "Keep tap running", "Turn off while soaping", "Use more soap"],
        correct: 2,
        category: Category::HomeConservation,
        explanation: "Turning off the tap while you soap up stops clean water going down the drain.",
    },
    Entry {
        text: "Which plants usually need the least extra water in a garden?",
        options: &["Native plants", "Tropical flowers", "Lawn grass", "Rice"],
        correct: 0,
        category: Category::Gardening,
        explanation: "Native plants are used to the local rain, so they need little extra watering.",
    },
    Entry {
        text: "What should you do about a dripping tap?",
        options: &["Ignore it", "Get it fixed", "Turn it on fully", "Leave a bucket under it forever"],
        correct: 1,
        category: Category::HomeConservation,
        explanation: "A dripping tap can waste thousands of litres a year, so fixing it matters.",
    },
    Entry {
        text: "Where should used cooking oil go?",
        options: &["Down the sink", "In the toilet", "In a sealed container for the bin", "Into the garden pond"],
        correct: 2,
        category: Category::Pollution,
        explanation: "Oil clogs pipes and coats waterways, so it belongs sealed up in the bin.",
    },
    Entry {
        text: "Why are wetlands important?",
        options: &["They clean and store water", "They are only for mosquitoes", "They make rivers salty", "They have no use"],
        correct: 0,
        category: Category::Ecosystems,
        explanation: "Wetlands filter water, soak up floods and give homes to frogs and birds.",
    },
    Entry {
        text: "What is a rain barrel used for?",
        options: &["Collecting rainwater for plants", "Storing fizzy drinks", "Making it rain", "Catching fish"],
        correct: 0,
        category: Category::Gardening,
        explanation: "Rain barrels catch rain from the roof so you can water plants without the tap.",
    },
];
