use std::collections::{HashMap, HashSet};

use rand::Rng;
use rand::seq::SliceRandom;

use river_core::model::{Category, GameRules, Question, QuestionBank};

use crate::error::SessionError;

/// Selection result for a session build.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPlan {
    pub questions: Vec<Question>,
    /// Picks admitted while honouring the per-category cap.
    pub capped_selected: usize,
    /// Picks added afterwards, ignoring the cap, to reach the target size.
    pub fill_selected: usize,
}

impl SessionPlan {
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Picks a session's questions from the bank with best-effort category variety.
pub struct SessionBuilder<'a> {
    bank: &'a QuestionBank,
    rules: &'a GameRules,
}

impl<'a> SessionBuilder<'a> {
    #[must_use]
    pub fn new(bank: &'a QuestionBank, rules: &'a GameRules) -> Self {
        Self { bank, rules }
    }

    /// Build a session plan.
    ///
    /// - The bank is shuffled uniformly.
    /// - Questions are taken in shuffled order while their category has fewer
    ///   than `category_cap` picks.
    /// - Any shortfall is filled from the same order, ignoring the cap.
    /// - Each picked question gets its options shuffled independently.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::BankTooSmall` when the bank cannot supply
    /// `question_count` distinct questions.
    pub fn build<R: Rng + ?Sized>(self, rng: &mut R) -> Result<SessionPlan, SessionError> {
        let target = self.rules.question_count();
        let cap = self.rules.category_cap();
        if self.bank.len() < target {
            return Err(SessionError::BankTooSmall {
                available: self.bank.len(),
                required: target,
            });
        }

        let mut order: Vec<usize> = (0..self.bank.len()).collect();
        order.shuffle(rng);

        let mut picked = Vec::with_capacity(target);
        let mut picked_set = HashSet::with_capacity(target);
        let mut per_category: HashMap<Category, usize> = HashMap::new();

        for &index in &order {
            if picked.len() >= target {
                break;
            }
            let question = &self.bank.questions()[index];
            let count = per_category.entry(question.category()).or_insert(0);
            if *count < cap {
                *count += 1;
                picked.push(index);
                picked_set.insert(index);
            }
        }
        let capped_selected = picked.len();

        for &index in &order {
            if picked.len() >= target {
                break;
            }
            if picked_set.insert(index) {
                picked.push(index);
            }
        }
        let fill_selected = picked.len() - capped_selected;

        let questions = picked
            .into_iter()
            .map(|index| shuffle_options(&self.bank.questions()[index], rng))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SessionPlan {
            questions,
            capped_selected,
            fill_selected,
        })
    }
}

fn shuffle_options<R: Rng + ?Sized>(
    question: &Question,
    rng: &mut R,
) -> Result<Question, SessionError> {
    let mut order: Vec<usize> = (0..question.option_count()).collect();
    order.shuffle(rng);
    Ok(question.reordered(&order)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn question(text: &str, category: Category) -> Question {
        Question::new(text, ["yes", "no", "maybe"], 0, category, "").unwrap()
    }

    #[test]
    fn builder_picks_eight_unique_questions_within_cap() {
        let bank = QuestionBank::standard();
        let rules = GameRules::default();

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = SessionBuilder::new(&bank, &rules).build(&mut rng).unwrap();

            assert_eq!(plan.total(), 8);
            let texts: HashSet<_> = plan.questions.iter().map(Question::text).collect();
            assert_eq!(texts.len(), 8, "duplicate question for seed {seed}");

            let mut per_category: HashMap<Category, usize> = HashMap::new();
            for q in &plan.questions {
                *per_category.entry(q.category()).or_default() += 1;
            }
            assert!(per_category.values().all(|&count| count <= 3), "seed {seed}");
            assert_eq!(plan.fill_selected, 0);
        }
    }

    #[test]
    fn builder_keeps_correct_answer_after_option_shuffle() {
        let bank = QuestionBank::standard();
        let rules = GameRules::default();
        let mut rng = StdRng::seed_from_u64(7);
        let plan = SessionBuilder::new(&bank, &rules).build(&mut rng).unwrap();

        for picked in &plan.questions {
            let original = bank
                .questions()
                .iter()
                .find(|q| q.text() == picked.text())
                .unwrap();
            assert_eq!(picked.correct_option(), original.correct_option());

            let mut left: Vec<_> = picked.options().to_vec();
            let mut right: Vec<_> = original.options().to_vec();
            left.sort();
            right.sort();
            assert_eq!(left, right);
        }
    }

    #[test]
    fn builder_fills_past_cap_when_categories_run_short() {
        let questions = (0..6)
            .map(|i| question(&format!("water {i}"), Category::WaterFacts))
            .chain((0..2).map(|i| question(&format!("pond {i}"), Category::Ecosystems)))
            .collect();
        let bank = QuestionBank::new(questions).unwrap();
        let rules = GameRules::default();
        let mut rng = StdRng::seed_from_u64(3);

        let plan = SessionBuilder::new(&bank, &rules).build(&mut rng).unwrap();

        assert_eq!(plan.total(), 8);
        assert_eq!(plan.capped_selected, 5);
        assert_eq!(plan.fill_selected, 3);
        let texts: HashSet<_> = plan.questions.iter().map(Question::text).collect();
        assert_eq!(texts.len(), 8);
    }

    #[test]
    fn builder_rejects_small_bank() {
        let bank = QuestionBank::new(vec![question("only one", Category::Pollution)]).unwrap();
        let rules = GameRules::default();
        let mut rng = StdRng::seed_from_u64(1);

        let err = SessionBuilder::new(&bank, &rules).build(&mut rng).unwrap_err();
        assert!(matches!(
            err,
            SessionError::BankTooSmall {
                available: 1,
                required: 8
            }
        ));
    }

    #[test]
    fn builder_varies_between_seeds() {
        let bank = QuestionBank::standard();
        let rules = GameRules::default();
        let first = SessionBuilder::new(&bank, &rules)
            .build(&mut StdRng::seed_from_u64(1))
            .unwrap();
        let differs = (2..20).any(|seed| {
            let other = SessionBuilder::new(&bank, &rules)
                .build(&mut StdRng::seed_from_u64(seed))
                .unwrap();
            other.questions != first.questions
        });
        assert!(differs);
    }
}
