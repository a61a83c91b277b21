//! # Storage Layer
//!
//! The [`QuestionStore`] trait is the collaborator interface the command
//! layer drives: CRUD on questions, read-mostly category reference data, and
//! one query primitive: listings ordered by identifier ascending. Filtering
//! (search terms, category equality, quiz exclusion sets) happens in the
//! command layer, not here.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production implementation, a single `data.json`
//!   holding the whole bank.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! Both delegate to [`Bank`], the in-memory representation of the question
//! bank. `Bank` owns the integrity rules:
//!
//! - identifiers are assigned from monotonic counters and never reused, even
//!   after deletions;
//! - an insert whose category does not exist is rejected as a store error
//!   (execution class), keeping the category reference invariant.

use crate::error::{QuizError, Result};
use crate::model::{Category, NewQuestion, Question};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod fs;
pub mod memory;

/// Abstract interface for question storage.
pub trait QuestionStore {
    /// Insert a validated question, assigning the next identifier.
    fn add_question(&mut self, new: NewQuestion) -> Result<Question>;

    /// Get a question by id.
    fn question(&self, id: u32) -> Result<Question>;

    /// List all questions, ordered by id ascending.
    fn questions(&self) -> Result<Vec<Question>>;

    /// Delete a question permanently.
    fn delete_question(&mut self, id: u32) -> Result<()>;

    /// Insert a category, assigning the next identifier.
    fn add_category(&mut self, kind: &str) -> Result<Category>;

    /// Resolve a category by id.
    fn category(&self, id: u32) -> Result<Category>;

    /// List all categories, ordered by id ascending.
    fn categories(&self) -> Result<Vec<Category>>;
}

/// The bank state both backends operate on. BTreeMap keys double as the
/// id-ascending listing order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bank {
    next_question_id: u32,
    next_category_id: u32,
    questions: BTreeMap<u32, Question>,
    categories: BTreeMap<u32, Category>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_question(&mut self, new: NewQuestion) -> Result<Question> {
        if !self.categories.contains_key(&new.category) {
            return Err(QuizError::Store(format!(
                "insert failed: no category with id {}",
                new.category
            )));
        }

        self.next_question_id += 1;
        let question = new.with_id(self.next_question_id);
        self.questions.insert(question.id, question.clone());
        Ok(question)
    }

    pub fn question(&self, id: u32) -> Result<Question> {
        self.questions
            .get(&id)
            .cloned()
            .ok_or(QuizError::QuestionNotFound(id))
    }

    pub fn questions(&self) -> Vec<Question> {
        self.questions.values().cloned().collect()
    }

    pub fn delete_question(&mut self, id: u32) -> Result<()> {
        if self.questions.remove(&id).is_none() {
            return Err(QuizError::QuestionNotFound(id));
        }
        Ok(())
    }

    pub fn add_category(&mut self, kind: &str) -> Result<Category> {
        // Id 0 is the "all categories" selector, so counting starts at 1.
        self.next_category_id += 1;
        let category = Category {
            id: self.next_category_id,
            kind: kind.to_string(),
        };
        self.categories.insert(category.id, category.clone());
        Ok(category)
    }

    pub fn category(&self, id: u32) -> Result<Category> {
        self.categories
            .get(&id)
            .cloned()
            .ok_or(QuizError::UnknownCategory(id))
    }

    pub fn categories(&self) -> Vec<Category> {
        self.categories.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn science_bank() -> Bank {
        let mut bank = Bank::new();
        bank.add_category("Science").unwrap();
        bank
    }

    #[test]
    fn insert_assigns_ascending_ids() {
        let mut bank = science_bank();

        for i in 0..3 {
            let q = bank
                .add_question(NewQuestion {
                    question: format!("Question {}", i),
                    answer: "A".to_string(),
                    category: 1,
                    difficulty: 1,
                })
                .unwrap();
            assert_eq!(q.id, i + 1);
        }

        let ids: Vec<u32> = bank.questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut bank = science_bank();
        let new = NewQuestion {
            question: "Q".to_string(),
            answer: "A".to_string(),
            category: 1,
            difficulty: 1,
        };

        let first = bank.add_question(new.clone()).unwrap();
        bank.delete_question(first.id).unwrap();

        let second = bank.add_question(new).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn insert_with_unknown_category_is_a_store_error() {
        let mut bank = science_bank();
        let result = bank.add_question(NewQuestion {
            question: "Q".to_string(),
            answer: "A".to_string(),
            category: 9,
            difficulty: 1,
        });

        assert!(matches!(result, Err(QuizError::Store(_))));
        assert!(bank.questions().is_empty());
    }

    #[test]
    fn category_ids_start_at_one() {
        let mut bank = Bank::new();
        let cat = bank.add_category("Art").unwrap();
        assert_eq!(cat.id, 1);
    }

    #[test]
    fn unknown_category_lookup() {
        let bank = science_bank();
        assert!(matches!(
            bank.category(42),
            Err(QuizError::UnknownCategory(42))
        ));
    }
}
