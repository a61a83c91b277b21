use super::{Bank, QuestionStore};
use crate::error::Result;
use crate::model::{Category, NewQuestion, Question};

pub struct InMemoryStore {
    bank: Bank,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self { bank: Bank::new() }
    }
}

impl QuestionStore for InMemoryStore {
    fn add_question(&mut self, new: NewQuestion) -> Result<Question> {
        self.bank.add_question(new)
    }

    fn question(&self, id: u32) -> Result<Question> {
        self.bank.question(id)
    }

    fn questions(&self) -> Result<Vec<Question>> {
        Ok(self.bank.questions())
    }

    fn delete_question(&mut self, id: u32) -> Result<()> {
        self.bank.delete_question(id)
    }

    fn add_category(&mut self, kind: &str) -> Result<Category> {
        self.bank.add_category(kind)
    }

    fn category(&self, id: u32) -> Result<Category> {
        self.bank.category(id)
    }

    fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.bank.categories())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_category(mut self, kind: &str) -> Self {
            self.store.add_category(kind).unwrap();
            self
        }

        pub fn with_question(mut self, question: &str, answer: &str, category: u32) -> Self {
            self.store
                .add_question(NewQuestion {
                    question: question.to_string(),
                    answer: answer.to_string(),
                    category,
                    difficulty: 1,
                })
                .unwrap();
            self
        }

        pub fn with_questions(mut self, count: usize, category: u32) -> Self {
            for i in 0..count {
                self.store
                    .add_question(NewQuestion {
                        question: format!("Test question {}", i + 1),
                        answer: format!("Answer {}", i + 1),
                        category,
                        difficulty: 1,
                    })
                    .unwrap();
            }
            self
        }
    }
}
