//! # API Facade
//!
//! A thin facade over the command layer, the single entry point for every
//! quizbank operation, regardless of the client driving it. It dispatches to
//! `commands/*`, composes the pieces a payload needs (e.g. search plus its
//! page window), and returns structured `Result` types. Business logic lives
//! in the commands; presentation lives above, in the transport.
//!
//! `QuizApi<S: QuestionStore>` is generic over the storage backend:
//! production uses `FileStore`, tests use `InMemoryStore`. The quiz draw is
//! the one non-deterministic operation; [`QuizApi::next_quiz_question_with`]
//! takes the rng so tests can seed it.

use crate::commands;
use crate::commands::by_category::CategoryQuestions;
use crate::commands::categories::CategoryList;
use crate::commands::create::{Created, QuestionDraft};
use crate::commands::delete::Deletion;
use crate::commands::helpers::paginate;
use crate::commands::list::QuestionPage;
use crate::commands::quiz::QuizSelection;
use crate::config::QuizConfig;
use crate::error::Result;
use crate::model::Question;
use crate::store::QuestionStore;
use rand::Rng;
use serde::Serialize;

/// Search payload: the page window of matches plus the full bank count.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

pub struct QuizApi<S: QuestionStore> {
    store: S,
    config: QuizConfig,
}

impl<S: QuestionStore> QuizApi<S> {
    pub fn new(store: S, config: QuizConfig) -> Self {
        Self { store, config }
    }

    pub fn categories(&self) -> Result<CategoryList> {
        commands::categories::run(&self.store)
    }

    pub fn questions(&self, page: usize) -> Result<QuestionPage> {
        commands::list::run(&self.store, &self.config, page)
    }

    /// Search, then window the matches to the requested page. The count
    /// reported is the whole bank's, matching the listing payloads.
    pub fn search_questions(&self, term: &str, page: usize) -> Result<SearchResults> {
        let matches = commands::search::run(&self.store, term)?;
        let total_questions = self.store.questions()?.len();

        Ok(SearchResults {
            questions: paginate(&matches, page, self.config.questions_per_page).to_vec(),
            total_questions,
        })
    }

    pub fn create_question(&mut self, draft: QuestionDraft) -> Result<Created> {
        commands::create::run(&mut self.store, &self.config, draft)
    }

    pub fn delete_question(&mut self, id: u32, page: usize) -> Result<Deletion> {
        commands::delete::run(&mut self.store, &self.config, id, page)
    }

    pub fn questions_by_category(&self, category_id: u32, page: usize) -> Result<CategoryQuestions> {
        commands::by_category::run(&self.store, &self.config, category_id, page)
    }

    pub fn next_quiz_question(&self, selection: &QuizSelection) -> Result<Option<Question>> {
        self.next_quiz_question_with(selection, &mut rand::thread_rng())
    }

    pub fn next_quiz_question_with<R: Rng + ?Sized>(
        &self,
        selection: &QuizSelection,
        rng: &mut R,
    ) -> Result<Option<Question>> {
        commands::quiz::run(&self.store, selection, rng)
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }
}

pub use crate::commands::quiz::ALL_CATEGORIES;
