use crate::commands::helpers::{category_map, paginate};
use crate::config::QuizConfig;
use crate::error::{QuizError, Result};
use crate::model::Question;
use crate::store::QuestionStore;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<u32, String>,
}

/// Paginated listing of the whole bank, id ascending.
///
/// An empty *first* page means there is no data at all and is not-found; a
/// later page past the end is a successful empty listing. This asymmetry is
/// deliberate policy, kept from the original service.
pub fn run<S: QuestionStore>(store: &S, config: &QuizConfig, page: usize) -> Result<QuestionPage> {
    let all = store.questions()?;
    let window = paginate(&all, page, config.questions_per_page);

    if page <= 1 && window.is_empty() {
        return Err(QuizError::NoResults);
    }

    Ok(QuestionPage {
        questions: window.to_vec(),
        total_questions: all.len(),
        categories: category_map(&store.categories()?),
    })
}
