use crate::commands::helpers::paginate;
use crate::config::QuizConfig;
use crate::error::Result;
use crate::model::Question;
use crate::store::QuestionStore;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Deletion {
    pub deleted: u32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Delete a question by id and return the requested page of what remains.
/// A missing id is not-found and leaves the bank untouched. The listing is
/// fetched after the delete, so the removed question is never in it.
pub fn run<S: QuestionStore>(
    store: &mut S,
    config: &QuizConfig,
    id: u32,
    page: usize,
) -> Result<Deletion> {
    store.delete_question(id)?;

    let all = store.questions()?;
    Ok(Deletion {
        deleted: id,
        questions: paginate(&all, page, config.questions_per_page).to_vec(),
        total_questions: all.len(),
    })
}
