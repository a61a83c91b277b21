use crate::commands::helpers::paginate;
use crate::config::QuizConfig;
use crate::error::Result;
use crate::model::Question;
use crate::store::QuestionStore;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// Questions belonging to one category, paginated.
///
/// The category is resolved first: an unknown id is a validation failure
/// (bad-request class) and no question query runs. A category with no
/// questions is an empty success.
pub fn run<S: QuestionStore>(
    store: &S,
    config: &QuizConfig,
    category_id: u32,
    page: usize,
) -> Result<CategoryQuestions> {
    let category = store.category(category_id)?;

    let all = store.questions()?;
    let matching: Vec<Question> = all
        .iter()
        .filter(|q| q.category == category_id)
        .cloned()
        .collect();

    Ok(CategoryQuestions {
        questions: paginate(&matching, page, config.questions_per_page).to_vec(),
        total_questions: all.len(),
        current_category: category.kind,
    })
}
