use crate::commands::helpers::paginate;
use crate::config::QuizConfig;
use crate::error::{QuizError, Result};
use crate::model::{NewQuestion, Question};
use crate::store::QuestionStore;
use serde::{Deserialize, Serialize};

/// Unvalidated creation input. Every field is optional at the boundary; one
/// validation pass turns it into a [`NewQuestion`] or an unprocessable-class
/// error naming the first missing field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionDraft {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<u32>,
    pub difficulty: Option<u8>,
}

impl QuestionDraft {
    pub fn validate(self) -> Result<NewQuestion> {
        let question = self
            .question
            .ok_or(QuizError::IncompleteQuestion("question"))?;
        let answer = self.answer.ok_or(QuizError::IncompleteQuestion("answer"))?;
        let category = self
            .category
            .ok_or(QuizError::IncompleteQuestion("category"))?;
        let difficulty = self
            .difficulty
            .ok_or(QuizError::IncompleteQuestion("difficulty"))?;

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Created {
    pub created: u32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Validate and insert, then return a refreshed first page.
/// Validation happens before the store is touched; a draft with a missing
/// field performs no write.
pub fn run<S: QuestionStore>(
    store: &mut S,
    config: &QuizConfig,
    draft: QuestionDraft,
) -> Result<Created> {
    let new = draft.validate()?;
    let question = store.add_question(new)?;

    let all = store.questions()?;
    Ok(Created {
        created: question.id,
        questions: paginate(&all, 1, config.questions_per_page).to_vec(),
        total_questions: all.len(),
    })
}
