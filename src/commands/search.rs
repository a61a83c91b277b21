use crate::error::Result;
use crate::model::Question;
use crate::store::QuestionStore;

/// Case-insensitive substring search over question text, id ascending.
/// No matches is an empty success, not not-found.
pub fn run<S: QuestionStore>(store: &S, term: &str) -> Result<Vec<Question>> {
    let term_lower = term.to_lowercase();
    let matches = store
        .questions()?
        .into_iter()
        .filter(|q| q.question.to_lowercase().contains(&term_lower))
        .collect();
    Ok(matches)
}
