use crate::error::{QuizError, Result};
use crate::model::Question;
use crate::store::QuestionStore;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Category selector meaning "draw from every category".
pub const ALL_CATEGORIES: u32 = 0;

/// Validated quiz-round input: the category selector and the caller-owned
/// exclusion set of already-served question ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSelection {
    pub category: u32,
    pub excluded: HashSet<u32>,
}

impl QuizSelection {
    /// Single validation pass over the raw request fields. Either field
    /// being absent is a bad-request-class failure, raised before any store
    /// access. An empty exclusion set is valid: that is how a quiz starts.
    pub fn from_request(
        previous_questions: Option<Vec<u32>>,
        quiz_category: Option<u32>,
    ) -> Result<Self> {
        let excluded = previous_questions
            .ok_or_else(|| QuizError::InvalidRequest("missing previous_questions".to_string()))?;
        let category = quiz_category
            .ok_or_else(|| QuizError::InvalidRequest("missing quiz_category".to_string()))?;

        Ok(Self {
            category,
            excluded: excluded.into_iter().collect(),
        })
    }
}

/// Draw one question uniformly at random from the eligible set, or `None`
/// when the quiz is exhausted, which is a valid outcome, not an error.
///
/// The eligible set is every question not in the exclusion set, narrowed to
/// the selected category unless it is [`ALL_CATEGORIES`]. Nothing is marked
/// as seen here; the exclusion set is updated by the caller between rounds.
pub fn run<S: QuestionStore, R: Rng + ?Sized>(
    store: &S,
    selection: &QuizSelection,
    rng: &mut R,
) -> Result<Option<Question>> {
    let eligible: Vec<Question> = store
        .questions()?
        .into_iter()
        .filter(|q| !selection.excluded.contains(&q.id))
        .filter(|q| selection.category == ALL_CATEGORIES || q.category == selection.category)
        .collect();

    Ok(eligible.choose(rng).cloned())
}
