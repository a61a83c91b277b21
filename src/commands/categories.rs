use crate::commands::helpers::category_map;
use crate::error::{QuizError, Result};
use crate::store::QuestionStore;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryList {
    pub categories: BTreeMap<u32, String>,
    pub total_categories: usize,
}

/// List all categories as an id→type mapping. An empty bank of categories is
/// not-found, unlike the filtered question listings.
pub fn run<S: QuestionStore>(store: &S) -> Result<CategoryList> {
    let categories = store.categories()?;
    if categories.is_empty() {
        return Err(QuizError::NoResults);
    }

    Ok(CategoryList {
        total_categories: categories.len(),
        categories: category_map(&categories),
    })
}
