//! Core data types: [`Question`], [`NewQuestion`], and [`Category`].
//!
//! Identifiers are store-assigned integers, monotonically increasing and
//! never reused after a deletion. Category id 0 is reserved by the quiz
//! selector to mean "all categories" and is therefore never a valid category
//! identifier.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub answer: String,
    /// References an existing [`Category`] by id.
    pub category: u32,
    /// Ordinal difficulty, 1 (easiest) to 5.
    pub difficulty: u8,
}

/// A question that has passed validation but has no identifier yet.
/// The store assigns the id on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: u32,
    pub difficulty: u8,
}

impl NewQuestion {
    pub fn with_id(self, id: u32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    /// Display name. Serialized as `type` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
}
