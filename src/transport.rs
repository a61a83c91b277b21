//! # Transport Layer
//!
//! Request/response marshaling between HTTP-style inputs and the core. One
//! handler per operation: each validates the raw body into typed input,
//! calls through [`QuizApi`], and wraps the outcome in the uniform envelope
//! `{success, ...payload}` / `{success: false, error, message}`.
//!
//! The search-or-create dual endpoint is dispatched here, on the presence of
//! a non-empty `searchTerm`; the core itself only knows the two separate
//! operations. Page parameters default to 1 when absent.
//!
//! This module stops at marshaling. Protocol framing, routing, and CORS are
//! outside the service; the bundled CLI drives these handlers directly.

use crate::api::QuizApi;
use crate::commands::create::QuestionDraft;
use crate::commands::quiz::QuizSelection;
use crate::error::QuizError;
use crate::model::Question;
use crate::store::QuestionStore;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Body of the search-or-create endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionPost {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<u32>,
    pub difficulty: Option<u8>,
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl QuestionPost {
    fn into_draft(self) -> QuestionDraft {
        QuestionDraft {
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Body of the next-quiz-question endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizPost {
    pub previous_questions: Option<Vec<u32>>,
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    pub id: u32,
}

/// A marshaled response: status code plus the JSON envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    fn ok<T: Serialize>(payload: T) -> Self {
        #[derive(Serialize)]
        struct Envelope<T: Serialize> {
            success: bool,
            #[serde(flatten)]
            payload: T,
        }

        match serde_json::to_value(Envelope {
            success: true,
            payload,
        }) {
            Ok(body) => Reply { status: 200, body },
            // Payload structs always serialize; a failure still gets the
            // execution-failure envelope instead of a panic
            Err(_) => Reply::failure(422, "unprocessable"),
        }
    }

    pub fn error(err: &QuizError) -> Self {
        let kind = err.kind();
        Reply::failure(kind.status(), kind.message())
    }

    fn failure(status: u16, message: &str) -> Self {
        Reply {
            status,
            body: json!({
                "success": false,
                "error": status,
                "message": message,
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

#[derive(Serialize)]
struct QuizReply {
    question: Option<Question>,
}

fn page_or_default(page: Option<u32>) -> usize {
    page.unwrap_or(1) as usize
}

pub fn get_categories<S: QuestionStore>(api: &QuizApi<S>) -> Reply {
    match api.categories() {
        Ok(payload) => Reply::ok(payload),
        Err(e) => Reply::error(&e),
    }
}

pub fn get_questions<S: QuestionStore>(api: &QuizApi<S>, page: Option<u32>) -> Reply {
    match api.questions(page_or_default(page)) {
        Ok(payload) => Reply::ok(payload),
        Err(e) => Reply::error(&e),
    }
}

pub fn delete_question<S: QuestionStore>(
    api: &mut QuizApi<S>,
    id: u32,
    page: Option<u32>,
) -> Reply {
    match api.delete_question(id, page_or_default(page)) {
        Ok(payload) => Reply::ok(payload),
        Err(e) => Reply::error(&e),
    }
}

/// Search-or-create: search mode if and only if a non-empty `searchTerm` is
/// present; everything else falls through to create.
pub fn post_questions<S: QuestionStore>(
    api: &mut QuizApi<S>,
    mut body: QuestionPost,
    page: Option<u32>,
) -> Reply {
    let term = body.search_term.take().filter(|t| !t.is_empty());

    match term {
        Some(term) => match api.search_questions(&term, page_or_default(page)) {
            Ok(payload) => Reply::ok(payload),
            Err(e) => Reply::error(&e),
        },
        None => match api.create_question(body.into_draft()) {
            Ok(payload) => Reply::ok(payload),
            Err(e) => Reply::error(&e),
        },
    }
}

pub fn get_questions_by_category<S: QuestionStore>(
    api: &QuizApi<S>,
    category_id: u32,
    page: Option<u32>,
) -> Reply {
    match api.questions_by_category(category_id, page_or_default(page)) {
        Ok(payload) => Reply::ok(payload),
        Err(e) => Reply::error(&e),
    }
}

pub fn post_quizzes<S: QuestionStore>(api: &QuizApi<S>, body: QuizPost) -> Reply {
    let selection = match QuizSelection::from_request(
        body.previous_questions,
        body.quiz_category.map(|c| c.id),
    ) {
        Ok(selection) => selection,
        Err(e) => return Reply::error(&e),
    };

    match api.next_quiz_question(&selection) {
        Ok(question) => Reply::ok(QuizReply { question }),
        Err(e) => Reply::error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuizConfig;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api_with(count: usize) -> QuizApi<InMemoryStore> {
        let fixture = StoreFixture::new()
            .with_category("Science")
            .with_category("Art")
            .with_questions(count, 1);
        QuizApi::new(fixture.store, QuizConfig::default())
    }

    #[test]
    fn categories_envelope_shape() {
        let api = api_with(0);
        let reply = get_categories(&api);

        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["success"], true);
        assert_eq!(reply.body["total_categories"], 2);
        assert_eq!(reply.body["categories"]["1"], "Science");
    }

    #[test]
    fn empty_categories_is_a_404_envelope() {
        let api = QuizApi::new(InMemoryStore::new(), QuizConfig::default());
        let reply = get_categories(&api);

        assert_eq!(reply.status, 404);
        assert_eq!(
            reply.body,
            json!({"success": false, "error": 404, "message": "resource not found"})
        );
    }

    #[test]
    fn questions_default_to_page_one() {
        let api = api_with(12);
        let reply = get_questions(&api, None);

        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["questions"].as_array().unwrap().len(), 10);
        assert_eq!(reply.body["total_questions"], 12);
        assert_eq!(reply.body["categories"]["2"], "Art");
    }

    #[test]
    fn empty_first_page_is_a_404_but_a_late_page_is_not() {
        let empty = api_with(0);
        assert_eq!(get_questions(&empty, Some(1)).status, 404);

        let populated = api_with(12);
        let reply = get_questions(&populated, Some(50));
        assert_eq!(reply.status, 200);
        assert!(reply.body["questions"].as_array().unwrap().is_empty());
    }

    #[test]
    fn search_term_selects_search_mode() {
        let mut api = api_with(3);
        let body = QuestionPost {
            search_term: Some("TEST QUESTION 2".to_string()),
            ..Default::default()
        };

        let reply = post_questions(&mut api, body, None);
        assert_eq!(reply.status, 200);
        assert!(reply.body.get("created").is_none());
        assert_eq!(reply.body["questions"].as_array().unwrap().len(), 1);
        assert_eq!(reply.body["total_questions"], 3);
    }

    #[test]
    fn empty_search_term_falls_through_to_create() {
        let mut api = api_with(0);
        let body = QuestionPost {
            question: Some("Q".to_string()),
            answer: Some("A".to_string()),
            category: Some(1),
            difficulty: Some(1),
            search_term: Some(String::new()),
        };

        let reply = post_questions(&mut api, body, None);
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["created"], 1);
        assert_eq!(reply.body["total_questions"], 1);
    }

    #[test]
    fn create_with_missing_field_is_a_422_envelope() {
        let mut api = api_with(0);
        let body = QuestionPost {
            question: Some("Q".to_string()),
            ..Default::default()
        };

        let reply = post_questions(&mut api, body, None);
        assert_eq!(reply.status, 422);
        assert_eq!(
            reply.body,
            json!({"success": false, "error": 422, "message": "unprocessable"})
        );
    }

    #[test]
    fn delete_missing_question_is_a_404_envelope() {
        let mut api = api_with(2);
        let reply = delete_question(&mut api, 50, None);

        assert_eq!(reply.status, 404);
        assert_eq!(reply.body["success"], false);
    }

    #[test]
    fn delete_returns_the_remainder() {
        let mut api = api_with(2);
        let reply = delete_question(&mut api, 1, None);

        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["deleted"], 1);
        assert_eq!(reply.body["total_questions"], 1);
    }

    #[test]
    fn unknown_category_is_a_400_envelope() {
        let api = api_with(2);
        let reply = get_questions_by_category(&api, 42, None);

        assert_eq!(reply.status, 400);
        assert_eq!(
            reply.body,
            json!({"success": false, "error": 400, "message": "bad request"})
        );
    }

    #[test]
    fn by_category_carries_the_display_type() {
        let api = api_with(2);
        let reply = get_questions_by_category(&api, 1, None);

        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["current_category"], "Science");
        assert_eq!(reply.body["questions"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn quiz_with_missing_body_fields_is_a_400_envelope() {
        let api = api_with(2);

        let no_previous = QuizPost {
            previous_questions: None,
            quiz_category: Some(QuizCategory { id: 0 }),
        };
        assert_eq!(post_quizzes(&api, no_previous).status, 400);

        let no_category = QuizPost {
            previous_questions: Some(vec![]),
            quiz_category: None,
        };
        assert_eq!(post_quizzes(&api, no_category).status, 400);
    }

    #[test]
    fn exhausted_quiz_is_a_null_question_success() {
        let api = api_with(2);
        let body = QuizPost {
            previous_questions: Some(vec![1, 2]),
            quiz_category: Some(QuizCategory { id: 1 }),
        };

        let reply = post_quizzes(&api, body);
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["success"], true);
        assert!(reply.body["question"].is_null());
    }

    #[test]
    fn quiz_body_deserializes_from_wire_json() {
        let body: QuizPost = serde_json::from_str(
            r#"{"previous_questions": [1, 4], "quiz_category": {"id": 2}}"#,
        )
        .unwrap();

        assert_eq!(body.previous_questions, Some(vec![1, 4]));
        assert_eq!(body.quiz_category.unwrap().id, 2);
    }

    #[test]
    fn question_post_accepts_camel_cased_search_term() {
        let body: QuestionPost = serde_json::from_str(r#"{"searchTerm": "tom"}"#).unwrap();
        assert_eq!(body.search_term.as_deref(), Some("tom"));
    }
}
