//! # Quizbank Architecture
//!
//! Quizbank is a **client-agnostic trivia question service**. The reviewed
//! logic (pagination windows, substring search, category filtering, and
//! random quiz selection with a caller-owned exclusion set) lives in a
//! library that happens to ship a CLI client, not the other way around.
//!
//! ## The Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + main.rs, bin only)                   │
//! │  - Parses arguments, prints envelopes, sets exit codes     │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Transport Layer (transport.rs)                            │
//! │  - Typed request bodies, uniform response envelopes        │
//! │  - Error-kind → status mapping (400/404/422)               │
//! │  - Search-vs-create mode dispatch                          │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - Thin facade, QuizApi<S: QuestionStore>                  │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - Pure business logic, typed results, eager validation    │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                    │
//! │  - QuestionStore trait                                     │
//! │  - FileStore (production), InMemoryStore (testing)         │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Stateless Core
//!
//! Every operation is a request-scoped computation: inputs arrive as
//! arguments (including the page size, via an explicit [`config::QuizConfig`]),
//! outputs are plain values, and nothing is remembered between calls. Quiz
//! session state, the set of questions already served, belongs to the
//! caller and comes back in as an exclusion set.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`transport`]: Request structs, envelopes, status codes
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Question`, `Category`)
//! - [`config`]: Page-size configuration
//! - [`error`]: Error types and the failure taxonomy

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod transport;
