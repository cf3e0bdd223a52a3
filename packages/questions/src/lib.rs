//! # Stackfeed Questions
//!
//! Questions domain library for Stackfeed: storage-backed CRUD over a
//! `questions` table plus a bulk-import job that pulls recent questions from
//! the Stack Exchange API and upserts them by natural key.

pub mod api;
pub mod db;
pub mod error;
pub mod query;
pub mod stackexchange;
pub mod storage;
pub mod types;

pub use db::{DatabaseConfig, DbState};
pub use error::{QuestionsError, QuestionsResult};
pub use query::{ListFilter, ListParams, SortKey, PAGE_SIZE};
pub use stackexchange::{FetchedQuestion, StackExchangeClient};
pub use storage::QuestionStorage;
pub use types::{Question, QuestionCreateInput, QuestionUpdateInput};
