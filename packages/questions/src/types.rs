// ABOUTME: Question entity and input types shared across storage and API
// ABOUTME: Mirrors the questions table row layout

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A question row. `id` is the generated primary key; `stack_id` is the
/// natural key from the external Q&A source and is unique across all rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub stack_id: i64,
    pub title: String,
    pub body: String,
    pub is_answered: bool,
    pub tags: Vec<String>,
    pub score: i32,
    pub answer_count: i32,
    pub created_at: DateTime<Utc>,
}

/// Validated input for creating a question
#[derive(Debug, Clone)]
pub struct QuestionCreateInput {
    pub stack_id: i64,
    pub title: String,
    pub body: String,
    pub is_answered: bool,
    pub tags: Vec<String>,
    pub score: i32,
    pub answer_count: i32,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a full-replacement update. Every mutable field is
/// overwritten; `id` and `stack_id` are immutable.
#[derive(Debug, Clone)]
pub struct QuestionUpdateInput {
    pub title: String,
    pub body: String,
    pub is_answered: bool,
    pub tags: Vec<String>,
    pub score: i32,
    pub answer_count: i32,
    pub created_at: DateTime<Utc>,
}

/// Parse a client-supplied timestamp. Accepts RFC 3339, a bare
/// `YYYY-MM-DD HH:MM:SS` datetime, or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
