// ABOUTME: Storage layer for questions backed by a Postgres pool
// ABOUTME: One SQL statement per operation, no explicit transactions

use sqlx::PgPool;

use crate::error::{QuestionsError, QuestionsResult};
use crate::query::{build_list_query, ListFilter};
use crate::stackexchange::FetchedQuestion;
use crate::types::{Question, QuestionCreateInput, QuestionUpdateInput};

/// Schema for the questions table, ensured at startup
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS questions (
    id SERIAL PRIMARY KEY,
    stack_id BIGINT NOT NULL UNIQUE,
    title TEXT NOT NULL,
    body TEXT NOT NULL DEFAULT '',
    is_answered BOOLEAN NOT NULL DEFAULT FALSE,
    tags TEXT[] NOT NULL DEFAULT '{}',
    score INTEGER NOT NULL DEFAULT 0,
    answer_count INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL
)
"#;

/// Storage layer for questions
pub struct QuestionStorage {
    pool: PgPool,
}

impl QuestionStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List questions matching the filter, one fixed-size page at a time
    pub async fn list(&self, filter: &ListFilter) -> QuestionsResult<Vec<Question>> {
        let mut query = build_list_query(filter);
        let questions = query
            .build_query_as::<Question>()
            .fetch_all(&self.pool)
            .await?;
        Ok(questions)
    }

    /// Fetch a single question by primary key
    pub async fn get(&self, id: i32) -> QuestionsResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>("SELECT * FROM questions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(question)
    }

    /// Insert a new question. A uniqueness violation on `stack_id` maps to
    /// [`QuestionsError::Conflict`] instead of a generic database error.
    pub async fn create(&self, input: QuestionCreateInput) -> QuestionsResult<Question> {
        let result = sqlx::query_as::<_, Question>(
            "INSERT INTO questions (stack_id, title, body, is_answered, tags, score, answer_count, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *",
        )
        .bind(input.stack_id)
        .bind(&input.title)
        .bind(&input.body)
        .bind(input.is_answered)
        .bind(&input.tags)
        .bind(input.score)
        .bind(input.answer_count)
        .bind(input.created_at)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(question) => Ok(question),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(QuestionsError::Conflict)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Replace every mutable field of a question. Returns `None` when no row
    /// matched the id.
    pub async fn update(
        &self,
        id: i32,
        input: QuestionUpdateInput,
    ) -> QuestionsResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            "UPDATE questions
             SET title = $1, body = $2, is_answered = $3, tags = $4,
                 score = $5, answer_count = $6, created_at = $7
             WHERE id = $8
             RETURNING *",
        )
        .bind(&input.title)
        .bind(&input.body)
        .bind(input.is_answered)
        .bind(&input.tags)
        .bind(input.score)
        .bind(input.answer_count)
        .bind(input.created_at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(question)
    }

    /// Delete a question, echoing the deleted row. Returns `None` when
    /// nothing was deleted.
    pub async fn delete(&self, id: i32) -> QuestionsResult<Option<Question>> {
        let question =
            sqlx::query_as::<_, Question>("DELETE FROM questions WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(question)
    }

    /// Insert a fetched question keyed on its natural id; an existing row with
    /// the same `stack_id` is left unmodified.
    pub async fn upsert_fetched(&self, fetched: &FetchedQuestion) -> QuestionsResult<()> {
        sqlx::query(
            "INSERT INTO questions (stack_id, title, body, is_answered, tags, score, answer_count, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT (stack_id) DO NOTHING",
        )
        .bind(fetched.question_id)
        .bind(&fetched.title)
        .bind(fetched.body())
        .bind(fetched.is_answered)
        .bind(&fetched.tags)
        .bind(fetched.score)
        .bind(fetched.answer_count)
        .bind(fetched.created_at())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
