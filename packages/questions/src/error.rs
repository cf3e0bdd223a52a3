use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuestionsError {
    #[error("{0}")]
    Validation(String),
    #[error("Question not found")]
    NotFound,
    #[error("stack_id must be unique")]
    Conflict,
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type QuestionsResult<T> = std::result::Result<T, QuestionsError>;
