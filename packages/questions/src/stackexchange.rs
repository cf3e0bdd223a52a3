// ABOUTME: Stack Exchange API client for the bulk-import job
// ABOUTME: Fetches one page of recent questions with fixed query parameters

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::error::QuestionsResult;

const QUESTIONS_ENDPOINT: &str = "https://api.stackexchange.com/2.3/questions";

/// A question as returned by the Stack Exchange API
#[derive(Debug, Clone, Deserialize)]
pub struct FetchedQuestion {
    pub question_id: i64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_answered: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub answer_count: i32,
    pub creation_date: i64,
}

impl FetchedQuestion {
    /// Body text, substituting an empty string when the API omits it
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }

    /// Creation timestamp converted from epoch seconds
    pub fn created_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.creation_date, 0).unwrap_or(DateTime::UNIX_EPOCH)
    }
}

#[derive(Debug, Deserialize)]
struct QuestionsPage {
    items: Vec<FetchedQuestion>,
}

/// Client for the Stack Exchange questions endpoint
pub struct StackExchangeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl StackExchangeClient {
    pub fn new() -> Self {
        Self::with_endpoint(QUESTIONS_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetch one page of questions, newest first, for the fixed source site.
    /// The parameters carry no paging cursor, so repeated calls return the
    /// same page.
    pub async fn fetch_recent(&self) -> QuestionsResult<Vec<FetchedQuestion>> {
        debug!("Fetching questions from {}", self.endpoint);

        let page: QuestionsPage = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("order", "desc"),
                ("sort", "creation"),
                ("site", "stackoverflow"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(page.items)
    }
}

impl Default for StackExchangeClient {
    fn default() -> Self {
        Self::new()
    }
}
