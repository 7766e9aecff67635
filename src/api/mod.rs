use crate::api::error::ApiError;
use crate::models::{AnswerSubmission, Question};
use serde_json::Value;

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Question-service operations used by the question loader.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait QuestionApi: Send + Sync {
    /// Fetch an adaptive question for the given grade.
    async fn get_question(&self, grade: &str) -> Result<Question, ApiError>;
}

/// Dashboard-service operations. Responses are opaque JSON; no schema is
/// assumed on this side of the boundary.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DashboardApi: Send + Sync {
    /// Fetch the raw stored data.
    async fn get_data(&self) -> Result<Value, ApiError>;

    /// Trigger the server-side analysis job and fetch its report.
    async fn run_analysis(&self) -> Result<Value, ApiError>;

    /// Submit a free-text answer for storage.
    async fn save_response(&self, submission: AnswerSubmission) -> Result<Value, ApiError>;
}
