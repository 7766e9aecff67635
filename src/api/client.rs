//! Adaptive-learning API client
//!
//! A client for the adaptive-learning backend, covering question retrieval
//! and the dashboard data/analysis/answer endpoints.

use crate::api::error::ApiError;
use crate::api::{DashboardApi, QuestionApi};
use crate::models::{AnswerSubmission, Question};
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("aula-cli/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client bound to the given service base URL.
    ///
    /// The base is resolved once at startup and injected here; nothing else
    /// in the crate reads endpoint configuration.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Ok(Self {
            client: ClientBuilder::new()
                .connect_timeout(Duration::from_secs(10))
                .timeout(Duration::from_secs(10))
                .build()?,
            base_url: base_url.into(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response(bytes: &[u8]) -> Result<Value, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request(&self, endpoint: &str) -> Result<Value, ApiError> {
        let url = self.build_url(endpoint);
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn post_request<T: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Value, ApiError> {
        let url = self.build_url(endpoint);
        log::debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .json(body)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl QuestionApi for ApiClient {
    /// Fetch an adaptive question for the given grade.
    ///
    /// The grade is unconstrained on this side; the server falls back to a
    /// placeholder question for grades it does not know.
    async fn get_question(&self, grade: &str) -> Result<Question, ApiError> {
        let endpoint = format!("api/get-question?grado={}", urlencoding::encode(grade));
        let value = self.get_request(&endpoint).await?;
        let question: Question = serde_json::from_value(value)?;
        Ok(question)
    }
}

#[async_trait::async_trait]
impl DashboardApi for ApiClient {
    async fn get_data(&self) -> Result<Value, ApiError> {
        self.get_request("get-data").await
    }

    async fn run_analysis(&self) -> Result<Value, ApiError> {
        self.get_request("run-analysis").await
    }

    async fn save_response(&self, submission: AnswerSubmission) -> Result<Value, ApiError> {
        self.post_request("save-response", &submission).await
    }
}
