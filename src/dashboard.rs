//! Dashboard actions: raw data, analysis reports, and answer submission.

use crate::api::DashboardApi;
use crate::api::error::ApiError;
use crate::models::AnswerSubmission;
use crate::view::DashboardView;
use serde_json::Value;
use std::sync::Arc;

/// Thin client over the dashboard endpoints.
///
/// All three actions dump the pretty-printed response into the shared output
/// region. Actions are one-shot and re-entrant; overlapping invocations are
/// not deduplicated or ordered, so the last response to resolve wins the
/// region.
pub struct DashboardClient {
    api: Arc<dyn DashboardApi>,
    view: DashboardView,
}

impl DashboardClient {
    pub fn new(api: Arc<dyn DashboardApi>, view: DashboardView) -> Self {
        Self { api, view }
    }

    /// Fetches the raw stored data and renders it.
    pub async fn load_data(&self) -> Result<Value, ApiError> {
        let data = self.api.get_data().await?;
        self.render(&data)?;
        Ok(data)
    }

    /// Triggers the server-side analysis job and renders its report.
    pub async fn run_analysis(&self) -> Result<Value, ApiError> {
        let report = self.api.run_analysis().await?;
        self.render(&report)?;
        Ok(report)
    }

    /// Submits a free-text answer and renders the server's acknowledgement.
    pub async fn save_response(&self, answer: &str) -> Result<Value, ApiError> {
        let result = self
            .api
            .save_response(AnswerSubmission::new(answer))
            .await?;
        self.render(&result)?;
        Ok(result)
    }

    fn render(&self, value: &Value) -> Result<(), ApiError> {
        let pretty = serde_json::to_string_pretty(value)?;
        self.view.output.set_text(pretty);
        Ok(())
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }
}
