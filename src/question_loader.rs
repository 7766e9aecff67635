//! Loading adaptive questions into the question view.

use crate::api::QuestionApi;
use crate::api::error::ApiError;
use crate::view::QuestionView;
use std::sync::Arc;

/// Message shown in the question region when the fetch fails for any reason.
/// Network errors, bad statuses, and malformed JSON all collapse to this.
pub const QUESTION_FETCH_ERROR: &str = "Error al obtener pregunta.";

/// Fetches one question per call and renders it into its view.
pub struct QuestionLoader {
    api: Arc<dyn QuestionApi>,
    view: QuestionView,
}

impl QuestionLoader {
    pub fn new(api: Arc<dyn QuestionApi>, view: QuestionView) -> Self {
        Self { api, view }
    }

    /// Fetches a question for `grade` and writes both regions.
    ///
    /// On failure the summary region is left untouched (possibly stale), the
    /// question region is set to [`QUESTION_FETCH_ERROR`], the failure is
    /// logged, and the typed error is returned to the caller.
    pub async fn load_question(&self, grade: &str) -> Result<(), ApiError> {
        match self.api.get_question(grade).await {
            Ok(question) => {
                self.view.summary.set_text(question.summary());
                self.view.question.set_text(question.question);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to fetch question for grade {}: {}", grade, e);
                self.view.question.set_text(QUESTION_FETCH_ERROR);
                Err(e)
            }
        }
    }

    pub fn view(&self) -> &QuestionView {
        &self.view
    }
}
