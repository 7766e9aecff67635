//! Wire types for the adaptive-learning API.
//!
//! Field names on the wire are Spanish, matching the backend. Everything here
//! lives for one request/response cycle and carries no identity.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An adaptive question returned by `GET /api/get-question`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    /// The grade the question was requested for.
    #[serde(rename = "grado")]
    pub grade: String,

    /// Performance ratio in `[0, 1]` that drove the level assignment.
    #[serde(rename = "rendimiento")]
    pub performance: f64,

    /// Difficulty level the server assigned for this grade.
    #[serde(rename = "nivel_asignado")]
    pub assigned_level: String,

    /// The question text itself.
    #[serde(rename = "pregunta")]
    pub question: String,
}

impl Question {
    /// One-line summary in the format the question view displays.
    ///
    /// The performance ratio is rendered as a percentage rounded to zero
    /// decimals.
    pub fn summary(&self) -> String {
        format!(
            "Grado: {} | Rendimiento: {:.0}% | Nivel: {}",
            self.grade,
            self.performance * 100.0,
            self.assigned_level
        )
    }
}

impl Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.question)
    }
}

/// Body of `POST /save-response`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerSubmission {
    #[serde(rename = "respuesta")]
    pub answer: String,
}

impl AnswerSubmission {
    pub fn new(answer: impl Into<String>) -> Self {
        AnswerSubmission {
            answer: answer.into(),
        }
    }
}
