//! Error handling for the api module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The response body was not valid JSON.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_status_and_message() {
        let err = ApiError::Http {
            status: 503,
            message: "analysis job unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP error with status 503: analysis job unavailable"
        );
    }
}
