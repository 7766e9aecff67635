use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the different deployment environments available for the CLI.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local development environment.
    #[default]
    Local,
}

impl Environment {
    /// Base URL of the question service for this environment.
    ///
    /// The question and dashboard services use different host literals for
    /// the same local port. This mirrors the deployed configuration and is
    /// intentionally not unified.
    pub fn question_api_url(&self) -> String {
        match self {
            Environment::Local => "http://127.0.0.1:5000".to_string(),
        }
    }

    /// Base URL of the dashboard service for this environment.
    pub fn dashboard_api_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:5000".to_string(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Environment::{}, question URL: {}, dashboard URL: {}",
            self,
            self.question_api_url(),
            self.dashboard_api_url()
        )
    }
}
