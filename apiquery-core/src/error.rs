use reqwest::StatusCode;
use thiserror::Error;

/// Outcome of a failed GET against one of the public services.
#[derive(Debug, Error)]
pub enum QueryError {
    /// DNS, connect, timeout or body read failure.
    #[error("Connection Error: {0}")]
    Connection(#[from] reqwest::Error),

    /// Anything other than `200 OK`.
    #[error("Server returned status {}", .status.as_u16())]
    Status { status: StatusCode, body: String },

    #[error("Invalid URL {0}")]
    InvalidUrl(String),

    #[error("Failed to parse {what} response: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl QueryError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            QueryError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
