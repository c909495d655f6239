//! Error type shared by every [`RecordsApi`](crate::RecordsApi) implementation.
//!
//! ERROR HANDLING
//! ==============
//! API clients never catch: transport failures, non-2xx responses, and body
//! decode failures all surface to the caller as an [`ApiError`]. The workflow
//! converts them to a notification at the page boundary.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Failure of a single backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("backend returned {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },
    /// A 2xx response body could not be parsed.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The backend exposes no endpoint for this operation.
    #[error("{0}")]
    Unsupported(&'static str),
}

impl ApiError {
    /// Build a status error from a raw error body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            detail: parse_error_detail(body),
        }
    }

    /// Backend-supplied error message, when the response carried one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            Self::Unsupported(message) => Some(message),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// HTTP status code, for errors that carry one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message to show a user: the backend detail if present, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().map_or_else(|| fallback.to_owned(), ToOwned::to_owned)
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

/// Extract the `detail` field from a backend error body.
///
/// String details are returned as-is. Validation details (an array of
/// objects with `msg`) are joined with `"; "`. Anything else yields `None`.
#[must_use]
pub fn parse_error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}
