use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong during one fetch cycle.
///
/// The display state treats every variant the same way (it reverts to the
/// empty state), but the variants are kept apart so the diagnostic trace
/// says what actually happened.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to reach weather service ({endpoint}): {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Weather service {endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("Malformed {endpoint} payload: {message}")]
    Malformed {
        endpoint: &'static str,
        message: String,
    },
}

impl FetchError {
    pub(crate) fn malformed(endpoint: &'static str, message: impl Into<String>) -> Self {
        Self::Malformed { endpoint, message: message.into() }
    }

    /// HTTP status reported by the service, if the failure was a rejected request.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
