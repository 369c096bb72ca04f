use std::fmt;

use thiserror::Error;

/// Errors produced by the HTTP layer, one variant per thing that can go
/// wrong on the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("http status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Which family of failure a load ran into. Presentation picks retry
/// affordances off this, not off the raw transport error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// The request never completed: unreachable host, timeout, bad url.
    Transport,
    /// The server answered with a non-success status.
    Server,
    /// A response arrived but could not be understood.
    Parse,
}

impl fmt::Display for LoadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadErrorKind::Transport => write!(f, "transport"),
            LoadErrorKind::Server => write!(f, "server"),
            LoadErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// The single error value list operations surface to screens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadError {
    pub kind: LoadErrorKind,
    pub message: String,
}

impl From<ApiError> for LoadError {
    fn from(err: ApiError) -> Self {
        let kind = match &err {
            ApiError::InvalidUrl(_) | ApiError::Network(_) | ApiError::Timeout => {
                LoadErrorKind::Transport
            }
            ApiError::Status { .. } => LoadErrorKind::Server,
            ApiError::Malformed(_) => LoadErrorKind::Parse,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    if err.is_decode() {
        return ApiError::Malformed(err.to_string());
    }
    ApiError::Network(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_kinds_follow_the_api_error() {
        let cases = [
            (ApiError::Timeout, LoadErrorKind::Transport),
            (ApiError::Network("refused".into()), LoadErrorKind::Transport),
            (
                ApiError::Status {
                    status: 503,
                    message: "down".into(),
                },
                LoadErrorKind::Server,
            ),
            (ApiError::Malformed("eof".into()), LoadErrorKind::Parse),
        ];
        for (api, kind) in cases {
            assert_eq!(LoadError::from(api).kind, kind);
        }
    }

    #[test]
    fn load_error_keeps_the_status_message() {
        let err = LoadError::from(ApiError::Status {
            status: 404,
            message: "book not found".into(),
        });
        assert_eq!(err.to_string(), "http status 404: book not found");
    }
}
