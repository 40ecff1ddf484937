use serde::Deserialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthorized,
    Forbidden,
    NotFound,
    Validation,
    Other,
}

impl ErrorKind {
    pub fn from_status(status: u16) -> ErrorKind {
        match status {
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            422 => ErrorKind::Validation,
            _ => ErrorKind::Other,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ErrorKind::Unauthorized => "authentication failed",
            ErrorKind::Forbidden => "access denied",
            ErrorKind::NotFound => "repository or issue not found",
            ErrorKind::Validation => "request rejected",
            ErrorKind::Other => "unexpected response",
        };

        f.write_str(kind)
    }
}

/// GitHub error document, `{"message": ..., "errors": [{"message": ...}]}`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
    code: Option<String>,
}

#[derive(Debug, Clone, Error)]
#[error("GitHub API {kind} (status {status}): {message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub status: u16,
    pub message: String,
    pub raw: String,
}

impl ApiError {
    pub fn new(status: u16, raw: impl Into<String>) -> ApiError {
        let raw = raw.into();
        let body = serde_json::from_str::<ErrorBody>(&raw).unwrap_or_default();

        let details = body
            .errors
            .iter()
            .filter_map(|detail| detail.message.as_ref().or(detail.code.as_ref()))
            .map(String::as_str);

        let message = std::iter::once(body.message.as_str())
            .chain(details)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(": ");

        ApiError {
            kind: ErrorKind::from_status(status),
            status,
            message,
            raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_by_status() {
        assert_eq!(ErrorKind::from_status(401), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::from_status(403), ErrorKind::Forbidden);
        assert_eq!(ErrorKind::from_status(404), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_status(422), ErrorKind::Validation);
        assert_eq!(ErrorKind::from_status(500), ErrorKind::Other);
        assert_eq!(ErrorKind::from_status(201), ErrorKind::Other);
    }

    #[test]
    fn should_collect_github_error_messages() {
        let raw = r#"{"message":"Validation Failed","errors":[{"resource":"PullRequest","code":"custom","message":"A pull request already exists for bob:feature."}]}"#;

        let error = ApiError::new(422, raw);

        assert_eq!(error.kind, ErrorKind::Validation);
        assert_eq!(
            error.message,
            "Validation Failed: A pull request already exists for bob:feature."
        );
        assert_eq!(error.raw, raw);
    }

    #[test]
    fn should_fall_back_to_error_code() {
        let error = ApiError::new(
            422,
            r#"{"message":"Validation Failed","errors":[{"code":"invalid"}]}"#,
        );

        assert_eq!(error.message, "Validation Failed: invalid");
    }

    #[test]
    fn should_keep_raw_text_when_not_json() {
        let error = ApiError::new(502, "<html>Bad gateway</html>");

        assert_eq!(error.kind, ErrorKind::Other);
        assert_eq!(error.message, "");
        assert_eq!(error.raw, "<html>Bad gateway</html>");
    }
}
