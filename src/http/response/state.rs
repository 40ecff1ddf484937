use super::{ApiError, PullRequest};
use crate::http::Error;

pub trait AsyncFrom<T>: Sized {
    async fn async_from(value: T) -> Result<Self, Error>;
}

/// Status and body text of an API response, kept verbatim.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub text: String,
}

pub enum Outcome {
    Created(PullRequest),
    Failed(ApiError),
}

impl Response {
    pub fn new(status: u16, text: impl Into<String>) -> Response {
        Response {
            status,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Reads the pull request out of the body. Anything without a pull
    /// request url is a failure, whatever the status says.
    pub fn outcome(self) -> Outcome {
        match serde_json::from_str::<PullRequest>(&self.text) {
            Ok(pr) if pr.is_pull_url() => Outcome::Created(pr),
            Ok(_) | Err(_) => Outcome::Failed(ApiError::new(self.status, self.text)),
        }
    }
}

impl AsyncFrom<reqwest::Response> for Response {
    async fn async_from(value: reqwest::Response) -> Result<Self, Error> {
        let status = value.status().as_u16();

        let text = value
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        Ok(Response::new(status, text))
    }
}
