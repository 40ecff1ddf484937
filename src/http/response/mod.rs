mod error_response;
mod pull_request_response;
mod state;

pub use error_response::{ApiError, ErrorKind};
pub use pull_request_response::PullRequest;
pub use state::{AsyncFrom, Outcome, Response};
