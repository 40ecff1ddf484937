mod labels_request;
mod pull_request_request;

pub use labels_request::{LabelsRequest, WIP_LABEL};
pub use pull_request_request::PullRequestRequest;

use super::Error;
use serde::Serialize;

pub trait SerializeRequest {
    fn into_request(&self) -> Result<String, Error>
    where
        Self: Serialize + Sized,
    {
        serde_json::to_string(self).map_err(|cause| Error::SerializeRequestError { cause })
    }
}

impl SerializeRequest for PullRequestRequest {}
impl SerializeRequest for LabelsRequest {}
