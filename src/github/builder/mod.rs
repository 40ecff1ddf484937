mod add_labels_builder;
mod create_pull_request_builder;

pub use add_labels_builder::AddLabelsBuilder;
pub use create_pull_request_builder::CreatePullRequestBuilder;

use super::GithubClient;
use crate::http::response::Response;
use anyhow::Result;
use std::fmt;

pub trait BuilderExecutor {
    type Output;

    async fn execute(self) -> Result<Self::Output>;
}

/// A request ready to go out. Printing it shows what would be sent.
pub struct PostRequest<'c> {
    client: &'c GithubClient,
    pub url: String,
    pub body: String,
}

impl<'c> PostRequest<'c> {
    pub(super) fn new(client: &'c GithubClient, url: String, body: String) -> Self {
        PostRequest { client, url, body }
    }
}

impl fmt::Display for PostRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "POST {}\n{}", self.url, self.body)
    }
}

impl BuilderExecutor for PostRequest<'_> {
    type Output = Response;

    async fn execute(self) -> Result<Self::Output> {
        self.client.post(&self.url, self.body).await
    }
}
