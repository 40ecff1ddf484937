use super::PostRequest;
use crate::{
    github::GithubClient,
    http::request::{LabelsRequest, SerializeRequest},
};
use anyhow::Result;

pub struct AddLabelsBuilder<'c> {
    client: &'c GithubClient,
    url: String,
    labels: Vec<String>,
}

impl<'c> AddLabelsBuilder<'c> {
    pub fn new(client: &'c GithubClient, url: impl Into<String>) -> Self {
        AddLabelsBuilder {
            client,
            url: url.into(),
            labels: vec![],
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    pub fn build(self) -> Result<PostRequest<'c>> {
        let body = LabelsRequest::new(self.labels).into_request()?;

        Ok(PostRequest::new(self.client, self.url, body))
    }
}
