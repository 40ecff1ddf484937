use super::PostRequest;
use crate::{
    github::GithubClient,
    http::request::{PullRequestRequest, SerializeRequest},
};
use anyhow::Result;

pub struct CreatePullRequestBuilder<'c> {
    client: &'c GithubClient,
    url: String,
    head: String,
    base: String,
    title: String,
    body: Option<String>,
    issue: Option<u64>,
}

impl<'c> CreatePullRequestBuilder<'c> {
    pub fn new(client: &'c GithubClient, url: impl Into<String>) -> Self {
        CreatePullRequestBuilder {
            client,
            url: url.into(),
            head: String::new(),
            base: String::new(),
            title: String::new(),
            body: None,
            issue: None,
        }
    }

    pub fn head(mut self, head: impl Into<String>) -> Self {
        self.head = head.into();
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: Option<String>) -> Self {
        self.body = body;
        self
    }

    /// Attaches the pull request to an existing issue. Title and body are
    /// then taken from the issue and dropped from the request.
    pub fn issue(mut self, issue: Option<u64>) -> Self {
        self.issue = issue;
        self
    }

    pub fn request(&self) -> PullRequestRequest {
        match self.issue {
            Some(issue) => PullRequestRequest::from_issue(&self.head, &self.base, issue),
            None => PullRequestRequest::new(&self.head, &self.base, &self.title, self.body.clone()),
        }
    }

    pub fn build(self) -> Result<PostRequest<'c>> {
        let body = self.request().into_request()?;

        Ok(PostRequest::new(self.client, self.url, body))
    }
}
