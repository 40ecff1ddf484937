use crate::github::{builder::CreatePullRequestBuilder, GithubClient};

pub struct PullRequestHandler<'c> {
    client: &'c GithubClient,
    owner: String,
    repo: String,
}

impl<'c> PullRequestHandler<'c> {
    pub fn new(client: &'c GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        PullRequestHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn create(&self) -> CreatePullRequestBuilder<'c> {
        let url = self
            .client
            .url(&format!("/repos/{}/{}/pulls", self.owner, self.repo));

        CreatePullRequestBuilder::new(self.client, url)
    }
}
