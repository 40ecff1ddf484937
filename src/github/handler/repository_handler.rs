use super::{IssueHandler, PullRequestHandler};
use crate::github::GithubClient;

pub struct RepositoryHandler<'c> {
    client: &'c GithubClient,
    owner: String,
    repo: String,
}

impl<'c> RepositoryHandler<'c> {
    pub fn new(client: &'c GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepositoryHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn pull_requests(&self) -> PullRequestHandler<'c> {
        PullRequestHandler::new(self.client, &self.owner, &self.repo)
    }

    pub fn issue(&self, number: u64) -> IssueHandler<'c> {
        IssueHandler::new(self.client, &self.owner, &self.repo, number)
    }
}
