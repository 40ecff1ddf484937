use crate::github::{builder::AddLabelsBuilder, GithubClient};

pub struct IssueHandler<'c> {
    client: &'c GithubClient,
    owner: String,
    repo: String,
    number: u64,
}

impl<'c> IssueHandler<'c> {
    pub fn new(
        client: &'c GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
        number: u64,
    ) -> Self {
        IssueHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
            number,
        }
    }

    pub fn labels(&self) -> AddLabelsBuilder<'c> {
        let url = self.client.url(&format!(
            "/repos/{}/{}/issues/{}/labels",
            self.owner, self.repo, self.number
        ));

        AddLabelsBuilder::new(self.client, url)
    }
}
