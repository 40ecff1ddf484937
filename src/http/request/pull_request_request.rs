use serde::Serialize;

/// Body of `POST /repos/{owner}/{repo}/pulls`.
///
/// GitHub either opens a new pull request from `title`/`body` or turns an
/// existing issue into one, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PullRequestRequest {
    New {
        head: String,
        base: String,
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        body: Option<String>,
    },
    FromIssue {
        head: String,
        base: String,
        issue: u64,
    },
}

impl PullRequestRequest {
    pub fn new(
        head: impl Into<String>,
        base: impl Into<String>,
        title: impl Into<String>,
        body: Option<String>,
    ) -> Self {
        Self::New {
            head: head.into(),
            base: base.into(),
            title: title.into(),
            body: body.filter(|body| !body.is_empty()),
        }
    }

    pub fn from_issue(head: impl Into<String>, base: impl Into<String>, issue: u64) -> Self {
        Self::FromIssue {
            head: head.into(),
            base: base.into(),
            issue,
        }
    }
}
