mod issue_handler;
mod pull_request_handler;
mod repository_handler;

pub use issue_handler::IssueHandler;
pub use pull_request_handler::PullRequestHandler;
pub use repository_handler::RepositoryHandler;
