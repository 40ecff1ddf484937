mod builder;
mod github_client;
mod handler;

pub use github_client::GithubClient;

use self::builder::BuilderExecutor;
use crate::{
    config::Config,
    http::{
        request::WIP_LABEL,
        response::{ApiError, Outcome},
    },
};
use anyhow::{Context, Result};
use std::io::Write;

pub enum Dispatch {
    DryRun,
    Sent(Outcome),
}

/// Labels the issue when asked to, then opens the pull request.
///
/// In dry-run mode both requests are written to `out` and nothing is sent.
pub async fn dispatch(
    client: &GithubClient,
    config: &Config,
    out: &mut impl Write,
) -> Result<Dispatch> {
    let repo = client.repo(&config.owner, &config.repo);

    if let (Some(issue), true) = (config.issue, config.wip) {
        let labels = repo.issue(issue).labels().label(WIP_LABEL).build()?;

        if config.dry_run {
            writeln!(out, "{}", labels)?;
        } else {
            let response = labels
                .execute()
                .await
                .with_context(|| format!("cannot label issue #{}", issue))?;

            if !response.is_success() {
                log::warn!(
                    "cannot label issue #{}: {}",
                    issue,
                    ApiError::new(response.status, response.text)
                );
            }
        }
    }

    let create = repo
        .pull_requests()
        .create()
        .head(config.head())
        .base(&config.base)
        .title(config.title.clone().unwrap_or_default())
        .body(config.description.clone())
        .issue(config.issue)
        .build()?;

    if config.dry_run {
        writeln!(out, "{}", create)?;
        return Ok(Dispatch::DryRun);
    }

    let response = create
        .execute()
        .await
        .context("cannot create the pull request")?;

    Ok(Dispatch::Sent(response.outcome()))
}
