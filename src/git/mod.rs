pub mod remote;

use self::remote::GithubRemote;
use anyhow::{Context, Result};
use git2::{Oid, Repository};
use std::path::Path;
use thiserror::Error;

const ORIGIN_REMOTE_NAME: &str = "origin";
const UPSTREAM_REMOTE_NAME: &str = "upstream";

#[derive(Debug, Error)]
pub enum TitleError {
    #[error(
        "found {count} commits between the base and head branches, cannot pick a title: use -t to set one"
    )]
    Ambiguous { count: usize },
}

/// Values inferred from the repository the tool runs in.
///
/// Every field is empty when it cannot be inferred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitContext {
    pub branch: String,
    pub owner: String,
    pub repo: String,
    pub contributor: String,
}

#[derive(Debug, Clone)]
pub struct RemoteEntry {
    pub name: String,
    pub url: String,
}

impl GitContext {
    pub fn discover(path: impl AsRef<Path>) -> GitContext {
        let repo = match Repository::discover(path) {
            Ok(repo) => repo,
            Err(err) => {
                log::debug!("not inside a git repository: {}", err);
                return GitContext::default();
            }
        };

        let branch = current_branch(&repo).unwrap_or_else(|err| {
            log::debug!("cannot read current branch: {}", err);
            String::new()
        });

        let remotes = remote_entries(&repo).unwrap_or_else(|err| {
            log::debug!("cannot list remotes: {}", err);
            vec![]
        });

        GitContext::from_remotes(branch, &remotes)
    }

    /// Picks the contributor from `origin` (or the first GitHub remote) and
    /// the target owner/repo from `upstream` when the repository is a fork.
    pub fn from_remotes(branch: impl Into<String>, remotes: &[RemoteEntry]) -> GitContext {
        let github: Vec<(&str, GithubRemote)> = remotes
            .iter()
            .filter_map(|entry| {
                GithubRemote::parse(&entry.url).map(|remote| (entry.name.as_str(), remote))
            })
            .collect();

        let find = |name: &str| {
            github
                .iter()
                .find(|(remote_name, _)| *remote_name == name)
                .map(|(_, remote)| remote)
        };

        let contributor = find(ORIGIN_REMOTE_NAME).or_else(|| github.first().map(|(_, r)| r));
        let target = find(UPSTREAM_REMOTE_NAME).or(contributor);

        if contributor.is_none() {
            log::debug!("no github remote found");
        }

        GitContext {
            branch: branch.into(),
            owner: target.map(|r| r.owner.to_owned()).unwrap_or_default(),
            repo: target.map(|r| r.repo.to_owned()).unwrap_or_default(),
            contributor: contributor.map(|r| r.owner.to_owned()).unwrap_or_default(),
        }
    }
}

fn current_branch(repo: &Repository) -> Result<String> {
    let head = repo.head()?;

    Ok(head.shorthand().unwrap_or_default().to_owned())
}

fn remote_entries(repo: &Repository) -> Result<Vec<RemoteEntry>> {
    let names = repo.remotes()?;
    let mut entries = vec![];

    for name in names.iter().flatten() {
        let remote = repo.find_remote(name)?;
        if let Some(url) = remote.pushurl().or_else(|| remote.url()) {
            entries.push(RemoteEntry {
                name: name.to_owned(),
                url: url.to_owned(),
            });
        }
    }

    Ok(entries)
}

/// Returns the subject of the single commit on `head` that is not on `base`.
pub fn resolve_title(path: impl AsRef<Path>, head: &str, base: &str) -> Result<String> {
    let repo = Repository::discover(path).context("cannot open the git repository")?;

    let head_oid = resolve(&repo, head).with_context(|| format!("unknown head branch {}", head))?;
    let base_oid = resolve(&repo, base).with_context(|| format!("unknown base branch {}", base))?;

    let mut walk = repo.revwalk()?;
    walk.push(head_oid)?;
    walk.hide(base_oid)?;

    let commits = walk.collect::<Result<Vec<Oid>, git2::Error>>()?;
    log::debug!("{} commits ahead of {}", commits.len(), base);

    match commits.as_slice() {
        [oid] => {
            let commit = repo.find_commit(*oid)?;
            Ok(commit.summary().unwrap_or_default().to_owned())
        }
        _ => Err(TitleError::Ambiguous {
            count: commits.len(),
        }
        .into()),
    }
}

fn resolve(repo: &Repository, name: &str) -> Result<Oid> {
    let object = repo
        .revparse_single(name)
        .or_else(|_| repo.revparse_single(&format!("{}/{}", ORIGIN_REMOTE_NAME, name)))?;

    Ok(object.peel_to_commit()?.id())
}
