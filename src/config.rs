use crate::{cli::Opts, git::GitContext};
use anyhow::{Context, Result};
use std::{
    env, fmt, fs,
    io::Read,
    path::{Path, PathBuf},
};
use thiserror::Error;

const DEFAULT_BASE_BRANCH_NAME: &str = "master";
const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_EDITOR: &str = "vi";
const TOKEN_FILE_NAME: &str = ".github-token";
const STDIN_DESCRIPTION: &str = "-";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "no GitHub access token found in {path}\n\
         generate one at https://github.com/settings/tokens and save it to {path}"
    )]
    MissingToken { path: String },
    #[error("cannot locate the home directory")]
    MissingHome,
}

/// Process environment, captured once at startup.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub home: Option<PathBuf>,
    pub editor: Option<String>,
    pub api_url: Option<String>,
}

impl Environment {
    pub fn capture() -> Environment {
        let editor = env::var("VISUAL")
            .or_else(|_| env::var("EDITOR"))
            .ok()
            .filter(|editor| !editor.trim().is_empty());

        Environment {
            home: dirs::home_dir(),
            editor,
            api_url: env::var("GITHUB_API_URL").ok(),
        }
    }

    pub fn token_path(&self) -> Result<PathBuf, ConfigError> {
        self.home
            .as_ref()
            .map(|home| home.join(TOKEN_FILE_NAME))
            .ok_or(ConfigError::MissingHome)
    }
}

/// Personal access token. Never printed.
#[derive(Clone)]
pub struct Token(String);

impl Token {
    pub fn load(path: impl AsRef<Path>) -> Result<Token, ConfigError> {
        let path = path.as_ref();
        let missing = || ConfigError::MissingToken {
            path: path.display().to_string(),
        };

        let content = fs::read_to_string(path).map_err(|err| {
            log::debug!("cannot read token file {}: {}", path.display(), err);
            missing()
        })?;

        let token = content.trim();
        if token.is_empty() {
            return Err(missing());
        }

        Ok(Token::from(token))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token(value.to_owned())
    }
}

/// Everything one invocation needs, resolved from flags, git and environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: Token,
    pub api_url: String,
    pub owner: String,
    pub repo: String,
    pub contributor: String,
    /// Branch checked out locally, whatever `-h` says.
    pub current_branch: String,
    pub branch: String,
    pub base: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub issue: Option<u64>,
    pub edit: bool,
    pub editor: String,
    pub copy: bool,
    pub dry_run: bool,
    pub wip: bool,
}

impl Config {
    pub fn resolve(
        opts: Opts,
        environment: Environment,
        git: GitContext,
        token: Token,
        stdin: &mut impl Read,
    ) -> Result<Config> {
        let (owner, repo) = match opts.repo {
            Some(repo) => match repo.split_once('/') {
                Some((owner, repo)) => (Some(owner.to_owned()), repo.to_owned()),
                None => (None, repo),
            },
            None => (None, git.repo),
        };
        let owner = opts.owner.or(owner).unwrap_or(git.owner);

        let description = match opts.description {
            Some(description) if description == STDIN_DESCRIPTION => {
                let mut buffer = String::new();
                stdin
                    .read_to_string(&mut buffer)
                    .context("cannot read the description from stdin")?;
                Some(buffer)
            }
            description => description,
        };

        let config = Config {
            token,
            api_url: environment
                .api_url
                .map(|url| url.trim_end_matches('/').to_owned())
                .unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
            owner,
            repo,
            contributor: git.contributor,
            branch: opts.head.unwrap_or_else(|| git.branch.to_owned()),
            current_branch: git.branch,
            base: opts
                .base
                .unwrap_or_else(|| DEFAULT_BASE_BRANCH_NAME.to_owned()),
            title: opts.title,
            description,
            issue: opts.issue,
            edit: opts.edit,
            editor: environment
                .editor
                .unwrap_or_else(|| DEFAULT_EDITOR.to_owned()),
            copy: opts.copy,
            dry_run: opts.dry_run,
            wip: opts.wip,
        };

        if config.wip && config.issue.is_none() {
            log::warn!("-w only applies together with -i, ignoring it");
        }

        log::debug!(
            "resolved {}/{} head={} base={}",
            config.owner,
            config.repo,
            config.head(),
            config.base
        );

        Ok(config)
    }

    /// Head reference for the API, `contributor:branch` when the pull request
    /// comes from a fork.
    pub fn head(&self) -> String {
        if self.branch.contains(':')
            || self.contributor.is_empty()
            || self.contributor == self.owner
        {
            self.branch.to_owned()
        } else {
            format!("{}:{}", self.contributor, self.branch)
        }
    }
}
