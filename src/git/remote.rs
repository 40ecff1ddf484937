const GITHUB_HOST: &str = "github.com";

/// Owner and repository of a remote hosted on github.com.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubRemote {
    pub owner: String,
    pub repo: String,
}

impl GithubRemote {
    /// Parses `https://github.com/owner/repo.git`, `ssh://git@github.com/owner/repo.git`
    /// and the scp-like `git@github.com:owner/repo.git`. The user and the `.git`
    /// suffix are optional.
    pub fn parse(url: &str) -> Option<GithubRemote> {
        let url = url.trim();

        let path = if let Some(rest) = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("ssh://"))
        {
            let (authority, path) = rest.split_once('/')?;
            let host = authority.rsplit('@').next()?;
            let host = host.split(':').next()?;
            if !host.eq_ignore_ascii_case(GITHUB_HOST) {
                return None;
            }
            path
        } else {
            let (user_host, path) = url.split_once(':')?;
            let host = user_host.rsplit('@').next()?;
            if !host.eq_ignore_ascii_case(GITHUB_HOST) {
                return None;
            }
            path
        };

        Self::from_path(path)
    }

    fn from_path(path: &str) -> Option<GithubRemote> {
        let mut segments = path.trim_matches('/').split('/');

        let owner = segments.next().filter(|s| !s.is_empty())?;
        let repo = segments.next()?;
        if segments.next().is_some() {
            return None;
        }

        let repo = repo.strip_suffix(".git").unwrap_or(repo);
        if repo.is_empty() {
            return None;
        }

        Some(GithubRemote {
            owner: owner.to_owned(),
            repo: repo.to_owned(),
        })
    }
}
