use crate::{
    cli::Opts,
    config::{Config, Environment, Token},
    editor,
    git::{self, GitContext},
    github::{self, Dispatch, GithubClient},
};
use anyhow::Result;
use std::{
    io::{Read, Write},
    path::Path,
};

/// Builds the configuration for the repository at `path`.
///
/// The token is loaded before anything else is inferred, so a missing token
/// stops the run before git or the network are touched.
pub fn load(
    opts: Opts,
    environment: Environment,
    path: impl AsRef<Path>,
    stdin: &mut impl Read,
) -> Result<Config> {
    let token = Token::load(environment.token_path()?)?;
    let git = GitContext::discover(path);

    Config::resolve(opts, environment, git, token, stdin)
}

/// Fills in the title and description, then sends the requests.
///
/// Nothing reaches the API unless a title could be settled first.
pub async fn run(
    client: &GithubClient,
    config: &mut Config,
    path: impl AsRef<Path>,
    out: &mut impl Write,
) -> Result<Dispatch> {
    resolve_title(config, path)?;

    if config.edit {
        edit(config).await?;
    }

    github::dispatch(client, config, out).await
}

/// Takes the title from the only commit the checked-out branch has over the
/// base, unless a title or an issue was given.
pub fn resolve_title(config: &mut Config, path: impl AsRef<Path>) -> Result<()> {
    if config.title.is_some() || config.issue.is_some() {
        return Ok(());
    }

    let head = if config.current_branch.is_empty() {
        &config.branch
    } else {
        &config.current_branch
    };

    match git::resolve_title(path, head, &config.base) {
        Ok(title) => {
            log::debug!("using commit subject as title: {}", title);
            config.title = Some(title);
        }
        // the editor gets the last word on the title
        Err(err) if config.edit => log::debug!("no title from commits: {:#}", err),
        Err(err) => return Err(err),
    }

    Ok(())
}

pub async fn edit(config: &mut Config) -> Result<()> {
    if config.issue.is_some() {
        log::debug!("title and description come from the issue, skipping the editor");
        return Ok(());
    }

    let edited = editor::edit(
        &config.editor,
        config.title.as_deref().unwrap_or_default(),
        config.description.as_deref().unwrap_or_default(),
    )
    .await?;

    config.title = Some(edited.title);
    config.description = Some(edited.description);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::ConfigError, git::TitleError};
    use git2::{Commit, Repository, Signature};
    use mockito::{Matcher, Server};
    use std::{fs, io};
    use tempdir::TempDir;

    /// A repository checked out on `feature`, with `messages` committed on
    /// top of `master` and `origin` pointing at bob/proj.
    fn repository(messages: &[&str]) -> Result<TempDir, Box<dyn std::error::Error>> {
        let dir = TempDir::new("draft")?;
        let repo = Repository::init(dir.path())?;

        let root = commit(&repo, "refs/heads/master", "Initial commit", None)?;
        repo.branch("feature", &root, false)?;
        repo.set_head("refs/heads/feature")?;
        repo.remote("origin", "git@github.com:bob/proj.git")?;

        let mut parent = root;
        for message in messages {
            parent = commit(&repo, "refs/heads/feature", message, Some(&parent))?;
        }

        Ok(dir)
    }

    fn commit<'r>(
        repo: &'r Repository,
        reference: &str,
        message: &str,
        parent: Option<&Commit>,
    ) -> Result<Commit<'r>, Box<dyn std::error::Error>> {
        let workdir = repo.workdir().ok_or("bare repository")?;
        fs::write(workdir.join("notes.txt"), message)?;

        let mut index = repo.index()?;
        index.add_path(Path::new("notes.txt"))?;
        let tree = repo.find_tree(index.write_tree()?)?;
        let signature = Signature::now("Test User", "test@example.com")?;
        let parents: Vec<&Commit> = parent.into_iter().collect();

        let oid = repo.commit(
            Some(reference),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;

        Ok(repo.find_commit(oid)?)
    }

    /// Home directory holding a token file.
    fn home() -> Result<TempDir, Box<dyn std::error::Error>> {
        let home = TempDir::new("home")?;
        fs::write(home.path().join(".github-token"), "secret\n")?;
        Ok(home)
    }

    fn environment(home: &TempDir, api_url: &str, editor: &str) -> Environment {
        Environment {
            home: Some(home.path().to_path_buf()),
            editor: Some(editor.to_owned()),
            api_url: Some(api_url.to_owned()),
        }
    }

    fn config(repo: &TempDir, home: &TempDir, opts: Opts) -> Result<Config> {
        load(
            opts,
            environment(home, "http://localhost", "false"),
            repo.path(),
            &mut io::empty(),
        )
    }

    #[test]
    fn should_stop_on_missing_token_before_reading_the_repository(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let home = TempDir::new("home")?;
        let environment = Environment {
            home: Some(home.path().to_path_buf()),
            ..Default::default()
        };

        let err = load(
            Opts::default(),
            environment,
            home.path().join("missing"),
            &mut io::empty(),
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingToken { .. })
        ));

        home.close()?;
        Ok(())
    }

    #[test]
    fn should_take_title_from_single_commit() -> Result<(), Box<dyn std::error::Error>> {
        let repo = repository(&["Add the thing\n\nDetails."])?;
        let home = home()?;
        let mut config = config(&repo, &home, Opts::default())?;

        resolve_title(&mut config, repo.path())?;

        assert_eq!(config.title.as_deref(), Some("Add the thing"));

        Ok(())
    }

    #[test]
    fn should_take_title_from_checked_out_branch_when_head_is_overridden(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let repo = repository(&["Add the thing"])?;
        let home = home()?;
        let mut config = config(
            &repo,
            &home,
            Opts {
                head: Some("carol:patch".to_owned()),
                ..Default::default()
            },
        )?;

        resolve_title(&mut config, repo.path())?;

        assert_eq!(config.current_branch, "feature");
        assert_eq!(config.head(), "carol:patch");
        assert_eq!(config.title.as_deref(), Some("Add the thing"));

        Ok(())
    }

    #[test]
    fn should_fail_on_ambiguous_title_without_editor() -> Result<(), Box<dyn std::error::Error>> {
        let repo = repository(&["First", "Second"])?;
        let home = home()?;
        let mut config = config(&repo, &home, Opts::default())?;

        let err = resolve_title(&mut config, repo.path()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<TitleError>(),
            Some(TitleError::Ambiguous { count: 2 })
        ));

        Ok(())
    }

    #[test]
    fn should_leave_ambiguous_title_to_the_editor() -> Result<(), Box<dyn std::error::Error>> {
        let repo = repository(&[])?;
        let home = home()?;
        let mut config = config(
            &repo,
            &home,
            Opts {
                edit: true,
                ..Default::default()
            },
        )?;

        resolve_title(&mut config, repo.path())?;

        assert_eq!(config.title, None);

        Ok(())
    }

    #[test]
    fn should_skip_commit_lookup_with_explicit_title_or_issue(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let repo = repository(&["First", "Second"])?;
        let home = home()?;
        let outside = TempDir::new("not-git")?;

        let mut titled = config(
            &repo,
            &home,
            Opts {
                title: Some("Given".to_owned()),
                ..Default::default()
            },
        )?;
        let mut from_issue = config(
            &repo,
            &home,
            Opts {
                issue: Some(42),
                ..Default::default()
            },
        )?;

        resolve_title(&mut titled, repo.path())?;
        resolve_title(&mut from_issue, outside.path().join("missing"))?;

        assert_eq!(titled.title.as_deref(), Some("Given"));
        assert_eq!(from_issue.title, None);

        Ok(())
    }

    #[tokio::test]
    async fn should_skip_editor_for_issues() -> Result<(), Box<dyn std::error::Error>> {
        let repo = repository(&[])?;
        let home = home()?;
        // `false` exits with an error if it is ever launched
        let mut config = config(
            &repo,
            &home,
            Opts {
                issue: Some(42),
                edit: true,
                ..Default::default()
            },
        )?;

        edit(&mut config).await?;

        assert_eq!(config.editor, "false");
        assert_eq!(config.title, None);
        assert_eq!(config.description, None);

        Ok(())
    }

    #[tokio::test]
    async fn should_not_contact_api_when_title_is_ambiguous(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut server = Server::new_async().await;
        let any = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let repo = repository(&["First", "Second"])?;
        let home = home()?;
        let mut config = load(
            Opts::default(),
            environment(&home, &server.url(), "false"),
            repo.path(),
            &mut io::empty(),
        )?;
        let client = GithubClient::from_config(&config);

        let result = run(&client, &mut config, repo.path(), &mut io::sink()).await;

        any.assert_async().await;
        match result {
            Err(err) => assert!(matches!(
                err.downcast_ref::<TitleError>(),
                Some(TitleError::Ambiguous { count: 2 })
            )),
            Ok(_) => panic!("expected the ambiguous title to stop the run"),
        }

        Ok(())
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn should_send_title_chosen_in_editor_when_commits_are_ambiguous(
    ) -> Result<(), Box<dyn std::error::Error>> {
        use std::os::unix::fs::PermissionsExt;

        let mut server = Server::new_async().await;
        let pulls = server
            .mock("POST", "/repos/bob/proj/pulls")
            .match_body(Matcher::JsonString(
                r#"{"head":"feature","base":"master","title":"Picked title","body":"Body"}"#
                    .to_owned(),
            ))
            .with_status(201)
            .with_body(r#"{"number":3,"html_url":"https://github.com/bob/proj/pull/3"}"#)
            .create_async()
            .await;

        let repo = repository(&["First", "Second"])?;
        let home = home()?;
        let script = home.path().join("editor.sh");
        fs::write(
            &script,
            "#!/bin/sh\nprintf 'Picked title\\n\\nBody\\n' > \"$1\"\n",
        )?;
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;

        let mut config = load(
            Opts {
                edit: true,
                ..Default::default()
            },
            environment(&home, &server.url(), &script.display().to_string()),
            repo.path(),
            &mut io::empty(),
        )?;
        let client = GithubClient::from_config(&config);

        let dispatch = run(&client, &mut config, repo.path(), &mut io::sink()).await?;

        pulls.assert_async().await;
        assert!(matches!(dispatch, Dispatch::Sent(_)));
        assert_eq!(config.title.as_deref(), Some("Picked title"));

        Ok(())
    }
}
