mod template;

use self::template::EditContent;
use anyhow::{Context, Result};
use itertools::Itertools;
use std::{fs, path::Path, process::ExitStatus};
use thiserror::Error;
use tokio::process::Command;

const COMMENT_MARKER: char = '#';
const FILE_PREFIX: &str = "git-pr-";
const FILE_SUFFIX: &str = ".md";

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("aborting the pull request due to an empty title")]
    Aborted,
    #[error("no editor configured")]
    NoEditor,
    #[error("editor `{editor}` exited with {status}")]
    EditorFailed { editor: String, status: ExitStatus },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edited {
    pub title: String,
    pub description: String,
}

/// Lets the user edit title and description in `editor`.
///
/// The scratch file lives in the system temp directory and is removed when
/// this returns, whatever the outcome.
pub async fn edit(editor: &str, title: &str, description: &str) -> Result<Edited> {
    let file = tempfile::Builder::new()
        .prefix(FILE_PREFIX)
        .suffix(FILE_SUFFIX)
        .tempfile()
        .context("cannot create the edit file")?;

    let content = template::render(&EditContent { title, description })?;
    fs::write(file.path(), content)?;

    log::debug!("editing {}", file.path().display());
    launch(editor, file.path()).await?;

    let content = fs::read_to_string(file.path()).context("cannot read the edit file back")?;

    Ok(parse(&content)?)
}

async fn launch(editor: &str, path: &Path) -> Result<()> {
    let mut parts = editor.split_whitespace();
    let program = parts.next().ok_or(EditorError::NoEditor)?;

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .await
        .with_context(|| format!("cannot launch editor `{}`", editor))?;

    if !status.success() {
        return Err(EditorError::EditorFailed {
            editor: editor.to_owned(),
            status,
        }
        .into());
    }

    Ok(())
}

/// First non-comment line is the title, the third one onwards the description.
pub fn parse(content: &str) -> Result<Edited, EditorError> {
    let lines = content
        .lines()
        .filter(|line| !line.starts_with(COMMENT_MARKER))
        .collect_vec();

    let title = lines.first().map(|line| line.trim()).unwrap_or_default();
    if title.is_empty() {
        return Err(EditorError::Aborted);
    }

    let description = lines.iter().skip(2).join("\n").trim_end().to_owned();

    Ok(Edited {
        title: title.to_owned(),
        description,
    })
}
