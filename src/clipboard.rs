use anyhow::{Context, Result};
use std::{
    path::{Path, PathBuf},
    process::Stdio,
};
use thiserror::Error;
use tokio::{io::AsyncWriteExt, process::Command};

const PBCOPY_BIN_NAME: &str = "pbcopy";
const XCLIP_BIN_NAME: &str = "xclip";

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard utility found, install pbcopy or xclip")]
    Unavailable,
    #[error("{tool} exited with an error")]
    CopyFailed { tool: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardTool {
    Pbcopy(PathBuf),
    Xclip(PathBuf),
}

impl ClipboardTool {
    fn command(&self) -> Command {
        match self {
            ClipboardTool::Pbcopy(path) => Command::new(path),
            ClipboardTool::Xclip(path) => {
                let mut command = Command::new(path);
                command.args(["-selection", "clipboard"]);
                command
            }
        }
    }

    fn path(&self) -> &Path {
        match self {
            ClipboardTool::Pbcopy(path) | ClipboardTool::Xclip(path) => path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clipboard {
    Available(ClipboardTool),
    Unavailable,
}

impl Clipboard {
    pub fn detect() -> Clipboard {
        Self::detect_with(|name| which::which(name).ok())
    }

    /// macOS `pbcopy` wins over X11 `xclip`.
    pub fn detect_with(lookup: impl Fn(&str) -> Option<PathBuf>) -> Clipboard {
        if let Some(path) = lookup(PBCOPY_BIN_NAME) {
            return Clipboard::Available(ClipboardTool::Pbcopy(path));
        }

        if let Some(path) = lookup(XCLIP_BIN_NAME) {
            return Clipboard::Available(ClipboardTool::Xclip(path));
        }

        Clipboard::Unavailable
    }

    pub async fn copy(&self, text: &str) -> Result<()> {
        let tool = match self {
            Clipboard::Available(tool) => tool,
            Clipboard::Unavailable => return Err(ClipboardError::Unavailable.into()),
        };

        log::debug!("copying with {}", tool.path().display());

        let mut child = tool
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .with_context(|| format!("cannot run {}", tool.path().display()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(ClipboardError::CopyFailed {
                tool: tool.path().display().to_string(),
            }
            .into());
        }

        Ok(())
    }
}
