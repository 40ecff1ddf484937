use clap::{ArgAction, Parser};

/// Opens a GitHub pull request for the current branch.
///
/// Every value is inferred from the local repository and can be overridden
/// with the flags below. `-h` selects the head branch, use `--help` for this
/// text.
#[derive(Debug, Default, Parser)]
#[command(name = "git-pr", version, disable_help_flag = true)]
pub struct Opts {
    /// Head branch, defaults to the current branch
    #[arg(short = 'h', long, value_name = "BRANCH")]
    pub head: Option<String>,

    /// Target repository, `repo` or `owner/repo`
    #[arg(short = 'r', long, value_name = "REPO")]
    pub repo: Option<String>,

    /// Target repository owner
    #[arg(short = 'o', long, value_name = "OWNER")]
    pub owner: Option<String>,

    /// Base branch
    #[arg(short = 'b', long, value_name = "BRANCH")]
    pub base: Option<String>,

    /// Pull request title
    #[arg(short = 't', long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Pull request description, `-` reads it from stdin
    #[arg(short = 'd', long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Turn an existing issue into the pull request
    #[arg(short = 'i', long, value_name = "NUMBER")]
    pub issue: Option<u64>,

    /// Edit title and description in $EDITOR
    #[arg(short = 'e', long)]
    pub edit: bool,

    /// Copy the pull request url to the clipboard
    #[arg(short = 'c', long)]
    pub copy: bool,

    /// Print the requests instead of sending them
    #[arg(short = 'f', long = "dry-run")]
    pub dry_run: bool,

    /// Label the issue as work in progress (requires -i)
    #[arg(short = 'w', long)]
    pub wip: bool,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}
