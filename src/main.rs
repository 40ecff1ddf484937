mod cli;
mod clipboard;
mod config;
mod draft;
mod editor;
mod git;
mod github;
mod http;
mod logger;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Opts;
use clipboard::Clipboard;
use config::Environment;
use github::{Dispatch, GithubClient};
use http::response::Outcome;
use std::io;

const WORKING_DIR: &str = ".";

#[tokio::main]
async fn main() -> Result<()> {
    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(err) => {
            err.print()?;
            return Ok(());
        }
    };

    logger::init(opts.verbose)?;

    let mut config = draft::load(opts, Environment::capture(), WORKING_DIR, &mut io::stdin())?;

    let client = GithubClient::from_config(&config);
    let mut stdout = io::stdout();

    let outcome = match draft::run(&client, &mut config, WORKING_DIR, &mut stdout).await? {
        Dispatch::DryRun => return Ok(()),
        Dispatch::Sent(outcome) => outcome,
    };

    output::print_outcome(&outcome, &mut stdout)?;

    match outcome {
        Outcome::Created(pr) => {
            log::debug!("created pull request #{}", pr.number);
            if config.copy {
                if let Err(err) = Clipboard::detect().copy(&pr.html_url).await {
                    log::warn!("cannot copy the pull request url: {:#}", err);
                }
            }
            Ok(())
        }
        Outcome::Failed(err) => Err(err).context("the pull request was not created"),
    }
}
