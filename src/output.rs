use crate::http::response::Outcome;
use std::io::{self, Write};

/// Prints the pull request url, or the untouched response when there is none.
pub fn print_outcome(outcome: &Outcome, out: &mut impl Write) -> io::Result<()> {
    match outcome {
        Outcome::Created(pr) => writeln!(out, "{}", pr.html_url),
        Outcome::Failed(err) => writeln!(out, "{}", err.raw),
    }
}
