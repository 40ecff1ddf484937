use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    #[serde(default)]
    pub number: u64,
    pub html_url: String,
}

impl PullRequest {
    /// Whether `html_url` points at a pull request page, `.../pull/<number>`.
    pub fn is_pull_url(&self) -> bool {
        let mut segments = self.html_url.trim_end_matches('/').rsplit('/');

        match (segments.next(), segments.next()) {
            (Some(number), Some("pull")) => {
                !number.is_empty() && number.chars().all(|c| c.is_ascii_digit())
            }
            _ => false,
        }
    }
}
